// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only file log sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use queryflow_core::LogSink;

/// Log sink writing one line per event to an append-only text file.
///
/// Line format: `[YYYY-MM-DD HH:MM:SS] LEVEL: kind - message`. The file is
/// opened per write so a long-running process never holds the handle across
/// requests, and a missing file is created on first use.
#[derive(Debug, Clone)]
pub struct FileLogSink {
    path: PathBuf,
}

impl FileLogSink {
    /// Create a sink appending to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_entry(&self, level: &str, kind: &str, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let entry = format!("[{timestamp}] {level}: {kind} - {message}\n");

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(entry.as_bytes()));

        if let Err(e) = result {
            // The application log must never take the pipeline down.
            warn!(path = %self.path.display(), error = %e, "failed to write log entry");
        }
    }
}

impl LogSink for FileLogSink {
    fn error(&self, kind: &str, message: &str) {
        self.write_entry("ERROR", kind, message);
    }

    fn info(&self, kind: &str, message: &str) {
        self.write_entry("INFO", kind, message);
    }
}
