// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application log sink capability.

/// Append-only sink for structured `(kind, message)` log entries.
///
/// The pipeline surfaces failures to this collaborator instead of holding
/// ambient global log state; timestamp formatting is the sink's concern.
pub trait LogSink: Send + Sync {
    /// Records an error event.
    fn error(&self, kind: &str, message: &str);

    /// Records an informational event.
    fn info(&self, kind: &str, message: &str);
}
