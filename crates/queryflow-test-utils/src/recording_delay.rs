// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Retry-delay recorder for deterministic timing assertions.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use queryflow_core::RetryDelay;

/// A `RetryDelay` that records requested waits instead of sleeping.
///
/// Tests assert exact delay counts and durations without real wall-clock
/// waiting.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingDelay {
    /// Create a new recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All delays requested so far, in order.
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().expect("delay recorder poisoned").clone()
    }

    /// Number of delays requested so far.
    pub fn count(&self) -> usize {
        self.waits.lock().expect("delay recorder poisoned").len()
    }
}

#[async_trait]
impl RetryDelay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        self.waits
            .lock()
            .expect("delay recorder poisoned")
            .push(duration);
    }
}
