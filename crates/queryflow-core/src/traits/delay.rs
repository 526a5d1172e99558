// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Injected delay capability for retry loops.
//!
//! Keeping the sleep behind a trait lets tests assert delay counts
//! deterministically instead of waiting on the wall clock.

use std::time::Duration;

use async_trait::async_trait;

/// Waits between retry attempts.
#[async_trait]
pub trait RetryDelay: Send + Sync {
    /// Blocks the current task for `duration`.
    async fn wait(&self, duration: Duration);
}

/// Production delay backed by the tokio timer.
#[derive(Debug, Default)]
pub struct TokioDelay;

#[async_trait]
impl RetryDelay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
