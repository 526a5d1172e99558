// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion provider capability for remote language-model services.

use async_trait::async_trait;

use crate::error::QueryflowError;

/// Sends a single prompt to a completion service and returns the raw text.
///
/// The production implementation is the Cohere chat client; tests substitute
/// a scripted mock. Retry discipline and response validation live behind
/// this seam, so callers see either one normalized completion string or a
/// terminal error for the request.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Completes the prompt.
    ///
    /// Fails with [`QueryflowError::EmptyPrompt`] for empty input without
    /// touching the network, or [`QueryflowError::ServiceFailure`] once the
    /// provider's retry budget is exhausted.
    async fn complete(&self, prompt: &str) -> Result<String, QueryflowError>;
}
