// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Queryflow pipeline.

use thiserror::Error;

/// The primary error type used across all Queryflow crates.
#[derive(Debug, Error)]
pub enum QueryflowError {
    /// The user query was empty or whitespace-only. Caller-correctable,
    /// surfaced before any classification or network work, never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An empty prompt reached the completion client. Should be unreachable
    /// given upstream validation, but guards the network boundary.
    #[error("prompt is empty; refusing to call the completion service")]
    EmptyPrompt,

    /// The remote completion service failed after exhausting the retry
    /// budget. Wraps the last underlying cause for diagnostics.
    #[error("completion service failed after {attempts} attempt(s): {message}")]
    ServiceFailure {
        attempts: u32,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The classifier artifact is absent or unreadable at construction time.
    /// Fatal to classifier construction, not to individual classify calls.
    #[error("classifier artifact unavailable: {0}")]
    ArtifactMissing(String),

    /// Configuration errors (missing credentials, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl QueryflowError {
    /// Short stable identifier for the error kind, used by the log sink.
    pub fn kind(&self) -> &'static str {
        match self {
            QueryflowError::InvalidInput(_) => "InvalidInput",
            QueryflowError::EmptyPrompt => "EmptyPrompt",
            QueryflowError::ServiceFailure { .. } => "ServiceFailure",
            QueryflowError::ArtifactMissing(_) => "ArtifactMissing",
            QueryflowError::Config(_) => "ConfigError",
            QueryflowError::Internal(_) => "InternalError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_failure_reports_attempt_count() {
        let err = QueryflowError::ServiceFailure {
            attempts: 3,
            message: "connection refused".into(),
            source: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("3 attempt"), "got: {msg}");
        assert!(msg.contains("connection refused"), "got: {msg}");
    }

    #[test]
    fn service_failure_preserves_source() {
        use std::error::Error;
        let io = std::io::Error::other("socket closed");
        let err = QueryflowError::ServiceFailure {
            attempts: 1,
            message: "transport error".into(),
            source: Some(Box::new(io)),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn kind_is_stable_per_variant() {
        assert_eq!(QueryflowError::EmptyPrompt.kind(), "EmptyPrompt");
        assert_eq!(
            QueryflowError::InvalidInput("x".into()).kind(),
            "InvalidInput"
        );
        assert_eq!(
            QueryflowError::ArtifactMissing("gone".into()).kind(),
            "ArtifactMissing"
        );
    }
}
