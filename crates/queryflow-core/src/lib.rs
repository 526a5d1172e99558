// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Queryflow query pipeline.
//!
//! This crate provides the foundational error type, the closed [`Category`]
//! enum, and the capability traits implemented by the classifier strategies,
//! the completion client, and the log sink collaborator.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::QueryflowError;
pub use types::Category;

pub use traits::{CompletionProvider, IntentClassifier, LogSink, RetryDelay, TokioDelay};
