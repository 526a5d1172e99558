// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits wired together by the pipeline driver.
//!
//! Each trait captures one seam of the pipeline so strategies and
//! collaborators can be substituted without touching the callers.

pub mod classifier;
pub mod delay;
pub mod logsink;
pub mod provider;

pub use classifier::IntentClassifier;
pub use delay::{RetryDelay, TokioDelay};
pub use logsink::LogSink;
pub use provider::CompletionProvider;
