// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Queryflow application crate: pipeline wiring, file logging, trainer.
//!
//! The CLI entry point lives in `main.rs`; everything it assembles is exposed
//! here so integration tests can drive the same components.

pub mod logsink;
pub mod pipeline;
pub mod train;

pub use logsink::FileLogSink;
pub use pipeline::Pipeline;
