// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test doubles for the Queryflow pipeline.
//!
//! Provides [`MockCompletion`], a simulated completion provider with
//! scripted outcomes and call counting, and [`RecordingDelay`], which
//! captures retry waits for deterministic timing assertions.

pub mod mock_completion;
pub mod recording_delay;

pub use mock_completion::{MockCompletion, MockOutcome};
pub use recording_delay::RecordingDelay;
