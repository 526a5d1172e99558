// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction and answer formatting for the Queryflow pipeline.
//!
//! This crate holds the two pure text stages surrounding the completion
//! call: [`PromptTemplates`] turns a categorized query into the full prompt,
//! and [`ResponseFormatter`] turns the raw completion into the final answer.

pub mod answer;
pub mod templates;

pub use answer::ResponseFormatter;
pub use templates::PromptTemplates;
