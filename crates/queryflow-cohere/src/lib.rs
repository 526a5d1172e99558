// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cohere chat completion client for the Queryflow pipeline.
//!
//! Provides [`CohereClient`], an implementation of
//! [`queryflow_core::CompletionProvider`] over the Cohere v2 Chat API with
//! bounded fixed-delay retry and response-shape normalization.

pub mod client;
pub mod types;

pub use client::CohereClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, MessageContent};
