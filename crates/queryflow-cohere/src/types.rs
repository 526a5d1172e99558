// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cohere v2 Chat API request and response types.

use serde::{Deserialize, Serialize};

// --- Request types ---

/// A chat request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Ordered conversation messages. This pipeline always sends exactly
    /// one user message containing the built prompt.
    pub messages: Vec<ChatMessage>,
}

/// A single `{role, content}` message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role, e.g. "user".
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

// --- Response types ---

/// A chat response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// The assistant message produced for the request.
    pub message: AssistantMessage,
}

/// The assistant's message within a chat response.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    /// Response content: a plain string or an ordered list of text segments.
    pub content: MessageContent,
}

/// Response content in either of the shapes the service produces.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Single text payload.
    Text(String),
    /// Ordered text segments, concatenated downstream.
    Segments(Vec<ContentSegment>),
}

impl MessageContent {
    /// Normalize to one logical string by concatenating segment text in
    /// sequence order. Downstream components operate on a single string,
    /// not a segmented representation.
    pub fn joined(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Segments(segments) => {
                segments.iter().map(|s| s.text.as_str()).collect()
            }
        }
    }
}

/// One text segment of a segmented response.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentSegment {
    /// The segment's text.
    pub text: String,
}

/// Error body returned by the API on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message.
    pub message: String,
}
