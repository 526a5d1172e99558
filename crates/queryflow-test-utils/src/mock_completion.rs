// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simulated completion provider for deterministic testing.
//!
//! `MockCompletion` implements `CompletionProvider` with pre-configured
//! outcomes, enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use queryflow_core::{CompletionProvider, QueryflowError};

/// One scripted outcome for a `complete` call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return this completion text.
    Reply(String),
    /// Fail the whole call with a service failure carrying this message.
    Fail(String),
}

/// A simulated completion provider that replays scripted outcomes.
///
/// Outcomes are popped from a FIFO queue; when the queue is empty, a
/// default "simulated response" text is returned. Every call is counted so
/// tests can assert how many completions the pipeline attempted.
pub struct MockCompletion {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: AtomicU32,
}

impl MockCompletion {
    /// Create a mock with an empty outcome queue.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            calls: AtomicU32::new(0),
        }
    }

    /// Create a mock pre-loaded with reply texts.
    pub fn with_replies(replies: Vec<&str>) -> Self {
        let outcomes = replies
            .into_iter()
            .map(|r| MockOutcome::Reply(r.to_string()))
            .collect();
        Self {
            outcomes: Arc::new(Mutex::new(outcomes)),
            calls: AtomicU32::new(0),
        }
    }

    /// Create a mock pre-loaded with arbitrary outcomes.
    pub fn with_outcomes(outcomes: Vec<MockOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            calls: AtomicU32::new(0),
        }
    }

    /// Append an outcome to the queue.
    pub async fn push_outcome(&self, outcome: MockOutcome) {
        self.outcomes.lock().await.push_back(outcome);
    }

    /// Number of `complete` calls observed so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    async fn next_outcome(&self) -> MockOutcome {
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| MockOutcome::Reply("simulated response".to_string()))
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, QueryflowError> {
        if prompt.trim().is_empty() {
            return Err(QueryflowError::EmptyPrompt);
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.next_outcome().await {
            MockOutcome::Reply(text) => Ok(text),
            MockOutcome::Fail(message) => Err(QueryflowError::ServiceFailure {
                attempts: 1,
                message,
                source: None,
            }),
        }
    }
}
