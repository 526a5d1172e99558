// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The request pipeline: classify, build, complete, format.

use std::sync::Arc;

use tracing::debug;

use queryflow_core::{CompletionProvider, IntentClassifier, QueryflowError};
use queryflow_prompt::{PromptTemplates, ResponseFormatter};

/// Drives one query through the full pipeline.
///
/// Data flows strictly one way: query -> category -> prompt -> raw
/// completion -> final answer. No stage calls back into an earlier one, and
/// all per-request values are dropped when `run` returns.
pub struct Pipeline {
    classifier: Box<dyn IntentClassifier>,
    provider: Arc<dyn CompletionProvider>,
    templates: PromptTemplates,
    formatter: ResponseFormatter,
}

impl Pipeline {
    /// Assemble a pipeline from its injected collaborators.
    pub fn new(classifier: Box<dyn IntentClassifier>, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            classifier,
            provider,
            templates: PromptTemplates::new(),
            formatter: ResponseFormatter::new(),
        }
    }

    /// Process one query into a final answer.
    ///
    /// Empty or whitespace-only input fails with
    /// [`QueryflowError::InvalidInput`] before any classification is
    /// attempted; completion failures surface after the provider's retry
    /// budget is spent. Both are terminal for this request.
    pub async fn run(&self, query: &str) -> Result<String, QueryflowError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(QueryflowError::InvalidInput(
                "query is empty or whitespace-only".to_string(),
            ));
        }

        let category = self.classifier.classify(trimmed);
        debug!(%category, "query classified");

        let prompt = self.templates.build(trimmed, category);
        let raw = self.provider.complete(&prompt).await?;

        Ok(self.formatter.format(&raw, category))
    }
}
