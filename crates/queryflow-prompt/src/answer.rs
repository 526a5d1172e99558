// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-processing of raw completions into user-facing answers.

use queryflow_core::Category;

/// Message returned when the completion text is empty.
const FALLBACK: &str = "No response was received. Please try again or revise your question.";

/// Escalation note appended for troubleshooting answers.
const ESCALATION_NOTE: &str =
    "\n\nIf the issue persists, consider contacting technical support or an expert.";

/// Disclaimer appended to every non-empty answer.
const DISCLAIMER: &str =
    "\n\nNote: This is a simulated AI response; content may not be fully accurate.\n";

/// Formats raw completion text into the final answer.
///
/// Pure function of its inputs: an empty completion is a valid, handled
/// input (it yields the fallback message), not an error.
#[derive(Debug, Default)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// Produce the user-facing answer for `raw` under `category`.
    ///
    /// Empty completions return the fixed fallback regardless of category.
    /// Troubleshooting answers get the escalation note before the trailing
    /// disclaimer; every non-empty answer ends with the disclaimer.
    pub fn format(&self, raw: &str, category: Category) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FALLBACK.to_string();
        }

        let mut answer = String::from(trimmed);
        if category == Category::Troubleshooting {
            answer.push_str(ESCALATION_NOTE);
        }
        answer.push_str(DISCLAIMER);
        answer
    }
}
