// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic keyword-rule intent classification.
//!
//! Classifies user queries into categories using fixed lowercase trigger
//! substrings. No model load, no network, no latency.

use queryflow_core::{Category, IntentClassifier};

/// Technical trigger substrings (contains, case-insensitive).
const TECHNICAL_TRIGGERS: &[&str] = &[
    "how do i",
    "please explain",
    "implement",
    "build",
    "develop",
    "step-by-step",
];

/// Troubleshooting trigger substrings (contains, case-insensitive).
const TROUBLESHOOTING_TRIGGERS: &[&str] = &[
    "troubleshoot",
    "error",
    "issue",
    "bug",
    "fix",
    "cannot open",
];

/// General-knowledge trigger substrings (contains, case-insensitive).
const GENERAL_TRIGGERS: &[&str] = &["what is", "who is", "when did", "where is", "can you define"];

/// Keyword-rule classifier with zero cost and zero latency.
///
/// Trigger sets are tested in the fixed [`Category::PRIORITY`] order
/// (technical, troubleshooting, general); the first category with at least
/// one matching substring wins. This ordering is the tie-break: a query
/// matching several categories' keywords always resolves to the
/// earliest-declared one. No match yields [`Category::Unknown`].
#[derive(Debug, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    /// Create a new rule classifier.
    pub fn new() -> Self {
        Self
    }

    fn triggers_for(category: Category) -> &'static [&'static str] {
        match category {
            Category::Technical => TECHNICAL_TRIGGERS,
            Category::Troubleshooting => TROUBLESHOOTING_TRIGGERS,
            Category::General => GENERAL_TRIGGERS,
            Category::Unknown => &[],
        }
    }
}

impl IntentClassifier for RuleClassifier {
    fn classify(&self, query: &str) -> Category {
        // This strategy matches on lowercased text; the model strategy
        // deliberately does not, as its artifact was trained on raw text.
        let lower = query.to_lowercase();
        for category in Category::PRIORITY {
            if Self::triggers_for(category)
                .iter()
                .any(|trigger| lower.contains(trigger))
            {
                return category;
            }
        }
        Category::Unknown
    }
}
