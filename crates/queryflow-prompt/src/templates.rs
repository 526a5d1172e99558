// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Category-specific prompt templates and prompt construction.

use queryflow_core::Category;

/// Fixed instruction templates keyed by query category.
///
/// Every category has a template -- the lookup is an exhaustive match, so
/// adding a category without a template is a compile error, not a runtime
/// one. Templates never change after construction.
#[derive(Debug, Default)]
pub struct PromptTemplates;

impl PromptTemplates {
    /// Create the fixed template set.
    pub fn new() -> Self {
        Self
    }

    /// The instruction text for `category`.
    pub fn template_for(&self, category: Category) -> &'static str {
        match category {
            Category::Technical => {
                "You are an expert software engineer. Please provide a step-by-step, \
                 thorough solution with relevant examples or references where applicable."
            }
            Category::Troubleshooting => {
                "You are a technical support assistant. Suggest potential reasons for the \
                 issue and step-by-step troubleshooting tips, including any necessary \
                 safety measures."
            }
            Category::General => {
                "You are a well-informed AI. Provide a clear, concise, and factually \
                 accurate summary."
            }
            Category::Unknown => {
                "You are an AI assistant capable of handling diverse queries. Try to \
                 interpret the query and respond helpfully."
            }
        }
    }

    /// Build the full prompt: template, separator, and the trimmed query.
    pub fn build(&self, query: &str, category: Category) -> String {
        format!(
            "{}\n\nUser Query:\n{}\n",
            self.template_for(category),
            query.trim()
        )
    }
}
