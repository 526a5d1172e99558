// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Queryflow pipeline.

use serde::{Deserialize, Serialize};

/// Intent category assigned to a user query.
///
/// This is a closed set: every classification result maps to exactly one
/// member, and unrecognized or ambiguous input resolves to [`Category::Unknown`],
/// never to an error. Template and trigger lookups match exhaustively so a
/// new category without a template fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// How-to and implementation questions.
    Technical,
    /// Error reports and diagnostic questions.
    Troubleshooting,
    /// Factual lookups and definitions.
    General,
    /// Everything the classifier could not place.
    Unknown,
}

impl Category {
    /// Rule-matching priority order. A query matching the triggers of more
    /// than one category resolves to the earliest entry here.
    pub const PRIORITY: [Category; 3] = [
        Category::Technical,
        Category::Troubleshooting,
        Category::General,
    ];

    /// Stable lowercase label, matching the artifact's label strings.
    pub fn label(self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Troubleshooting => "troubleshooting",
            Category::General => "general",
            Category::Unknown => "unknown",
        }
    }

    /// Maps a predicted label string back to a category.
    ///
    /// Returns `None` for unrecognized labels; callers decide the fallback
    /// (the model classifier maps those to [`Category::Unknown`]).
    pub fn from_label(label: &str) -> Option<Category> {
        match label {
            "technical" => Some(Category::Technical),
            "troubleshooting" => Some(Category::Troubleshooting),
            "general" => Some(Category::General),
            "unknown" => Some(Category::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
