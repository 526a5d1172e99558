// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classification capability.

use crate::types::Category;

/// Classifies a non-empty query string into a [`Category`].
///
/// Implementations are interchangeable strategies selected at construction
/// time (keyword rules or a trained model artifact). Callers guarantee the
/// query is non-empty after trimming; given that, `classify` always produces
/// a category, possibly [`Category::Unknown`], and never fails.
pub trait IntentClassifier: std::fmt::Debug + Send + Sync {
    /// Assigns a category to the query. Pure with respect to input and any
    /// state loaded at construction.
    fn classify(&self, query: &str) -> Category;
}
