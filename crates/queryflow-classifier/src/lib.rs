// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classification strategies for the Queryflow pipeline.
//!
//! This crate provides:
//! - [`RuleClassifier`]: ordered keyword-trigger matching (zero-cost, zero-latency)
//! - [`ModelClassifier`]: a trained naive-Bayes artifact loaded from disk
//!
//! Both implement [`queryflow_core::IntentClassifier`] and are selected at
//! startup via [`build_classifier`] from the `[classifier]` config section.

pub mod artifact;
pub mod model;
pub mod rules;

pub use artifact::{ARTIFACT_VERSION, ClassifierArtifact};
pub use model::ModelClassifier;
pub use rules::RuleClassifier;

use std::path::Path;

use queryflow_config::{ClassifierConfig, ClassifierMode};
use queryflow_core::{IntentClassifier, QueryflowError};

/// Construct the configured classification strategy.
///
/// `rules` mode never fails; `model` mode fails with
/// [`QueryflowError::ArtifactMissing`] when the artifact cannot be loaded.
pub fn build_classifier(
    config: &ClassifierConfig,
) -> Result<Box<dyn IntentClassifier>, QueryflowError> {
    match config.mode {
        ClassifierMode::Rules => Ok(Box::new(RuleClassifier::new())),
        ClassifierMode::Model => {
            let classifier = ModelClassifier::load(Path::new(&config.artifact_path))?;
            Ok(Box::new(classifier))
        }
    }
}
