// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model-backed intent classification using a trained artifact.

use std::path::Path;

use tracing::warn;

use queryflow_core::{Category, IntentClassifier, QueryflowError};

use crate::artifact::ClassifierArtifact;

/// Classifier that delegates to a pre-loaded naive-Bayes artifact.
///
/// Construction fails if the artifact cannot be loaded; classification
/// itself never fails. The predicted label is mapped through
/// [`Category::from_label`], with unrecognized labels resolving to
/// [`Category::Unknown`] rather than erroring.
#[derive(Debug)]
pub struct ModelClassifier {
    artifact: ClassifierArtifact,
}

impl ModelClassifier {
    /// Load the artifact from `path` and build the classifier.
    pub fn load(path: &Path) -> Result<Self, QueryflowError> {
        let artifact = ClassifierArtifact::load(path)?;
        Ok(Self { artifact })
    }

    /// Build a classifier around an already-loaded artifact.
    pub fn from_artifact(artifact: ClassifierArtifact) -> Self {
        Self { artifact }
    }
}

impl IntentClassifier for ModelClassifier {
    fn classify(&self, query: &str) -> Category {
        // Unlike the rule strategy, the query is passed through raw: the
        // artifact was trained on non-lowercased text.
        let label = self.artifact.predict(query);
        Category::from_label(label).unwrap_or_else(|| {
            warn!(label, "artifact predicted an unrecognized label");
            Category::Unknown
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::artifact::ARTIFACT_VERSION;

    /// Hand-built artifact where "implement" signals technical and
    /// "error" signals troubleshooting.
    fn artifact_with_labels(labels: Vec<&str>) -> ClassifierArtifact {
        let mut vocabulary = BTreeMap::new();
        vocabulary.insert("implement".to_string(), 0);
        vocabulary.insert("error".to_string(), 1);
        let n = labels.len();
        ClassifierArtifact {
            version: ARTIFACT_VERSION,
            vocabulary,
            labels: labels.into_iter().map(String::from).collect(),
            log_priors: vec![(1.0 / n as f64).ln(); n],
            log_likelihoods: (0..n)
                .map(|i| {
                    // Label i is strongly indicated by token column i (mod 2).
                    (0..2)
                        .map(|col| if col == i % 2 { 0.8f64.ln() } else { 0.05f64.ln() })
                        .collect()
                })
                .collect(),
            oov_log_likelihoods: vec![0.05f64.ln(); n],
        }
    }

    #[test]
    fn predicted_labels_map_to_categories() {
        let clf = ModelClassifier::from_artifact(artifact_with_labels(vec![
            "technical",
            "troubleshooting",
        ]));
        assert_eq!(clf.classify("implement a parser"), Category::Technical);
        assert_eq!(
            clf.classify("an error appeared"),
            Category::Troubleshooting
        );
    }

    #[test]
    fn unrecognized_label_maps_to_unknown() {
        let clf = ModelClassifier::from_artifact(artifact_with_labels(vec!["billing", "legal"]));
        assert_eq!(clf.classify("implement a parser"), Category::Unknown);
    }

    #[test]
    fn query_is_not_lowercased_before_prediction() {
        // Vocabulary holds lowercase "implement"; the uppercased query must
        // miss it and fall back to OOV scoring (a tie, resolved to the first
        // label). This pins the raw-text contract of the model strategy.
        let clf = ModelClassifier::from_artifact(artifact_with_labels(vec![
            "troubleshooting",
            "technical",
        ]));
        assert_eq!(clf.classify("IMPLEMENT"), Category::Troubleshooting);
    }

    #[test]
    fn load_fails_for_missing_artifact() {
        let err = ModelClassifier::load(Path::new("/nonexistent/clf.json")).unwrap_err();
        assert_eq!(err.kind(), "ArtifactMissing");
    }
}
