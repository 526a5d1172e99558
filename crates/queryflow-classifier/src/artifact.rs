// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The serialized classifier artifact: a multinomial naive-Bayes text model.
//!
//! The artifact is produced offline by `queryflow train` and consumed here
//! as an opaque predictor. It is versioned JSON; a version mismatch at load
//! time is treated the same as a missing file, with a hint to retrain.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use queryflow_core::QueryflowError;

/// Current artifact format version. Bump on any incompatible layout change.
pub const ARTIFACT_VERSION: u32 = 1;

/// A trained multinomial naive-Bayes model over whitespace/punctuation tokens.
///
/// Immutable after load; owned exclusively by the model classifier instance.
/// Tokens are kept in their original case -- the training data is not
/// lowercased, so prediction input must not be either.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// Artifact format version, checked at load time.
    pub version: u32,
    /// Token -> column index into each label's log-likelihood row.
    pub vocabulary: BTreeMap<String, usize>,
    /// Label strings in scoring order. Ties resolve to the earliest label.
    pub labels: Vec<String>,
    /// Per-label log prior probabilities.
    pub log_priors: Vec<f64>,
    /// Per-label smoothed token log-likelihoods, indexed by vocabulary column.
    pub log_likelihoods: Vec<Vec<f64>>,
    /// Per-label log-likelihood assigned to out-of-vocabulary tokens.
    pub oov_log_likelihoods: Vec<f64>,
}

impl ClassifierArtifact {
    /// Load an artifact from disk.
    ///
    /// Absence, corruption, or a version mismatch is fatal here, not at
    /// prediction time; the error message tells the user to retrain.
    pub fn load(path: &Path) -> Result<Self, QueryflowError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            QueryflowError::ArtifactMissing(format!(
                "cannot read `{}`: {e}; run `queryflow train` first",
                path.display()
            ))
        })?;

        let artifact: ClassifierArtifact = serde_json::from_str(&raw).map_err(|e| {
            QueryflowError::ArtifactMissing(format!(
                "`{}` is not a valid classifier artifact: {e}; run `queryflow train` to regenerate it",
                path.display()
            ))
        })?;

        if artifact.version != ARTIFACT_VERSION {
            return Err(QueryflowError::ArtifactMissing(format!(
                "`{}` has artifact version {} but this build expects {}; run `queryflow train` to regenerate it",
                path.display(),
                artifact.version,
                ARTIFACT_VERSION
            )));
        }

        artifact.check_shape().map_err(|detail| {
            QueryflowError::ArtifactMissing(format!(
                "`{}` is not a valid classifier artifact: {detail}; run `queryflow train` to regenerate it",
                path.display()
            ))
        })?;

        debug!(
            labels = artifact.labels.len(),
            vocabulary = artifact.vocabulary.len(),
            "classifier artifact loaded"
        );
        Ok(artifact)
    }

    /// Serialize the artifact to pretty JSON at `path`.
    pub fn save(&self, path: &Path) -> Result<(), QueryflowError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| QueryflowError::Internal(format!("artifact serialization failed: {e}")))?;
        std::fs::write(path, json).map_err(|e| {
            QueryflowError::Internal(format!("cannot write `{}`: {e}", path.display()))
        })
    }

    /// Verify the per-label tables are mutually consistent, so `predict`
    /// can index them unconditionally. Checked once at load, not per call.
    fn check_shape(&self) -> Result<(), String> {
        if self.labels.is_empty() {
            return Err("no labels".to_string());
        }
        let n = self.labels.len();
        if self.log_priors.len() != n {
            return Err(format!(
                "{} log priors for {} labels",
                self.log_priors.len(),
                n
            ));
        }
        if self.log_likelihoods.len() != n {
            return Err(format!(
                "{} log-likelihood rows for {} labels",
                self.log_likelihoods.len(),
                n
            ));
        }
        if self.oov_log_likelihoods.len() != n {
            return Err(format!(
                "{} OOV log-likelihoods for {} labels",
                self.oov_log_likelihoods.len(),
                n
            ));
        }
        for (i, row) in self.log_likelihoods.iter().enumerate() {
            if row.len() != self.vocabulary.len() {
                return Err(format!(
                    "log-likelihood row {} has {} entries for a vocabulary of {}",
                    i,
                    row.len(),
                    self.vocabulary.len()
                ));
            }
        }
        Ok(())
    }

    /// Predict the most likely label for `text`.
    ///
    /// Scores each label as log-prior plus the sum of token log-likelihoods,
    /// with out-of-vocabulary tokens falling back to the per-label OOV mass.
    /// The input is tokenized as-is, without case folding.
    pub fn predict(&self, text: &str) -> &str {
        let mut best = 0usize;
        let mut best_score = f64::NEG_INFINITY;

        for (i, _) in self.labels.iter().enumerate() {
            let mut score = self.log_priors[i];
            for token in tokenize(text) {
                score += match self.vocabulary.get(token) {
                    Some(&col) => self.log_likelihoods[i][col],
                    None => self.oov_log_likelihoods[i],
                };
            }
            if score > best_score {
                best_score = score;
                best = i;
            }
        }

        &self.labels[best]
    }
}

/// Split text into alphanumeric tokens, preserving case.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}
