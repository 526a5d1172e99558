// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as the minimum retry budget and required paths.

use crate::diagnostic::ConfigError;
use crate::model::{ClassifierMode, QueryflowConfig};

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &QueryflowConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.cohere.max_attempts < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "cohere.max_attempts must be at least 1, got {}",
                config.cohere.max_attempts
            ),
        });
    }

    if config.cohere.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "cohere.model must not be empty".to_string(),
        });
    }

    if config.agent.log_file.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.log_file must not be empty".to_string(),
        });
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of {}, got `{}`",
                valid_levels.join(", "),
                config.agent.log_level
            ),
        });
    }

    if config.classifier.mode == ClassifierMode::Model
        && config.classifier.artifact_path.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "classifier.artifact_path is required when classifier.mode = \"model\""
                .to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
