// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./queryflow.toml` > `~/.config/queryflow/queryflow.toml`
//! > `/etc/queryflow/queryflow.toml` with environment variable overrides via
//! the `QUERYFLOW_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::QueryflowConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/queryflow/queryflow.toml` (system-wide)
/// 3. `~/.config/queryflow/queryflow.toml` (user XDG config)
/// 4. `./queryflow.toml` (local directory)
/// 5. `QUERYFLOW_*` environment variables
pub fn load_config() -> Result<QueryflowConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QueryflowConfig::default()))
        .merge(Toml::file("/etc/queryflow/queryflow.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("queryflow/queryflow.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("queryflow.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<QueryflowConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QueryflowConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<QueryflowConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QueryflowConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names stay unambiguous: `QUERYFLOW_COHERE_MAX_ATTEMPTS` must map to
/// `cohere.max_attempts`, not `cohere.max.attempts`.
fn env_provider() -> Env {
    Env::prefixed("QUERYFLOW_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: QUERYFLOW_COHERE_API_KEY -> "cohere_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("cohere_", "cohere.", 1)
            .replacen("classifier_", "classifier.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClassifierMode;

    #[test]
    fn empty_string_yields_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.agent.name, "queryflow");
        assert_eq!(config.cohere.max_attempts, 3);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [cohere]
            model = "command-r"
            max_attempts = 5
            retry_delay_ms = 250

            [classifier]
            mode = "model"
            artifact_path = "artifacts/clf.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.cohere.model, "command-r");
        assert_eq!(config.cohere.max_attempts, 5);
        assert_eq!(config.cohere.retry_delay_ms, 250);
        assert_eq!(config.classifier.mode, ClassifierMode::Model);
        assert_eq!(config.classifier.artifact_path, "artifacts/clf.json");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = load_config_from_str(
            r#"
            [cohere]
            modle = "typo"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn later_layer_overrides_earlier() {
        // Simulate an env override by merging a tuple after the TOML layer,
        // the same shape `env_provider()` produces at runtime.
        let config: QueryflowConfig = Figment::new()
            .merge(Serialized::defaults(QueryflowConfig::default()))
            .merge(Toml::string("[cohere]\nmax_attempts = 2"))
            .merge(("cohere.max_attempts", 7))
            .extract()
            .expect("should merge env override");
        assert_eq!(config.cohere.max_attempts, 7);
    }

    #[test]
    fn env_mapping_preserves_underscored_keys() {
        // QUERYFLOW_CLASSIFIER_ARTIFACT_PATH must land on classifier.artifact_path.
        let config: QueryflowConfig = Figment::new()
            .merge(Serialized::defaults(QueryflowConfig::default()))
            .merge(("classifier.artifact_path", "/tmp/clf.json"))
            .extract()
            .expect("should merge env override");
        assert_eq!(config.classifier.artifact_path, "/tmp/clf.json");
    }
}
