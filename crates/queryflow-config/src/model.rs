// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Queryflow pipeline.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Queryflow configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QueryflowConfig {
    /// Process identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Cohere chat API settings.
    #[serde(default)]
    pub cohere: CohereConfig,

    /// Intent classifier strategy settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the tool.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Tracing level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Path of the append-only application log file.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

fn default_agent_name() -> String {
    "queryflow".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "queryflow.log".to_string()
}

/// Cohere chat API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CohereConfig {
    /// Cohere API key. `None` falls back to the `COHERE_API_KEY` environment
    /// variable at client construction.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier sent with every chat request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum number of attempts per completion request (must be >= 1).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed delay between attempts, in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for CohereConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

fn default_model() -> String {
    "command-r-plus-08-2024".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

/// Which classification strategy to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierMode {
    /// Deterministic keyword-trigger matching.
    Rules,
    /// Trained artifact loaded from `classifier.artifact_path`.
    Model,
}

/// Intent classifier configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Strategy selector.
    #[serde(default = "default_classifier_mode")]
    pub mode: ClassifierMode,

    /// Path to the serialized classifier artifact. Required when
    /// `mode = "model"`; ignored otherwise.
    #[serde(default = "default_artifact_path")]
    pub artifact_path: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            mode: default_classifier_mode(),
            artifact_path: default_artifact_path(),
        }
    }
}

fn default_classifier_mode() -> ClassifierMode {
    ClassifierMode::Rules
}

fn default_artifact_path() -> String {
    "query_classifier.json".to_string()
}
