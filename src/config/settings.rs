// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Engine configuration
///
/// Every field has a default so a missing or partial config file still
/// yields a working engine. The training thresholds are configuration,
/// not constants: deployments with more traffic can raise
/// `target_threshold` without touching code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Directory for the feedback log and model artifacts
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Maximum accepted context length in characters; longer input is rejected
    #[serde(default = "default_max_context_chars")]
    pub max_context_chars: usize,

    /// How many candidate replies to offer per context
    #[serde(default = "default_candidate_count")]
    pub candidate_count: usize,

    /// Feedback records needed for the quality score to reach 1.0
    #[serde(default = "default_target_threshold")]
    pub target_threshold: usize,

    /// Number of version stages between v0 and convergence
    #[serde(default = "default_version_stages")]
    pub version_stages: usize,

    /// Case-insensitive tokens that must never appear in a candidate
    #[serde(default = "default_denylist")]
    pub denylist: Vec<String>,

    /// Optional JSON file overriding the built-in template pools
    #[serde(default)]
    pub pool_file: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".banter")
}

fn default_max_context_chars() -> usize {
    1000
}

fn default_candidate_count() -> usize {
    5
}

fn default_target_threshold() -> usize {
    100
}

fn default_version_stages() -> usize {
    4
}

fn default_denylist() -> Vec<String> {
    vec!["hate".to_string(), "kill".to_string(), "die".to_string()]
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            max_context_chars: default_max_context_chars(),
            candidate_count: default_candidate_count(),
            target_threshold: default_target_threshold(),
            version_stages: default_version_stages(),
            denylist: default_denylist(),
            pool_file: None,
        }
    }
}

impl EngineConfig {
    /// Path of the append-only feedback log
    pub fn feedback_log_path(&self) -> PathBuf {
        self.data_dir.join("feedback.jsonl")
    }

    /// Directory holding the recomputed model artifacts
    pub fn models_dir(&self) -> PathBuf {
        self.data_dir.join("models")
    }
}
