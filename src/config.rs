//! YAML configuration file support.
//!
//! All tuning knobs for a classification or evaluation run can live in one
//! YAML file and load at runtime. Every section is optional; omitted fields
//! take the documented defaults.
//!
//! ## Example
//!
//! ```yaml
//! version: "1.0"
//! name: "support-ticket-triage"
//!
//! embed:
//!   dimension: 384
//!   normalize: true
//!   model_name: "all-MiniLM-L6-v2"
//!
//! classify:
//!   max_results: 40
//!   threshold_percent: 30.0
//!   weighted: true
//!
//! split:
//!   comparison_percent: 80.0
//!   seed: 1732584193
//!
//! evaluate:
//!   batch_size: 100
//!   use_parallel: false
//! ```

use std::fs;
use std::path::Path;

use classify::{RankConfig, VoteStrategy};
use corpus::SplitConfig;
use embed::EmbedConfig;
use evaluate::EvalConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a YAML configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for the whole pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct SemcatConfig {
    /// Configuration format version.
    #[serde(default = "SemcatConfig::default_version")]
    pub version: String,

    /// Optional configuration name/description.
    #[serde(default)]
    pub name: Option<String>,

    /// Embedding provider settings.
    #[serde(default)]
    pub embed: EmbedConfig,

    /// Ranking and vote-resolution settings.
    #[serde(default)]
    pub classify: ClassifySection,

    /// Held-out split settings.
    #[serde(default)]
    pub split: SplitConfig,

    /// Evaluation run settings.
    #[serde(default)]
    pub evaluate: EvalSection,
}

impl SemcatConfig {
    fn default_version() -> String {
        "1.0".to_string()
    }

    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SemcatConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        self.embed
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.classify
            .rank_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.split
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.eval_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;

        Ok(())
    }

    /// The full evaluation configuration implied by the `classify` and
    /// `evaluate` sections.
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            rank: self.classify.rank_config(),
            strategy: self.classify.strategy(),
            batch_size: self.evaluate.batch_size,
            use_parallel: self.evaluate.use_parallel,
        }
    }
}

impl Default for SemcatConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            name: None,
            embed: EmbedConfig::default(),
            classify: ClassifySection::default(),
            split: SplitConfig::default(),
            evaluate: EvalSection::default(),
        }
    }
}

/// The `classify` section: ranking knobs plus the vote-mode flag, kept as a
/// plain `weighted` boolean in configuration files the way callers know it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifySection {
    #[serde(default = "ClassifySection::default_max_results")]
    pub max_results: usize,
    #[serde(default = "ClassifySection::default_threshold_percent")]
    pub threshold_percent: f32,
    #[serde(default = "ClassifySection::default_weighted")]
    pub weighted: bool,
}

impl ClassifySection {
    fn default_max_results() -> usize {
        RankConfig::default().max_results
    }

    fn default_threshold_percent() -> f32 {
        RankConfig::default().threshold_percent
    }

    fn default_weighted() -> bool {
        true
    }

    pub fn rank_config(&self) -> RankConfig {
        RankConfig {
            max_results: self.max_results,
            threshold_percent: self.threshold_percent,
        }
    }

    pub fn strategy(&self) -> VoteStrategy {
        if self.weighted {
            VoteStrategy::Weighted
        } else {
            VoteStrategy::Majority
        }
    }
}

impl Default for ClassifySection {
    fn default() -> Self {
        Self {
            max_results: Self::default_max_results(),
            threshold_percent: Self::default_threshold_percent(),
            weighted: Self::default_weighted(),
        }
    }
}

/// The `evaluate` section: run-shape knobs only; ranking knobs come from the
/// `classify` section so evaluation scores the same configuration production
/// classification would use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvalSection {
    #[serde(default = "EvalSection::default_batch_size")]
    pub batch_size: usize,
    #[serde(default)]
    pub use_parallel: bool,
}

impl EvalSection {
    fn default_batch_size() -> usize {
        100
    }
}

impl Default for EvalSection {
    fn default() -> Self {
        Self {
            batch_size: Self::default_batch_size(),
            use_parallel: false,
        }
    }
}
