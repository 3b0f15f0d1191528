//! YAML configuration file support for fuzzmatch.
//!
//! One file configures every stage: the prepared-string cache, the match
//! engine's scoring knobs and the statistics layer. Missing sections and
//! fields fall back to their defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "chat triggers"
//! max_target_len: 2000
//!
//! cache:
//!   max_cached_len: 999
//!   capacity: 4096
//!
//! matcher:
//!   version: 1
//!   typo_penalty: 20
//!   simple_penalty_factor: 1000
//!
//! stats:
//!   z_score: "legacy"
//! ```

use std::fs;
use std::path::Path;

use matcher::MatchConfig;
use prepare::CacheConfig;
use serde::{Deserialize, Serialize};
use stats::StatsConfig;
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
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

/// Top-level configuration for a [`FuzzyMatcher`](crate::FuzzyMatcher).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct FuzzConfig {
    /// Configuration format version
    #[serde(default = "default_format_version")]
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Targets with more chars than this are rejected before matching.
    #[serde(default)]
    pub max_target_len: Option<usize>,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub matcher: MatchConfig,

    #[serde(default)]
    pub stats: StatsConfig,
}

impl FuzzConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: FuzzConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        if self.max_target_len == Some(0) {
            return Err(ConfigLoadError::Validation(
                "max_target_len must be >= 1".to_string(),
            ));
        }
        self.cache
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("cache: {e}")))?;
        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("matcher: {e}")))?;
        self.stats
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("stats: {e}")))?;

        Ok(())
    }
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            version: default_format_version(),
            name: None,
            max_target_len: None,
            cache: CacheConfig::default(),
            matcher: MatchConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

fn default_format_version() -> String {
    "1.0".to_string()
}
