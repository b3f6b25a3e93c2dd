//! Configuration for the dynamic runtime and the `holf` binary
//!
//! Loaded from a TOML file; every key is optional:
//!
//! ```toml
//! [expand]
//! limit = 10            # elements materialized by `expand` when no limit is given
//! policy = "infinite"   # or "stop-on-nil": a nil callback result ends the sequence
//!
//! [output]
//! format = "plain"    # or "json"
//! ```

use crate::runtime::ExpandPolicy;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Locations searched, in order, when no config file is given explicitly.
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["holf.toml", "config/holf.toml"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolfConfig {
    pub expand: ExpandConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    pub limit: usize,
    pub policy: ExpandPolicy,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            policy: ExpandPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How results are printed
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Values in runtime notation, sequences joined with ", "
    #[default]
    Plain,
    /// Pretty-printed JSON
    Json,
}

impl HolfConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<string>")
    }

    /// Loads the first file of [`DEFAULT_CONFIG_PATHS`] that exists relative
    /// to `base`, or the defaults if there is none.
    pub fn discover(base: &Path) -> Result<(Option<PathBuf>, Self), ConfigError> {
        for candidate in DEFAULT_CONFIG_PATHS {
            let path = base.join(candidate);
            if path.exists() {
                let config = Self::load(&path)?;
                return Ok((Some(path), config));
            }
        }
        Ok((None, Self::default()))
    }

    fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: HolfConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.expand.limit == 0 {
            return Err(ConfigError::Invalid(
                "expand.limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn expand_policy(&self) -> ExpandPolicy {
        self.expand.policy
    }
}
