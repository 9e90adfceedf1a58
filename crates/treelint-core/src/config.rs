//! Configuration types for treelint.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration exposed to the host.
///
/// The only per-matcher tunables the engine requires are an enable flag
/// and a severity override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Per-matcher configurations, keyed by matcher name.
    #[serde(default)]
    pub matchers: HashMap<String, MatcherConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a matcher is enabled. Matchers are enabled unless
    /// configuration says otherwise.
    #[must_use]
    pub fn is_matcher_enabled(&self, matcher_name: &str) -> bool {
        self.matchers
            .get(matcher_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a matcher.
    #[must_use]
    pub fn matcher_severity(&self, matcher_name: &str) -> Option<Severity> {
        self.matchers.get(matcher_name).and_then(|c| c.severity)
    }
}

/// Per-matcher configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Whether this matcher is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this matcher.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
