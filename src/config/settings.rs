//! Parsing and validation for file-size-guard.toml
//!
//! The settings file is optional. Every section and field has a default, so
//! an absent file and an empty file behave the same.

use crate::config::baseline::DEFAULT_BASELINE_PATH;
use crate::config::limits::Limits;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "file-size-guard.toml";
pub const DEFAULT_MARKER: &str = "FILE_SIZE_EXCEPTION";

/// Main configuration struct for file-size-guard.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Line limits
    #[serde(default)]
    pub limits: Limits,

    /// Traversal exclusions
    #[serde(default)]
    pub scan: ScanConfig,

    /// Baseline file and exemption marker
    #[serde(default)]
    pub baseline: BaselineConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("typescript_code", self.limits.typescript_code),
            ("typescript_test", self.limits.typescript_test),
            ("rust", self.limits.rust),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(ConfigError::Validation(format!(
                    "limits.{} must be greater than zero",
                    name
                )));
            }
        }

        if self.baseline.marker.trim().is_empty() {
            return Err(ConfigError::Validation(
                "baseline.marker must not be empty".to_string(),
            ));
        }

        if self.baseline.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "baseline.path must not be empty".to_string(),
            ));
        }

        if let Some(dir) = self
            .scan
            .exclude_dirs
            .iter()
            .find(|d| d.is_empty() || d.contains('/') || d.contains('\\'))
        {
            return Err(ConfigError::Validation(format!(
                "Invalid excluded directory '{}': must be a single path segment",
                dir
            )));
        }

        if self.scan.exclude_prefixes.iter().any(|p| p.is_empty()) {
            return Err(ConfigError::Validation(
                "scan.exclude_prefixes must not contain empty prefixes".to_string(),
            ));
        }

        Ok(())
    }
}

/// Scan section: what to skip during traversal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory names skipped wherever they appear
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Relative path prefixes skipped
    #[serde(default = "default_exclude_prefixes")]
    pub exclude_prefixes: Vec<String>,
}

fn default_exclude_dirs() -> Vec<String> {
    ["node_modules", "target", "dist", "ui"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_exclude_prefixes() -> Vec<String> {
    vec!["src/components/ui/".to_string()]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: default_exclude_dirs(),
            exclude_prefixes: default_exclude_prefixes(),
        }
    }
}

/// Baseline section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaselineConfig {
    /// Baseline file, relative to the scan root
    #[serde(default = "default_baseline_path")]
    pub path: String,

    /// Inline marker that exempts a file
    #[serde(default = "default_marker")]
    pub marker: String,
}

fn default_baseline_path() -> String {
    DEFAULT_BASELINE_PATH.to_string()
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            path: default_baseline_path(),
            marker: default_marker(),
        }
    }
}
