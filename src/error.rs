//! Error types for file-size-guard
//!
//! Most filesystem trouble is absorbed into defaults (missing baseline, unreadable
//! file). What remains here are failures that make a run meaningless: a broken
//! settings file or a scan root that cannot be walked.

use crate::engine::file_walker::FileWalkerError;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML or has unknown fields
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Settings parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Top-level error type for file-size-guard
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File walker error
    #[error("File walker error: {0}")]
    FileWalker(#[from] FileWalkerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
