#![forbid(unsafe_code)]

//! file-size-guard: per-file line-count limits for a source tree
//!
//! Files over their limit fail the check unless they carry an inline
//! exemption marker or are listed in a known-exceptions baseline. Baseline
//! entries that no longer describe an oversized file are reported as stale
//! and fail the check too, so the baseline can only shrink.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, GuardError};

// Re-export core domain types for convenient access
pub use types::{Language, LimitCategory, RelPath};
