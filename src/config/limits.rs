//! Line limit tables and resolution
//!
//! Limits are a pure function of the file name: `.rs` files get the flat Rust
//! limit, everything else goes through the TypeScript table, which separates
//! test files (`.test.` / `.spec.` in the name) from code files.

use crate::types::{Language, LimitCategory, RelPath};
use serde::{Deserialize, Serialize};

pub const TS_CODE_LIMIT: usize = 400;
pub const TS_TEST_LIMIT: usize = 500;
pub const RS_LIMIT: usize = 300;

/// Numeric limits per file category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Limits {
    /// Limit for TypeScript code files
    #[serde(default = "default_typescript_code")]
    pub typescript_code: usize,

    /// Limit for `.test.` / `.spec.` TypeScript files
    #[serde(default = "default_typescript_test")]
    pub typescript_test: usize,

    /// Limit for Rust files
    #[serde(default = "default_rust")]
    pub rust: usize,
}

fn default_typescript_code() -> usize {
    TS_CODE_LIMIT
}

fn default_typescript_test() -> usize {
    TS_TEST_LIMIT
}

fn default_rust() -> usize {
    RS_LIMIT
}

impl Limits {
    /// Limit for a category
    pub fn for_category(&self, category: LimitCategory) -> usize {
        match category {
            LimitCategory::TypeScriptCode => self.typescript_code,
            LimitCategory::TypeScriptTest => self.typescript_test,
            LimitCategory::Rust => self.rust,
        }
    }

    /// Resolves the limit that applies to a relative path
    pub fn resolve(&self, path: &RelPath) -> usize {
        self.for_category(LimitCategory::for_path(path))
    }

    /// Resolves the limit for a walked file of known language
    pub fn resolve_file(&self, language: Language, path: &RelPath) -> usize {
        self.for_category(LimitCategory::for_file(language, path))
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            typescript_code: TS_CODE_LIMIT,
            typescript_test: TS_TEST_LIMIT,
            rust: RS_LIMIT,
        }
    }
}
