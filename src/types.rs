#![forbid(unsafe_code)]

//! Core domain types for file-size-guard
//!
//! This module defines the fundamental types shared by the baseline loader,
//! the file walker and the limit resolver.

use std::fmt;
use std::path::Path;

/// Languages whose files are scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    TypeScript,
    Rust,
}

impl Language {
    /// Returns all scanned languages, in scan order
    pub fn all() -> [Language; 2] {
        [Language::TypeScript, Language::Rust]
    }

    /// File name glob patterns selecting this language's files
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            Language::TypeScript => &["*.ts", "*.tsx"],
            Language::Rust => &["*.rs"],
        }
    }

    /// Detects the language from a path's extension
    pub fn from_path(path: &str) -> Option<Language> {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some("ts") | Some("tsx") => Some(Language::TypeScript),
            Some("rs") => Some(Language::Rust),
            _ => None,
        }
    }
}

/// Which numeric limit applies to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitCategory {
    TypeScriptCode,
    TypeScriptTest,
    Rust,
}

impl LimitCategory {
    /// Categorizes a normalized relative path.
    ///
    /// Anything that is not a `.rs` file goes through the TypeScript table, so
    /// baseline entries of arbitrary type still resolve to a limit.
    pub fn for_path(path: &RelPath) -> Self {
        let language = Language::from_path(path.as_str()).unwrap_or(Language::TypeScript);
        Self::for_file(language, path)
    }

    /// Categorizes a file whose language is already known
    pub fn for_file(language: Language, path: &RelPath) -> Self {
        if language == Language::Rust {
            return LimitCategory::Rust;
        }

        let name = path.file_name();
        if name.contains(".test.") || name.contains(".spec.") {
            LimitCategory::TypeScriptTest
        } else {
            LimitCategory::TypeScriptCode
        }
    }
}

/// A relative file path normalized for baseline comparison
///
/// Paths use forward slashes and never start with `./`. Both the baseline
/// loader and the file walker build paths through [`RelPath::new`], so the
/// two sides always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelPath(String);

impl RelPath {
    /// Creates a new RelPath with normalization
    pub fn new(path: impl Into<String>) -> Self {
        let mut path = path.into().replace('\\', "/");
        while let Some(stripped) = path.strip_prefix("./") {
            path = stripped.to_string();
        }
        RelPath(path)
    }

    /// Builds a RelPath from a filesystem path relative to the scan root
    pub fn from_relative(path: &Path) -> Self {
        let joined = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Self::new(joined)
    }

    /// Returns the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments split on `/`
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Final path segment
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
