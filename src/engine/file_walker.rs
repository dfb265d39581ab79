//! File discovery and path filtering
//!
//! Walks the scan root with the ignore crate's `WalkBuilder`, with its
//! standard filters turned off: `.gitignore` is not honored and hidden
//! directories are entered. Excluded directory names are pruned during the
//! walk, and every candidate file is re-checked against the full
//! [`PathFilter`] (directory segments and path prefixes) before it is yielded.

use crate::config::ScanConfig;
use crate::types::{Language, RelPath};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Scan root {0} is not a directory")]
    InvalidRoot(PathBuf),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Decides which relative paths are excluded from scanning
///
/// A path is excluded when any of its segments equals an excluded directory
/// name (exact match, not substring), or when it starts with an excluded
/// prefix.
#[derive(Debug, Clone)]
pub struct PathFilter {
    exclude_dirs: Arc<HashSet<String>>,
    exclude_prefixes: Arc<Vec<String>>,
}

impl PathFilter {
    pub fn new(scan: &ScanConfig) -> Self {
        Self {
            exclude_dirs: Arc::new(scan.exclude_dirs.iter().cloned().collect()),
            exclude_prefixes: Arc::new(
                scan.exclude_prefixes
                    .iter()
                    .map(|p| p.replace('\\', "/"))
                    .collect(),
            ),
        }
    }

    /// Whether a single directory name is excluded
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.contains(name)
    }

    /// Whether a relative path is excluded
    pub fn is_excluded(&self, path: &RelPath) -> bool {
        path.segments().any(|segment| self.is_excluded_dir(segment))
            || self
                .exclude_prefixes
                .iter()
                .any(|prefix| path.as_str().starts_with(prefix.as_str()))
    }
}

/// Reason why a file was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Path matched an excluded directory or prefix
    Excluded,
    /// File name matched none of the extension patterns
    NoMatchingPattern,
    /// Not a regular file (e.g., directory, broken symlink)
    NotAFile,
}

/// Result of file walking - either a file to scan or a skipped file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkResult {
    /// File to be scanned
    File(FileEntry),
    /// File that was skipped with reason
    Skipped { path: PathBuf, reason: SkipReason },
}

/// A discovered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path on disk (scan root joined with the relative path)
    pub path: PathBuf,
    /// Normalized path relative to the scan root
    pub rel_path: RelPath,
    /// Language selected by the matching extension pattern
    pub language: Language,
}

/// Iterator factory over candidate files
pub struct FileWalker {
    root: PathBuf,
    patterns: GlobSet,
    pattern_languages: Vec<Language>,
    filter: PathFilter,
}

impl FileWalker {
    /// Creates a new FileWalker
    ///
    /// # Arguments
    /// * `root` - Root directory to walk; relative paths are computed from it
    /// * `scan` - Excluded directory names and path prefixes
    pub fn new(root: &Path, scan: &ScanConfig) -> Result<Self, FileWalkerError> {
        if !root.is_dir() {
            return Err(FileWalkerError::InvalidRoot(root.to_path_buf()));
        }

        let mut builder = GlobSetBuilder::new();
        let mut pattern_languages = Vec::new();
        for language in Language::all() {
            for pattern in language.patterns() {
                let glob = Glob::new(pattern).map_err(|e| FileWalkerError::InvalidGlob {
                    pattern: pattern.to_string(),
                    source: e,
                })?;
                builder.add(glob);
                pattern_languages.push(language);
            }
        }
        let patterns = builder.build().map_err(|e| FileWalkerError::InvalidGlob {
            pattern: "<globset>".to_string(),
            source: e,
        })?;

        Ok(Self {
            root: root.to_path_buf(),
            patterns,
            pattern_languages,
            filter: PathFilter::new(scan),
        })
    }

    /// Language of the first extension pattern matching a file name
    fn match_language(&self, file_name: &str) -> Option<Language> {
        self.patterns
            .matches(file_name)
            .first()
            .map(|&idx| self.pattern_languages[idx])
    }

    /// Walks the directory tree and returns an iterator over candidate files
    pub fn walk(self) -> impl Iterator<Item = Result<FileEntry, FileWalkerError>> {
        self.walk_with_skip_info()
            .filter_map(|result| match result {
                Ok(WalkResult::File(file)) => Some(Ok(file)),
                Ok(WalkResult::Skipped { .. }) => None,
                Err(e) => Some(Err(e)),
            })
    }

    /// Walks the directory tree and returns an iterator with skip information
    ///
    /// Entries are yielded in file-name order within each directory.
    pub fn walk_with_skip_info(self) -> impl Iterator<Item = Result<WalkResult, FileWalkerError>> {
        let prune = self.filter.clone();
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                if prune.is_excluded_dir(&name) {
                    tracing::debug!(path = %entry.path().display(), "pruned excluded directory");
                    return false;
                }
                true
            })
            .build();

        walker.filter_map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => return Some(Err(FileWalkerError::Walk(e))),
            };
            let path = entry.path();

            let is_file = entry
                .file_type()
                .is_some_and(|ft| ft.is_file() || (ft.is_symlink() && path.is_file()));
            if !is_file {
                if entry.depth() == 0 {
                    return None;
                }
                return Some(Ok(WalkResult::Skipped {
                    path: path.to_path_buf(),
                    reason: SkipReason::NotAFile,
                }));
            }

            let file_name = entry.file_name().to_string_lossy();
            let Some(language) = self.match_language(&file_name) else {
                return Some(Ok(WalkResult::Skipped {
                    path: path.to_path_buf(),
                    reason: SkipReason::NoMatchingPattern,
                }));
            };

            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            let rel_path = RelPath::from_relative(relative);
            if self.filter.is_excluded(&rel_path) {
                return Some(Ok(WalkResult::Skipped {
                    path: path.to_path_buf(),
                    reason: SkipReason::Excluded,
                }));
            }

            Some(Ok(WalkResult::File(FileEntry {
                path: path.to_path_buf(),
                rel_path,
                language,
            })))
        })
    }
}
