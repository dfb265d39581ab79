//! Known-exceptions baseline parsing
//!
//! The baseline is a flat text file listing files that are allowed to exceed
//! their limit until someone shrinks them:
//!
//! ```text
//! # Known oversized files
//! src/components/Editor.tsx
//! src-tauri/src/commands.rs  # split planned
//! ```
//!
//! `#` starts a comment anywhere on a line, blank lines are ignored, and
//! duplicate entries collapse. The tool never writes this file.

use crate::engine::line_count::read_text;
use crate::types::RelPath;
use std::collections::BTreeSet;
use std::path::Path;

pub const DEFAULT_BASELINE_PATH: &str = "scripts/file-size-known-exceptions.txt";

/// Set of baselined relative paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Baseline {
    entries: BTreeSet<RelPath>,
}

impl Baseline {
    /// Parses baseline text
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .filter_map(|line| {
                let entry = line.split('#').next().unwrap_or_default().trim();
                (!entry.is_empty()).then(|| RelPath::new(entry))
            })
            .collect();

        Baseline { entries }
    }

    /// Loads a baseline file.
    ///
    /// A missing or unreadable file is an empty baseline.
    pub fn load(path: &Path) -> Self {
        let baseline = Self::parse(&read_text(path));
        tracing::debug!(
            path = %path.display(),
            entries = baseline.len(),
            "loaded baseline"
        );
        baseline
    }

    pub fn contains(&self, path: &RelPath) -> bool {
        self.entries.contains(path)
    }

    /// Entries in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &RelPath> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
