//! Per-file classification against limit, marker and baseline

use crate::config::Baseline;
use crate::types::RelPath;
use std::fmt;

/// Outcome of checking one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// At or under the limit
    WithinLimit,
    /// Over the limit but carries the exemption marker
    Exempt,
    /// Over the limit and listed in the baseline
    Baselined,
    /// Over the limit with no exemption
    Violation,
}

/// A file over its limit with neither a marker nor a baseline entry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Violation {
    pub path: RelPath,
    pub lines: usize,
    pub limit: usize,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} lines (limit: {})", self.path, self.lines, self.limit)
    }
}

/// Classifies a file.
///
/// The marker is checked before the baseline, so a marked file never counts
/// as a baseline hit.
pub fn classify(
    path: &RelPath,
    content: &str,
    lines: usize,
    limit: usize,
    marker: &str,
    baseline: &Baseline,
) -> Classification {
    if lines <= limit {
        Classification::WithinLimit
    } else if content.contains(marker) {
        Classification::Exempt
    } else if baseline.contains(path) {
        Classification::Baselined
    } else {
        Classification::Violation
    }
}
