//! Stale-baseline detection
//!
//! An independent pass over every baseline entry, unrelated to which files the
//! scan happened to visit. Each entry lands in at most one category; reasons
//! are tried in the order of [`StaleReason`] and the first match wins.

use crate::config::{Baseline, Limits};
use crate::engine::line_count::{count_lines, read_text};
use crate::types::RelPath;
use std::collections::BTreeSet;
use std::path::Path;

/// Why a baseline entry is stale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaleReason {
    /// File no longer exists
    Removed,
    /// File is at or under its limit
    WithinLimit,
    /// File carries the exemption marker, so the entry is redundant
    HasExemption,
}

/// Stale baseline entries grouped by reason
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaleEntries {
    pub removed: BTreeSet<RelPath>,
    pub within_limit: BTreeSet<RelPath>,
    pub has_exemption: BTreeSet<RelPath>,
}

impl StaleEntries {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.within_limit.is_empty() && self.has_exemption.is_empty()
    }

    pub fn len(&self) -> usize {
        self.removed.len() + self.within_limit.len() + self.has_exemption.len()
    }

    fn insert(&mut self, reason: StaleReason, entry: RelPath) {
        match reason {
            StaleReason::Removed => self.removed.insert(entry),
            StaleReason::WithinLimit => self.within_limit.insert(entry),
            StaleReason::HasExemption => self.has_exemption.insert(entry),
        };
    }
}

/// Checks a single baseline entry against the file on disk
pub fn stale_reason(
    root: &Path,
    entry: &RelPath,
    limits: &Limits,
    marker: &str,
) -> Option<StaleReason> {
    let path = root.join(entry.as_str());
    if !path.exists() {
        return Some(StaleReason::Removed);
    }

    let content = read_text(&path);
    if count_lines(&content) <= limits.resolve(entry) {
        Some(StaleReason::WithinLimit)
    } else if content.contains(marker) {
        Some(StaleReason::HasExemption)
    } else {
        None
    }
}

/// Finds every stale entry in the baseline
pub fn find_stale_entries(
    root: &Path,
    baseline: &Baseline,
    limits: &Limits,
    marker: &str,
) -> StaleEntries {
    let mut stale = StaleEntries::default();
    for entry in baseline.iter() {
        if let Some(reason) = stale_reason(root, entry, limits, marker) {
            tracing::debug!(entry = %entry, ?reason, "stale baseline entry");
            stale.insert(reason, entry.clone());
        }
    }
    stale
}
