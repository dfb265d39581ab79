#![forbid(unsafe_code)]

//! Scan pass and report aggregation
//!
//! The [`Scanner`] walks the tree, classifies every candidate file and then
//! runs stale-baseline detection, producing a [`CheckReport`] that the output
//! layer renders. Everything is sequential and built fresh for each run.

use crate::config::{Baseline, Config, Limits};
use crate::engine::classify::{Classification, Violation, classify};
use crate::engine::file_walker::{FileEntry, FileWalker, FileWalkerError};
use crate::engine::line_count::{count_lines, read_text};
use crate::engine::stale::{StaleEntries, find_stale_entries};
use crate::types::RelPath;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Result of scanning the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Violations, sorted by path
    pub violations: Vec<Violation>,
    /// Baseline entries that covered an over-limit file during the scan
    pub baseline_hits: BTreeSet<RelPath>,
    /// Number of files classified
    pub files_checked: usize,
}

/// Everything the report needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub scan: ScanResult,
    pub stale: StaleEntries,
}

impl CheckReport {
    /// True when there are no violations and no stale baseline entries
    pub fn passed(&self) -> bool {
        self.scan.violations.is_empty() && self.stale.is_empty()
    }
}

/// Runs a check over one scan root
pub struct Scanner<'a> {
    root: PathBuf,
    config: &'a Config,
    baseline: &'a Baseline,
}

impl<'a> Scanner<'a> {
    pub fn new(root: &Path, config: &'a Config, baseline: &'a Baseline) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
            baseline,
        }
    }

    fn limits(&self) -> &Limits {
        &self.config.limits
    }

    fn marker(&self) -> &str {
        &self.config.baseline.marker
    }

    /// Scan, then detect stale baseline entries
    pub fn run(&self) -> Result<CheckReport, FileWalkerError> {
        let scan = self.scan()?;
        let stale = find_stale_entries(&self.root, self.baseline, self.limits(), self.marker());
        tracing::debug!(stale = stale.len(), "stale baseline check complete");
        Ok(CheckReport { scan, stale })
    }

    /// Classifies every candidate file under the root.
    ///
    /// A walk error on a single entry is logged and skipped.
    pub fn scan(&self) -> Result<ScanResult, FileWalkerError> {
        let walker = FileWalker::new(&self.root, &self.config.scan)?;
        let mut result = ScanResult::default();

        for entry in walker.walk() {
            let file = match entry {
                Ok(file) => file,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            self.check_file(&file, &mut result);
        }

        result.violations.sort();
        tracing::debug!(
            files = result.files_checked,
            violations = result.violations.len(),
            baseline_hits = result.baseline_hits.len(),
            "scan complete"
        );
        Ok(result)
    }

    fn check_file(&self, file: &FileEntry, result: &mut ScanResult) {
        let content = read_text(&file.path);
        let lines = count_lines(&content);
        let limit = self.limits().resolve_file(file.language, &file.rel_path);
        result.files_checked += 1;

        match classify(
            &file.rel_path,
            &content,
            lines,
            limit,
            self.marker(),
            self.baseline,
        ) {
            Classification::WithinLimit => {}
            Classification::Exempt => {
                tracing::debug!(path = %file.rel_path, lines, limit, "exempt via marker");
            }
            Classification::Baselined => {
                result.baseline_hits.insert(file.rel_path.clone());
            }
            Classification::Violation => result.violations.push(Violation {
                path: file.rel_path.clone(),
                lines,
                limit,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_lines(root: &Path, rel: &str, n: usize, extra: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("{}{}", extra, "line\n".repeat(n))).unwrap();
    }

    #[test]
    fn test_scan_collects_violations_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_lines(root, "src/z.ts", 401, "");
        write_lines(root, "src/a.ts", 450, "");
        write_lines(root, "src/ok.ts", 400, "");

        let config = Config::default();
        let baseline = Baseline::default();
        let result = Scanner::new(root, &config, &baseline).scan().unwrap();

        assert_eq!(result.files_checked, 3);
        let paths: Vec<_> = result.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["src/a.ts", "src/z.ts"]);
        assert_eq!(result.violations[0].lines, 450);
        assert_eq!(result.violations[0].limit, 400);
    }

    #[test]
    fn test_scan_records_baseline_hits() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_lines(root, "src/big.ts", 401, "");
        write_lines(root, "src/marked.ts", 401, "// FILE_SIZE_EXCEPTION\n");

        let config = Config::default();
        let baseline = Baseline::parse("src/big.ts\nsrc/marked.ts\n");
        let result = Scanner::new(root, &config, &baseline).scan().unwrap();

        assert!(result.violations.is_empty());
        assert_eq!(result.baseline_hits.len(), 1);
        assert!(result.baseline_hits.contains(&RelPath::new("src/big.ts")));
    }

    #[test]
    fn test_run_combines_scan_and_stale() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_lines(root, "src/big.ts", 401, "");

        let config = Config::default();
        let baseline = Baseline::parse("src/removed.ts\n");
        let report = Scanner::new(root, &config, &baseline).run().unwrap();

        assert_eq!(report.scan.violations.len(), 1);
        assert!(report.stale.removed.contains(&RelPath::new("src/removed.ts")));
        assert!(!report.passed());
    }

    #[test]
    fn test_run_passes_on_clean_tree() {
        let temp_dir = TempDir::new().unwrap();
        write_lines(temp_dir.path(), "src/lib.rs", 300, "");

        let config = Config::default();
        let baseline = Baseline::default();
        let report = Scanner::new(temp_dir.path(), &config, &baseline)
            .run()
            .unwrap();
        assert!(report.passed());
    }

    #[test]
    fn test_custom_marker_and_limits() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_lines(root, "a.rs", 101, "");
        write_lines(root, "b.rs", 101, "// LINE_LIMIT_OK\n");
        write_lines(root, "c.rs", 101, "// FILE_SIZE_EXCEPTION\n");

        let config = Config::parse("[limits]\nrust = 100\n[baseline]\nmarker = \"LINE_LIMIT_OK\"\n")
            .unwrap();
        let baseline = Baseline::default();
        let result = Scanner::new(root, &config, &baseline).scan().unwrap();

        let paths: Vec<_> = result.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["a.rs", "c.rs"]);
    }

    #[test]
    fn test_scan_invalid_root() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default();
        let baseline = Baseline::default();
        let result = Scanner::new(&temp_dir.path().join("missing"), &config, &baseline).scan();
        assert!(matches!(result, Err(FileWalkerError::InvalidRoot(_))));
    }
}
