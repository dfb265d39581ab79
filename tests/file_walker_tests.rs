//! Integration tests for the file_walker module
//!
//! These build small trees in temporary directories to verify pattern
//! matching, directory pruning and prefix exclusion.

mod common;

use common::write_file;
use file_size_guard::config::ScanConfig;
use file_size_guard::engine::file_walker::{FileEntry, FileWalker, SkipReason, WalkResult};
use file_size_guard::types::{Language, RelPath};
use std::collections::HashSet;
use tempfile::TempDir;

/// Helper to collect files from a walker
fn collect_files(walker: FileWalker) -> Vec<FileEntry> {
    walker.walk().filter_map(Result::ok).collect::<Vec<_>>()
}

/// Helper to extract relative paths for easier testing
fn rel_paths(files: &[FileEntry]) -> HashSet<String> {
    files
        .iter()
        .map(|f| f.rel_path.as_str().to_string())
        .collect()
}

fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_file(root, "src/main.tsx", "");
    write_file(root, "src/lib/api.ts", "");
    write_file(root, "src/lib/api.test.ts", "");
    write_file(root, "src/components/Panel.tsx", "");
    write_file(root, "src/components/ui/button.tsx", "");
    write_file(root, "src-tauri/src/lib.rs", "");
    write_file(root, "src-tauri/target/debug/build.rs", "");
    write_file(root, "node_modules/react/index.ts", "");
    write_file(root, "dist/assets/index.ts", "");
    write_file(root, "docs/guide.md", "");
    write_file(root, "package.json", "{}");
    temp_dir
}

#[test]
fn test_walk_default_project() {
    let temp_dir = project();
    let walker = FileWalker::new(temp_dir.path(), &ScanConfig::default()).unwrap();
    let paths = rel_paths(&collect_files(walker));

    let expected: HashSet<String> = [
        "src/main.tsx",
        "src/lib/api.ts",
        "src/lib/api.test.ts",
        "src/components/Panel.tsx",
        "src-tauri/src/lib.rs",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(paths, expected);
}

#[test]
fn test_walk_languages() {
    let temp_dir = project();
    let walker = FileWalker::new(temp_dir.path(), &ScanConfig::default()).unwrap();
    for file in collect_files(walker) {
        let expected = if file.rel_path.as_str().ends_with(".rs") {
            Language::Rust
        } else {
            Language::TypeScript
        };
        assert_eq!(file.language, expected, "{}", file.rel_path);
    }
}

#[test]
fn test_walk_without_exclusions_finds_everything() {
    let temp_dir = project();
    let scan = ScanConfig {
        exclude_dirs: vec![],
        exclude_prefixes: vec![],
    };
    let walker = FileWalker::new(temp_dir.path(), &scan).unwrap();
    let paths = rel_paths(&collect_files(walker));

    assert_eq!(paths.len(), 9);
    assert!(paths.contains("node_modules/react/index.ts"));
    assert!(paths.contains("src/components/ui/button.tsx"));
    assert!(paths.contains("src-tauri/target/debug/build.rs"));
}

#[test]
fn test_prefix_only_exclusion() {
    let temp_dir = project();
    let scan = ScanConfig {
        exclude_dirs: vec![],
        exclude_prefixes: vec!["src/components/ui/".to_string()],
    };
    let walker = FileWalker::new(temp_dir.path(), &scan).unwrap();
    let results: Vec<_> = walker.walk_with_skip_info().filter_map(Result::ok).collect();

    let excluded: Vec<_> = results
        .iter()
        .filter_map(|r| match r {
            WalkResult::Skipped {
                path,
                reason: SkipReason::Excluded,
            } => Some(path.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        excluded,
        vec![temp_dir.path().join("src/components/ui/button.tsx")]
    );
}

#[test]
fn test_excluded_name_as_file_segment() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "src/dist.ts", "");
    write_file(temp_dir.path(), "src/ui.tsx", "");

    let walker = FileWalker::new(temp_dir.path(), &ScanConfig::default()).unwrap();
    let paths = rel_paths(&collect_files(walker));
    assert!(paths.contains("src/dist.ts"));
    assert!(paths.contains("src/ui.tsx"));
}

#[test]
fn test_rel_paths_are_normalized() {
    let temp_dir = project();
    let walker = FileWalker::new(temp_dir.path(), &ScanConfig::default()).unwrap();
    for file in collect_files(walker) {
        assert!(!file.rel_path.as_str().contains('\\'));
        assert!(!file.rel_path.as_str().starts_with("./"));
        assert_eq!(file.rel_path, RelPath::new(file.rel_path.as_str()));
        assert_eq!(file.path, temp_dir.path().join(file.rel_path.as_str()));
    }
}
