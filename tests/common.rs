//! Test utilities for file-size-guard integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub const BASELINE: &str = "scripts/file-size-known-exceptions.txt";
pub const MARKER: &str = "FILE_SIZE_EXCEPTION";

/// Writes a file under `root`, creating parent directories
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("file has a parent")).expect("create parent dirs");
    fs::write(path, content).expect("write file");
}

/// Writes a file with exactly `n` newline-terminated lines
pub fn write_lines(root: &Path, rel: &str, n: usize) {
    write_file(root, rel, &"line\n".repeat(n));
}

/// Writes a file with `n` lines, the first of which carries the exemption marker
pub fn write_marked(root: &Path, rel: &str, n: usize) {
    let body = "line\n".repeat(n.saturating_sub(1));
    write_file(root, rel, &format!("// {}: generated\n{}", MARKER, body));
}

/// Writes the default baseline file
pub fn write_baseline(root: &Path, content: &str) {
    write_file(root, BASELINE, content);
}
