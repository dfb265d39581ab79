//! Fail-open file reading and line counting

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a file as text.
///
/// Invalid UTF-8 is decoded lossily. A missing file, or any other read error,
/// yields an empty string so the check keeps running.
pub fn read_text(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read file, treating as empty"
            );
            String::new()
        }
    }
}

/// Counts lines, plus a trailing line without a terminator.
///
/// `\n`, `\r\n` and a lone `\r` each end one line.
pub fn count_lines(content: &str) -> usize {
    let bytes = content.as_bytes();
    let terminators = bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
        .count();
    match bytes.last() {
        None | Some(b'\n' | b'\r') => terminators,
        Some(_) => terminators + 1,
    }
}
