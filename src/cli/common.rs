//! Helpers shared by the check command: exit codes and input resolution

use crate::config::Config;
use crate::config::baseline::DEFAULT_BASELINE_PATH;
use crate::config::settings::CONFIG_FILE_NAME;
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Files or directories whose presence marks a project root
const ROOT_MARKERS: [&str; 3] = [DEFAULT_BASELINE_PATH, CONFIG_FILE_NAME, ".git"];

/// Scan root: the given directory, or the project root discovered from the
/// current directory
pub(crate) fn resolve_root(root: Option<&Path>) -> PathBuf {
    if let Some(root) = root {
        return root.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => discover_root(&cwd),
        Err(_) => PathBuf::from("."),
    }
}

/// Nearest ancestor of `start` (inclusive) holding a baseline file, settings
/// file or `.git`. Falls back to `start` when none does.
pub(crate) fn discover_root(start: &Path) -> PathBuf {
    let found = start
        .ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()));
    match found {
        Some(dir) => {
            tracing::debug!(root = %dir.display(), "discovered project root");
            dir.to_path_buf()
        }
        None => start.to_path_buf(),
    }
}

/// Load settings.
///
/// An explicit `--config` must exist. Otherwise `file-size-guard.toml` under
/// the root is used when present, and defaults apply when it is not.
pub(crate) fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading settings");
        return Config::load(path);
    }

    let default_path = root.join(CONFIG_FILE_NAME);
    if default_path.is_file() {
        tracing::debug!(path = %default_path.display(), "loading settings");
        return Config::load(&default_path);
    }

    Ok(Config::default())
}

/// Baseline location on disk and as displayed in the report.
///
/// A relative path is taken relative to the root; the display form stays
/// relative so report text does not depend on where the tool runs.
pub(crate) fn resolve_baseline(
    root: &Path,
    config: &Config,
    override_path: Option<&Path>,
) -> (PathBuf, String) {
    let path = override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.baseline.path));
    let display = path.to_string_lossy().replace('\\', "/");

    if path.is_absolute() {
        (path, display)
    } else {
        (root.join(&path), display)
    }
}
