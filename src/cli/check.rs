//! Check command implementation
//!
//! This module runs the whole pipeline:
//! - Loads settings (optional file-size-guard.toml)
//! - Loads the known-exceptions baseline
//! - Scans and classifies files under the root
//! - Detects stale baseline entries
//! - Prints the report and returns the exit code

use crate::cli::args::{Cli, ColorChoice};
use crate::cli::common::{EXIT_ERROR, EXIT_FAILED, EXIT_SUCCESS};
use crate::config::Baseline;
use crate::engine::Scanner;
use crate::error::GuardError;
use crate::output::HumanFormatter;
use std::path::PathBuf;
use termcolor::{StandardStream, WriteColor};

/// Inputs of a check run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Scan root; current directory when unset
    pub root: Option<PathBuf>,
    /// Baseline override
    pub baseline: Option<PathBuf>,
    /// Settings file override
    pub config: Option<PathBuf>,
}

impl From<&Cli> for CheckOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            root: cli.root.clone(),
            baseline: cli.baseline.clone(),
            config: cli.config.clone(),
        }
    }
}

/// Run the check, printing the report to stdout
///
/// # Returns
///
/// Exit code:
/// - 0: Success (no violations, no stale baseline entries)
/// - 1: Failed (violations and/or stale entries)
/// - 2: Error (invalid settings file or scan root)
pub fn run_check(options: &CheckOptions, color: ColorChoice) -> i32 {
    let mut stdout = StandardStream::stdout(color.into());
    run_check_to(options, &mut stdout)
}

/// Run the check, writing the report to `out`
pub fn run_check_to(options: &CheckOptions, out: &mut dyn WriteColor) -> i32 {
    match run_check_inner(options, out) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_FAILED,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Internal implementation of the check command
fn run_check_inner(options: &CheckOptions, out: &mut dyn WriteColor) -> Result<bool, GuardError> {
    let root = super::common::resolve_root(options.root.as_deref());
    let config = super::common::load_config(&root, options.config.as_deref())?;
    let (baseline_path, baseline_display) =
        super::common::resolve_baseline(&root, &config, options.baseline.as_deref());
    let baseline = Baseline::load(&baseline_path);

    let formatter = HumanFormatter::new(config.baseline.marker.clone(), baseline_display);
    formatter.write_header(out)?;

    let report = Scanner::new(&root, &config, &baseline).run()?;
    formatter.write_report(&report, out)?;
    out.flush()?;

    Ok(report.passed())
}
