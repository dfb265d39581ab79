//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => {
                if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
                    termcolor::ColorChoice::Auto
                } else {
                    termcolor::ColorChoice::Never
                }
            }
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// file-size-guard CLI entry point
///
/// With no arguments, checks the current directory against the default
/// limits and the default baseline file.
#[derive(Parser, Debug)]
#[command(name = "file-size-guard")]
#[command(about = "Enforce per-file line-count limits with a known-exceptions baseline")]
#[command(version)]
pub struct Cli {
    /// Project root to scan (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Baseline file, relative to the root unless absolute
    #[arg(long, value_name = "FILE")]
    pub baseline: Option<PathBuf>,

    /// Settings file (defaults to file-size-guard.toml under the root, if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
