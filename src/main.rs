//! file-size-guard CLI entry point

use clap::Parser;
use file_size_guard::cli::{Cli, check};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = check::CheckOptions::from(&cli);
    let exit_code = check::run_check(&options, cli.color);

    process::exit(exit_code);
}

/// Diagnostics go to stderr so stdout carries only the report
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("file_size_guard={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
