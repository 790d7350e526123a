//! Taxoprep CLI - Main entry point

use clap::error::ErrorKind;
use clap::Parser;
use std::process;
use taxoprep_cli::Cli;
use taxoprep_common::logging::{init_logging, LogConfig, LogLevel};
use tracing::error;

fn main() {
    // Parse command-line arguments; a wrong argument count exits 1 with
    // the usage text, while --help/--version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                _ => process::exit(1),
            }
        }
    };

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        LogConfig::builder()
            .level(LogLevel::Debug)
            .log_file_prefix("taxoprep".to_string())
            .build()
    } else {
        LogConfig::builder()
            .level(LogLevel::Warn)
            .log_file_prefix("taxoprep".to_string())
            .build()
    };

    // Merge with environment variables (they take precedence)
    let log_config = log_config.with_env_overrides().unwrap_or_default();

    // Initialize logging (ignore errors as the CLI should work without logging)
    let _ = init_logging(&log_config);

    match taxoprep_cli::prep::run(&cli.input, &cli.out_prefix) {
        Ok(summary) => summary.report(),
        Err(e) => {
            error!(error = %e, "Prep run failed");
            eprintln!("ERROR: {e}");
            process::exit(1);
        }
    }
}
