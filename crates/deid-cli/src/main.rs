//! `deid`: de-identify CSV datasets from the command line.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use deid_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_deidentify, run_init};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();

    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error:#}");
        std::process::exit(1);
    }

    let exit_code = match &cli.command {
        Command::Run(args) => match run_deidentify(args) {
            Ok(result) => {
                print_summary(&result);
                if result.errors.is_empty() { 0 } else { 1 }
            }
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Command::Init(args) => match run_init(args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Builds the logging configuration from CLI flags with consistent
/// precedence: an explicit `--log-level` beats `-v`/`-q`, and both beat
/// `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    LogConfig {
        level_filter,
        // RUST_LOG only applies when no explicit level was requested.
        use_env_filter: cli.log_level.is_none() && !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        log_file: cli.log_file.clone(),
        log_data: cli.log_data,
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        },
        ..LogConfig::default()
    }
}
