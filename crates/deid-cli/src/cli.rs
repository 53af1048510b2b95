//! Command-line definition for `deid`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

/// Top-level CLI arguments.
#[derive(Debug, Parser)]
#[command(
    name = "deid",
    version,
    about = "De-identify CSV datasets",
    long_about = "Replaces identifiers, names, contact details, and quasi-identifying \
                  values in a CSV file according to a TOML column policy, writing the \
                  result next to the input as <stem>_deidentified.<ext>."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(flatten)]
    pub color: colorchoice_clap::Color,

    /// Override the log level regardless of -v/-q.
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Append logs to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw cell values in logs. Off by default: values are redacted.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// De-identify one CSV file.
    Run(RunArgs),
    /// Write a starter configuration and sample dataset.
    Init(InitArgs),
}

/// Arguments for `deid run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Path to the TOML column policy configuration.
    #[arg(long, value_name = "PATH", default_value = "deid.toml")]
    pub config: PathBuf,

    /// Directory containing the input file.
    #[arg(long = "input-dir", value_name = "DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// Name of the input CSV file inside the input directory.
    #[arg(long = "input-file", value_name = "NAME")]
    pub input_file: String,

    /// Seed for the pseudonym and jitter generator. Fixing it reproduces a
    /// run exactly.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Apply every pass but write nothing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the run report JSON.
    #[arg(long = "no-report")]
    pub no_report: bool,
}

/// Arguments for `deid init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target directory for the starter files.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite existing starter files.
    #[arg(long)]
    pub force: bool,
}

/// `--log-level` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// `--log-format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
