//! Result types shared by the command handlers and the terminal summary.

use std::path::PathBuf;

use deid_transform::PassOutcome;

/// Everything one `deid run` produced, for the summary table and exit code.
#[derive(Debug)]
pub struct RunResult {
    pub input_path: PathBuf,
    /// Where the output was written, or would be on a dry run.
    pub output_path: PathBuf,
    pub report_path: Option<PathBuf>,
    pub input_sha256: String,
    pub rows: usize,
    pub columns: usize,
    /// Pass counters in apply order.
    pub outcomes: Vec<PassOutcome>,
    /// Non-fatal problems; a non-empty list turns the exit code to 1.
    pub errors: Vec<String>,
    pub dry_run: bool,
}
