//! Run report JSON written next to the de-identified output.
//!
//! The report records what a run consumed and produced: paths, the input
//! checksum, dataset dimensions, and the per-pass counters. It is the
//! machine-readable companion to the terminal summary table.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use deid_transform::PassOutcome;

/// Schema identifier embedded in every report.
pub const REPORT_SCHEMA: &str = "deid.run-report";
/// Bump on breaking changes to the payload layout.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Inputs for one run report.
#[derive(Debug)]
pub struct RunReport<'a> {
    pub input_path: &'a Path,
    pub output_path: &'a Path,
    /// Hex SHA-256 of the input file bytes.
    pub input_sha256: &'a str,
    pub rows: usize,
    pub columns: usize,
    /// Pass counters in apply order.
    pub outcomes: &'a [PassOutcome],
}

#[derive(Debug, Serialize)]
struct RunReportPayload {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    tool: &'static str,
    tool_version: &'static str,
    input_path: String,
    output_path: String,
    input_sha256: String,
    rows: usize,
    columns: usize,
    passes: Vec<PassOutcome>,
}

/// Report path for an output file: `<stem>_report.json` in the same
/// directory.
pub fn report_path_for(output_path: &Path) -> PathBuf {
    let stem = output_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "run".to_string());
    output_path.with_file_name(format!("{stem}_report.json"))
}

/// Serializes the report and writes it next to the output file.
pub fn write_run_report_json(report: &RunReport<'_>) -> Result<PathBuf> {
    let report_path = report_path_for(report.output_path);
    let payload = RunReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        tool: env!("CARGO_PKG_NAME"),
        tool_version: env!("CARGO_PKG_VERSION"),
        input_path: report.input_path.display().to_string(),
        output_path: report.output_path.display().to_string(),
        input_sha256: report.input_sha256.to_string(),
        rows: report.rows,
        columns: report.columns,
        passes: report.outcomes.to_vec(),
    };
    let json = serde_json::to_string_pretty(&payload).context("serialize run report")?;
    std::fs::write(&report_path, format!("{json}\n"))
        .with_context(|| format!("write {}", report_path.display()))?;
    Ok(report_path)
}
