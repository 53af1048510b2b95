//! De-identification pipeline with explicit stages.
//!
//! The pipeline runs three stages in order:
//! 1. **Ingest**: load the column policy config and the input CSV
//! 2. **Transform**: compile the config into passes and apply them in place
//! 3. **Output**: write the de-identified CSV and the run report
//!
//! Each stage takes the result of the previous one, so integration tests can
//! drive any prefix of the pipeline directly.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span, trace, warn};

use deid_ingest::{file_sha256, load_config, read_dataset};
use deid_model::{Dataset, DeidConfig};
use deid_output::{derive_output_path, write_dataset};
use deid_transform::{PassOutcome, apply_passes, build_passes};

use crate::logging::redact_value;
use crate::report::{RunReport, write_run_report_json};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// Parsed column policy configuration.
    pub config: DeidConfig,
    /// The input dataset, fully loaded.
    pub dataset: Dataset,
    /// Resolved path of the input file.
    pub input_path: PathBuf,
    /// Hex SHA-256 of the input bytes, recorded in the run report.
    pub input_sha256: String,
}

/// Loads the configuration and the input CSV.
///
/// The input path is `input_dir` joined with `input_file`. A missing config
/// or input file is fatal here; absent columns are not checked until the
/// transform stage, where they skip their pass.
pub fn ingest(config_path: &Path, input_dir: &Path, input_file: &str) -> Result<IngestResult> {
    let span = info_span!("ingest", config = %config_path.display(), input_file);
    let _guard = span.enter();
    let start = Instant::now();

    let config = load_config(config_path)?;
    if config.is_empty() {
        warn!(
            config = %config_path.display(),
            "config names no columns; the output will equal the input"
        );
    }

    let input_path = input_dir.join(input_file);
    let dataset = read_dataset(&input_path)?;
    let input_sha256 = file_sha256(&input_path)?;

    if let Some(first) = dataset.rows.first() {
        let preview: Vec<&str> = first
            .iter()
            .map(|cell| redact_value(cell.as_text().unwrap_or("")))
            .collect();
        trace!(?preview, "first data row");
    }

    info!(
        input = %input_path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        sha256 = %input_sha256,
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );

    Ok(IngestResult {
        config,
        dataset,
        input_path,
        input_sha256,
    })
}

// ============================================================================
// Stage 2: Transform
// ============================================================================

/// Result of the transform stage.
#[derive(Debug)]
pub struct TransformResult {
    /// Per-pass counters in apply order.
    pub outcomes: Vec<PassOutcome>,
}

/// Compiles the configuration into passes and applies them in place.
///
/// A fixed `seed` makes the pseudonym and jitter draws reproducible;
/// otherwise the generator is seeded from the OS.
pub fn transform(dataset: &mut Dataset, config: &DeidConfig, seed: Option<u64>) -> TransformResult {
    let span = info_span!("transform");
    let _guard = span.enter();
    let start = Instant::now();

    let passes = build_passes(config);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let outcomes = apply_passes(dataset, &passes, &mut rng);

    let applied = outcomes.iter().filter(|outcome| !outcome.skipped).count();
    let changed: usize = outcomes.iter().map(|outcome| outcome.changed).sum();
    info!(
        passes = outcomes.len(),
        applied,
        skipped = outcomes.len() - applied,
        changed,
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );

    TransformResult { outcomes }
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Input for the output stage.
#[derive(Debug)]
pub struct OutputOptions<'a> {
    pub input_path: &'a Path,
    pub dataset: &'a Dataset,
    pub outcomes: &'a [PassOutcome],
    pub input_sha256: &'a str,
    /// Skip all writes and report the would-be output path.
    pub dry_run: bool,
    /// Write the run report JSON next to the output.
    pub write_report: bool,
}

/// Result of the output stage.
#[derive(Debug)]
pub struct OutputResult {
    /// Where the de-identified CSV was (or would be) written.
    pub output_path: PathBuf,
    pub report_path: Option<PathBuf>,
    /// Non-fatal problems. A report that fails to write lands here instead
    /// of failing the run.
    pub errors: Vec<String>,
}

/// Writes the de-identified dataset and its run report.
pub fn output(options: OutputOptions<'_>) -> Result<OutputResult> {
    let span = info_span!("output");
    let _guard = span.enter();
    let start = Instant::now();

    let output_path = derive_output_path(options.input_path);
    let mut errors = Vec::new();

    if options.dry_run {
        info!(output = %output_path.display(), "output skipped (dry run)");
        return Ok(OutputResult {
            output_path,
            report_path: None,
            errors,
        });
    }

    write_dataset(options.dataset, &output_path)?;

    let report_path = if options.write_report {
        let report = RunReport {
            input_path: options.input_path,
            output_path: &output_path,
            input_sha256: options.input_sha256,
            rows: options.dataset.row_count(),
            columns: options.dataset.column_count(),
            outcomes: options.outcomes,
        };
        match write_run_report_json(&report) {
            Ok(path) => Some(path),
            Err(error) => {
                errors.push(format!("run report: {error:#}"));
                None
            }
        }
    } else {
        None
    };

    info!(
        output = %output_path.display(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );

    Ok(OutputResult {
        output_path,
        report_path,
        errors,
    })
}
