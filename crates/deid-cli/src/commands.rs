//! Command handlers wiring CLI arguments to the pipeline.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use deid_cli::pipeline::{self, IngestResult, OutputOptions};
use deid_cli::scaffold::scaffold_workspace;

use crate::cli::{InitArgs, RunArgs};
use crate::types::RunResult;

/// Runs the full de-identification pipeline for one input file.
pub fn run_deidentify(args: &RunArgs) -> Result<RunResult> {
    let span = info_span!("run", input_file = %args.input_file);
    let _guard = span.enter();
    let start = Instant::now();

    let IngestResult {
        config,
        mut dataset,
        input_path,
        input_sha256,
    } = pipeline::ingest(&args.config, &args.input_dir, &args.input_file)?;
    let rows = dataset.row_count();
    let columns = dataset.column_count();

    let transform = pipeline::transform(&mut dataset, &config, args.seed);

    let output = pipeline::output(OutputOptions {
        input_path: &input_path,
        dataset: &dataset,
        outcomes: &transform.outcomes,
        input_sha256: &input_sha256,
        dry_run: args.dry_run,
        write_report: !args.no_report,
    })?;

    info!(
        input = %input_path.display(),
        output = %output.output_path.display(),
        rows,
        columns,
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        input_path,
        output_path: output.output_path,
        report_path: output.report_path,
        input_sha256,
        rows,
        columns,
        outcomes: transform.outcomes,
        errors: output.errors,
        dry_run: args.dry_run,
    })
}

/// Writes the starter configuration and sample dataset.
pub fn run_init(args: &InitArgs) -> Result<()> {
    let paths = scaffold_workspace(&args.dir, args.force)?;
    println!("Wrote {}", paths.config_path.display());
    println!("Wrote {}", paths.sample_path.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit {} so the column roles match your data",
        paths.config_path.display()
    );
    println!(
        "  2. deid run --config {} --input-dir {} --input-file students.csv",
        paths.config_path.display(),
        args.dir.join("data").display()
    );
    Ok(())
}
