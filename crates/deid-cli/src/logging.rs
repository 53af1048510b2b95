//! Tracing setup for the `deid` binary.
//!
//! Logs go to stderr by default, or to a file via `--log-file`.
//!
//! # Log Levels
//!
//! - `error`: fatal problems surfaced to the user
//! - `warn`: non-fatal issues (empty config, report write failure)
//! - `info`: pipeline stage progress with `duration_ms` fields
//! - `debug`: per-pass counters, skips
//! - `trace`: cell-level previews (requires `--log-data`)
//!
//! Cell values are redacted from log output unless the operator opts in
//! with `--log-data`; call [`redact_value`] before putting any cell content
//! into a log field.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Placeholder emitted in place of cell content when data logging is off.
pub const REDACTED_VALUE: &str = "[REDACTED]";

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Whether raw cell values may appear in logs.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Returns `value` when data logging is enabled, the redaction placeholder
/// otherwise.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() { value } else { REDACTED_VALUE }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, one event per line with full fields.
    #[default]
    Pretty,
    /// Condensed single-line output.
    Compact,
    /// One JSON object per line.
    Json,
}

/// Subscriber configuration assembled from the CLI flags.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level when no `RUST_LOG` override applies.
    pub level_filter: LevelFilter,
    /// Honor `RUST_LOG` when it is set.
    pub use_env_filter: bool,
    /// Prefix events with a timestamp.
    pub with_timestamps: bool,
    /// Include the module path that emitted the event.
    pub with_target: bool,
    /// Emit span close events with timing fields.
    pub with_spans: bool,
    /// Color the output with ANSI escapes.
    pub with_ansi: bool,
    /// Rendering of individual events.
    pub format: LogFormat,
    /// Append to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    /// Allow raw cell values in log output.
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            with_timestamps: true,
            with_target: false,
            with_spans: false,
            with_ansi: true,
            format: LogFormat::Pretty,
            log_file: None,
            log_data: false,
        }
    }
}

/// Installs the global tracing subscriber described by `config`.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            // Files never get ANSI escapes.
            let mut file_config = config.clone();
            file_config.with_ansi = false;
            init_logging_with_writer(&file_config, SharedFileWriter::new(file))
        }
        None => init_logging_with_writer(config, io::stderr),
    }
}

/// Installs the global subscriber with an explicit writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);

    let filter = build_env_filter(config);
    let span_events = if config.with_spans {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let try_init_result = match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(config.with_target)
                .with_span_events(span_events);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_span_events(span_events);
            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .try_init()
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_span_events(span_events);
            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .try_init()
            }
        }
    };

    try_init_result.context("install global tracing subscriber")
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let level = config.level_filter.to_string().to_lowercase();
    let fallback = format!(
        "{level},deid_cli={level},deid_ingest={level},deid_model={level},deid_output={level},deid_transform={level}"
    );
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback))
    } else {
        EnvFilter::new(&fallback)
    }
}

/// Log writer that shares one file handle across threads.
#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

/// Per-event handle produced by [`SharedFileWriter`].
struct SharedFileGuard {
    file: Arc<Mutex<File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file mutex poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file mutex poisoned"))?;
        file.flush()
    }
}

impl<'writer> MakeWriter<'writer> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'writer self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}
