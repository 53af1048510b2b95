//! Error types for dataset and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the inputs of a de-identification run.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no records at all, not even a header.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Configuration Errors ===
    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Config file is not valid TOML for the expected keys.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl IngestError {
    pub(crate) fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv_parse(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::CsvParse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/input.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/input.csv");
    }

    #[test]
    fn test_config_error_display() {
        let err = IngestError::ConfigNotFound {
            path: PathBuf::from("deid.toml"),
        };
        assert_eq!(err.to_string(), "config file not found: deid.toml");
    }
}
