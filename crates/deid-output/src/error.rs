//! Error types for output persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing run outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File I/O error.
    #[error("failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a CSV record.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Temp file could not be renamed onto the target.
    #[error("failed to complete write to {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OutputError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutputError::io(
            "create",
            PathBuf::from("/data/out.csv"),
            std::io::Error::other("denied"),
        );
        assert_eq!(err.to_string(), "failed to create file: /data/out.csv");
    }
}
