//! Input loading for de-identification runs: CSV datasets, run
//! configuration, and input checksums.

pub mod checksum;
pub mod config;
pub mod dataset;
pub mod error;

pub use checksum::{file_sha256, sha256_hex};
pub use config::load_config;
pub use dataset::read_dataset;
pub use error::{IngestError, Result};
