//! Output persistence for de-identification runs.

pub mod error;
pub mod write;

pub use error::{OutputError, Result};
pub use write::{derive_output_path, write_dataset};
