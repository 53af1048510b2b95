use std::path::Path;

use sha2::Digest;

use crate::error::{IngestError, Result};

/// Hex-encoded SHA-256 of a byte slice.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

/// Hex-encoded SHA-256 of a file's contents, for the run report.
pub fn file_sha256(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::file_read(path, e))?;
    Ok(sha256_hex(&bytes))
}
