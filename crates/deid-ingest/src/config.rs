use std::path::Path;

use tracing::debug;

use deid_model::DeidConfig;

use crate::error::{IngestError, Result};

/// Loads a [`DeidConfig`] from a TOML file.
///
/// Unknown keys are rejected by the deserializer, so a misspelled column
/// role fails the run instead of silently skipping a column.
pub fn load_config(path: &Path) -> Result<DeidConfig> {
    if !path.exists() {
        return Err(IngestError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::file_read(path, e))?;
    let config: DeidConfig = toml::from_str(&contents).map_err(|e| IngestError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
