//! Dataset persistence and output-path derivation.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::debug;

use deid_model::Dataset;

use crate::error::{OutputError, Result};

/// Derives the output path for an input file: `_deidentified` is inserted
/// before the extension, next to the input.
///
/// `data/fall.csv` becomes `data/fall_deidentified.csv`; an input without
/// an extension gets the suffix appended bare.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let name = match input.extension() {
        Some(ext) => format!("{stem}_deidentified.{}", ext.to_string_lossy()),
        None => format!("{stem}_deidentified"),
    };
    input.with_file_name(name)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes a dataset as CSV.
///
/// Uses atomic write (temp file + rename) so a failed write never leaves a
/// truncated file at the target path. Missing cells are written as empty
/// fields.
pub fn write_dataset(dataset: &Dataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| OutputError::io("create directory", parent, e))?;
        }
    }

    let temp_path = temp_path_for(path);
    let mut file =
        File::create(&temp_path).map_err(|e| OutputError::io("create", temp_path.clone(), e))?;
    {
        let mut writer = csv::WriterBuilder::new().from_writer(&mut file);
        writer
            .write_record(&dataset.headers)
            .map_err(|e| OutputError::Csv {
                path: temp_path.clone(),
                source: e,
            })?;
        for row in &dataset.rows {
            writer
                .write_record(row.iter().map(|cell| cell.as_text().unwrap_or("")))
                .map_err(|e| OutputError::Csv {
                    path: temp_path.clone(),
                    source: e,
                })?;
        }
        writer
            .flush()
            .map_err(|e| OutputError::io("write", temp_path.clone(), e))?;
    }
    file.sync_all()
        .map_err(|e| OutputError::io("sync", temp_path.clone(), e))?;

    fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "wrote dataset"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_keeps_the_extension() {
        assert_eq!(
            derive_output_path(Path::new("data/fall.csv")),
            PathBuf::from("data/fall_deidentified.csv")
        );
    }

    #[test]
    fn output_path_without_extension_appends_bare() {
        assert_eq!(
            derive_output_path(Path::new("data/records")),
            PathBuf::from("data/records_deidentified")
        );
    }

    #[test]
    fn output_path_splits_at_the_last_dot() {
        assert_eq!(
            derive_output_path(Path::new("export.backup.csv")),
            PathBuf::from("export.backup_deidentified.csv")
        );
    }

    #[test]
    fn temp_path_appends_tmp_to_the_full_name() {
        assert_eq!(
            temp_path_for(Path::new("data/fall_deidentified.csv")),
            PathBuf::from("data/fall_deidentified.csv.tmp")
        );
    }
}
