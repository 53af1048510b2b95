use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use deid_model::{CellValue, Dataset};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Reads a CSV file into a [`Dataset`].
///
/// The first record is the header row. Cells are trimmed and empty cells
/// become [`CellValue::Missing`]. Fully blank records are dropped. Short
/// records are padded to the header width, long ones truncated.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::csv_parse(path, e))?;
    let mut records = reader.records();
    let Some(first) = records.next() else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    let first = first.map_err(|e| IngestError::csv_parse(path, e))?;
    let headers: Vec<String> = first.iter().map(normalize_header).collect();
    let mut dataset = Dataset::new(headers);
    for record in records {
        let record = record.map_err(|e| IngestError::csv_parse(path, e))?;
        let row: Vec<CellValue> = record.iter().map(CellValue::from_raw).collect();
        if row.iter().all(CellValue::is_missing) {
            continue;
        }
        dataset.push_row(row);
    }
    debug!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "loaded dataset"
    );
    Ok(dataset)
}
