//! Integration tests for CSV dataset loading.

use std::fs;
use std::path::PathBuf;

use deid_model::CellValue;

use deid_ingest::{IngestError, read_dataset};

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv fixture");
    path
}

#[test]
fn reads_headers_and_rows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_csv(&dir, "input.csv", "id,name,score\n1,Ada,10\n2,Grace,\n");
    let dataset = read_dataset(&path).expect("read dataset");
    assert_eq!(dataset.headers, vec!["id", "name", "score"]);
    assert_eq!(dataset.row_count(), 2);
    assert_eq!(dataset.rows[0][0], CellValue::Text("1".to_string()));
    assert_eq!(dataset.rows[1][2], CellValue::Missing);
}

#[test]
fn trims_cells_and_strips_bom() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_csv(&dir, "input.csv", "\u{feff}id, name \n 1 , Ada \n");
    let dataset = read_dataset(&path).expect("read dataset");
    assert_eq!(dataset.headers, vec!["id", "name"]);
    assert_eq!(dataset.rows[0][0], CellValue::Text("1".to_string()));
    assert_eq!(dataset.rows[0][1], CellValue::Text("Ada".to_string()));
}

#[test]
fn pads_short_rows_to_header_width() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_csv(&dir, "input.csv", "a,b,c\n1\n1,2,3,4\n");
    let dataset = read_dataset(&path).expect("read dataset");
    assert_eq!(dataset.rows[0].len(), 3);
    assert_eq!(dataset.rows[0][1], CellValue::Missing);
    assert_eq!(dataset.rows[1].len(), 3);
}

#[test]
fn drops_fully_blank_rows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_csv(&dir, "input.csv", "a,b\n1,2\n,\n  ,  \n3,4\n");
    let dataset = read_dataset(&path).expect("read dataset");
    assert_eq!(dataset.row_count(), 2);
}

#[test]
fn missing_file_is_an_error() {
    let err = read_dataset(std::path::Path::new("/nonexistent/input.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn empty_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_csv(&dir, "empty.csv", "");
    let err = read_dataset(&path).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn header_only_file_yields_zero_rows() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_csv(&dir, "header.csv", "id,name\n");
    let dataset = read_dataset(&path).expect("read dataset");
    assert_eq!(dataset.headers, vec!["id", "name"]);
    assert_eq!(dataset.row_count(), 0);
}
