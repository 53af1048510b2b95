//! Integration tests for dataset persistence.

use std::fs;

use deid_model::{CellValue, Dataset};

use deid_output::{derive_output_path, write_dataset};

fn sample_dataset() -> Dataset {
    let mut dataset = Dataset::new(vec!["id".to_string(), "name".to_string()]);
    dataset.push_row(vec![
        CellValue::Text("720658922315".to_string()),
        CellValue::Text("Ada".to_string()),
    ]);
    dataset.push_row(vec![CellValue::Text("133331159861".to_string()), CellValue::Missing]);
    dataset
}

#[test]
fn writes_headers_rows_and_missing_cells() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("out.csv");
    write_dataset(&sample_dataset(), &path).expect("write dataset");

    let contents = fs::read_to_string(&path).expect("read output");
    assert_eq!(contents, "id,name\n720658922315,Ada\n133331159861,\n");
}

#[test]
fn leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("out.csv");
    write_dataset(&sample_dataset(), &path).expect("write dataset");

    let names: Vec<String> = fs::read_dir(dir.path())
        .expect("list dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["out.csv".to_string()]);
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested/deep/out.csv");
    write_dataset(&sample_dataset(), &path).expect("write dataset");
    assert!(path.exists());
}

#[test]
fn overwrites_an_existing_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale").expect("seed stale output");
    write_dataset(&sample_dataset(), &path).expect("write dataset");

    let contents = fs::read_to_string(&path).expect("read output");
    assert!(contents.starts_with("id,name\n"));
}

#[test]
fn header_only_dataset_round_trips() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("empty.csv");
    let dataset = Dataset::new(vec!["a".to_string(), "b".to_string()]);
    write_dataset(&dataset, &path).expect("write dataset");

    let contents = fs::read_to_string(&path).expect("read output");
    assert_eq!(contents, "a,b\n");
}

#[test]
fn derived_path_sits_next_to_the_input() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("fall.csv");
    assert_eq!(derive_output_path(&input), dir.path().join("fall_deidentified.csv"));
}
