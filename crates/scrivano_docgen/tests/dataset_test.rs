// Dataset reader tests covering the supported formats and failure modes.

use scrivano_core::Scalar;
use scrivano_docgen::{parse_csv, parse_json, parse_lines, read_dataset};
use std::io::Write;

fn temp_file(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    (dir, path)
}

#[test]
fn csv_headers_become_columns() {
    let dataset = parse_csv("name,city\nAnn,Oslo\nBo,Turin\n").unwrap();

    assert_eq!(dataset.columns(), &["name".to_string(), "city".to_string()]);
    assert_eq!(dataset.len(), 2);
    assert_eq!(
        dataset.records()[0].get("name"),
        Some(&Scalar::Text("Ann".to_string()))
    );
    assert_eq!(
        dataset.records()[1].get("city"),
        Some(&Scalar::Text("Turin".to_string()))
    );
}

#[test]
fn csv_blank_rows_are_skipped() {
    let dataset = parse_csv("name\nAnn\n\nBo\n").unwrap();
    assert_eq!(dataset.len(), 2);
}

#[test]
fn csv_with_no_rows_is_an_empty_dataset_error() {
    let err = parse_csv("name,city\n").unwrap_err();
    assert!(err.to_string().contains("No data found"));
}

#[test]
fn json_array_of_objects_parses() {
    let dataset = parse_json(r#"[{"name":"Ann","age":30},{"name":"Bo","age":25}]"#).unwrap();

    assert_eq!(dataset.len(), 2);
    assert_eq!(
        dataset.records()[0].get("age"),
        Some(&Scalar::Number(30.0))
    );
}

#[test]
fn json_single_object_becomes_one_record() {
    let dataset = parse_json(r#"{"name":"Ann"}"#).unwrap();
    assert_eq!(dataset.len(), 1);
}

#[test]
fn json_scalar_array_is_rejected() {
    let err = parse_json("[1, 2, 3]").unwrap_err();
    assert!(err.to_string().contains("array of objects"));
}

#[test]
fn json_malformed_text_is_rejected() {
    assert!(parse_json("{not json").is_err());
}

#[test]
fn txt_lines_become_text_records() {
    let dataset = parse_lines("first line\n\n  \nsecond line\n").unwrap();

    assert_eq!(dataset.columns(), &["text".to_string()]);
    assert_eq!(dataset.len(), 2);
    assert_eq!(
        dataset.records()[0].get("text"),
        Some(&Scalar::Text("first line".to_string()))
    );
}

#[test]
fn reading_dispatches_on_extension() {
    let (_dir, path) = temp_file("people.csv", "name\nAnn\n");
    let dataset = read_dataset(&path).unwrap();
    assert_eq!(dataset.len(), 1);
}

#[test]
fn unsupported_extension_error_names_the_extension() {
    let (_dir, path) = temp_file("people.pdf", "irrelevant");
    let err = read_dataset(&path).unwrap_err();
    assert!(err.to_string().contains("pdf"));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_dataset(dir.path().join("absent.csv")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}
