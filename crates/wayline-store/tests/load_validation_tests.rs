use std::fs;

use wayline_store::{load_collection, StorageError};

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let result = load_collection(&path);
    assert!(matches!(result, Err(StorageError::Read { .. })));
}

#[test]
fn test_invalid_json_is_a_malformed_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ this is not json").unwrap();

    let result = load_collection(&path);
    assert!(matches!(result, Err(StorageError::Malformed { .. })));
}

#[test]
fn test_empty_route_name_is_an_invalid_element_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unnamed.json");
    fs::write(
        &path,
        r#"{
  "routes": [
    {
      "name": "",
      "coordinates": { "x": 0, "y": 0 },
      "from": { "x": 0, "y": 0, "z": 0.0, "name": "a" },
      "to": { "x": 1, "y": 0, "z": 0.0, "name": "b" }
    }
  ]
}"#,
    )
    .unwrap();

    let result = load_collection(&path);
    assert!(matches!(result, Err(StorageError::InvalidElement { .. })));
}

#[test]
fn test_missing_field_is_a_malformed_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.json");
    fs::write(&path, r#"{ "routes": [ { "name": "only a name" } ] }"#).unwrap();

    let result = load_collection(&path);
    assert!(matches!(result, Err(StorageError::Malformed { .. })));
}
