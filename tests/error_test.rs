//! Error type behaviour

use marker_ocr::error::MarkerOcrError;
use marker_ocr::scanner;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    let err = result.unwrap_err();
    assert!(matches!(err, MarkerOcrError::FolderNotFound(_)));
}

#[test]
fn test_scan_folder_no_images() {
    let dir = tempdir().expect("Failed to create temp dir");

    std::fs::write(dir.path().join("test.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();

    let result = scanner::scan_folder(dir.path());
    assert!(result.unwrap().is_empty());
}

#[test]
fn test_error_display() {
    let errors = vec![
        MarkerOcrError::Config("bad config".to_string()),
        MarkerOcrError::FolderNotFound("/path/to/folder".to_string()),
        MarkerOcrError::ImageLoad("map.png".to_string()),
        MarkerOcrError::Recognition("engine crashed".to_string()),
        MarkerOcrError::VocabularyLoad("locations.txt".to_string()),
        MarkerOcrError::Persistence("out.csv".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message: {:?}", err);
    }
}

#[test]
fn test_persistence_message() {
    let err = MarkerOcrError::Persistence("out.csv: disk full".to_string());
    assert_eq!(err.to_string(), "Failed to write output table: out.csv: disk full");
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MarkerOcrError = io_err.into();

    assert!(matches!(err, MarkerOcrError::Io(_)));
    assert!(err.to_string().contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: MarkerOcrError = json_err.into();

    assert!(matches!(err, MarkerOcrError::Json(_)));
}
