//! Tests for loading NDJSON files

use ndjson_audit::adapters::{LoadError, NdjsonReader, load_records};
use ndjson_audit::audit::load_reported;
use ndjson_audit::core::models::Level;
use ndjson_audit::core::ports::RecordingReporter;

use crate::common::{TestData, sample_values};

#[test]
fn loads_every_line_in_order() {
    let data = TestData::new();
    let path = data.write_ndjson("receipts.json", &sample_values());

    let set = load_records(&path).unwrap();

    assert_eq!(set.len(), 4);
    assert_eq!(set.entity(), "receipts");
    assert_eq!(set.records()[1]["value"], -5);
    assert_eq!(set.records()[3]["_id"]["$oid"], "3");
}

#[test]
fn reader_is_lazy() {
    let data = TestData::new();
    let path = data.write_raw("brands.json", "{\"a\": 1}\nnot json\n");

    let mut reader = NdjsonReader::open(&path).unwrap();
    assert!(reader.next().unwrap().is_ok());
    assert!(matches!(reader.next().unwrap(), Err(LoadError::Decode { line: 1, .. })));
    assert!(reader.next().is_none());
}

#[test]
fn malformed_line_fails_whole_load() {
    let data = TestData::new();
    let path = data.write_raw("brands.json", "Invalid JSON");

    let reporter = RecordingReporter::new();
    let err = load_reported(&path, &reporter).unwrap_err();

    assert!(err.is_decode());
    assert_eq!(reporter.messages_at(Level::Warning), ["Invalid JSON structure"]);
}

#[test]
fn missing_file_is_not_found() {
    let data = TestData::new();
    let err = load_records(&data.path().join("non_existent_file.json")).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
}

#[test]
fn empty_file_yields_empty_set_with_warning() {
    let data = TestData::new();
    let path = data.write_raw("users.json", "");

    let reporter = RecordingReporter::new();
    let set = load_reported(&path, &reporter).unwrap();

    assert!(set.is_empty());
    assert_eq!(reporter.messages_at(Level::Warning), ["The file is empty"]);
}
