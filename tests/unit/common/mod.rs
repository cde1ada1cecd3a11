//! Shared test fixtures and helpers
//!
//! This module provides NDJSON files on disk and ready-made record sets.

use std::fs;
use std::path::{Path, PathBuf};

use ndjson_audit::core::models::Record;
use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary directory holding NDJSON input files
pub struct TestData {
    dir: TempDir,
}

impl TestData {
    /// Create an empty data directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Root of the data directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `records` to `name`, one JSON object per line
    pub fn write_ndjson(&self, name: &str, records: &[Value]) -> PathBuf {
        let content: String = records.iter().map(|r| format!("{r}\n")).collect();
        self.write_raw(name, &content)
    }

    /// Write raw text to `name`
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

impl Default for TestData {
    fn default() -> Self {
        Self::new()
    }
}

/// Four records: one duplicate `_id` ("1"), one negative value, one date
///
/// ```text
/// 0  {"_id": {"$oid": "1"}, "value": 10}
/// 1  {"_id": {"$oid": "2"}, "value": -5}
/// 2  {"_id": {"$oid": "1"}, "value": 20}
/// 3  {"_id": {"$oid": "3"}, "value": 0, "createDate": {"$date": 1611955498184}}
/// ```
pub fn sample_values() -> Vec<Value> {
    vec![
        json!({"_id": {"$oid": "1"}, "value": 10}),
        json!({"_id": {"$oid": "2"}, "value": -5}),
        json!({"_id": {"$oid": "1"}, "value": 20}),
        json!({"_id": {"$oid": "3"}, "value": 0, "createDate": {"$date": 1_611_955_498_184_i64}}),
    ]
}

/// [`sample_values`] decoded into records
pub fn sample_records() -> Vec<Record> {
    sample_values().into_iter().map(record).collect()
}

/// Decode a JSON object into a record
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}
