//! Record model
//!
//! A record is one decoded NDJSON line. Keys keep their file order.

use std::path::Path;

use serde_json::{Map, Value};

/// Field holding a record's identifier
pub const ID_FIELD: &str = "_id";

/// Indicator key of a wrapped identifier (`{"$oid": "..."}`)
pub const OID_KEY: &str = "$oid";

/// Indicator key of a wrapped timestamp (`{"$date": 1611955498184}`)
pub const DATE_KEY: &str = "$date";

/// One decoded line of an input file
pub type Record = Map<String, Value>;

/// The records of one input file, in the order they were read
///
/// The position of a record is its 0-based line number and is what findings
/// refer to, so the set is never reordered once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    entity: String,
    records: Vec<Record>,
}

impl RecordSet {
    /// Create a record set for the given entity
    #[must_use]
    pub fn new(entity: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            entity: entity.into(),
            records,
        }
    }

    /// Entity name (the input file's stem, e.g. "receipts")
    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// The records, in file order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the file held no records
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Derive the entity name from an input path: base name without extension
///
/// `data/receipts.json` -> `receipts`
#[must_use]
pub fn entity_name(path: &Path) -> String {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default()
}
