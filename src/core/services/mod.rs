//! Business logic services
//!
//! Pure check routines that operate on decoded records and report through
//! the [`Reporter`] port. None of them mutate a record.
//!
//! - [`duplicates`] - Repeated identifiers across a file
//! - [`negatives`] - Negative numbers anywhere in a record
//! - [`schema`] - Key-set drift against the first record
//! - [`field_types`] - Per-field checks dispatched on the value kind
//! - [`dates`] - Wrapped-timestamp date fields
//! - [`validator`] - Runs all of the above over a file's records

pub mod dates;
pub mod duplicates;
pub mod field_types;
pub mod negatives;
pub mod schema;
pub mod validator;

pub use dates::check_date_format;
pub use duplicates::{DuplicateCheckError, find_duplicates};
pub use field_types::{check_empty_list, check_field_types, check_id_type, check_negative_numeric_field};
pub use negatives::{scan_negative_values, scan_record};
pub use schema::{check_schema_consistency, expected_keys};
pub use validator::Validator;

use crate::core::models::{AuditRules, Level};
use crate::core::ports::Reporter;

/// What a per-record check needs besides the record itself
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// Entity name used to tag messages and select rules
    pub entity: &'a str,
    /// Settings for this entity
    pub rules: &'a AuditRules,
    /// Where findings go
    pub reporter: &'a dyn Reporter,
}

impl CheckContext<'_> {
    fn info(&self, message: &str) {
        self.reporter.record(Level::Info, message);
    }

    fn warn_at(&self, message: &str, line: usize) {
        self.reporter.record_at(Level::Warning, message, line);
    }
}
