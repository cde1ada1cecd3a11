//! Domain models for ndjson-audit
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Record`] / [`RecordSet`] - Decoded NDJSON lines, in file order
//! - [`Level`] / [`Finding`] - What a check reports
//! - [`AuditRules`] / [`DateFieldPolicy`] - Entity-specific check settings
//! - [`NegativeValues`] - Negative numbers keyed by their path in a record
//! - [`NegativeNumber`] - One negative number, printed the way it was found

mod finding;
mod level;
mod negative;
mod record;
mod rules;

pub use finding::Finding;
pub use level::Level;
pub use negative::{NegativeNumber, NegativeValues};
pub use record::{DATE_KEY, ID_FIELD, OID_KEY, Record, RecordSet, entity_name};
pub use rules::{
    AuditRules, DATE_FIELDS, DEFAULT_NESTED_SCAN_PREFIX, DEFAULT_NUMERIC_INDICATORS,
    DateFieldPolicy, TimeBasis,
};
