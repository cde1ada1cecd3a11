//! Adapter implementations for external systems
//!
//! - [`ndjson`] - Reads NDJSON files into records
//! - [`sink`] - Reporter implementations backed by the `log` facade

pub mod ndjson;
pub mod sink;

pub use ndjson::{LoadError, NdjsonReader, load_records};
pub use sink::{LogReporter, Tally, TallyReporter};
