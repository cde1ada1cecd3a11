//! ndjson-audit - A CLI tool to audit the data quality of newline-delimited JSON
//! exports
//!
//! This library provides the record loader, the rule-based checks (duplicate ids,
//! schema drift, negative values, date fields, field kinds) and the orchestration
//! that runs them over a loaded file while reporting findings to an injected sink.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod audit;
pub mod config;
pub mod core;
pub mod logging;
pub mod output;
