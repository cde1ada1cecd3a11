//! Core domain logic for ndjson-audit
//!
//! This module contains pure business logic with no I/O dependencies.
//! Findings leave the core only through the [`ports::Reporter`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Record, Level, Finding, rules)
//! - `services/` - The individual checks and the validator that drives them
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
