//! Validator - runs every check over the records of one file
//!
//! Per record: negative-value scan, schema consistency, field types (which in
//! turn run the date and `_id` checks). Then, once per file, `_id`
//! uniqueness. Findings go to the injected reporter as they are found; there
//! is no pass/fail verdict.

use std::collections::BTreeSet;

use super::duplicates::find_duplicates;
use super::field_types::check_field_types;
use super::negatives::scan_record;
use super::schema::{check_schema_consistency, expected_keys};
use super::CheckContext;
use crate::core::models::{AuditRules, ID_FIELD, Level, Record};
use crate::core::ports::Reporter;

/// Data-quality validator for one entity
///
/// Only borrows the records it checks, so running it twice over the same
/// records reports the same findings twice.
#[derive(Debug)]
pub struct Validator<'a> {
    entity: String,
    rules: AuditRules,
    reporter: &'a dyn Reporter,
}

impl<'a> Validator<'a> {
    /// Create a validator with the built-in rules for `entity`
    #[must_use]
    pub fn new(entity: impl Into<String>, reporter: &'a dyn Reporter) -> Self {
        let entity = entity.into();
        let rules = AuditRules::for_entity(&entity);
        Self {
            entity,
            rules,
            reporter,
        }
    }

    /// Replace the rules
    #[must_use]
    pub fn with_rules(mut self, rules: AuditRules) -> Self {
        self.rules = rules;
        self
    }

    fn context(&self) -> CheckContext<'_> {
        CheckContext {
            entity: &self.entity,
            rules: &self.rules,
            reporter: self.reporter,
        }
    }

    /// Check every record, then identifier uniqueness across the file
    ///
    /// The first record's keys are the expected schema. An empty slice is
    /// left alone: no checks run and nothing is reported.
    pub fn check_json_quality(&self, records: &[Record]) {
        let Some(baseline) = records.first() else {
            return;
        };
        let expected = expected_keys(baseline);

        for (index, item) in records.iter().enumerate() {
            self.check_item(item, index, &expected);
        }

        self.check_id_uniqueness(records, &expected);

        self.reporter.record(Level::Info, "Data quality check completed");
    }

    /// Run the per-record checks on the record at `index`
    pub fn check_item(&self, item: &Record, index: usize, expected: &BTreeSet<String>) {
        let ctx = self.context();
        self.check_negative_values_in_item(item);
        check_schema_consistency(&ctx, item, index, expected);
        check_field_types(&ctx, item, index);
    }

    /// Report negative numbers found anywhere in `item`
    ///
    /// The record is scanned twice, once unprefixed and once with every path
    /// under the nested-scan prefix, and the results are merged.
    pub fn check_negative_values_in_item(&self, item: &Record) {
        let mut found = scan_record(item, "");
        found.merge(scan_record(item, &self.rules.nested_scan_prefix));

        if found.is_empty() {
            self.reporter
                .record(Level::Info, &format!("No negative values found in {}.", self.entity));
            return;
        }

        self.reporter.record(Level::Warning, "Negative values found:");
        for (path, value) in &found {
            self.reporter.record(Level::Info, &format!("{path}: {value}"));
        }
    }

    /// Report `_id` values shared by more than one record
    ///
    /// Skipped unless the expected schema has an `_id`. Records without one
    /// are left out; a malformed `_id` stops the check with a warning.
    pub fn check_id_uniqueness(&self, records: &[Record], expected: &BTreeSet<String>) {
        if !expected.contains(ID_FIELD) {
            return;
        }

        let ids = records.iter().filter_map(|item| item.get(ID_FIELD));
        match find_duplicates(ids) {
            Ok(duplicates) if duplicates.is_empty() => {
                self.reporter
                    .record(Level::Info, &format!("No duplicates found in {}.", self.entity));
            },
            Ok(duplicates) => {
                self.reporter
                    .record(Level::Warning, &format!("Duplicate OIDs found in {}", self.entity));
                for oid in duplicates {
                    self.reporter.record(Level::Info, &oid);
                }
            },
            Err(err) => {
                self.reporter.record(
                    Level::Warning,
                    &format!("Cannot check {ID_FIELD} uniqueness in {}: {err}", self.entity),
                );
            },
        }
    }
}
