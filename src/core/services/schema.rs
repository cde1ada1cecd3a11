//! Schema-consistency check
//!
//! The first record of a file is the implicit schema: every other record is
//! expected to carry exactly the same keys.

use std::collections::BTreeSet;

use super::CheckContext;
use crate::core::models::Record;

/// Key set of the baseline record
#[must_use]
pub fn expected_keys(baseline: &Record) -> BTreeSet<String> {
    baseline.keys().cloned().collect()
}

/// Warn when `record`'s keys differ from `expected` (extra or missing keys)
///
/// Comparison is by set; key order does not matter.
pub fn check_schema_consistency(
    ctx: &CheckContext<'_>,
    record: &Record,
    index: usize,
    expected: &BTreeSet<String>,
) {
    let consistent = record.len() == expected.len() && record.keys().all(|k| expected.contains(k));
    if !consistent {
        ctx.warn_at(
            &format!("Inconsistent schema in {} at line number {index}", ctx.entity),
            index,
        );
    }
}
