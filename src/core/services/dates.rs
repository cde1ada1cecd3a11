//! Date-field check
//!
//! Every recognized date field is expected to be a wrapped timestamp,
//! `{"$date": <milliseconds since the epoch>}`. Whether a missing field is
//! reported depends on the entity's [`DateFieldPolicy`].
//!
//! [`DateFieldPolicy`]: crate::core::models::DateFieldPolicy

use serde_json::Value;

use super::CheckContext;
use crate::core::models::{DATE_FIELDS, DATE_KEY, Level, Record, TimeBasis};

/// Check every recognized date field of `item`, in [`DATE_FIELDS`] order
pub fn check_date_format(ctx: &CheckContext<'_>, item: &Record, index: usize) {
    for field in DATE_FIELDS {
        match item.get(field) {
            Some(value) => check_present_field(ctx, field, value, index),
            None if ctx.rules.date_policy.is_required(field) => ctx.warn_at(
                &format!(
                    "Missing date field '{field}' in {} data at line number {index}",
                    ctx.entity
                ),
                index,
            ),
            None => {},
        }
    }
}

fn check_present_field(ctx: &CheckContext<'_>, field: &str, value: &Value, index: usize) {
    let Some(timestamp) = value.as_object().and_then(|wrapped| wrapped.get(DATE_KEY)) else {
        ctx.warn_at(
            &format!(
                "{field}: Incorrect date format found in {} at line number {index} \
                 (expected {{'$date': timestamp}})",
                ctx.entity
            ),
            index,
        );
        return;
    };

    match render_timestamp(timestamp, ctx.rules.time_basis) {
        Some(rendered) => ctx.info(&format!("{field}: Valid date - {rendered} in {}", ctx.entity)),
        None => ctx.reporter.record_at(
            Level::Warning,
            &format!("{field}: Invalid date format in {}", ctx.entity),
            index,
        ),
    }
}

/// Render a `$date` payload; `None` for non-numbers and out-of-range instants
fn render_timestamp(timestamp: &Value, time_basis: TimeBasis) -> Option<String> {
    let Value::Number(number) = timestamp else {
        return None;
    };
    if let Some(millis) = number.as_i64() {
        return time_basis.render_millis(millis);
    }
    fractional_millis_to_micros(number.as_f64()?).and_then(|micros| time_basis.render_micros(micros))
}

#[allow(clippy::cast_possible_truncation)]
fn fractional_millis_to_micros(millis: f64) -> Option<i64> {
    let micros = (millis * 1_000.0).round();
    // i64::MAX is not exactly representable; stay strictly inside the range
    (micros.is_finite() && micros.abs() < 9.2e18).then_some(micros as i64)
}
