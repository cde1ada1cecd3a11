//! Field-type checks
//!
//! Each field of a record is checked according to the kind of its value.

use serde_json::Value;

use super::CheckContext;
use super::dates::check_date_format;
use crate::core::models::{ID_FIELD, OID_KEY, Record};

/// Run the per-kind check for every field of `item`, then the `_id` check
///
/// - string: the date-field check over the whole record
/// - number: [`check_negative_numeric_field`]
/// - array: [`check_empty_list`]
/// - null: warning naming the field
///
/// The date check runs once per string field, so a record with several
/// string fields reports its date findings several times.
pub fn check_field_types(ctx: &CheckContext<'_>, item: &Record, index: usize) {
    for (key, value) in item {
        match value {
            Value::String(_) => check_date_format(ctx, item, index),
            Value::Number(number) => {
                if let Some(number) = number.as_f64() {
                    check_negative_numeric_field(ctx, key, number, index);
                }
            },
            Value::Array(items) => check_empty_list(ctx, key, items, index),
            Value::Null => ctx.warn_at(
                &format!("Null value for {key} found in {} at line number {index}", ctx.entity),
                index,
            ),
            Value::Bool(_) | Value::Object(_) => {},
        }
    }

    check_id_type(ctx, item, index);
}

/// Warn when a count/amount/price/quantity-like field is negative
///
/// The message keeps two spaces before the line number.
pub fn check_negative_numeric_field(ctx: &CheckContext<'_>, key: &str, value: f64, index: usize) {
    if value < 0.0 && ctx.rules.is_numeric_indicator(key) {
        ctx.warn_at(
            &format!("Negative value for {key} found in {} at line number  {index}", ctx.entity),
            index,
        );
    }
}

/// Warn when a list field is empty
pub fn check_empty_list(ctx: &CheckContext<'_>, key: &str, items: &[Value], index: usize) {
    if items.is_empty() {
        ctx.warn_at(
            &format!("Empty list for {key} in {} at line number {index}", ctx.entity),
            index,
        );
    }
}

/// Warn when `_id` is present but not a wrapped identifier with a string `$oid`
///
/// A record without `_id` passes; uniqueness is checked across the file.
pub fn check_id_type(ctx: &CheckContext<'_>, item: &Record, index: usize) {
    let Some(id) = item.get(ID_FIELD) else {
        return;
    };

    match id.as_object().and_then(|wrapped| wrapped.get(OID_KEY)) {
        None => ctx.warn_at(
            &format!("Invalid _id type found in {} at line number {index}", ctx.entity),
            index,
        ),
        Some(Value::String(_)) => {},
        Some(_) => ctx.warn_at(
            &format!("Invalid $oid type in _id in {} at line number {index}", ctx.entity),
            index,
        ),
    }
}
