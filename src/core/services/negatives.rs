//! Negative-value scanner
//!
//! Walks a record recursively and collects every negative number together with
//! its path. Numeric strings are parsed before the test, since many exported
//! fields carry numbers as text (`"finalPrice": "-1.99"`); strings that do not
//! parse are skipped without a finding.

use serde_json::Value;

use crate::core::models::{NegativeNumber, NegativeValues, Record};

/// Collect the negative numbers in `value`, with paths prefixed by `prefix`
///
/// Object keys extend the path as `prefix.key` (or `key` when the prefix is
/// empty); array items as `prefix[i]`. Only object members are tested, so a
/// bare scalar or a scalar array item yields nothing. Booleans and nulls are
/// ignored.
#[must_use]
pub fn scan_negative_values(value: &Value, prefix: &str) -> NegativeValues {
    let mut found = NegativeValues::new();
    walk(value, prefix, &mut found);
    found
}

/// [`scan_negative_values`] over a decoded record
#[must_use]
pub fn scan_record(record: &Record, prefix: &str) -> NegativeValues {
    let mut found = NegativeValues::new();
    walk_object(record, prefix, &mut found);
    found
}

fn walk_object(map: &Record, path: &str, found: &mut NegativeValues) {
    for (key, child) in map {
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };
        match child {
            Value::Object(_) | Value::Array(_) => walk(child, &child_path, found),
            _ => {
                if let Some(number) = negative_leaf(child) {
                    found.insert(child_path, number);
                }
            },
        }
    }
}

// Only object members are leaves; scalars directly inside arrays are skipped.
fn walk(value: &Value, path: &str, found: &mut NegativeValues) {
    match value {
        Value::Object(map) => walk_object(map, path, found),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                walk(item, &format!("{path}[{index}]"), found);
            }
        },
        _ => {},
    }
}

fn negative_leaf(value: &Value) -> Option<NegativeNumber> {
    match value {
        Value::Number(n) if n.as_f64().is_some_and(|f| f < 0.0) => {
            Some(NegativeNumber::Json(n.clone()))
        },
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| *f < 0.0)
            .map(NegativeNumber::Parsed),
        _ => None,
    }
}
