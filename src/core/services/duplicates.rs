//! Duplicate-identifier detection

use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

use crate::core::models::OID_KEY;

/// Errors raised when the input is not a list of wrapped identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DuplicateCheckError {
    /// Element is not an object carrying `$oid`
    #[error("element {index} is not a wrapped identifier (missing \"$oid\")")]
    MissingOid {
        /// Position of the offending element
        index: usize,
    },
}

/// Find identifier values that occur more than once
///
/// Every element must be a wrapped identifier (`{"$oid": ...}`); the caller
/// filters anything else out. Duplicates are returned in first-seen order.
/// A non-string `$oid` is compared by its JSON text.
pub fn find_duplicates<'a, I>(ids: I) -> Result<Vec<String>, DuplicateCheckError>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();

    for (index, id) in ids.into_iter().enumerate() {
        let oid = id
            .get(OID_KEY)
            .ok_or(DuplicateCheckError::MissingOid { index })?;
        let key = match oid {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        *counts.entry(key).or_default() += 1;
    }

    Ok(counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(oid, _)| oid)
        .collect())
}
