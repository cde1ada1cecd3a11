//! Negative values found in a record, keyed by path
//!
//! Paths use `parent.child` for object keys and `parent[i]` for array items,
//! e.g. `rewardsReceiptItemList[0].finalPrice`.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Iter;
use serde_json::Number;

/// A negative number as it was found: a JSON number keeps its own text,
/// a numeric string is held as the float it parsed to
#[derive(Debug, Clone)]
pub enum NegativeNumber {
    /// JSON number, printed as decoded (`-5`, `-1.0`)
    Json(Number),
    /// Parsed from a string, printed as a float (`-3.0`)
    Parsed(f64),
}

impl NegativeNumber {
    /// Numeric value
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Json(n) => n.as_f64().unwrap_or(f64::NAN),
            Self::Parsed(f) => *f,
        }
    }
}

impl PartialEq for NegativeNumber {
    fn eq(&self, other: &Self) -> bool {
        self.as_f64().total_cmp(&other.as_f64()).is_eq()
    }
}

impl From<f64> for NegativeNumber {
    fn from(value: f64) -> Self {
        Self::Parsed(value)
    }
}

impl fmt::Display for NegativeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(n) => write!(f, "{n}"),
            Self::Parsed(value) => match Number::from_f64(*value) {
                Some(n) => write!(f, "{n}"),
                None => write!(f, "{value}"),
            },
        }
    }
}

/// Insertion-ordered map from a value's path to the negative number found there
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NegativeValues {
    values: IndexMap<String, NegativeNumber>,
}

impl NegativeValues {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a negative value; an existing path keeps its position and is overwritten
    pub fn insert(&mut self, path: impl Into<String>, value: NegativeNumber) {
        self.values.insert(path.into(), value);
    }

    /// Merge another scan's results into this one
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    /// Value found at `path`
    #[must_use]
    pub fn get(&self, path: &str) -> Option<f64> {
        self.values.get(path).map(NegativeNumber::as_f64)
    }

    /// Number of negative values
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing negative was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Paths and values, in discovery order
    pub fn iter(&self) -> Iter<'_, String, NegativeNumber> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a NegativeValues {
    type Item = (&'a String, &'a NegativeNumber);
    type IntoIter = Iter<'a, String, NegativeNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<NegativeNumber>> FromIterator<(K, V)> for NegativeValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(path, value)| (path.into(), value.into()))
                .collect(),
        }
    }
}
