//! Entity-specific check settings
//!
//! Which date fields an entity must carry, which numeric keys must never be
//! negative, and how timestamps are rendered.

use chrono::{DateTime, Datelike, FixedOffset, Local, Offset, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Recognized date fields, in the order they are checked
pub const DATE_FIELDS: [&str; 7] = [
    "lastLogin",
    "createDate",
    "dateScanned",
    "finishedDate",
    "modifyDate",
    "pointsAwardedDate",
    "purchaseDate",
];

/// Key fragments marking a numeric field that must not be negative
pub const DEFAULT_NUMERIC_INDICATORS: [&str; 4] = ["count", "amount", "price", "quantity"];

/// Prefix of the second negative-value scan run over every record
pub const DEFAULT_NESTED_SCAN_PREFIX: &str = "rewardsReceiptItemList";

/// Which of the recognized date fields an entity must carry
///
/// A recognized field that is neither required nor optional is still checked
/// when present; only a missing *required* field is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFieldPolicy {
    /// Fields whose absence is a warning
    #[serde(default)]
    pub required: Vec<String>,
    /// Fields that may be absent
    #[serde(default)]
    pub optional: Vec<String>,
}

impl DateFieldPolicy {
    /// Built-in policy for an entity; unknown entities have no requirements
    #[must_use]
    pub fn for_entity(entity: &str) -> Self {
        match entity {
            "receipts" => Self::receipts(),
            "users" => Self::users(),
            _ => Self::default(),
        }
    }

    /// Receipts carry every date field except `lastLogin`
    #[must_use]
    pub fn receipts() -> Self {
        Self::from_fields(&DATE_FIELDS[1..], &DATE_FIELDS[..1])
    }

    /// Users must carry `lastLogin`; the rest is optional
    #[must_use]
    pub fn users() -> Self {
        Self::from_fields(&DATE_FIELDS[..1], &DATE_FIELDS[1..])
    }

    fn from_fields(required: &[&str], optional: &[&str]) -> Self {
        Self {
            required: required.iter().map(ToString::to_string).collect(),
            optional: optional.iter().map(ToString::to_string).collect(),
        }
    }

    /// Whether a missing `field` should be reported
    #[must_use]
    pub fn is_required(&self, field: &str) -> bool {
        self.required.iter().any(|f| f == field)
    }

    /// Fields named by this policy that are not recognized date fields
    pub fn unknown_fields(&self) -> impl Iterator<Item = &str> {
        self.required
            .iter()
            .chain(&self.optional)
            .map(String::as_str)
            .filter(|field| !DATE_FIELDS.contains(field))
    }
}

/// Time zone wrapped timestamps are rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeBasis {
    /// The machine's local time zone
    #[default]
    Local,
    /// A fixed UTC offset
    Fixed(FixedOffset),
}

impl TimeBasis {
    /// Render in UTC
    #[must_use]
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Render milliseconds since the epoch, `None` when out of range
    #[must_use]
    pub fn render_millis(self, millis: i64) -> Option<String> {
        self.render_micros(millis.checked_mul(1_000)?)
    }

    /// Render microseconds since the epoch as `YYYY-MM-DD HH:MM:SS[.ffffff]`
    ///
    /// The fraction is omitted when it is zero. Years outside 1..=9999 are out
    /// of range.
    #[must_use]
    pub fn render_micros(self, micros: i64) -> Option<String> {
        let instant = DateTime::from_timestamp_micros(micros)?;
        let wall = match self {
            Self::Local => instant.with_timezone(&Local).naive_local(),
            Self::Fixed(offset) => instant.with_timezone(&offset).naive_local(),
        };
        if !(1..=9999).contains(&wall.year()) {
            return None;
        }

        let pattern = if wall.nanosecond() == 0 {
            "%Y-%m-%d %H:%M:%S"
        } else {
            "%Y-%m-%d %H:%M:%S%.6f"
        };
        Some(wall.format(pattern).to_string())
    }
}

/// Settings for auditing one entity
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRules {
    /// Required/optional date fields
    pub date_policy: DateFieldPolicy,
    /// Lower-case key fragments marking never-negative numeric fields
    pub numeric_indicators: Vec<String>,
    /// Prefix of the second negative-value scan
    pub nested_scan_prefix: String,
    /// Time zone for rendering timestamps
    pub time_basis: TimeBasis,
}

impl AuditRules {
    /// Built-in rules for an entity
    #[must_use]
    pub fn for_entity(entity: &str) -> Self {
        Self {
            date_policy: DateFieldPolicy::for_entity(entity),
            numeric_indicators: DEFAULT_NUMERIC_INDICATORS.iter().map(ToString::to_string).collect(),
            nested_scan_prefix: DEFAULT_NESTED_SCAN_PREFIX.to_string(),
            time_basis: TimeBasis::default(),
        }
    }

    /// Replace the time basis
    #[must_use]
    pub fn with_time_basis(mut self, time_basis: TimeBasis) -> Self {
        self.time_basis = time_basis;
        self
    }

    /// Whether `key` names a numeric field that must not be negative
    ///
    /// Matching is a case-insensitive substring test.
    #[must_use]
    pub fn is_numeric_indicator(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.numeric_indicators
            .iter()
            .any(|indicator| key.contains(&indicator.to_lowercase()))
    }
}
