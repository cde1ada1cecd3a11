//! Finding model
//!
//! A finding is a single reported issue or confirmation. Checks never collect
//! them; they hand each one to the reporter as soon as it is found.

use super::Level;

/// A single reported issue or confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Severity
    pub level: Level,
    /// Rendered message
    pub message: String,
    /// 0-based line of the record the finding refers to, if any
    pub line: Option<usize>,
}

impl Finding {
    /// Create a finding that is not tied to a record
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
        }
    }

    /// Create a finding about the record on `line`
    #[must_use]
    pub fn at_line(level: Level, message: impl Into<String>, line: usize) -> Self {
        Self {
            level,
            message: message.into(),
            line: Some(line),
        }
    }
}

