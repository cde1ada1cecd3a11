//! Reporter port
//!
//! Defines the sink findings are emitted to.

use std::cell::RefCell;

use crate::core::models::{Finding, Level};

/// Destination for findings
///
/// Implementations decide where a finding ends up (log file, memory, counters).
pub trait Reporter: std::fmt::Debug {
    /// Emit a finding
    fn record(&self, level: Level, message: &str);

    /// Emit a finding about the record on `line`
    ///
    /// The message already names the line; sinks that keep structured
    /// findings can override this to keep the index as well.
    fn record_at(&self, level: Level, message: &str, line: usize) {
        let _ = line;
        self.record(level, message);
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn record(&self, level: Level, message: &str) {
        (**self).record(level, message);
    }

    fn record_at(&self, level: Level, message: &str, line: usize) {
        (**self).record_at(level, message, line);
    }
}

/// In-memory reporter that keeps every finding
#[derive(Debug, Default)]
pub struct RecordingReporter {
    findings: RefCell<Vec<Finding>>,
}

impl RecordingReporter {
    /// Create an empty reporter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Findings recorded so far, in emission order
    #[must_use]
    pub fn findings(&self) -> Vec<Finding> {
        self.findings.borrow().clone()
    }

    /// Messages recorded so far, in emission order
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.findings.borrow().iter().map(|f| f.message.clone()).collect()
    }

    /// Messages recorded at `level`
    #[must_use]
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.findings
            .borrow()
            .iter()
            .filter(|f| f.level == level)
            .map(|f| f.message.clone())
            .collect()
    }

    /// Whether any message contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.findings.borrow().iter().any(|f| f.message.contains(needle))
    }

    /// Number of findings at `level`
    #[must_use]
    pub fn count(&self, level: Level) -> usize {
        self.findings.borrow().iter().filter(|f| f.level == level).count()
    }
}

impl Reporter for RecordingReporter {
    fn record(&self, level: Level, message: &str) {
        self.findings.borrow_mut().push(Finding::new(level, message));
    }

    fn record_at(&self, level: Level, message: &str, line: usize) {
        self.findings.borrow_mut().push(Finding::at_line(level, message, line));
    }
}
