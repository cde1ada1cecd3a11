//! Reporter implementations for the binary
//!
//! [`LogReporter`] hands findings to the `log` facade, where the logger set up
//! by [`crate::logging`] writes them to the log file. [`TallyReporter`] wraps
//! another reporter and counts what passes through it.

use std::cell::Cell;

use serde::Serialize;

use crate::core::models::Level;
use crate::core::ports::Reporter;

/// Reporter forwarding every finding to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn record(&self, level: Level, message: &str) {
        log::log!(target: "ndjson_audit", log::Level::from(level), "{message}");
    }
}

/// Number of findings per level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// INFO findings
    pub info: usize,
    /// WARNING findings
    pub warning: usize,
    /// ERROR findings
    pub error: usize,
}

impl Tally {
    const fn bump(mut self, level: Level) -> Self {
        match level {
            Level::Info => self.info += 1,
            Level::Warning => self.warning += 1,
            Level::Error => self.error += 1,
        }
        self
    }
}

/// Reporter that counts findings before forwarding them
#[derive(Debug)]
pub struct TallyReporter<R> {
    inner: R,
    tally: Cell<Tally>,
}

impl<R: Reporter> TallyReporter<R> {
    /// Wrap `inner`
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            tally: Cell::new(Tally::default()),
        }
    }

    /// Counts so far
    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally.get()
    }
}

impl<R: Reporter> Reporter for TallyReporter<R> {
    fn record(&self, level: Level, message: &str) {
        self.tally.set(self.tally.get().bump(level));
        self.inner.record(level, message);
    }

    fn record_at(&self, level: Level, message: &str, line: usize) {
        self.tally.set(self.tally.get().bump(level));
        self.inner.record_at(level, message, line);
    }
}
