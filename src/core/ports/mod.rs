//! Port traits (interfaces) for external dependencies
//!
//! The checks never write to a log directly. Every finding goes through the
//! [`Reporter`] handed to the validator at construction, so the binary can
//! route findings to its log file while tests capture them in memory.

mod reporter;

pub use reporter::{RecordingReporter, Reporter};
