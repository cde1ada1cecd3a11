//! Log sink setup
//!
//! Findings reach the log file through the `log` facade. The file is
//! truncated at the start of every run and each line reads
//! `<YYYY-MM-DD HH:MM:SS> - <LEVEL> - <message>`.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local, TimeZone};
use thiserror::Error;

/// Errors that can occur while installing the logger
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Log file could not be created
    #[error("failed to create log file: {0}")]
    Io(#[from] io::Error),

    /// A global logger is already installed
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Level name as written to the log file
#[must_use]
pub const fn level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARNING",
        log::Level::Info => "INFO",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

/// Render one log line (without the trailing newline)
#[must_use]
pub fn format_line<Tz>(timestamp: &DateTime<Tz>, level: log::Level, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{} - {} - {message}",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        level_label(level)
    )
}

/// Install a global logger writing to `log_file`, truncating it first
///
/// `RUST_LOG` still applies; without it the filter is `info` (or `debug`
/// when `verbose`).
pub fn init(log_file: &Path, verbose: bool) -> Result<(), LoggingError> {
    let file = File::create(log_file)?;
    let default_filter = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(buf, "{}", format_line(&Local::now(), record.level(), &record.args().to_string()))
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}
