//! Output formatting for human and JSON modes
//!
//! The findings themselves go to the log file; stdout only gets a run
//! summary, rendered either as human-readable text or machine-parseable JSON.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::adapters::sink::Tally;
use crate::audit::FileAudit;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Outcome of auditing one input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Input path as given
    pub path: String,
    /// Entity name
    pub entity: String,
    /// Records checked (absent when loading failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    /// Load failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    /// A file that was loaded and checked
    #[must_use]
    pub fn audited(path: &Path, audit: &FileAudit) -> Self {
        Self {
            path: path.display().to_string(),
            entity: audit.entity.clone(),
            records: Some(audit.records),
            error: None,
        }
    }

    /// A file that could not be loaded
    #[must_use]
    pub fn failed(path: &Path, entity: &str, error: &impl std::fmt::Display) -> Self {
        Self {
            path: path.display().to_string(),
            entity: entity.to_string(),
            records: None,
            error: Some(error.to_string()),
        }
    }

    /// Whether loading failed
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Summary of a whole run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    /// Per-file outcomes, in processing order
    pub files: Vec<FileOutcome>,
    /// Findings per level across all files
    pub findings: Tally,
    /// Where the findings were written
    pub log_file: String,
}

impl AuditSummary {
    /// Number of files that failed to load
    #[must_use]
    pub fn failures(&self) -> usize {
        self.files.iter().filter(|f| f.is_failure()).count()
    }

    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.files.is_empty() {
            println!("No input files.");
            return;
        }

        println!("Audited {} file(s):\n", self.files.len());
        for file in &self.files {
            match (&file.records, &file.error) {
                (_, Some(error)) => {
                    println!("  {} {} ({})", "FAILED".red().bold(), file.path, error);
                },
                (Some(records), None) => {
                    println!("  {} {} ({} record(s))", "OK".green().bold(), file.path, records);
                },
                (None, None) => println!("  {}", file.path),
            }
        }

        println!();
        println!(
            "Findings: {} info, {} warning(s), {} error(s)",
            self.findings.info,
            self.findings.warning.to_string().yellow(),
            self.findings.error.to_string().red()
        );
        println!("Log written to {}", self.log_file);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
