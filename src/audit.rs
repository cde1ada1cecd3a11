//! File-level auditing
//!
//! Glue between the NDJSON loader and the validator: load a file (reporting
//! load failures before returning them), then run every check on it.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::adapters::ndjson::{LoadError, load_records};
use crate::config::AuditConfig;
use crate::core::models::{Level, RecordSet, TimeBasis, entity_name};
use crate::core::ports::Reporter;
use crate::core::services::Validator;

/// Input files used when none are given
pub const DEFAULT_INPUTS: [&str; 3] = ["data/brands.json", "data/users.json", "data/receipts.json"];

/// Extensions picked up when a directory is given as input
pub const INPUT_EXTENSIONS: [&str; 2] = ["json", "ndjson"];

/// What auditing one file produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAudit {
    /// Entity name
    pub entity: String,
    /// Records checked
    pub records: usize,
}

/// Load `path`, reporting failures and an empty file
///
/// A decode failure is reported as a warning, a missing file as an error;
/// both are then returned. An empty file is only a warning.
pub fn load_reported(path: &Path, reporter: &dyn Reporter) -> Result<RecordSet, LoadError> {
    let records = match load_records(path) {
        Ok(records) => records,
        Err(err @ LoadError::NotFound(_)) => {
            reporter.record(Level::Error, &format!("File not found: {}", entity_name(path)));
            return Err(err);
        },
        Err(err) if err.is_decode() => {
            reporter.record(Level::Warning, "Invalid JSON structure");
            return Err(err);
        },
        Err(err) => {
            reporter.record(Level::Error, &format!("Failed to read {}: {err}", path.display()));
            return Err(err);
        },
    };

    if records.is_empty() {
        reporter.record(Level::Warning, "The file is empty");
    }
    Ok(records)
}

/// Load `path` and run every check on its records
pub fn audit_file(
    path: &Path,
    config: &AuditConfig,
    time_basis: TimeBasis,
    reporter: &dyn Reporter,
) -> Result<FileAudit, LoadError> {
    let records = load_reported(path, reporter)?;
    log::debug!("Loaded {} record(s) from {}", records.len(), path.display());
    let rules = config.rules_for(records.entity(), time_basis);
    log::debug!("Rules for {}: {rules:?}", records.entity());

    Validator::new(records.entity(), reporter)
        .with_rules(rules)
        .check_json_quality(records.records());

    Ok(FileAudit {
        entity: records.entity().to_string(),
        records: records.len(),
    })
}

/// Expand the inputs: files are kept as given, directories are walked for
/// `.json`/`.ndjson` files (sorted by path)
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut inputs = Vec::new();

    for path in paths {
        if !path.is_dir() {
            inputs.push(path.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && has_input_extension(entry.path()) {
                found.push(entry.into_path());
            }
        }
        log::debug!("Found {} input file(s) under {}", found.len(), path.display());
        inputs.extend(found);
    }

    Ok(inputs)
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| INPUT_EXTENSIONS.contains(&ext))
}
