//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ndjson_audit::adapters::{LogReporter, TallyReporter};
use ndjson_audit::audit::{self, DEFAULT_INPUTS};
use ndjson_audit::config::AuditConfig;
use ndjson_audit::core::models::{Level, TimeBasis, entity_name};
use ndjson_audit::core::ports::Reporter;
use ndjson_audit::logging;
use ndjson_audit::output::{AuditSummary, FileOutcome, OutputMode};

/// ndjson-audit - Data-quality checks for NDJSON exports
#[derive(Parser, Debug)]
#[command(
    name = "ndjson-audit",
    version,
    about = "Data-quality checks for NDJSON exports",
    long_about = "Audit newline-delimited JSON exports for data-quality issues.\n\n\
                  Every record is checked for negative values, schema drift, bad\n\
                  date fields, nulls, empty lists and malformed ids. Findings are\n\
                  written to a log file that is overwritten on each run."
)]
pub struct Cli {
    /// NDJSON files or directories to audit (default: data/brands.json
    /// data/users.json data/receipts.json)
    pub paths: Vec<PathBuf>,

    /// Log file to write findings to (overrides the config file)
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// TOML config file with rule overrides
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Continue with the next file when one cannot be loaded
    #[arg(short, long)]
    pub keep_going: bool,

    /// Render timestamps in UTC instead of local time
    #[arg(long)]
    pub utc: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Output the run summary in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AuditConfig::load(path)?,
        None => AuditConfig::default(),
    };

    let log_file = cli.log_file.clone().unwrap_or_else(|| config.log_file());
    logging::init(&log_file, cli.verbose)
        .with_context(|| format!("cannot log to {}", log_file.display()))?;

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let time_basis = if cli.utc {
        TimeBasis::utc()
    } else {
        TimeBasis::Local
    };

    let paths = if cli.paths.is_empty() {
        DEFAULT_INPUTS.iter().map(PathBuf::from).collect()
    } else {
        cli.paths.clone()
    };
    let inputs = audit::collect_inputs(&paths).context("failed to list input files")?;

    let reporter = TallyReporter::new(LogReporter);
    reporter.record(Level::Info, "Starting data quality check...");

    let mut files = Vec::with_capacity(inputs.len());
    let mut aborted = None;

    for path in &inputs {
        let entity = entity_name(path);
        reporter.record(Level::Info, &format!("Checking {entity} data quality..."));

        match audit::audit_file(path, &config, time_basis, &reporter) {
            Ok(audit) => files.push(FileOutcome::audited(path, &audit)),
            Err(err) => {
                files.push(FileOutcome::failed(path, &entity, &err));
                if !cli.keep_going {
                    aborted = Some(
                        anyhow::Error::new(err)
                            .context(format!("failed to audit {}", path.display())),
                    );
                    break;
                }
            },
        }
    }

    let summary = AuditSummary {
        files,
        findings: reporter.tally(),
        log_file: log_file.display().to_string(),
    };
    summary.render(output_mode);

    if let Some(err) = aborted {
        return Err(err);
    }
    if summary.failures() > 0 {
        anyhow::bail!("{} file(s) could not be audited", summary.failures());
    }
    Ok(())
}
