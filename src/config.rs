//! Audit configuration
//!
//! Optional TOML file overriding the built-in rules. Every key may be omitted:
//!
//! ```toml
//! log_file = "DataQualityChecker.log"
//! numeric_indicators = ["count", "amount", "price", "quantity"]
//! nested_scan_prefix = "rewardsReceiptItemList"
//!
//! [entities.receipts]
//! required = ["createDate", "purchaseDate"]
//! optional = ["lastLogin"]
//! ```
//!
//! An entity listed under `[entities]` replaces its built-in date policy.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{AuditRules, DateFieldPolicy, TimeBasis};

/// Log file written when neither the config nor the CLI names one
pub const DEFAULT_LOG_FILE: &str = "DataQualityChecker.log";

/// Errors that can occur while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A date policy names a field the date check does not know
    #[error("unknown date field '{field}' for entity '{entity}'")]
    UnknownDateField {
        /// Entity whose policy names the field
        entity: String,
        /// The unrecognized field
        field: String,
    },
}

/// Audit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Where the findings log is written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Key fragments marking never-negative numeric fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_indicators: Option<Vec<String>>,

    /// Prefix of the second negative-value scan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested_scan_prefix: Option<String>,

    /// Date policies per entity, replacing the built-in ones
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub entities: BTreeMap<String, DateFieldPolicy>,
}

impl AuditConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate config text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (entity, policy) in &self.entities {
            if let Some(field) = policy.unknown_fields().next() {
                return Err(ConfigError::UnknownDateField {
                    entity: entity.clone(),
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Log file path, falling back to [`DEFAULT_LOG_FILE`]
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }

    /// Rules for `entity`: built-in defaults with this config's overrides applied
    #[must_use]
    pub fn rules_for(&self, entity: &str, time_basis: TimeBasis) -> AuditRules {
        let mut rules = AuditRules::for_entity(entity).with_time_basis(time_basis);
        if let Some(policy) = self.entities.get(entity) {
            rules.date_policy = policy.clone();
        }
        if let Some(indicators) = &self.numeric_indicators {
            rules.numeric_indicators.clone_from(indicators);
        }
        if let Some(prefix) = &self.nested_scan_prefix {
            rules.nested_scan_prefix.clone_from(prefix);
        }
        rules
    }
}
