//! Tests for loading audit configuration files

use std::path::PathBuf;

use ndjson_audit::config::{AuditConfig, ConfigError, DEFAULT_LOG_FILE};
use ndjson_audit::core::models::{DATE_FIELDS, TimeBasis};

use crate::common::TestData;

#[test]
fn load_full_config() {
    let data = TestData::new();
    let path = data.write_raw(
        "audit.toml",
        r#"
log_file = "out/quality.log"
numeric_indicators = ["points"]
nested_scan_prefix = "items"

[entities.receipts]
required = ["purchaseDate"]
optional = ["lastLogin", "createDate"]
"#,
    );

    let config = AuditConfig::load(&path).unwrap();
    assert_eq!(config.log_file(), PathBuf::from("out/quality.log"));

    let rules = config.rules_for("receipts", TimeBasis::utc());
    assert_eq!(rules.date_policy.required, ["purchaseDate"]);
    assert_eq!(rules.nested_scan_prefix, "items");
    assert!(rules.is_numeric_indicator("pointsEarned"));
    assert!(!rules.is_numeric_indicator("finalPrice"));
    assert_eq!(rules.time_basis, TimeBasis::utc());
}

#[test]
fn entities_without_override_keep_builtin_policy() {
    let config = AuditConfig::from_toml_str("[entities.receipts]\nrequired = []\n").unwrap();
    let users = config.rules_for("users", TimeBasis::Local);
    assert!(users.date_policy.is_required(DATE_FIELDS[0]));
}

#[test]
fn missing_config_file() {
    let data = TestData::new();
    let err = AuditConfig::load(&data.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn default_log_file() {
    assert_eq!(AuditConfig::default().log_file(), PathBuf::from(DEFAULT_LOG_FILE));
}

#[test]
fn config_round_trips_through_toml() {
    let config = AuditConfig::from_toml_str("nested_scan_prefix = \"x\"\n").unwrap();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(AuditConfig::from_toml_str(&text).unwrap(), config);
}
