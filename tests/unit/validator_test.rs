//! Tests for the validator over whole record sets

use chrono::FixedOffset;
use ndjson_audit::core::models::{AuditRules, Level, TimeBasis};
use ndjson_audit::core::ports::RecordingReporter;
use ndjson_audit::core::services::{Validator, expected_keys};
use serde_json::json;

use crate::common::{record, sample_records};

fn cst() -> TimeBasis {
    TimeBasis::Fixed(FixedOffset::west_opt(6 * 3600).unwrap())
}

fn validator<'a>(entity: &str, reporter: &'a RecordingReporter) -> Validator<'a> {
    Validator::new(entity, reporter).with_rules(AuditRules::for_entity(entity).with_time_basis(cst()))
}

#[test]
fn full_check_reports_duplicates_and_negatives() {
    let reporter = RecordingReporter::new();
    validator("sample", &reporter).check_json_quality(&sample_records());

    let messages = reporter.messages();
    assert!(reporter.contains("Duplicate OIDs found in sample"));
    assert!(messages.iter().any(|m| m == "1"));
    assert!(!messages.iter().any(|m| m == "2"));
    assert!(reporter.contains("Negative values found:"));
    assert!(messages.iter().any(|m| m == "value: -5"));
    assert_eq!(messages.last().unwrap(), "Data quality check completed");
}

#[test]
fn full_check_flags_schema_drift_of_last_record() {
    let reporter = RecordingReporter::new();
    validator("sample", &reporter).check_json_quality(&sample_records());

    assert_eq!(
        reporter
            .messages_at(Level::Warning)
            .iter()
            .filter(|m| m.starts_with("Inconsistent schema"))
            .collect::<Vec<_>>(),
        ["Inconsistent schema in sample at line number 3"]
    );
}

#[test]
fn full_check_renders_valid_date() {
    let reporter = RecordingReporter::new();
    let data = vec![record(json!({"name": "x", "createDate": {"$date": 1_611_955_498_184_i64}}))];
    validator("brands", &reporter).check_json_quality(&data);

    assert!(reporter.contains("createDate: Valid date - 2021-01-29 15:24:58.184000 in brands"));
}

#[test]
fn findings_carry_line_numbers() {
    let reporter = RecordingReporter::new();
    let data = vec![
        record(json!({"_id": {"$oid": "a"}, "items": [1]})),
        record(json!({"_id": "b", "items": []})),
    ];
    validator("brands", &reporter).check_json_quality(&data);

    let lines: Vec<Option<usize>> = reporter
        .findings()
        .into_iter()
        .filter(|f| f.level == Level::Warning)
        .map(|f| f.line)
        .collect();
    // empty list and bad _id on line 1, then the file-wide uniqueness check
    assert_eq!(lines, [Some(1), Some(1), None]);
}

#[test]
fn running_twice_is_idempotent() {
    let records = sample_records();
    let snapshot = records.clone();

    let first = RecordingReporter::new();
    validator("receipts", &first).check_json_quality(&records);
    let second = RecordingReporter::new();
    validator("receipts", &second).check_json_quality(&records);

    assert_eq!(first.findings(), second.findings());
    assert_eq!(records, snapshot);
}

#[test]
fn id_uniqueness_alone() {
    let records = sample_records();
    let reporter = RecordingReporter::new();
    validator("sample", &reporter).check_id_uniqueness(&records, &expected_keys(&records[0]));

    assert_eq!(reporter.messages(), ["Duplicate OIDs found in sample", "1"]);
}

#[test]
fn receipts_record_missing_dates() {
    let reporter = RecordingReporter::new();
    let data = vec![record(json!({
        "_id": {"$oid": "r1"},
        "bonusPointsEarned": 500,
        "rewardsReceiptStatus": "FINISHED"
    }))];
    validator("receipts", &reporter).check_json_quality(&data);

    assert!(reporter.contains("Missing date field 'purchaseDate' in receipts data at line number 0"));
    assert!(!reporter.contains("'lastLogin'"));
}
