//! Tests for ddv-model types.

use ddv_model::{ValidationStatus, ValidationSummary, Verdict};

fn verdict(column: &str, status: ValidationStatus, advisor_error: Option<&str>) -> Verdict {
    Verdict {
        table_name: "T_SLS_ORD_FACT".to_string(),
        column_name: column.to_string(),
        english_name: "Order Date".to_string(),
        data_type: "DATE".to_string(),
        precision: 0,
        scale: 0,
        status,
        table_failure_reason: None,
        reasons: vec![],
        notes: "Valid".to_string(),
        suggested_table_name: String::new(),
        suggested_column_name: String::new(),
        suggested_class_word: String::new(),
        additional_notes: "No corrections needed.".to_string(),
        advisor_error: advisor_error.map(str::to_string),
        corrected_description: String::new(),
        samples: [
            "2001-01-01".to_string(),
            "1990-05-17".to_string(),
            "1970-12-31".to_string(),
        ],
    }
}

#[test]
fn summary_counts_statuses() {
    let verdicts = vec![
        verdict("ORD_DTE", ValidationStatus::Pass, None),
        verdict("ORD_XYZ_AMT", ValidationStatus::Fail, Some("network error: refused")),
        verdict("CUS_NAM", ValidationStatus::Fail, None),
    ];
    let summary = ValidationSummary::from_verdicts(&verdicts);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.advisor_errors, 1);
    assert!(summary.has_failures());
}

#[test]
fn empty_summary_has_no_failures() {
    let summary = ValidationSummary::from_verdicts(&[]);
    assert_eq!(summary, ValidationSummary::default());
    assert!(!summary.has_failures());
}

#[test]
fn status_serializes_upper_case() {
    let json = serde_json::to_string(&ValidationStatus::Fail).expect("serialize");
    assert_eq!(json, "\"FAIL\"");
    assert_eq!(ValidationStatus::Pass.to_string(), "PASS");
}

#[test]
fn verdict_serializes() {
    let original = verdict("ORD_DTE", ValidationStatus::Pass, None);
    let json = serde_json::to_string(&original).expect("serialize verdict");
    let round: Verdict = serde_json::from_str(&json).expect("deserialize verdict");
    assert_eq!(round.label(), "T_SLS_ORD_FACT.ORD_DTE");
    assert!(round.is_pass());
}
