use std::fmt;

use serde::{Deserialize, Serialize};

/// Notes value for a row that passed every rule.
pub const VALID_NOTE: &str = "Valid";

/// Additional-notes sentinel for passing rows.
pub const NO_CORRECTIONS_NOTE: &str = "No corrections needed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Pass,
    Fail,
}

impl ValidationStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete validation outcome for one dictionary row.
///
/// Built once per row and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub table_name: String,
    pub column_name: String,
    pub english_name: String,
    pub data_type: String,
    pub precision: u32,
    pub scale: u32,
    pub status: ValidationStatus,
    /// Table-name shape violation, if any.
    pub table_failure_reason: Option<String>,
    /// Column-level reasons in fixed order: class word, missing tokens,
    /// unrecognized abbreviations, capitalization.
    pub reasons: Vec<String>,
    /// Human-readable summary shown in reports.
    pub notes: String,
    pub suggested_table_name: String,
    pub suggested_column_name: String,
    pub suggested_class_word: String,
    pub additional_notes: String,
    /// Message from a failed correction-advisor call.
    pub advisor_error: Option<String>,
    pub corrected_description: String,
    pub samples: [String; 3],
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        self.status == ValidationStatus::Pass
    }

    pub fn is_fail(&self) -> bool {
        self.status == ValidationStatus::Fail
    }

    /// Semicolon-joined column reasons.
    pub fn reason_text(&self) -> String {
        self.reasons.join("; ")
    }

    /// `TABLE.COLUMN` label used in summaries and selectors.
    pub fn label(&self) -> String {
        format!("{}.{}", self.table_name, self.column_name)
    }
}

/// Pass/fail counts across a validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub advisor_errors: usize,
}

impl ValidationSummary {
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        let mut summary = Self {
            total: verdicts.len(),
            ..Self::default()
        };
        for verdict in verdicts {
            match verdict.status {
                ValidationStatus::Pass => summary.passed += 1,
                ValidationStatus::Fail => summary.failed += 1,
            }
            if verdict.advisor_error.is_some() {
                summary.advisor_errors += 1;
            }
        }
        summary
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
