//! Interfaces to the external suggestion providers.
//!
//! The rule engine only ever talks to these traits. Implementations may call
//! out to a language model; tests plug in deterministic stand-ins. Neither
//! provider influences a row's PASS/FAIL status.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Three example values for a column.
pub type SampleValues = [String; 3];

/// Failure of an external collaborator call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AdvisorError {
    /// Collaborator intentionally switched off (offline mode).
    #[error("advisor disabled")]
    Disabled,

    /// API key variable missing or blank.
    #[error("missing API key: {0} is not set")]
    MissingApiKey(String),

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the API.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected contract.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Request for a corrected table/column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRequest {
    pub table_name: String,
    pub column_name: String,
    pub english_name: String,
    pub table_failure_reason: String,
    pub column_failure_reason: String,
    /// Opaque domain-rules text, passed through verbatim.
    pub domain_rules: String,
    pub abbreviation_guidance: Option<String>,
}

/// Suggested replacement names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionSuggestion {
    #[serde(rename = "Suggested Table Name", default)]
    pub suggested_table_name: String,
    #[serde(rename = "Suggested Column Name", default)]
    pub suggested_column_name: String,
    #[serde(rename = "Additional Notes", default)]
    pub additional_notes: String,
}

/// Request for generated sample values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRequest {
    pub column_name: String,
    pub description: String,
    pub precision: u32,
    pub scale: u32,
}

/// Proposes corrected names for a failing row.
pub trait CorrectionAdvisor {
    fn suggest(&self, request: &CorrectionRequest) -> Result<CorrectionSuggestion, AdvisorError>;
}

/// Generates sample values the rule-based synthesizer cannot classify.
pub trait SampleGenerator {
    fn generate(&self, request: &SampleRequest) -> Result<SampleValues, AdvisorError>;
}

/// Placeholder samples reported when generation fails.
pub fn error_placeholder(message: &str) -> SampleValues {
    [
        format!("Error: {message}"),
        "N/A".to_string(),
        "N/A".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_three_values() {
        let samples = error_placeholder("timeout");
        assert_eq!(samples[0], "Error: timeout");
        assert_eq!(samples[1], "N/A");
        assert_eq!(samples[2], "N/A");
    }

    #[test]
    fn suggestion_tolerates_missing_fields() {
        let suggestion: CorrectionSuggestion =
            serde_json::from_str(r#"{"Suggested Column Name": "ORD_AMT"}"#).expect("parse");
        assert_eq!(suggestion.suggested_column_name, "ORD_AMT");
        assert!(suggestion.suggested_table_name.is_empty());
    }
}
