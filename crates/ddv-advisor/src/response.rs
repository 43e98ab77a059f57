//! Tolerant parsing of model replies.
//!
//! Models often wrap JSON in markdown fences or add a sentence around it;
//! the first `{ ... }` object in the reply is what gets parsed.

use ddv_model::{AdvisorError, CorrectionSuggestion, SampleValues};
use serde::Deserialize;

/// Strip code fences and surrounding prose, leaving the outermost object.
pub fn extract_json(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (start < end).then(|| &reply[start..=end])
}

pub fn parse_suggestion(reply: &str) -> Result<CorrectionSuggestion, AdvisorError> {
    let json = extract_json(reply)
        .ok_or_else(|| AdvisorError::InvalidResponse("no JSON object in reply".to_string()))?;
    serde_json::from_str(json).map_err(|error| AdvisorError::InvalidResponse(error.to_string()))
}

#[derive(Deserialize)]
struct SamplesReply {
    samples: Vec<serde_json::Value>,
}

/// Exactly three samples; non-string JSON values are rendered as text.
pub fn parse_samples(reply: &str) -> Result<SampleValues, AdvisorError> {
    let json = extract_json(reply)
        .ok_or_else(|| AdvisorError::InvalidResponse("no JSON object in reply".to_string()))?;
    let parsed: SamplesReply = serde_json::from_str(json)
        .map_err(|error| AdvisorError::InvalidResponse(error.to_string()))?;
    let values: Vec<String> = parsed
        .samples
        .into_iter()
        .map(|value| match value {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        })
        .collect();
    let count = values.len();
    <[String; 3]>::try_from(values).map_err(|_| {
        AdvisorError::InvalidResponse(format!("expected 3 samples, got {count}"))
    })
}
