use ddv_model::{CorrectionRequest, SampleRequest};

/// Stands in for absent abbreviation guidance.
pub const NO_MISSING_ABBREVIATIONS: &str = "No missing abbreviations detected.";

/// Prompt asking for corrected table and column names as JSON.
pub fn build_correction_prompt(request: &CorrectionRequest) -> String {
    let guidance = request
        .abbreviation_guidance
        .as_deref()
        .unwrap_or(NO_MISSING_ABBREVIATIONS);
    format!(
        r#"You are an expert in database naming conventions.
Based on the validation failure reasons, the naming rules and the English name,
suggest a corrected table name and column name.

## Current names
Table name: {table}
Column name: {column}
English name: {english}

## Table name issue
{table_issue}

## Column name issue
{column_issue}

## Naming rules
{rules}

## Abbreviations
{guidance}

## Instructions
1. Keep words that are not abbreviations unchanged.
2. Do not modify words that are already approved abbreviations.
3. If the table name has recognized abbreviations missing from the column name,
   restore them when appropriate.
4. Return ONLY a JSON object of the form:
{{"Suggested Table Name": "NEW_TABLE_NAME", "Suggested Column Name": "NEW_COLUMN_NAME", "Additional Notes": "Explain any significant changes made."}}
"#,
        table = request.table_name,
        column = request.column_name,
        english = request.english_name,
        table_issue = or_none(&request.table_failure_reason),
        column_issue = or_none(&request.column_failure_reason),
        rules = or_none(&request.domain_rules),
        guidance = guidance,
    )
}

/// Prompt asking for three example values as JSON.
pub fn build_sample_prompt(request: &SampleRequest) -> String {
    format!(
        r#"Generate 3 realistic example values for a database column.

Column name: {column}
Description: {description}
Precision: {precision}
Scale: {scale}

The values must fit the given precision and scale.
Return ONLY a JSON object of the form:
{{"samples": ["example1", "example2", "example3"]}}
"#,
        column = request.column_name,
        description = or_none(&request.description),
        precision = request.precision,
        scale = request.scale,
    )
}

fn or_none(text: &str) -> &str {
    if text.trim().is_empty() { "None" } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correction_prompt_defaults_missing_sections() {
        let request = CorrectionRequest {
            table_name: "SLS_ORDER_FACT".to_string(),
            column_name: "ORD_DTE".to_string(),
            english_name: "Order Date".to_string(),
            table_failure_reason: "Table name must start with 'T'.".to_string(),
            ..CorrectionRequest::default()
        };
        let prompt = build_correction_prompt(&request);
        assert!(prompt.contains("Table name: SLS_ORDER_FACT"));
        assert!(prompt.contains("## Column name issue\nNone"));
        assert!(prompt.contains(NO_MISSING_ABBREVIATIONS));
    }

    #[test]
    fn sample_prompt_snapshot() {
        let request = SampleRequest {
            column_name: "CUS_NAM".to_string(),
            description: "Customer legal name".to_string(),
            precision: 0,
            scale: 0,
        };
        insta::assert_snapshot!(build_sample_prompt(&request).trim_end(), @r#"
        Generate 3 realistic example values for a database column.

        Column name: CUS_NAM
        Description: Customer legal name
        Precision: 0
        Scale: 0

        The values must fit the given precision and scale.
        Return ONLY a JSON object of the form:
        {"samples": ["example1", "example2", "example3"]}
        "#);
    }
}
