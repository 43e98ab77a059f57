//! Per-row orchestration of the naming rules.
//!
//! [`evaluate_row`] is the pure rule pass: it decides PASS/FAIL and the
//! reason list. [`NamingConventionEngine`] wraps it with the collaborator
//! calls (correction advice on FAIL, sample synthesis on every row) and
//! assembles the final [`Verdict`].

use ddv_model::{
    AbbreviationDictionary, ClassWordSet, ClassWordTypeMap, CorrectionAdvisor, CorrectionRequest,
    DictionaryRow, NO_CORRECTIONS_NOTE, VALID_NOTE, ValidationStatus, Verdict,
};
use rand::Rng;
use tracing::{debug, info_span, warn};

use crate::capitalization::{self, CAPITALIZATION_NOTE};
use crate::class_word::{self, ClassWordCheck, ClassWordOutcome};
use crate::samples::{SampleInput, SampleSynthesizer};
use crate::table_name::TableNameRules;
use crate::tokenize::{tokenize, tokenize_text};
use crate::vocabulary::{
    abbreviations_missing_from_column, approved_terms, missing_tokens, unrecognized_abbreviations,
};

/// Additional notes recorded when the correction advisor fails.
pub const ADVISOR_UNAVAILABLE_NOTE: &str = "N/A";

/// Rendering of the empty token produced by a doubled delimiter.
pub const EMPTY_SEGMENT_LABEL: &str = "(empty segment)";

/// Read-only reference data for one validation pass.
#[derive(Debug, Clone)]
pub struct ValidationContext<'a> {
    pub abbreviations: &'a AbbreviationDictionary,
    pub class_words: &'a ClassWordSet,
    pub class_word_types: &'a ClassWordTypeMap,
    pub table_rules: TableNameRules,
    /// Free text forwarded to the correction advisor.
    pub domain_rules: &'a str,
}

impl<'a> ValidationContext<'a> {
    pub fn new(
        abbreviations: &'a AbbreviationDictionary,
        class_words: &'a ClassWordSet,
        class_word_types: &'a ClassWordTypeMap,
    ) -> Self {
        Self {
            abbreviations,
            class_words,
            class_word_types,
            table_rules: TableNameRules::default(),
            domain_rules: "",
        }
    }

    #[must_use]
    pub fn with_table_rules(mut self, table_rules: TableNameRules) -> Self {
        self.table_rules = table_rules;
        self
    }

    #[must_use]
    pub fn with_domain_rules(mut self, domain_rules: &'a str) -> Self {
        self.domain_rules = domain_rules;
        self
    }
}

/// Outcome of the rule checks for one row, before any collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEvaluation {
    pub status: ValidationStatus,
    pub table_failure_reason: Option<String>,
    pub class_word: ClassWordCheck,
    /// Unapproved tokens not already reported as unrecognized abbreviations.
    pub missing_tokens: Vec<String>,
    pub unrecognized_abbreviations: Vec<String>,
    pub capitalization_diverges: bool,
}

impl RuleEvaluation {
    /// Column reasons without the capitalization note.
    pub fn column_reasons(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        if self.class_word.outcome == ClassWordOutcome::Mismatch {
            reasons.push(self.class_word.issue.clone());
        }
        if !self.missing_tokens.is_empty() {
            let labels: Vec<&str> = self
                .missing_tokens
                .iter()
                .map(|token| {
                    if token.is_empty() {
                        EMPTY_SEGMENT_LABEL
                    } else {
                        token.as_str()
                    }
                })
                .collect();
            reasons.push(format!(
                "Column name is missing or incorrect for: {}",
                labels.join(", ")
            ));
        }
        if !self.unrecognized_abbreviations.is_empty() {
            reasons.push(format!(
                "Unrecognized abbreviation(s): {} are not in the approved list.",
                self.unrecognized_abbreviations.join(", ")
            ));
        }
        reasons
    }

    /// All reasons in reporting order.
    pub fn reasons(&self) -> Vec<String> {
        let mut reasons = self.column_reasons();
        if self.capitalization_diverges {
            reasons.push(CAPITALIZATION_NOTE.to_string());
        }
        reasons
    }

    /// Semicolon-joined column reasons, as given to the correction advisor.
    pub fn column_failure_reason(&self) -> String {
        self.column_reasons().join("; ")
    }
}

/// Run the naming rules against one row.
pub fn evaluate_row(row: &DictionaryRow, context: &ValidationContext<'_>) -> RuleEvaluation {
    let table_failure_reason = context.table_rules.check(&row.table_name);

    let english_terms = tokenize_text(&row.english_name.to_uppercase());
    let approved = approved_terms(context.abbreviations, context.class_words, &english_terms);
    let column_tokens = tokenize(&row.column_name);
    let missing = missing_tokens(&column_tokens, &approved);
    let unrecognized = unrecognized_abbreviations(&column_tokens, &approved);

    let class_word = class_word::check(
        &row.column_name,
        &row.data_type,
        &row.english_name,
        context.class_word_types,
    );

    let capitalization_diverges =
        !row.english_name.trim().is_empty() && capitalization::diverges(&row.english_name);

    let failed = table_failure_reason.is_some()
        || class_word.outcome == ClassWordOutcome::Mismatch
        || !missing.is_empty();

    let missing_tokens = missing
        .into_iter()
        .filter(|token| !unrecognized.contains(token))
        .collect();

    RuleEvaluation {
        status: if failed {
            ValidationStatus::Fail
        } else {
            ValidationStatus::Pass
        },
        table_failure_reason,
        class_word,
        missing_tokens,
        unrecognized_abbreviations: unrecognized,
        capitalization_diverges,
    }
}

/// Advisor guidance listing table abbreviations absent from the column name.
pub fn abbreviation_guidance(
    table_name: &str,
    column_name: &str,
    abbreviations: &AbbreviationDictionary,
) -> Option<String> {
    let missing = abbreviations_missing_from_column(table_name, column_name, abbreviations);
    if missing.is_empty() {
        return None;
    }
    Some(format!(
        "The table name '{table_name}' contains abbreviation(s) {}, but the column name '{column_name}' does not include them. Restore them in the column name where it makes sense.",
        missing.join(", ")
    ))
}

/// Validates dictionary rows and assembles verdicts.
pub struct NamingConventionEngine<'a> {
    context: ValidationContext<'a>,
    advisor: &'a dyn CorrectionAdvisor,
    samples: SampleSynthesizer<'a>,
}

impl<'a> NamingConventionEngine<'a> {
    pub fn new(
        context: ValidationContext<'a>,
        advisor: &'a dyn CorrectionAdvisor,
        samples: SampleSynthesizer<'a>,
    ) -> Self {
        Self {
            context,
            advisor,
            samples,
        }
    }

    pub fn context(&self) -> &ValidationContext<'a> {
        &self.context
    }

    pub fn evaluate(&self, row: &DictionaryRow) -> RuleEvaluation {
        evaluate_row(row, &self.context)
    }

    /// Produce the verdict for one row. Collaborator failures degrade to
    /// local defaults and are recorded on the verdict.
    pub fn validate<R: Rng + ?Sized>(&self, row: &DictionaryRow, rng: &mut R) -> Verdict {
        let span = info_span!("row", table = %row.table_name, column = %row.column_name);
        let _row_guard = span.enter();

        let evaluation = self.evaluate(row);
        let reasons = evaluation.reasons();
        debug!(status = %evaluation.status, reasons = reasons.len(), "rules evaluated");

        let mut suggested_table_name = String::new();
        let mut suggested_column_name = String::new();
        let mut additional_notes = NO_CORRECTIONS_NOTE.to_string();
        let mut advisor_error = None;

        if evaluation.status == ValidationStatus::Fail {
            let request = CorrectionRequest {
                table_name: row.table_name.clone(),
                column_name: row.column_name.clone(),
                english_name: row.english_name.clone(),
                table_failure_reason: evaluation.table_failure_reason.clone().unwrap_or_default(),
                column_failure_reason: evaluation.column_failure_reason(),
                domain_rules: self.context.domain_rules.to_string(),
                abbreviation_guidance: abbreviation_guidance(
                    &row.table_name,
                    &row.column_name,
                    self.context.abbreviations,
                ),
            };
            match self.advisor.suggest(&request) {
                Ok(suggestion) => {
                    suggested_table_name = non_empty_or(suggestion.suggested_table_name, &row.table_name);
                    suggested_column_name =
                        non_empty_or(suggestion.suggested_column_name, &row.column_name);
                    additional_notes =
                        non_empty_or(suggestion.additional_notes, ADVISOR_UNAVAILABLE_NOTE);
                }
                Err(error) => {
                    warn!(%error, "correction advisor failed");
                    suggested_table_name = row.table_name.clone();
                    suggested_column_name = row.column_name.clone();
                    additional_notes = ADVISOR_UNAVAILABLE_NOTE.to_string();
                    advisor_error = Some(error.to_string());
                }
            }
        }

        let samples = self.samples.synthesize(&SampleInput::from_row(row), rng);

        let notes = compose_notes(&evaluation, &reasons);

        Verdict {
            table_name: row.table_name.clone(),
            column_name: row.column_name.clone(),
            english_name: row.english_name.clone(),
            data_type: row.data_type.clone(),
            precision: row.precision,
            scale: row.scale,
            status: evaluation.status,
            table_failure_reason: evaluation.table_failure_reason,
            suggested_class_word: evaluation.class_word.suggested_class_word,
            reasons,
            notes,
            suggested_table_name,
            suggested_column_name,
            additional_notes,
            advisor_error,
            corrected_description: row.description.clone(),
            samples,
        }
    }

    /// Validate rows in input order.
    pub fn validate_rows<R: Rng + ?Sized>(&self, rows: &[DictionaryRow], rng: &mut R) -> Vec<Verdict> {
        self.validate_rows_with(rows, rng, |_| {})
    }

    /// Validate rows in input order, calling `on_verdict` after each row.
    pub fn validate_rows_with<R, F>(
        &self,
        rows: &[DictionaryRow],
        rng: &mut R,
        mut on_verdict: F,
    ) -> Vec<Verdict>
    where
        R: Rng + ?Sized,
        F: FnMut(&Verdict),
    {
        let span = info_span!("validate", rows = rows.len());
        let _validate_guard = span.enter();
        rows.iter()
            .map(|row| {
                let verdict = self.validate(row, rng);
                on_verdict(&verdict);
                verdict
            })
            .collect()
    }
}

/// `Valid` on a clean pass; otherwise the column reasons, or the table
/// reason when no column rule fired, followed by the capitalization note.
fn compose_notes(evaluation: &RuleEvaluation, reasons: &[String]) -> String {
    if evaluation.status == ValidationStatus::Pass && reasons.is_empty() {
        return VALID_NOTE.to_string();
    }
    if !evaluation.column_reasons().is_empty() {
        return reasons.join("; ");
    }
    evaluation
        .table_failure_reason
        .iter()
        .chain(reasons)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("; ")
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
