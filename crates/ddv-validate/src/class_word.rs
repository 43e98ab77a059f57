//! Class-word / data-type compatibility.
//!
//! The class word is resolved from the column name: the first three
//! characters are tried first, then the last three. The first candidate that
//! has an entry in the [`ClassWordTypeMap`] decides the check. When neither
//! candidate is known the row is unconstrained and passes; unknown parts are
//! still caught by the vocabulary check.
//!
//! The suggested replacement on mismatch is a deliberately coarse fallback
//! (see [`CLASS_WORD_FALLBACKS`]), not type inference.

use ddv_model::{ClassWordTypeMap, ValidationStatus, data_type_family};

/// Length of a class-word code.
pub const CLASS_WORD_LEN: usize = 3;

/// English-name keyword to suggested class word, first match wins.
pub const CLASS_WORD_FALLBACKS: &[(&str, &str)] = &[("text", "TXT")];

/// Suggestion used when no fallback keyword matches.
pub const DEFAULT_FALLBACK_CLASS_WORD: &str = "IND";

const VALID_ISSUE: &str = "Valid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassWordOutcome {
    /// Data type is in the class word's expected set.
    Compatible,
    /// Data type is outside the class word's expected set.
    Mismatch,
    /// No candidate class word has a type constraint.
    Unconstrained,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassWordCheck {
    pub status: ValidationStatus,
    pub outcome: ClassWordOutcome,
    /// Resolved class word, or the prefix candidate when unconstrained.
    pub class_word: String,
    pub issue: String,
    /// Empty unless the check failed.
    pub suggested_class_word: String,
}

/// Prefix then suffix candidates, deduplicated.
pub fn class_word_candidates(column_name: &str) -> Vec<String> {
    let chars: Vec<char> = column_name.chars().collect();
    let prefix: String = chars.iter().take(CLASS_WORD_LEN).collect();
    let suffix: String = chars[chars.len().saturating_sub(CLASS_WORD_LEN)..]
        .iter()
        .collect();
    if prefix == suffix {
        vec![prefix]
    } else {
        vec![prefix, suffix]
    }
}

/// Suggested class word for a mismatch, from the English name.
pub fn fallback_class_word(english_name: &str) -> &'static str {
    let lowered = english_name.to_lowercase();
    CLASS_WORD_FALLBACKS
        .iter()
        .find(|(keyword, _)| lowered.contains(*keyword))
        .map_or(DEFAULT_FALLBACK_CLASS_WORD, |(_, code)| *code)
}

/// Check the column's class word against its data type.
pub fn check(
    column_name: &str,
    data_type: &str,
    english_name: &str,
    class_word_types: &ClassWordTypeMap,
) -> ClassWordCheck {
    let candidates = class_word_candidates(column_name);
    let resolved = candidates.iter().find_map(|candidate| {
        class_word_types
            .expected_types(candidate)
            .map(|types| (candidate, types))
    });

    let Some((class_word, expected)) = resolved else {
        let prefix = candidates.into_iter().next().unwrap_or_default();
        return ClassWordCheck {
            status: ValidationStatus::Pass,
            outcome: ClassWordOutcome::Unconstrained,
            issue: format!("No type constraint known for class word '{prefix}'."),
            class_word: prefix,
            suggested_class_word: String::new(),
        };
    };

    let family = data_type_family(data_type);
    if expected.contains(&family) {
        return ClassWordCheck {
            status: ValidationStatus::Pass,
            outcome: ClassWordOutcome::Compatible,
            class_word: class_word.clone(),
            issue: VALID_ISSUE.to_string(),
            suggested_class_word: String::new(),
        };
    }

    ClassWordCheck {
        status: ValidationStatus::Fail,
        outcome: ClassWordOutcome::Mismatch,
        class_word: class_word.clone(),
        issue: format!("Class word '{class_word}' does not match expected data type '{data_type}'."),
        suggested_class_word: fallback_class_word(english_name).to_string(),
    }
}
