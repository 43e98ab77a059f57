//! Naming-convention rules for data dictionary rows.
//!
//! The crate is pure: reference vocabularies are passed in through a
//! [`ValidationContext`], and the only outside calls go through the
//! collaborator traits from `ddv-model`.

pub mod capitalization;
pub mod class_word;
pub mod engine;
pub mod samples;
pub mod table_name;
pub mod tokenize;
pub mod vocabulary;

pub use capitalization::{CAPITALIZATION_NOTE, STOPWORDS, canonicalize, diverges};
pub use class_word::{
    CLASS_WORD_FALLBACKS, ClassWordCheck, ClassWordOutcome, class_word_candidates,
    fallback_class_word,
};
pub use engine::{
    ADVISOR_UNAVAILABLE_NOTE, NamingConventionEngine, RuleEvaluation, ValidationContext,
    abbreviation_guidance, evaluate_row,
};
pub use samples::{
    SAMPLE_KEYWORD_RULES, SAMPLE_TYPE_RULES, SampleInput, SampleKind, SampleSynthesizer, classify,
};
pub use table_name::TableNameRules;
pub use tokenize::{TokenSet, tokenize, tokenize_text};
pub use vocabulary::{
    abbreviations_missing_from_column, approved_terms, is_numeric_token, missing_tokens,
    unrecognized_abbreviations,
};
