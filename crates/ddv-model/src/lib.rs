pub mod collaborator;
pub mod error;
pub mod row;
pub mod verdict;
pub mod vocabulary;

pub use collaborator::{
    AdvisorError, CorrectionAdvisor, CorrectionRequest, CorrectionSuggestion, SampleGenerator,
    SampleRequest, SampleValues, error_placeholder,
};
pub use error::{ModelError, Result};
pub use row::{DictionaryRow, data_type_family};
pub use verdict::{NO_CORRECTIONS_NOTE, VALID_NOTE, ValidationStatus, ValidationSummary, Verdict};
pub use vocabulary::{AbbreviationDictionary, ClassWordSet, ClassWordTypeMap, normalize_term};
