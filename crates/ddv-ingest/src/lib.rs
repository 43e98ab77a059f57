pub mod coerce;
pub mod dictionary;
pub mod error;

pub use coerce::{Coerced, coerce_dimension};
pub use dictionary::{
    DictionaryTable, IngestIssue, OPTIONAL_COLUMNS, REQUIRED_COLUMNS, parse_dictionary,
    read_dictionary,
};
pub use error::{IngestError, Result};
