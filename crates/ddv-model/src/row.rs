use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One data-dictionary record under validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryRow {
    /// Table name, trimmed and upper-cased.
    pub table_name: String,
    /// Column name, trimmed and upper-cased.
    pub column_name: String,
    /// Free-text English name, trimmed but case-preserving.
    pub english_name: String,
    /// Data type as supplied (upper-cased). Open vocabulary.
    pub data_type: String,
    pub precision: u32,
    pub scale: u32,
    /// Description/business rules text.
    pub description: String,
}

impl DictionaryRow {
    /// Create a row from table and column names.
    ///
    /// Both names are normalized and must be non-empty afterwards.
    pub fn new(table_name: &str, column_name: &str) -> Result<Self> {
        let table_name = table_name.trim().to_uppercase();
        if table_name.is_empty() {
            return Err(ModelError::EmptyField {
                field: "table name",
            });
        }
        let column_name = column_name.trim().to_uppercase();
        if column_name.is_empty() {
            return Err(ModelError::EmptyField {
                field: "column name",
            });
        }
        Ok(Self {
            table_name,
            column_name,
            english_name: String::new(),
            data_type: String::new(),
            precision: 0,
            scale: 0,
            description: String::new(),
        })
    }

    #[must_use]
    pub fn with_english_name(mut self, english_name: &str) -> Self {
        self.english_name = english_name.trim().to_string();
        self
    }

    #[must_use]
    pub fn with_data_type(mut self, data_type: &str) -> Self {
        self.data_type = data_type.trim().to_uppercase();
        self
    }

    #[must_use]
    pub fn with_precision_scale(mut self, precision: u32, scale: u32) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    /// Data type family used for compatibility checks.
    pub fn data_type_family(&self) -> String {
        data_type_family(&self.data_type)
    }
}

/// Reduce a raw data type to its family name.
///
/// `varchar2(50)` becomes `VARCHAR2`; unknown names pass through upper-cased.
pub fn data_type_family(raw: &str) -> String {
    let head = raw.split('(').next().unwrap_or("");
    head.trim().to_uppercase()
}
