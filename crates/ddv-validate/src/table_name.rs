use serde::{Deserialize, Serialize};

/// Shape rules for table names: a fixed prefix and a closed set of suffix tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableNameRules {
    pub prefix: String,
    pub suffixes: Vec<String>,
}

impl Default for TableNameRules {
    fn default() -> Self {
        Self {
            prefix: "T".to_string(),
            suffixes: ["FACT", "DIM", "STG", "RPTNG"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl TableNameRules {
    pub fn is_valid(&self, table_name: &str) -> bool {
        table_name.starts_with(self.prefix.as_str())
            && self
                .suffixes
                .iter()
                .any(|suffix| table_name.ends_with(suffix.as_str()))
    }

    pub fn failure_reason(&self) -> String {
        format!(
            "Table name must start with '{}' and end with one of {}.",
            self.prefix,
            self.suffixes.join(", ")
        )
    }

    /// Failure reason for `table_name`, or `None` when the shape is valid.
    pub fn check(&self, table_name: &str) -> Option<String> {
        if self.is_valid(table_name) {
            None
        } else {
            Some(self.failure_reason())
        }
    }
}
