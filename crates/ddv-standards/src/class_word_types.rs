//! Built-in class-word to data-type compatibility table.

use ddv_model::ClassWordTypeMap;

/// Class word code and the data-type families it accepts.
pub const DEFAULT_CLASS_WORD_TYPES: &[(&str, &[&str])] = &[
    ("TXT", &["VARCHAR", "VARCHAR2", "TEXT"]),
    ("NAM", &["VARCHAR", "VARCHAR2", "TEXT"]),
    ("CDE", &["INT", "BIGINT", "VARCHAR", "VARCHAR2", "NUMBER"]),
    ("DTE", &["DATE", "DATETIME", "TIMESTAMP"]),
    ("TME", &["TIME", "DATETIME", "TIMESTAMP"]),
    ("IDN", &["INT", "BIGINT", "NUMBER"]),
    ("NBR", &["INT", "BIGINT", "NUMBER"]),
    ("AMT", &["DECIMAL", "FLOAT", "NUMERIC", "NUMBER"]),
    ("CNT", &["INT", "BIGINT", "NUMBER"]),
    ("IND", &["BOOLEAN", "CHAR", "VARCHAR", "VARCHAR2"]),
];

pub fn default_class_word_type_map() -> ClassWordTypeMap {
    ClassWordTypeMap::from_table(DEFAULT_CLASS_WORD_TYPES)
}
