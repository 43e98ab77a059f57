//! Data-dictionary CSV ingestion.
//!
//! Rows are returned in file order. Malformed cells are coerced rather than
//! rejected; rows that cannot form a [`DictionaryRow`] are reported as
//! [`IngestIssue`]s and skipped so the rest of the batch still loads.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use ddv_model::DictionaryRow;

use crate::coerce::coerce_dimension;
use crate::error::{IngestError, Result};

pub const TABLE_NAME_COLUMN: &str = "Table Name";
pub const COLUMN_NAME_COLUMN: &str = "Column Name";
pub const ENGLISH_NAME_COLUMN: &str = "English Name";
pub const DATA_TYPE_COLUMN: &str = "Data Type";
pub const PRECISION_COLUMN: &str = "Precision";
pub const SCALE_COLUMN: &str = "Scale";
pub const DESCRIPTION_COLUMN: &str = "Description/Business Rules";

/// Columns that must be present in the header.
pub const REQUIRED_COLUMNS: &[&str] = &[
    TABLE_NAME_COLUMN,
    COLUMN_NAME_COLUMN,
    ENGLISH_NAME_COLUMN,
    DATA_TYPE_COLUMN,
];

/// Columns that default when absent (0, 0, empty).
pub const OPTIONAL_COLUMNS: &[&str] = &[PRECISION_COLUMN, SCALE_COLUMN, DESCRIPTION_COLUMN];

/// A row-level problem found while loading. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestIssue {
    /// 1-based data line number (header excluded).
    pub line: usize,
    pub message: String,
}

/// Loaded dictionary rows plus any row-level issues.
#[derive(Debug, Clone, Default)]
pub struct DictionaryTable {
    pub rows: Vec<DictionaryRow>,
    pub issues: Vec<IngestIssue>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Header positions resolved case-insensitively.
struct ColumnIndex {
    table: usize,
    column: usize,
    english: usize,
    data_type: usize,
    precision: Option<usize>,
    scale: Option<usize>,
    description: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &[String], source: &Path) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let require = |name: &str| {
            find(name).ok_or_else(|| IngestError::MissingColumn {
                path: source.to_path_buf(),
                column: name.to_string(),
            })
        };
        Ok(Self {
            table: require(TABLE_NAME_COLUMN)?,
            column: require(COLUMN_NAME_COLUMN)?,
            english: require(ENGLISH_NAME_COLUMN)?,
            data_type: require(DATA_TYPE_COLUMN)?,
            precision: find(PRECISION_COLUMN),
            scale: find(SCALE_COLUMN),
            description: find(DESCRIPTION_COLUMN),
        })
    }
}

/// Read a data-dictionary CSV file.
pub fn read_dictionary(path: &Path) -> Result<DictionaryTable> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_dictionary(file, path)?;
    info!(
        path = %path.display(),
        rows = table.rows.len(),
        issues = table.issues.len(),
        "loaded data dictionary"
    );
    Ok(table)
}

/// Parse a data dictionary from any reader. `source` is used in errors.
pub fn parse_dictionary<R: Read>(reader: R, source: &Path) -> Result<DictionaryTable> {
    let csv_error = |error: csv::Error| IngestError::Csv {
        path: source.to_path_buf(),
        message: error.to_string(),
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(csv_error)?
        .iter()
        .map(|header| normalize_header(&String::from_utf8_lossy(header)))
        .collect();
    let index = ColumnIndex::resolve(&headers, source)?;

    let mut table = DictionaryTable::default();
    for (offset, record) in reader.byte_records().enumerate() {
        let line = offset + 1;
        let record = match record {
            Ok(record) => record,
            Err(error) if error.is_io_error() => return Err(csv_error(error)),
            Err(error) => {
                warn!(line, %error, "skipping unreadable dictionary row");
                table.issues.push(IngestIssue {
                    line,
                    message: error.to_string(),
                });
                continue;
            }
        };
        let record = match StringRecord::from_byte_record(record) {
            Ok(record) => record,
            Err(error) => {
                warn!(line, error = %error.utf8_error(), "replaced invalid UTF-8 in dictionary row");
                table.issues.push(IngestIssue {
                    line,
                    message: format!("invalid UTF-8 replaced: {}", error.utf8_error()),
                });
                StringRecord::from_byte_record_lossy(error.into_byte_record())
            }
        };
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map_or("", normalize_cell);

        let table_name = cell(Some(index.table));
        let column_name = cell(Some(index.column));
        if table_name.is_empty() && column_name.is_empty() {
            debug!(line, "skipping blank dictionary row");
            continue;
        }
        let row = match DictionaryRow::new(table_name, column_name) {
            Ok(row) => row,
            Err(error) => {
                warn!(line, %error, "skipping dictionary row");
                table.issues.push(IngestIssue {
                    line,
                    message: error.to_string(),
                });
                continue;
            }
        };

        let precision = coerce_dimension(cell(index.precision));
        let scale = coerce_dimension(cell(index.scale));
        for (field, note) in [("precision", &precision.note), ("scale", &scale.note)] {
            if let Some(note) = note {
                warn!(line, field, note = %note, "coerced dictionary cell");
                table.issues.push(IngestIssue {
                    line,
                    message: format!("{field}: {note}"),
                });
            }
        }

        table.rows.push(
            row.with_english_name(cell(Some(index.english)))
                .with_data_type(cell(Some(index.data_type)))
                .with_precision_scale(precision.value, scale.value)
                .with_description(cell(index.description)),
        );
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_whitespace_is_collapsed() {
        assert_eq!(normalize_header("\u{feff} Table   Name "), "Table Name");
    }
}
