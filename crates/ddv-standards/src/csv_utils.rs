//! Shared CSV utilities for reference vocabulary files.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{Result, StandardsError};

/// A reference CSV file with normalized headers and cells.
#[derive(Debug, Clone, Default)]
pub struct CsvSheet {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl CsvSheet {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }
}

/// Normalize a header: strip BOM, collapse inner whitespace, upper-case.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Normalize a reference cell (trim + upper-case).
pub fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_uppercase()
}

/// Read a reference CSV file into row maps keyed by normalized header.
///
/// Every string cell is trimmed and upper-cased. Fully blank rows are skipped.
pub fn read_csv_rows(path: &Path) -> Result<CsvSheet> {
    let file = File::open(path).map_err(|source| StandardsError::io(path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| StandardsError::csv(path, &error))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| StandardsError::csv(path, &error))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = BTreeMap::new();
        for (idx, value) in record.iter().enumerate() {
            let key = headers.get(idx).cloned().unwrap_or_default();
            row.insert(key, normalize_cell(value));
        }
        rows.push(row);
    }
    Ok(CsvSheet { headers, rows })
}

/// Require that `column` is present in `sheet`.
pub fn require_column(sheet: &CsvSheet, path: &Path, column: &str) -> Result<()> {
    if sheet.has_column(column) {
        Ok(())
    } else {
        Err(StandardsError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
    }
}

/// Get a field value from a row, returning empty string if not present.
pub fn get_field(row: &BTreeMap<String, String>, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}

/// Write a header and rows to a CSV file, replacing any existing content.
pub fn write_csv_rows<'a, I>(path: &Path, headers: &[&str], rows: I) -> Result<()>
where
    I: IntoIterator<Item = Vec<&'a str>>,
{
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|error| StandardsError::csv(path, &error))?;
    writer
        .write_record(headers)
        .map_err(|error| StandardsError::csv(path, &error))?;
    for row in rows {
        writer
            .write_record(&row)
            .map_err(|error| StandardsError::csv(path, &error))?;
    }
    writer
        .flush()
        .map_err(|source| StandardsError::write(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization() {
        assert_eq!(normalize_header("\u{feff}class  word "), "CLASS WORD");
        assert_eq!(normalize_header("Abbr"), "ABBR");
    }

    #[test]
    fn cell_normalization() {
        assert_eq!(normalize_cell("  ord "), "ORD");
        assert_eq!(normalize_cell(""), "");
    }
}
