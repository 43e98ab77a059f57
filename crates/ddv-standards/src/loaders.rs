use std::path::Path;

use tracing::{debug, info, warn};

use ddv_model::{AbbreviationDictionary, ClassWordSet};

use crate::csv_utils::{get_field, read_csv_rows, require_column, write_csv_rows};
use crate::error::{Result, StandardsError};

pub const ABBREVIATION_NAME_COLUMN: &str = "NAME";
pub const ABBREVIATION_VALUE_COLUMN: &str = "ABBR";
pub const CLASS_WORD_COLUMN: &str = "CLASS WORD";

/// Load the abbreviation table (`NAME, ABBR`) keyed by `NAME`.
///
/// Rows with a blank name or a blank abbreviation are skipped. A duplicate
/// name keeps the last abbreviation seen.
pub fn load_abbreviations(path: &Path) -> Result<AbbreviationDictionary> {
    let sheet = read_csv_rows(path)?;
    require_column(&sheet, path, ABBREVIATION_NAME_COLUMN)?;
    require_column(&sheet, path, ABBREVIATION_VALUE_COLUMN)?;

    let mut dictionary = AbbreviationDictionary::new();
    for row in &sheet.rows {
        let name = get_field(row, ABBREVIATION_NAME_COLUMN);
        if name.is_empty() {
            continue;
        }
        let abbreviation = get_field(row, ABBREVIATION_VALUE_COLUMN);
        if abbreviation.is_empty() {
            warn!(name = %name, "abbreviation row without ABBR, skipping");
            continue;
        }
        if let Some(previous) = dictionary.insert(&name, &abbreviation) {
            warn!(
                name = %name,
                previous = %previous,
                abbreviation = %abbreviation,
                "duplicate abbreviation name, keeping last"
            );
        }
    }
    info!(
        path = %path.display(),
        entries = dictionary.len(),
        "loaded abbreviations"
    );
    Ok(dictionary)
}

/// Load the class-word list (`CLASS WORD` column).
pub fn load_class_words(path: &Path) -> Result<ClassWordSet> {
    let sheet = read_csv_rows(path)?;
    require_column(&sheet, path, CLASS_WORD_COLUMN)?;

    let class_words: ClassWordSet = sheet
        .rows
        .iter()
        .map(|row| get_field(row, CLASS_WORD_COLUMN))
        .collect();
    info!(
        path = %path.display(),
        entries = class_words.len(),
        "loaded class words"
    );
    Ok(class_words)
}

/// Load the free-text domain rules.
///
/// A missing file yields empty rules; any other read failure is an error.
pub fn load_domain_rules(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "loaded domain rules");
            Ok(text)
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "no domain rules file, using empty rules");
            Ok(String::new())
        }
        Err(error) => Err(StandardsError::io(path, error)),
    }
}

pub fn save_abbreviations(path: &Path, dictionary: &AbbreviationDictionary) -> Result<()> {
    ensure_parent(path)?;
    write_csv_rows(
        path,
        &[ABBREVIATION_NAME_COLUMN, ABBREVIATION_VALUE_COLUMN],
        dictionary.iter().map(|(name, abbr)| vec![name, abbr]),
    )
}

pub fn save_class_words(path: &Path, class_words: &ClassWordSet) -> Result<()> {
    ensure_parent(path)?;
    write_csv_rows(
        path,
        &[CLASS_WORD_COLUMN],
        class_words.iter().map(|code| vec![code]),
    )
}

pub fn save_domain_rules(path: &Path, text: &str) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, text).map_err(|source| StandardsError::write(path, source))
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|source| StandardsError::write(parent, source)),
        _ => Ok(()),
    }
}
