use std::fs;
use std::path::{Path, PathBuf};

use ddv_model::{AbbreviationDictionary, ClassWordSet, ClassWordTypeMap};
use ddv_standards::{
    ReferenceData, StandardsError, StandardsPaths, load_abbreviations, load_class_words,
    load_domain_rules, save_abbreviations, save_class_words, save_domain_rules,
};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn loads_abbreviations_trimmed_and_upper_cased() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(
        dir.path(),
        "abbreviations.csv",
        "\u{feff}Name,Abbr\n order ,ord\nSales,SLS\n,\n",
    );
    let dictionary = load_abbreviations(&path).expect("load abbreviations");
    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.get("ORDER"), Some("ORD"));
    assert_eq!(dictionary.get("SALES"), Some("SLS"));
}

#[test]
fn blank_abbreviation_values_are_skipped() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(dir.path(), "abbreviations.csv", "NAME,ABBR\nORDER,ORD\nNOTE,\n");
    let dictionary = load_abbreviations(&path).expect("load abbreviations");
    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary.get("NOTE"), None);
    assert!(!dictionary.contains_term(""));
}

#[test]
fn abbreviations_require_both_columns() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(dir.path(), "abbreviations.csv", "NAME,SHORT\nORDER,ORD\n");
    let error = load_abbreviations(&path).expect_err("missing ABBR column");
    match error {
        StandardsError::MissingColumn { column, .. } => assert_eq!(column, "ABBR"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let error = load_class_words(&dir.path().join("nope.csv")).expect_err("missing file");
    assert!(matches!(error, StandardsError::Io { .. }));
}

#[test]
fn loads_class_words() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(
        dir.path(),
        "class_words.csv",
        "CLASS WORD,DESCRIPTION\ndte,Date\nAMT ,Amount\n",
    );
    let class_words = load_class_words(&path).expect("load class words");
    assert_eq!(class_words.iter().collect::<Vec<_>>(), vec!["AMT", "DTE"]);
}

#[test]
fn missing_domain_rules_are_empty() {
    let dir = TempDir::new().expect("tempdir");
    let rules = load_domain_rules(&dir.path().join("domain_rules.txt")).expect("rules");
    assert!(rules.is_empty());
}

#[test]
fn saved_reference_data_loads_back() {
    let dir = TempDir::new().expect("tempdir");
    let paths = StandardsPaths::from_root(&dir.path().join("standards"));

    let abbreviations: AbbreviationDictionary =
        [("ORDER", "ORD"), ("SALES", "SLS")].into_iter().collect();
    let class_words: ClassWordSet = ["DTE", "AMT"].into_iter().collect();
    save_abbreviations(&paths.abbreviations, &abbreviations).expect("save abbreviations");
    save_class_words(&paths.class_words, &class_words).expect("save class words");
    save_domain_rules(&paths.domain_rules, "Tables end with FACT or DIM.\n").expect("save rules");

    let mut overrides = ClassWordTypeMap::new();
    overrides.insert("FLG", ["BOOLEAN"]);
    let reference = ReferenceData::load(&paths, &overrides).expect("load reference data");

    assert_eq!(reference.abbreviations, abbreviations);
    assert_eq!(reference.class_words, class_words);
    assert_eq!(reference.domain_rules, "Tables end with FACT or DIM.\n");
    assert!(reference.class_word_types.contains_code("FLG"));
    assert!(reference.class_word_types.contains_code("DTE"));
}
