//! Reference vocabularies: approved abbreviations, class words, and the
//! class-word to data-type compatibility table.
//!
//! All three are loaded once per session and are read-only while rows are
//! validated. Every term is trimmed and upper-cased on insertion so lookups
//! never need to care about the casing of the source file.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Normalize a reference term (trim + upper-case).
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Approved full-word term to abbreviation mapping, keyed by full term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbbreviationDictionary {
    entries: BTreeMap<String, String>,
}

impl AbbreviationDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a term, returning the previous abbreviation if the term was
    /// already present.
    pub fn insert(&mut self, name: &str, abbreviation: &str) -> Option<String> {
        self.entries
            .insert(normalize_term(name), normalize_term(abbreviation))
    }

    /// Abbreviation for a full term.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(&normalize_term(name)).map(String::as_str)
    }

    /// Full terms (dictionary keys).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Approved abbreviations (dictionary values).
    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// True if `token` is either a full term or an approved abbreviation.
    pub fn contains_term(&self, token: &str) -> bool {
        self.entries.contains_key(token) || self.entries.values().any(|abbr| abbr == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, abbr)| (name.as_str(), abbr.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: AsRef<str>, A: AsRef<str>> FromIterator<(N, A)> for AbbreviationDictionary {
    fn from_iter<I: IntoIterator<Item = (N, A)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (name, abbreviation) in iter {
            dictionary.insert(name.as_ref(), abbreviation.as_ref());
        }
        dictionary
    }
}

/// Set of approved class-word codes.
///
/// Independent of [`ClassWordTypeMap`]: a code may be approved here without
/// carrying any type constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassWordSet {
    codes: BTreeSet<String>,
}

impl ClassWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: &str) -> bool {
        let code = normalize_term(code);
        if code.is_empty() {
            return false;
        }
        self.codes.insert(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for code in iter {
            set.insert(code.as_ref());
        }
        set
    }
}

/// Class-word code to compatible data-type families.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassWordTypeMap {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl ClassWordTypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a static rule table.
    pub fn from_table(table: &[(&str, &[&str])]) -> Self {
        let mut map = Self::new();
        for (code, types) in table {
            map.insert(code, types.iter().copied());
        }
        map
    }

    /// Insert or replace the type set for a class word.
    pub fn insert<I, S>(&mut self, code: &str, types: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let types = types
            .into_iter()
            .map(|value| normalize_term(value.as_ref()))
            .filter(|value| !value.is_empty())
            .collect();
        self.entries.insert(normalize_term(code), types);
    }

    /// Overlay another map; entries in `other` replace existing codes.
    pub fn merge(&mut self, other: &ClassWordTypeMap) {
        for (code, types) in &other.entries {
            self.entries.insert(code.clone(), types.clone());
        }
    }

    pub fn expected_types(&self, code: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(code)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(code, types)| (code.as_str(), types))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
