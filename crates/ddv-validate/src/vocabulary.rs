//! Approved-term index built from the reference vocabularies.

use ddv_model::{AbbreviationDictionary, ClassWordSet};

use crate::tokenize::{TokenSet, tokenize};

/// Union of abbreviation names, abbreviation values, class words, and the
/// row's own English-name tokens. The empty term is never approved, so empty
/// segments always surface as missing.
pub fn approved_terms(
    abbreviations: &AbbreviationDictionary,
    class_words: &ClassWordSet,
    english_terms: &TokenSet,
) -> TokenSet {
    abbreviations
        .names()
        .chain(abbreviations.abbreviations())
        .chain(class_words.iter())
        .map(str::to_string)
        .chain(english_terms.iter().cloned())
        .filter(|term| !term.is_empty())
        .collect()
}

/// True iff the token is non-empty and made only of decimal digits.
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|ch| ch.is_ascii_digit())
}

/// Tokens that are neither approved nor numeric, in token-set order.
pub fn missing_tokens(tokens: &TokenSet, approved: &TokenSet) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| !approved.contains(*token) && !is_numeric_token(token))
        .cloned()
        .collect()
}

/// Non-empty unapproved tokens, reported as abbreviations outside the
/// approved list. Empty segments from doubled delimiters are left to
/// [`missing_tokens`].
pub fn unrecognized_abbreviations(tokens: &TokenSet, approved: &TokenSet) -> Vec<String> {
    missing_tokens(tokens, approved)
        .into_iter()
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parts of `table_name` that are approved abbreviation terms but do not
/// appear in `column_name`.
pub fn abbreviations_missing_from_column(
    table_name: &str,
    column_name: &str,
    abbreviations: &AbbreviationDictionary,
) -> Vec<String> {
    let column_tokens = tokenize(column_name);
    tokenize(table_name)
        .into_iter()
        .filter(|token| abbreviations.contains_term(token) && !column_tokens.contains(token))
        .collect()
}
