//! Identifier and free-text tokenization.
//!
//! Tokens are collected into an ordered set: duplicates collapse and
//! iteration order is stable for a given input.

use std::collections::BTreeSet;

/// Delimiter between identifier parts.
pub const IDENTIFIER_DELIMITER: char = '_';

pub type TokenSet = BTreeSet<String>;

/// Split an identifier on underscores.
///
/// An empty identifier yields an empty set. Empty segments inside a
/// non-empty identifier (`ORD__DTE`, trailing `_`) are kept as the empty
/// token so they surface as unapproved parts.
pub fn tokenize(identifier: &str) -> TokenSet {
    if identifier.is_empty() {
        return TokenSet::new();
    }
    identifier
        .split(IDENTIFIER_DELIMITER)
        .map(str::to_string)
        .collect()
}

/// Split free text on whitespace.
pub fn tokenize_text(phrase: &str) -> TokenSet {
    phrase.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_parts_collapse() {
        let tokens = tokenize("ORD_AMT_ORD_1");
        assert_eq!(tokens.iter().collect::<Vec<_>>(), vec!["1", "AMT", "ORD"]);
    }

    #[test]
    fn empty_identifier_is_empty_set() {
        assert!(tokenize("").is_empty());
        assert!(tokenize_text("   ").is_empty());
    }

    #[test]
    fn doubled_delimiter_yields_empty_token() {
        assert!(tokenize("ORD__DTE").contains(""));
    }

    #[test]
    fn text_splits_on_any_whitespace() {
        let tokens = tokenize_text("ORDER\tDATE  ORDER");
        assert_eq!(tokens.len(), 2);
    }
}
