//! English-name capitalization: title case with a stopword exception list.

/// Words kept lower-case unless they open the phrase.
pub const STOPWORDS: &[&str] = &[
    "in", "of", "the", "and", "to", "for", "with", "at", "by", "from", "on", "or",
];

/// Note appended to a row's reasons when the English name diverges.
pub const CAPITALIZATION_NOTE: &str = "Capitalization issue in English Name.";

/// Upper-case the first character and lower-case the rest.
///
/// A first character whose upper-case form expands to several characters is
/// kept as is so the transformation stays idempotent.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    let mut capitalized = String::with_capacity(word.len());
    capitalized.push(head);
    for ch in chars {
        capitalized.extend(ch.to_lowercase());
    }
    capitalized
}

fn lowercase_word(word: &str) -> String {
    word.chars().flat_map(char::to_lowercase).collect()
}

fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Canonical capitalization of an English name.
///
/// Words are split on whitespace and re-joined with single spaces. The first
/// word is always capitalized; later stopwords are lower-cased; every other
/// word is capitalized.
pub fn canonicalize(name: &str) -> String {
    name.split_whitespace()
        .enumerate()
        .map(|(idx, word)| {
            let capitalized = capitalize_word(word);
            let lowered = lowercase_word(&capitalized);
            if idx > 0 && is_stopword(&lowered) {
                lowered
            } else {
                capitalized
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when `name` differs from its canonical form (exact comparison).
pub fn diverges(name: &str) -> bool {
    canonicalize(name) != name
}
