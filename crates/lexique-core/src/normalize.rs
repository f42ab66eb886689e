use lexique_types::types::capitalize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Comparison key for a headword: trimmed, lowercased, diacritics stripped.
///
/// Total and idempotent. "École", "ecole" and " ÉCOLE " all map to "ecole".
pub fn normalize(word: &str) -> String {
    word.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Key of `word` once capitalized for display, which is how it gets stored.
///
/// Differs from [`normalize`] only where uppercasing the first letter
/// expands it, as with "ß" becoming "SS".
pub fn headword_key(word: &str) -> String {
    normalize(&capitalize(word.trim()))
}
