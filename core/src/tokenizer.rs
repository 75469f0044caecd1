use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"[\s\x{feff}]+").expect("valid regex");
}

/// Combining diacritical marks block, dropped after decomposition.
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Normalize text into its comparison form: lowercase, NFKD, combining marks
/// removed, whitespace runs collapsed to one space, trimmed.
pub fn normalize(text: &str) -> String {
    // Compatibility decomposition can surface capitals (U+210C -> "H"), so
    // lowercase on both sides of it.
    let folded: String = text
        .to_lowercase()
        .nfkd()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    WHITESPACE.replace_all(&folded, " ").trim().to_string()
}

/// Same as [`normalize`], with absent text normalizing to the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Split a raw query into normalized, non-empty terms.
pub fn query_terms(query: &str) -> Vec<String> {
    normalize(query)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
