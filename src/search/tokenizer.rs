use regex::Regex;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[a-z0-9]+").unwrap())
}

/// Trims and lowercases a raw query. Returns `None` when nothing remains,
/// which the engine treats as an invalid query before any indexing happens.
pub fn normalize_query(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Splits text into lowercase alphanumeric tokens, preserving order and
/// duplicates. Punctuation and underscores act as separators.
pub fn tokenize(text: &str) -> Vec<String> {
    word_pattern()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}
