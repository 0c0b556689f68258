use regex::Regex;
use std::sync::LazyLock;

/// A maximal run of anything that is not an ASCII letter, ASCII digit or apostrophe.
static DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9']+").expect("delimiter pattern is valid"));

/// Splits page text into candidate index words.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer
    }

    /// Lowercases `text` and splits it on delimiter runs, dropping empty pieces.
    ///
    /// Order of occurrence is preserved and repeated words are kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize_page(text)
    }
}

pub fn tokenize_page(text: &str) -> Vec<String> {
    DELIMITER
        .split(&text.to_lowercase())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_string())
        .collect()
}
