use std::collections::HashSet;

/// Words excluded from the index.
///
/// Membership is exact and case-sensitive. Tokens reach `contains` already lowercased, so
/// the set must be seeded with lowercase words for filtering to take effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Adds newline-delimited entries, trimming each one and ignoring blank lines.
    pub fn extend_from_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let word = line.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_string());
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// A copy with every word lowercased. Words differing only in case collapse.
    pub fn to_lowercase(&self) -> StopWordSet {
        self.words.iter().map(|word| word.to_lowercase()).collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = StopWordSet::new();
        for word in iter {
            set.add(word);
        }
        set
    }
}
