//! Index Data Types
//!
//! Defines the input unit (`Page`) and the aggregated result (`Index` of `IndexEntry` records)
//! produced by a build pass.

use std::collections::hash_map;
use std::collections::{HashMap, HashSet};

/// One numbered page of input text.
///
/// Immutable once constructed. The builder only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    page_number: u32,
    content: String,
}

impl Page {
    /// Page numbers are positive. Callers deriving them from untrusted input must reject
    /// zero first; `io::loader::page_number_from_path` does.
    ///
    /// # Panics
    /// In debug builds, if `page_number` is zero.
    pub fn new(page_number: u32, content: impl Into<String>) -> Self {
        debug_assert!(page_number > 0, "page numbers start at 1");
        Self {
            page_number,
            content: content.into(),
        }
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The record for one indexed word: every page it appears on.
///
/// The page set only ever grows. Registering a page twice is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    word: String,
    pages: HashSet<u32>,
}

impl IndexEntry {
    /// Creates an entry whose page set is the singleton `{page_number}`.
    pub fn new(word: impl Into<String>, page_number: u32) -> Self {
        let mut pages = HashSet::new();
        pages.insert(page_number);
        Self {
            word: word.into(),
            pages,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn pages(&self) -> &HashSet<u32> {
        &self.pages
    }

    /// Returns `true` if the page was not already recorded.
    pub fn add_page(&mut self, page_number: u32) -> bool {
        self.pages.insert(page_number)
    }

    /// Page numbers in ascending order.
    pub fn sorted_pages(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self.pages.iter().copied().collect();
        pages.sort_unstable();
        pages
    }
}

/// Mapping from lowercase word to its `IndexEntry`.
///
/// Created empty, filled by one build pass, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    entries: HashMap<String, IndexEntry>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an occurrence of `word` on `page_number`.
    ///
    /// Creates the entry on first sight, otherwise unions the page into the existing set.
    pub fn register(&mut self, word: &str, page_number: u32) {
        match self.entries.get_mut(word) {
            Some(entry) => {
                entry.add_page(page_number);
            }
            None => {
                self.entries
                    .insert(word.to_string(), IndexEntry::new(word, page_number));
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&IndexEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order. Use `IndexFormatter` for the canonical ordering.
    pub fn iter(&self) -> hash_map::Values<'_, String, IndexEntry> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a IndexEntry;
    type IntoIter = hash_map::Values<'a, String, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
