use super::builder::IndexBuilder;
use super::formatter::IndexFormatter;
use super::stopwords::StopWordSet;
use super::types::{Index, Page};
use crate::config::IndexerConfig;
use crate::error::Result;
use crate::io::loader::load_pages;
use crate::io::sink::write_report;
use std::path::Path;

/// Collects pages and stop words, builds the index and writes the report.
///
/// Every `build_index` call rebuilds from all pages added so far.
#[derive(Debug, Default)]
pub struct WordIndexer {
    pages: Vec<Page>,
    stop_words: StopWordSet,
    builder: IndexBuilder,
    formatter: IndexFormatter,
    index: Index,
}

impl WordIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_words(stop_words: StopWordSet) -> Self {
        Self {
            stop_words,
            ..Self::default()
        }
    }

    /// Loads the configured stop words and pages. Any loader failure aborts with no index.
    pub fn from_config(config: &IndexerConfig) -> Result<Self> {
        let stop_words = config.load_stop_words()?;
        let paths = config.page_paths()?;
        let pages = load_pages(&paths, config.malformed_pages)?;

        let mut indexer = Self::with_stop_words(stop_words);
        indexer.add_pages(pages);
        Ok(indexer)
    }

    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn add_pages<I: IntoIterator<Item = Page>>(&mut self, pages: I) {
        self.pages.extend(pages);
    }

    /// Stored as given: callers supply lowercase words.
    pub fn add_stop_word(&mut self, word: impl Into<String>) {
        self.stop_words.add(word);
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn build_index(&mut self) -> &Index {
        self.index = self.builder.build(&self.pages, &self.stop_words);
        &self.index
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Report lines for the most recently built index.
    pub fn lines(&self) -> Vec<String> {
        self.formatter.format(&self.index)
    }

    pub fn write_index_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        write_report(path, &self.lines())
    }
}
