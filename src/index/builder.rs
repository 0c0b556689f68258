use super::stopwords::StopWordSet;
use super::tokenizer::Tokenizer;
use super::types::{Index, Page};

/// Aggregates the tokens of every page into a word -> page-set `Index`.
///
/// Pure and in-memory: pages and stop words arrive already loaded and are only borrowed.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    tokenizer: Tokenizer,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one build pass over `pages` in the given order.
    ///
    /// The resulting content does not depend on page order.
    pub fn build<'a, I>(&self, pages: I, stop_words: &StopWordSet) -> Index
    where
        I: IntoIterator<Item = &'a Page>,
    {
        let mut index = Index::new();
        let mut page_count = 0usize;
        let mut occurrences = 0usize;

        for page in pages {
            page_count += 1;
            occurrences += self.index_page(&mut index, page, stop_words);
        }

        tracing::info!(
            "Built index: {} pages, {} occurrences, {} distinct words",
            page_count,
            occurrences,
            index.len()
        );
        index
    }

    /// Registers the non-stop-word tokens of one page. Returns how many were registered.
    fn index_page(&self, index: &mut Index, page: &Page, stop_words: &StopWordSet) -> usize {
        let mut registered = 0usize;

        for word in self.tokenizer.tokenize(page.content()) {
            if word.is_empty() || stop_words.contains(&word) {
                continue;
            }
            index.register(&word, page.page_number());
            registered += 1;
        }

        tracing::debug!(
            "Page {}: {} words registered",
            page.page_number(),
            registered
        );
        registered
    }
}

/// Builds an index with the default tokenizer.
pub fn build_index<'a, I>(pages: I, stop_words: &StopWordSet) -> Index
where
    I: IntoIterator<Item = &'a Page>,
{
    IndexBuilder::new().build(pages, stop_words)
}
