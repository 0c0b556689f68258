use super::types::{Index, IndexEntry};

/// Separator between a word and its page list.
pub const WORD_SEPARATOR: &str = " : ";
/// Separator between page numbers.
pub const PAGE_SEPARATOR: &str = ",";

/// Renders an `Index` into its canonical report lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexFormatter;

impl IndexFormatter {
    pub fn new() -> Self {
        IndexFormatter
    }

    /// One line per entry, ordered by word (code-point order, ascending).
    pub fn format(&self, index: &Index) -> Vec<String> {
        let mut entries: Vec<&IndexEntry> = index.iter().collect();
        entries.sort_by(|a, b| a.word().cmp(b.word()));

        entries.into_iter().map(|entry| self.format_entry(entry)).collect()
    }

    /// `<word> : <p1>,<p2>,...,<pN>` with pages ascending.
    pub fn format_entry(&self, entry: &IndexEntry) -> String {
        let pages = entry
            .sorted_pages()
            .iter()
            .map(|page| page.to_string())
            .collect::<Vec<_>>()
            .join(PAGE_SEPARATOR);

        format!("{}{}{}", entry.word(), WORD_SEPARATOR, pages)
    }
}

pub fn format_index(index: &Index) -> Vec<String> {
    IndexFormatter::new().format(index)
}
