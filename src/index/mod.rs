//! Indexing Core Module
//!
//! Turns numbered pages of text into a back-of-book index.
//!
//! ## Pipeline
//! 1. **Tokenize**: Page content is lowercased and split on runs of anything other than
//!    ASCII letters, digits and the apostrophe.
//! 2. **Filter**: Tokens found in the `StopWordSet` are dropped.
//! 3. **Aggregate**: Each remaining token is registered against the page number, with
//!    set-union semantics per word.
//! 4. **Format**: Entries are sorted by word, pages ascending, and rendered as
//!    `<word> : <p1>,<p2>,...`.
//!
//! Nothing in this module performs I/O. Loading pages and stop words and writing the report
//! live in `crate::io`.
//!
//! ## Submodules
//! - **`builder`**: The build pass (`IndexBuilder`).
//! - **`formatter`**: Canonical report rendering (`IndexFormatter`).
//! - **`indexer`**: `WordIndexer`, a stateful facade over the whole pipeline.
//! - **`stopwords`**: The `StopWordSet` membership filter.
//! - **`tokenizer`**: Text splitting (`Tokenizer`).
//! - **`types`**: `Page`, `IndexEntry`, `Index`.

pub mod builder;
pub mod formatter;
pub mod indexer;
pub mod stopwords;
pub mod tokenizer;
pub mod types;

pub use builder::{IndexBuilder, build_index};
pub use formatter::{IndexFormatter, format_index};
pub use indexer::WordIndexer;
pub use stopwords::StopWordSet;
pub use tokenizer::Tokenizer;
pub use types::{Index, IndexEntry, Page};
