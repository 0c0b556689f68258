//! Back-of-Book Index Library
//!
//! Builds an alphabetical word index from numbered text pages: every significant word is
//! listed with the sorted, deduplicated page numbers it occurs on.
//! It serves as the foundation for the `book-indexer` binary (`main.rs`).
//!
//! ## Modules
//! - **`index`**: The pure core. Tokenizer, stop-word filter, the aggregating build pass and
//!   the canonical formatter, plus the `WordIndexer` facade tying them together.
//! - **`io`**: File-system collaborators. Page discovery and loading, stop-word files and
//!   the report sink.
//! - **`config`**: Run configuration, loadable from JSON.
//! - **`error`**: The `IndexerError` taxonomy returned by loaders and sinks.

pub mod config;
pub mod error;
pub mod index;
pub mod io;

pub use config::{IndexerConfig, MalformedPagePolicy};
pub use error::{IndexerError, Result};
pub use index::{
    Index, IndexBuilder, IndexEntry, IndexFormatter, Page, StopWordSet, Tokenizer, WordIndexer,
};
