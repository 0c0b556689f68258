//! Page and Report I/O Module
//!
//! The thin file-system collaborators around the indexing core.
//!
//! ## Responsibilities
//! - **Stop words**: Reading newline-delimited stop-word files.
//! - **Pages**: Discovering page files, deriving page numbers from file names and reading
//!   their content.
//! - **Report**: Writing formatted index lines, one per line.
//!
//! Every failure here is immediately fatal to the operation in progress. Nothing is retried.

pub mod loader;
pub mod sink;
