use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the loaders, the report sink and configuration parsing.
///
/// The in-memory core (tokenizer, builder, formatter) never produces one of these.
#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("Resource unavailable: {}: {source}", resource.display())]
    ResourceUnavailable {
        resource: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed page identifier: cannot derive a page number from '{identifier}'")]
    MalformedPageIdentifier { identifier: String },

    #[error("Invalid configuration in {}: {source}", resource.display())]
    InvalidConfig {
        resource: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for indexer operations
pub type Result<T> = std::result::Result<T, IndexerError>;

impl IndexerError {
    pub(crate) fn unavailable(resource: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexerError::ResourceUnavailable {
            resource: resource.into(),
            source,
        }
    }

    /// True for errors that a caller may choose to skip on a per-page basis.
    pub fn is_page_local(&self) -> bool {
        matches!(self, IndexerError::MalformedPageIdentifier { .. })
    }
}
