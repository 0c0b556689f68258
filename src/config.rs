use crate::error::{IndexerError, Result};
use crate::index::StopWordSet;
use crate::io::loader;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Stop words used when no configuration overrides them.
pub const DEFAULT_STOP_WORDS: [&str; 3] = ["and", "the", "a"];

/// Report file name used when no output is configured.
pub const DEFAULT_OUTPUT: &str = "index.txt";

/// What to do with a page whose file name yields no page number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPagePolicy {
    /// Fail the whole run.
    #[default]
    Abort,
    /// Log a warning and leave the page out.
    Skip,
}

/// Configuration for one indexing run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    pub stop_words: Vec<String>,
    pub stop_words_file: Option<PathBuf>,
    pub pages: Vec<PathBuf>,
    pub pages_dir: Option<PathBuf>,
    pub output: PathBuf,
    pub malformed_pages: MalformedPagePolicy,
    pub lowercase_stop_words: bool,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            stop_words_file: None,
            pages: Vec::new(),
            pages_dir: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            malformed_pages: MalformedPagePolicy::Abort,
            lowercase_stop_words: false,
        }
    }
}

impl IndexerConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| IndexerError::unavailable(path, err))?;

        serde_json::from_str(&raw).map_err(|source| IndexerError::InvalidConfig {
            resource: path.to_path_buf(),
            source,
        })
    }

    /// Clears `stop_words` only if it still holds the built-in list.
    ///
    /// A list that came from a config file is left alone.
    pub fn drop_default_stop_words(&mut self) {
        if self.stop_words == DEFAULT_STOP_WORDS {
            self.stop_words.clear();
        }
    }

    /// The stop-word file, if any, plus the literal stop words.
    pub fn load_stop_words(&self) -> Result<StopWordSet> {
        let mut stop_words = match &self.stop_words_file {
            Some(path) => loader::load_stop_words(path)?,
            None => StopWordSet::new(),
        };
        stop_words.extend_from_lines(&self.stop_words);

        if self.lowercase_stop_words {
            stop_words = stop_words.to_lowercase();
        }

        tracing::info!("Using {} stop words", stop_words.len());
        Ok(stop_words)
    }

    /// Explicit pages first, then those discovered in `pages_dir`.
    pub fn page_paths(&self) -> Result<Vec<PathBuf>> {
        let mut paths = self.pages.clone();
        if let Some(dir) = &self.pages_dir {
            paths.extend(loader::discover_pages(dir)?);
        }
        Ok(paths)
    }
}
