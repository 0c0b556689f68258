use crate::config::MalformedPagePolicy;
use crate::error::{IndexerError, Result};
use crate::index::{Page, StopWordSet};
use regex::Regex;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Trailing digits of a file stem, e.g. `Page12` -> `12`.
static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)$").expect("page number pattern is valid"));

const PAGE_EXTENSION: &str = "txt";

/// Reads a newline-delimited resource into raw lines.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| IndexerError::unavailable(path, err))?;

    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|err| IndexerError::unavailable(path, err))
}

/// Loads a stop-word file: one word per line, trimmed, blank lines ignored.
pub fn load_stop_words(path: impl AsRef<Path>) -> Result<StopWordSet> {
    let path = path.as_ref();
    let mut stop_words = StopWordSet::new();
    stop_words.extend_from_lines(read_lines(path)?);

    tracing::info!(
        "Loaded {} stop words from {}",
        stop_words.len(),
        path.display()
    );
    Ok(stop_words)
}

/// Derives a page number from the trailing digits of a file name's stem.
///
/// `Page3.txt` -> 3, `chapter-07.txt` -> 7. Zero, overflow or no digits is malformed.
pub fn page_number_from_path(path: impl AsRef<Path>) -> Result<u32> {
    let path = path.as_ref();
    let malformed = || IndexerError::MalformedPageIdentifier {
        identifier: path.display().to_string(),
    };

    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(malformed)?;

    PAGE_NUMBER
        .captures(stem)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|number| *number > 0)
        .ok_or_else(malformed)
}

/// Reads a whole page file. Every line, including the last, is terminated by `\n`.
///
/// Invalid UTF-8 is replaced rather than rejected. Non-ASCII text only ever acts as a
/// delimiter, so the replacement never changes which words get indexed.
pub fn read_page(path: impl AsRef<Path>) -> Result<Page> {
    let path = path.as_ref();
    let page_number = page_number_from_path(path)?;

    let bytes = fs::read(path).map_err(|err| IndexerError::unavailable(path, err))?;
    let mut content = String::with_capacity(bytes.len() + 1);
    for line in String::from_utf8_lossy(&bytes).lines() {
        content.push_str(line);
        content.push('\n');
    }

    tracing::debug!(
        "Read page {} from {} ({} bytes)",
        page_number,
        path.display(),
        content.len()
    );
    Ok(Page::new(page_number, content))
}

/// Loads pages in the given order, applying `policy` to names without a page number.
///
/// Unreadable files always abort the load.
pub fn load_pages<P: AsRef<Path>>(paths: &[P], policy: MalformedPagePolicy) -> Result<Vec<Page>> {
    let mut pages = Vec::with_capacity(paths.len());
    let mut seen: HashMap<u32, PathBuf> = HashMap::new();

    for path in paths {
        let path = path.as_ref();
        let page = match read_page(path) {
            Ok(page) => page,
            Err(err) if err.is_page_local() && policy == MalformedPagePolicy::Skip => {
                tracing::warn!("Skipping page: {}", err);
                continue;
            }
            Err(err) => return Err(err),
        };

        if let Some(previous) = seen.insert(page.page_number(), path.to_path_buf()) {
            tracing::warn!(
                "Page number {} used by both {} and {}",
                page.page_number(),
                previous.display(),
                path.display()
            );
        }
        pages.push(page);
    }

    tracing::info!("Loaded {} pages", pages.len());
    Ok(pages)
}

/// Lists the `.txt` files directly inside `dir`, sorted by path.
pub fn discover_pages(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|err| IndexerError::unavailable(dir, err))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|err| IndexerError::unavailable(dir, err))?
            .path();
        if path.is_file() && has_page_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    tracing::debug!("Discovered {} page files in {}", paths.len(), dir.display());
    Ok(paths)
}

fn has_page_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PAGE_EXTENSION))
}
