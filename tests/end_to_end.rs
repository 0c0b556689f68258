use std::fs;
use std::path::Path;

use tempfile::TempDir;

use book_indexer::config::{IndexerConfig, MalformedPagePolicy};
use book_indexer::error::IndexerError;
use book_indexer::index::WordIndexer;

fn write_page(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn setup_pages() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_page(tmp.path(), "Page1.txt", "The cat sat.\n");
    write_page(tmp.path(), "Page2.txt", "The cat ran away.\n");
    write_page(tmp.path(), "Page3.txt", "... --- !!!\n");
    tmp
}

fn run(config: &IndexerConfig) -> Vec<String> {
    let mut indexer = WordIndexer::from_config(config).unwrap();
    indexer.build_index();
    indexer.write_index_to_file(&config.output).unwrap();
    fs::read_to_string(&config.output)
        .unwrap()
        .lines()
        .map(|line| line.to_string())
        .collect()
}

#[test]
fn test_pages_dir_with_default_stop_words() {
    let tmp = setup_pages();
    let config = IndexerConfig {
        pages_dir: Some(tmp.path().to_path_buf()),
        output: tmp.path().join("index.out"),
        ..Default::default()
    };

    assert_eq!(
        run(&config),
        vec!["away : 2", "cat : 1,2", "ran : 2", "sat : 1"]
    );
}

#[test]
fn test_report_is_newline_terminated() {
    let tmp = setup_pages();
    let config = IndexerConfig {
        pages_dir: Some(tmp.path().to_path_buf()),
        output: tmp.path().join("index.out"),
        ..Default::default()
    };
    run(&config);

    let raw = fs::read_to_string(&config.output).unwrap();
    assert_eq!(raw, "away : 2\ncat : 1,2\nran : 2\nsat : 1\n");
}

#[test]
fn test_stop_words_file_and_explicit_pages() {
    let tmp = setup_pages();
    let stop_file = tmp.path().join("stop.words");
    fs::write(&stop_file, "cat\n\n  ran  \n").unwrap();

    let config = IndexerConfig {
        stop_words: Vec::new(),
        stop_words_file: Some(stop_file),
        pages: vec![tmp.path().join("Page2.txt"), tmp.path().join("Page1.txt")],
        output: tmp.path().join("index.out"),
        ..Default::default()
    };

    assert_eq!(run(&config), vec!["away : 2", "sat : 1", "the : 1,2"]);
}

#[test]
fn test_uppercase_stop_words_need_lowercasing() {
    let tmp = setup_pages();
    let mut config = IndexerConfig {
        stop_words: vec!["The".to_string(), "CAT".to_string()],
        pages_dir: Some(tmp.path().to_path_buf()),
        output: tmp.path().join("index.out"),
        ..Default::default()
    };
    assert_eq!(
        run(&config),
        vec!["away : 2", "cat : 1,2", "ran : 2", "sat : 1", "the : 1,2"]
    );

    config.lowercase_stop_words = true;
    assert_eq!(run(&config), vec!["away : 2", "ran : 2", "sat : 1"]);
}

#[test]
fn test_missing_stop_words_file_aborts() {
    let tmp = setup_pages();
    let config = IndexerConfig {
        stop_words_file: Some(tmp.path().join("absent.txt")),
        pages_dir: Some(tmp.path().to_path_buf()),
        output: tmp.path().join("index.out"),
        ..Default::default()
    };

    let err = WordIndexer::from_config(&config).unwrap_err();
    assert!(matches!(err, IndexerError::ResourceUnavailable { .. }));
    assert!(err.to_string().contains("absent.txt"));
    assert!(!config.output.exists());
}

#[test]
fn test_malformed_page_policy() {
    let tmp = setup_pages();
    write_page(tmp.path(), "appendix.txt", "zebra\n");

    let mut config = IndexerConfig {
        pages_dir: Some(tmp.path().to_path_buf()),
        output: tmp.path().join("index.out"),
        ..Default::default()
    };
    let err = WordIndexer::from_config(&config).unwrap_err();
    assert!(matches!(err, IndexerError::MalformedPageIdentifier { .. }));

    config.malformed_pages = MalformedPagePolicy::Skip;
    assert_eq!(
        run(&config),
        vec!["away : 2", "cat : 1,2", "ran : 2", "sat : 1"]
    );
}

#[test]
fn test_config_from_json_file() {
    let tmp = setup_pages();
    let config_path = tmp.path().join("indexer.json");
    let json = serde_json::json!({
        "stop_words": ["the", "cat"],
        "pages_dir": tmp.path(),
        "output": tmp.path().join("from-config.out"),
        "malformed_pages": "skip"
    });
    fs::write(&config_path, json.to_string()).unwrap();

    let config = IndexerConfig::from_file(&config_path).unwrap();
    assert_eq!(config.malformed_pages, MalformedPagePolicy::Skip);
    assert!(config.stop_words_file.is_none());
    assert!(!config.lowercase_stop_words);

    assert_eq!(run(&config), vec!["away : 2", "ran : 2", "sat : 1"]);
}

#[test]
fn test_config_invalid_json() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("indexer.json");
    fs::write(&config_path, "{ \"malformed_pages\": \"sometimes\" }").unwrap();

    let err = IndexerConfig::from_file(&config_path).unwrap_err();
    assert!(matches!(err, IndexerError::InvalidConfig { .. }));
}

#[test]
fn test_default_config() {
    let config = IndexerConfig::default();
    assert_eq!(config.stop_words, vec!["and", "the", "a"]);
    assert_eq!(config.output, Path::new("index.txt"));
    assert_eq!(config.malformed_pages, MalformedPagePolicy::Abort);
}
