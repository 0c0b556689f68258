use anyhow::{Context, Result, bail};
use book_indexer::config::{IndexerConfig, MalformedPagePolicy};
use book_indexer::index::WordIndexer;
use book_indexer::io::sink::write_lines;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "book-indexer")]
#[command(about = "Build a back-of-book word index from numbered page files", long_about = None)]
struct Args {
    /// Page files; the page number is the trailing number of each file name (Page3.txt -> 3)
    pages: Vec<PathBuf>,

    /// Directory scanned for *.txt page files
    #[arg(long)]
    pages_dir: Option<PathBuf>,

    /// Newline-delimited stop-word file
    #[arg(long)]
    stop_words_file: Option<PathBuf>,

    /// Additional stop word (repeatable)
    #[arg(long = "stop-word")]
    stop_words: Vec<String>,

    /// Do not include the built-in stop words (and, the, a); a list from --config is kept
    #[arg(long)]
    no_default_stop_words: bool,

    /// Lowercase stop words before filtering
    #[arg(long)]
    lowercase_stop_words: bool,

    /// Skip pages whose file name carries no page number instead of failing
    #[arg(long)]
    skip_malformed: bool,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the report to stdout instead of writing the report file
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<IndexerConfig> {
        let mut config = match &self.config {
            Some(path) => IndexerConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => IndexerConfig::default(),
        };

        if self.no_default_stop_words {
            config.drop_default_stop_words();
        }
        config.stop_words.extend(self.stop_words);
        if self.stop_words_file.is_some() {
            config.stop_words_file = self.stop_words_file;
        }
        config.pages.extend(self.pages);
        if self.pages_dir.is_some() {
            config.pages_dir = self.pages_dir;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.skip_malformed {
            config.malformed_pages = MalformedPagePolicy::Skip;
        }
        if self.lowercase_stop_words {
            config.lowercase_stop_words = true;
        }

        if config.pages.is_empty() && config.pages_dir.is_none() {
            bail!("No pages given: pass page files or --pages-dir");
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let to_stdout = args.stdout;
    let config = args.into_config()?;

    let mut indexer = WordIndexer::from_config(&config).context("Failed to load input")?;
    indexer.build_index();

    if to_stdout {
        let stdout = std::io::stdout();
        write_lines(&mut stdout.lock(), &indexer.lines()).context("Failed to print index")?;
    } else {
        indexer
            .write_index_to_file(&config.output)
            .context("Failed to write index")?;
    }

    Ok(())
}
