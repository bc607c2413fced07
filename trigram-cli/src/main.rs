use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use trigram_core::corpus::load_corpus;
use trigram_core::emit::{emit, Destination};
use trigram_core::{ExtractionConfig, TrigramProfile};

/// Generate a ranked trigram table from a text corpus.
///
/// Reads a UTF-8 text file, counts boundary-padded character trigrams of
/// every word, and writes the most frequent ones as a Lua table for a
/// language identifier to load.
#[derive(Parser, Debug)]
#[command(name = "gen-trigrams", version, about)]
struct Cli {
    /// Path to input text file (UTF-8)
    input_file: PathBuf,

    /// Path to output Lua file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of trigrams to keep
    #[arg(short = 'n', long, default_value_t = ExtractionConfig::default().limit)]
    limit: usize,
}

impl Cli {
    /// Builds and validates extraction options from the flags.
    fn extraction_config(&self) -> Result<ExtractionConfig> {
        let config = ExtractionConfig::default().with_limit(self.limit);
        config.validate().context("invalid options")?;
        Ok(config)
    }
}

/// Runs load → profile → emit. Returns the number of trigrams written.
fn run(cli: &Cli) -> Result<usize> {
    let config = cli.extraction_config()?;

    let text = load_corpus(&cli.input_file)?;

    let mut profile = TrigramProfile::with_config(config);
    profile.add_text(&text);
    drop(text);

    let stats = profile.stats();
    info!(
        words = stats.words_seen,
        skipped = stats.words_skipped,
        distinct = stats.distinct_trigrams,
        "Profiled {}",
        cli.input_file.display()
    );

    let trigrams = profile.top_trigrams();
    let destination = Destination::from_path(cli.output.clone());
    emit(&trigrams, &destination)?;

    Ok(trigrams.len())
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout may be carrying the table
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("gen_trigrams=info,trigram_core=info")
            }),
        )
        .init();

    let cli = Cli::parse();
    let written = run(&cli)?;

    if let Some(path) = &cli.output {
        println!("Successfully wrote {written} trigrams to {}", path.display());
    }

    Ok(())
}
