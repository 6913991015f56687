//! Build a frequency-ordered deck file for one deck directory.
//!
//! Usage: cargo run --release --bin freqdeck -- <deck-name> [--root DIR]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use freqdeck::deck::DEFAULT_NOTE_TYPE;
use freqdeck::resolver::DEFAULT_API_URL;
use freqdeck::{find_project_root, DeckConfig, DeckProcessor, HttpFrequencySource};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "freqdeck", about = "Frequency-ordered flashcard deck generator", version)]
struct Cli {
    /// Deck directory name under decks/
    deck: Option<String>,

    /// Project root containing decks/ (default: nearest ancestor of the current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Frequency service endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Note type written into every row
    #[arg(long, default_value = DEFAULT_NOTE_TYPE)]
    note_type: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let Some(deck_name) = cli.deck else {
        eprintln!("Please provide a deck name as a parameter.");
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(2);
    };

    let root = match cli.root {
        Some(root) => root,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            find_project_root(&cwd)?
        }
    };

    let mut config = DeckConfig::new(&root, deck_name);
    config.api_url = cli.api_url;
    config.note_type = cli.note_type;

    let source = HttpFrequencySource::new(config.api_url.clone())
        .context("Failed to build HTTP client")?;
    let report = DeckProcessor::new(config, source)
        .process()
        .context("Deck generation failed")?;

    println!(
        "Processed CSV file has been generated: {}",
        report.output.display()
    );
    Ok(())
}
