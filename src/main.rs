//! Hangman - CLI
//!
//! Interactive terminal hangman. Gameplay is prompt-driven; the flags only
//! configure where word files, statistics and game logs live.

use anyhow::{Context, Result, bail};
use clap::Parser;
use hangman::{
    commands::run_play,
    gamelog::GameLogger,
    stats::StatsStore,
    words::{WordSource, loader},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with categories, scoring and persistent statistics",
    version,
    author
)]
struct Cli {
    /// Directory holding word files, statistics.json and game_log/
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Play with the built-in word lists even if a words/ directory exists
    #[arg(long)]
    builtin_words: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = load_word_source(&cli)?;

    let stats = StatsStore::new(cli.data_dir.join("statistics.json"));
    let logger = GameLogger::new(cli.data_dir.join("game_log"));

    run_play(&source, &stats, &logger);
    Ok(())
}

/// Resolve the word source: files under `<data-dir>/words` when present,
/// the embedded lists otherwise
///
/// Having no usable word data at all is the one fatal startup error.
fn load_word_source(cli: &Cli) -> Result<WordSource> {
    let words_dir = cli.data_dir.join("words");

    if cli.builtin_words || !words_dir.exists() {
        return Ok(WordSource::builtin());
    }

    let source = loader::load_from_dir(&words_dir)
        .with_context(|| format!("failed to load word files from {}", words_dir.display()))?;

    if source.is_empty() {
        bail!(
            "no usable words in {} (expected words.txt and categories/*.txt)",
            words_dir.display()
        );
    }

    Ok(source)
}
