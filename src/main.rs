//! Word Guess - CLI
//!
//! Interactive letter-guessing game backed by a local SQLite database.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::io;
use std::path::PathBuf;
use word_guess::{
    commands::Menu,
    storage::{DEFAULT_DATABASE, Database},
};

#[derive(Parser)]
#[command(
    name = "word_guess",
    about = "Guess the hidden word one letter at a time",
    version
)]
struct Cli {
    /// Database file holding the word list and high scores
    #[arg(long, env = "WORD_GUESS_DB", default_value = DEFAULT_DATABASE)]
    database: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let db = Database::open(&cli.database)
        .with_context(|| format!("failed to open {}", cli.database.display()))?;
    db.ensure_schema()
        .context("failed to prepare the word and score tables")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(db, stdin.lock(), stdout.lock(), rand::rng());
    menu.run()?;
    menu.shutdown()
}
