//! Display functions for menus, rounds and the high score table

use crate::storage::ScoreEntry;
use colored::Colorize;
use std::io::{self, Write};

const BANNER: [&str; 5] = [
    r" _   _      _ _       ",
    r"| | | | ___| | | ___  ",
    r"| |_| |/ _ \ | |/ _ \ ",
    r"|  _  |  __/ | | (_) |",
    r"|_| |_|\___|_|_|\___/ ",
];

/// Print the banner and the numbered menu choices
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n")?;
    for line in BANNER {
        writeln!(out, "{}", line.bright_cyan())?;
    }
    writeln!(out)?;
    writeln!(out, "1. Play game")?;
    writeln!(out, "2. View high scores")?;
    writeln!(out, "3. Quit")
}

/// Print the current state of the word being guessed
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_masked_word<W: Write>(out: &mut W, masked: &str) -> io::Result<()> {
    writeln!(out, "\n")?;
    writeln!(out, "Guess the word: {}", masked.bold())
}

/// Print the high score table, or a notice when it is empty
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_high_scores<W: Write>(out: &mut W, entries: &[ScoreEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "There are no high scores yet.");
    }

    writeln!(out, "{}", "High Scores:".bright_yellow().bold())?;
    for entry in entries {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}

/// Print a recoverable problem without leaving the game
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_warning<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\n{}", message.yellow())
}
