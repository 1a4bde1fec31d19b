//! One round of the guessing game
//!
//! Drives a [`Session`] from line-based input until it is won or lost, and
//! records the score of a win.

use super::input::prompt;
use crate::core::{GuessOutcome, Session, Word};
use crate::output::{print_masked_word, print_warning};
use crate::storage::ScoreStore;
use anyhow::Result;
use colored::Colorize;
use log::{info, warn};
use std::io::{BufRead, Write};

/// How a round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    /// Every letter was revealed
    Won {
        score: u8,
        /// Whether the score made it into the score store
        recorded: bool,
    },
    /// The player ran out of chances
    Lost,
    /// Input ended before the round finished
    Abandoned,
}

/// Play one round against `word`
///
/// A failure to record the score is reported to the player and does not
/// fail the round.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn play_round<R: BufRead, W: Write>(
    word: Word,
    scores: ScoreStore<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<RoundResult> {
    let mut session = Session::new(word);

    loop {
        print_masked_word(out, &session.masked())?;
        let Some(guess) = prompt(input, out, "Guess a letter: ")? else {
            info!("Input ended mid-round; abandoning");
            return Ok(RoundResult::Abandoned);
        };

        match session.guess(&guess) {
            GuessOutcome::Revealed | GuessOutcome::Repeated => {}
            GuessOutcome::Missed { .. } => {
                writeln!(out, "\n{}", "Incorrect!".red())?;
            }
            GuessOutcome::Lost => {
                writeln!(out, "\n{}", "Incorrect!".red())?;
                writeln!(out, "\n{}", "You lose!".red().bold())?;
                return Ok(RoundResult::Lost);
            }
            GuessOutcome::Won { score } => {
                writeln!(out, "\n{}", "You win!".green().bold())?;
                return finish_win(score, scores, input, out);
            }
            // The loop returns as soon as the session reaches Won or Lost.
            GuessOutcome::Finished => unreachable!("guess applied to a finished session"),
        }
    }
}

fn finish_win<R: BufRead, W: Write>(
    score: u8,
    scores: ScoreStore<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<RoundResult> {
    let Some(name) = prompt(input, out, "Enter your name: ")? else {
        return Ok(RoundResult::Won {
            score,
            recorded: false,
        });
    };

    let recorded = match scores.record(&name, i64::from(score)) {
        Ok(()) => true,
        Err(err) => {
            warn!("Failed to record score for {name:?}: {err}");
            print_warning(out, &format!("Your score could not be saved: {err}"))?;
            false
        }
    };

    Ok(RoundResult::Won { score, recorded })
}
