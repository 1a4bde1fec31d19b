//! Top-level menu loop
//!
//! Owns the database handle for the lifetime of the program and dispatches
//! each menu choice to a round of play or the high score table.

use super::input::prompt;
use super::play::{RoundResult, play_round};
use crate::output::{print_high_scores, print_menu, print_warning};
use crate::storage::{Database, HIGH_SCORE_LIMIT, StoreError};
use anyhow::Result;
use log::{info, warn};
use rand::Rng;
use std::io::{BufRead, Write};

/// A choice accepted at the menu prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    HighScores,
    Quit,
}

impl MenuChoice {
    /// Parse a menu token; only the exact strings `1`, `2` and `3` are valid
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Play),
            "2" => Some(Self::HighScores),
            "3" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Whether the loop should keep going after handling a choice
enum Flow {
    Continue,
    Stop,
}

/// The interactive menu loop
pub struct Menu<R, W, G> {
    db: Database,
    input: R,
    out: W,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Menu<R, W, G> {
    /// Build a menu that owns `db` for its whole lifetime
    #[must_use]
    pub const fn new(db: Database, input: R, out: W, rng: G) -> Self {
        Self {
            db,
            input,
            out,
            rng,
        }
    }

    #[cfg(test)]
    const fn database(&self) -> &Database {
        &self.db
    }

    /// Run the menu until the player quits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails. Storage
    /// failures are reported to the player and do not end the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            print_menu(&mut self.out)?;
            let Some(token) = prompt(&mut self.input, &mut self.out, "Enter your choice: ")?
            else {
                info!("Input ended at the menu");
                return Ok(());
            };

            let flow = match MenuChoice::parse(&token) {
                Some(MenuChoice::Play) => self.play()?,
                Some(MenuChoice::HighScores) => {
                    self.show_high_scores()?;
                    Flow::Continue
                }
                Some(MenuChoice::Quit) => Flow::Stop,
                None => {
                    writeln!(self.out, "\nInvalid choice. Try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Stop = flow {
                return Ok(());
            }
        }
    }

    /// Release the database handle
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be closed cleanly.
    pub fn shutdown(self) -> Result<()> {
        self.db.close()?;
        Ok(())
    }

    fn play(&mut self) -> Result<Flow> {
        let word = match self.db.words().random_word(&mut self.rng) {
            Ok(word) => word,
            Err(StoreError::EmptyStore) => {
                warn!("Play requested with an empty word store");
                print_warning(&mut self.out, "There are no words to play with yet.")?;
                return Ok(Flow::Continue);
            }
            Err(err) => {
                warn!("Failed to draw a word: {err}");
                print_warning(&mut self.out, &format!("Could not load a word: {err}"))?;
                return Ok(Flow::Continue);
            }
        };

        let result = play_round(word, self.db.scores(), &mut self.input, &mut self.out)?;
        info!("Round finished: {result:?}");

        Ok(match result {
            RoundResult::Abandoned => Flow::Stop,
            RoundResult::Won { .. } | RoundResult::Lost => Flow::Continue,
        })
    }

    fn show_high_scores(&mut self) -> Result<()> {
        match self.db.scores().top(HIGH_SCORE_LIMIT) {
            Ok(entries) => print_high_scores(&mut self.out, &entries)?,
            Err(err) => {
                warn!("Failed to load high scores: {err}");
                print_warning(&mut self.out, &format!("Could not load high scores: {err}"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ScoreEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    type TestMenu = Menu<Cursor<Vec<u8>>, Vec<u8>, StdRng>;

    fn menu_with(db: Database, lines: impl AsRef<[u8]>) -> TestMenu {
        colored::control::set_override(false);
        Menu::new(
            db,
            Cursor::new(lines.as_ref().to_vec()),
            Vec::new(),
            StdRng::seed_from_u64(3),
        )
    }

    fn database(words: &[&str]) -> Database {
        let db = Database::in_memory().unwrap();
        db.ensure_schema().unwrap();
        db.words().insert_all(words).unwrap();
        db
    }

    fn output(menu: &TestMenu) -> String {
        String::from_utf8(menu.out.clone()).unwrap()
    }

    #[test]
    fn menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Play));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::HighScores));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse("play"), None);
    }

    #[test]
    fn quit_stops_immediately() {
        let mut menu = menu_with(database(&[]), "3\n1\n");
        menu.run().unwrap();

        let text = output(&menu);
        assert_eq!(text.matches("Enter your choice: ").count(), 1);
        menu.shutdown().unwrap();
    }

    #[test]
    fn scenario_c_no_high_scores() {
        let mut menu = menu_with(database(&[]), "2\n3\n");
        menu.run().unwrap();
        assert!(output(&menu).contains("There are no high scores yet."));
    }

    #[test]
    fn scenario_d_high_scores_in_order() {
        let db = database(&[]);
        db.scores().record("Al", 3).unwrap();
        db.scores().record("Bo", 1).unwrap();
        db.scores().record("Cy", 2).unwrap();

        let mut menu = menu_with(db, "2\n3\n");
        menu.run().unwrap();
        assert!(output(&menu).contains("High Scores:\nAl: 3\nCy: 2\nBo: 1\n"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let mut menu = menu_with(database(&[]), "9\n\nx\n3\n");
        menu.run().unwrap();

        let text = output(&menu);
        assert_eq!(text.matches("Invalid choice. Try again.").count(), 3);
        assert_eq!(text.matches("Enter your choice: ").count(), 4);
    }

    #[test]
    fn empty_word_store_returns_to_menu() {
        let mut menu = menu_with(database(&[]), "1\n3\n");
        menu.run().unwrap();

        let text = output(&menu);
        assert!(text.contains("There are no words to play with yet."));
        assert_eq!(text.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn won_round_then_scores() {
        let mut menu = menu_with(database(&["cat"]), "1\nz\nc\na\nt\nAl\n2\n3\n");
        menu.run().unwrap();

        let text = output(&menu);
        assert!(text.contains("You win!"));
        assert!(text.contains("High Scores:\nAl: 2\n"));
        assert_eq!(
            menu.database().scores().top(10).unwrap(),
            vec![ScoreEntry::new("Al", 2)]
        );
    }

    #[test]
    fn invalid_utf8_choice_reprompts() {
        let mut menu = menu_with(database(&[]), b"\xff\xfe\n3\n");
        menu.run().unwrap();

        let text = output(&menu);
        assert_eq!(text.matches("Invalid choice. Try again.").count(), 1);
        assert_eq!(text.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn invalid_utf8_guess_is_incorrect() {
        let mut menu = menu_with(database(&["cat"]), b"1\n\xc3\nx\ny\n3\n");
        menu.run().unwrap();

        let text = output(&menu);
        assert_eq!(text.matches("Incorrect!").count(), 3);
        assert!(text.contains("You lose!"));
        assert_eq!(text.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn eof_at_menu_ends_cleanly() {
        let mut menu = menu_with(database(&["cat"]), "2\n");
        menu.run().unwrap();
        menu.shutdown().unwrap();
    }

    #[test]
    fn eof_during_round_ends_cleanly() {
        let mut menu = menu_with(database(&["cat"]), "1\nc\n");
        menu.run().unwrap();

        assert!(menu.database().scores().top(10).unwrap().is_empty());
        assert_eq!(output(&menu).matches("Enter your choice: ").count(), 1);
    }

    #[test]
    fn missing_schema_is_reported_not_fatal() {
        let db = Database::in_memory().unwrap();
        let mut menu = menu_with(db, "1\n2\n3\n");
        menu.run().unwrap();

        let text = output(&menu);
        assert!(text.contains("Could not load a word"));
        assert!(text.contains("Could not load high scores"));
    }
}
