//! Guessing session state machine
//!
//! A session tracks one round of play against a single target word:
//! - Correct letters are added to the revealed set
//! - Incorrect guesses cost one chance
//! - Revealing every distinct letter wins, running out of chances loses
//!
//! The session does no I/O; `commands::play` drives it from user input.

use super::Word;
use rustc_hash::FxHashSet;

/// Chances a player starts each session with
pub const STARTING_CHANCES: u8 = 3;

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

/// Result of applying one guess to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// A new letter was revealed and the word is still incomplete
    Revealed,
    /// The letter was already revealed; nothing changed
    Repeated,
    /// The guess did not match and cost a chance
    Missed { chances_left: u8 },
    /// The last hidden letter was revealed
    Won { score: u8 },
    /// The final chance was used up
    Lost,
    /// The session had already ended; the guess was ignored
    Finished,
}

/// One round of the guessing game
#[derive(Debug, Clone)]
pub struct Session {
    word: Word,
    revealed: FxHashSet<char>,
    chances: u8,
    state: SessionState,
}

impl Session {
    /// Start a new session against `word` with [`STARTING_CHANCES`]
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self {
            word,
            revealed: FxHashSet::default(),
            chances: STARTING_CHANCES,
            state: SessionState::InProgress,
        }
    }

    /// Apply a raw guess to the session
    ///
    /// The guess is compared as a whole against the word's single letters, so
    /// anything other than exactly one character (including empty input) can
    /// never match and counts as incorrect. Comparison is case-sensitive.
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::{GuessOutcome, Session, Word};
    ///
    /// let mut session = Session::new(Word::new("cat"));
    /// assert_eq!(session.guess("z"), GuessOutcome::Missed { chances_left: 2 });
    /// assert_eq!(session.guess("c"), GuessOutcome::Revealed);
    /// assert_eq!(session.guess("a"), GuessOutcome::Revealed);
    /// assert_eq!(session.guess("t"), GuessOutcome::Won { score: 2 });
    /// ```
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        if self.state != SessionState::InProgress {
            return GuessOutcome::Finished;
        }

        match single_char(input) {
            Some(letter) if self.word.has_letter(letter) => {
                if !self.revealed.insert(letter) {
                    return GuessOutcome::Repeated;
                }
                if self.revealed.len() == self.word.letters().len() {
                    self.state = SessionState::Won;
                    GuessOutcome::Won {
                        score: self.chances,
                    }
                } else {
                    GuessOutcome::Revealed
                }
            }
            _ => {
                self.chances = self.chances.saturating_sub(1);
                if self.chances == 0 {
                    self.state = SessionState::Lost;
                    GuessOutcome::Lost
                } else {
                    GuessOutcome::Missed {
                        chances_left: self.chances,
                    }
                }
            }
        }
    }

    /// The word with unrevealed letters replaced by placeholders
    #[must_use]
    pub fn masked(&self) -> String {
        self.word.masked(&self.revealed)
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Letters revealed so far
    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> &FxHashSet<char> {
        &self.revealed
    }

    /// Incorrect guesses still allowed before the session is lost
    #[inline]
    #[must_use]
    pub const fn chances(&self) -> u8 {
        self.chances
    }

    /// Current position in the state machine
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Score earned by a won session: the chances left at the winning guess
    #[must_use]
    pub fn score(&self) -> Option<u8> {
        (self.state == SessionState::Won).then_some(self.chances)
    }
}

/// The only character of `input`, if it has exactly one
fn single_char(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
