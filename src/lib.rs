//! Word Guess
//!
//! A terminal letter-guessing game with persistent high scores.
//!
//! # Quick Start
//!
//! ```rust
//! use word_guess::core::{GuessOutcome, Session, Word};
//!
//! let mut session = Session::new(Word::new("dog"));
//! session.guess("d");
//! assert_eq!(session.masked(), "d__");
//! assert_eq!(session.guess("x"), GuessOutcome::Missed { chances_left: 2 });
//! ```

// Core domain types
pub mod core;

// Word and score persistence
pub mod storage;

// Menu and round loops
pub mod commands;

// Terminal output formatting
pub mod output;
