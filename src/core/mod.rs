//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types and does no I/O.
//! The session state machine is driven entirely by the strings passed to it.

mod session;
mod word;

pub use session::{GuessOutcome, STARTING_CHANCES, Session, SessionState};
pub use word::{PLACEHOLDER, Word};
