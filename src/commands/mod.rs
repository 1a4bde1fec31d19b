//! Command implementations

pub mod input;
pub mod menu;
pub mod play;

pub use input::prompt;
pub use menu::{Menu, MenuChoice};
pub use play::{RoundResult, play_round};
