//! Terminal output formatting
//!
//! Everything the game prints goes through a `Write` handle so the loops can
//! be driven against in-memory buffers.

pub mod display;

pub use display::{print_high_scores, print_masked_word, print_menu, print_warning};
