//! Target word representation
//!
//! A Word stores the text drawn from the word store along with its set of
//! distinct letters, which is what guesses are checked against.

use rustc_hash::FxHashSet;
use std::fmt;

/// Placeholder shown for letters that have not been revealed yet
pub const PLACEHOLDER: char = '_';

/// A word to be guessed, with its distinct-letter set
///
/// Letters are compared exactly as stored: no case folding is applied, so
/// `'A'` and `'a'` are different letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<char>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::Word;
    ///
    /// let word = Word::new("cat");
    /// assert_eq!(word.text(), "cat");
    /// assert_eq!(word.letters().len(), 3);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let letters = text.chars().collect();

        Self { text, letters }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct letters appearing in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Render the word with every letter outside `revealed` replaced by
    /// [`PLACEHOLDER`], keeping revealed letters in their original positions.
    ///
    /// # Examples
    /// ```
    /// use rustc_hash::FxHashSet;
    /// use word_guess::core::Word;
    ///
    /// let word = Word::new("hello");
    /// let revealed: FxHashSet<char> = ['l'].into_iter().collect();
    /// assert_eq!(word.masked(&revealed), "__ll_");
    /// ```
    #[must_use]
    pub fn masked(&self, revealed: &FxHashSet<char>) -> String {
        self.text
            .chars()
            .map(|ch| if revealed.contains(&ch) { ch } else { PLACEHOLDER })
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
