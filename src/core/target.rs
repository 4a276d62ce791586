//! Target word representation
//!
//! A `TargetWord` stores the secret word as lowercase ASCII bytes along with
//! a distinct-letter index for containment queries during cell evaluation.

use rustc_hash::FxHashSet;
use std::fmt;

/// The input alphabet: every playable letter, in display order.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// The secret word a game is played against
///
/// Immutable once constructed. Any length of one letter or more is allowed;
/// the board dimensions follow from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    letters: Vec<u8>,
    distinct: FxHashSet<u8>,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetWordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for TargetWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Target word must contain at least one letter"),
            Self::NonAscii => write!(f, "Target word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Target word contains invalid characters"),
        }
    }
}

impl std::error::Error for TargetWordError {}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `TargetWordError` if:
    /// - The word is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_play::core::TargetWord;
    ///
    /// let word = TargetWord::new("Hello").unwrap();
    /// assert_eq!(word.text(), "hello");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(TargetWord::new("").is_err());
    /// assert!(TargetWord::new("h3llo").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, TargetWordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(TargetWordError::Empty);
        }

        if !text.is_ascii() {
            return Err(TargetWordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(TargetWordError::InvalidCharacters);
        }

        let letters: Vec<u8> = text.bytes().collect();
        let distinct: FxHashSet<u8> = letters.iter().copied().collect();

        Ok(Self {
            text,
            letters,
            distinct,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte slice
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Get the letter at a specific column
    ///
    /// # Panics
    /// Panics if `col >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, col: usize) -> u8 {
        self.letters[col]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.distinct.contains(&letter)
    }

    /// Number of letters in the word (the board's column count)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
