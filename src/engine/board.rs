//! Board storage: attempts and the write cursor
//!
//! An `Attempt` is one row of letter-slots, a `Board` is the fixed stack of
//! attempts for a session. Mutation is crate-private: only the game state
//! machine writes to the board, everything else gets read-only views.

/// One row of the board: a fixed number of letter-slots, each empty or
/// holding a single lowercase letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    slots: Vec<Option<u8>>,
}

impl Attempt {
    /// Create an empty attempt with `len` slots
    pub(crate) fn empty(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Get the letter in a slot, or `None` if it is empty
    ///
    /// # Panics
    /// Panics if `col >= self.len()`
    #[inline]
    #[must_use]
    pub fn slot(&self, col: usize) -> Option<u8> {
        self.slots[col]
    }

    /// Check if every slot holds a letter
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of slots in this attempt (the word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no slot holds a letter
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The typed letters as a string, skipping empty slots
    ///
    /// For a submitted attempt this is the full guessed word.
    #[must_use]
    pub fn text(&self) -> String {
        self.slots
            .iter()
            .filter_map(|slot| slot.map(char::from))
            .collect()
    }

    pub(crate) fn set_slot(&mut self, col: usize, letter: u8) {
        self.slots[col] = Some(letter);
    }

    pub(crate) fn clear_slot(&mut self, col: usize) {
        self.slots[col] = None;
    }
}

/// The full stack of attempts for one game session
///
/// Invariant: every attempt has exactly the target word's length in slots,
/// and the number of attempts never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    attempts: Vec<Attempt>,
}

impl Board {
    /// Create a board of `tries` empty attempts of `word_len` slots each
    pub(crate) fn new(tries: usize, word_len: usize) -> Self {
        Self {
            attempts: vec![Attempt::empty(word_len); tries],
        }
    }

    /// Get a read-only view of one attempt
    ///
    /// # Panics
    /// Panics if `row >= self.tries()`
    #[inline]
    #[must_use]
    pub fn attempt(&self, row: usize) -> &Attempt {
        &self.attempts[row]
    }

    /// Number of attempts on the board
    #[inline]
    #[must_use]
    pub fn tries(&self) -> usize {
        self.attempts.len()
    }

    pub(crate) fn attempt_mut(&mut self, row: usize) -> &mut Attempt {
        &mut self.attempts[row]
    }
}

/// Position of the next letter to be written
///
/// Invariants (maintained by the game state machine): `row` never exceeds
/// the board's try count, `col` never exceeds the word length, and `col`
/// resets to 0 whenever `row` advances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}
