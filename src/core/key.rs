//! Key events accepted by the game engine
//!
//! The engine's entire input surface: letters, CLEAR (delete the previous
//! letter) and ENTER (submit the current row). Front-ends translate their
//! raw input (terminal key codes, virtual keycaps) into these events.

/// A single discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Type a letter into the next free slot of the current row
    Letter(char),
    /// Delete the letter before the cursor, if any
    Clear,
    /// Submit the current row, if it is completely filled
    Enter,
}

impl Key {
    /// Build a letter key from a character, normalizing case
    ///
    /// Returns `None` for characters outside the playable alphabet, which
    /// lets front-ends filter raw input in one place.
    ///
    /// # Examples
    /// ```
    /// use wordle_play::core::Key;
    ///
    /// assert_eq!(Key::letter('A'), Some(Key::Letter('a')));
    /// assert_eq!(Key::letter('q'), Some(Key::Letter('q')));
    /// assert_eq!(Key::letter('3'), None);
    /// assert_eq!(Key::letter(' '), None);
    /// ```
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self::Letter(c.to_ascii_lowercase()))
        } else {
            None
        }
    }
}
