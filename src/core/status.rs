//! Cell and game status types
//!
//! `CellStatus` is the per-letter feedback classification; `GameStatus` is
//! the overall state of one game session. Both are derived values: the engine
//! never stores a `CellStatus`, it recomputes it from the board and target.

use std::fmt;

/// Evaluation of a single board cell
///
/// Variants are declared in ascending display priority, so the derived `Ord`
/// implements the keycap aggregation rule directly:
/// `Correct > Present > Absent > Untested`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellStatus {
    /// The cell's row has not been submitted yet
    Untested,
    /// The letter does not occur in the target word
    Absent,
    /// The letter occurs in the target word, but not at this column
    Present,
    /// The letter matches the target word at this column
    Correct,
}

impl CellStatus {
    /// Check if this status carries feedback (its row was submitted)
    #[inline]
    #[must_use]
    pub const fn is_evaluated(self) -> bool {
        !matches!(self, Self::Untested)
    }
}

/// Overall state of a game session
///
/// Transitions are one-directional: `Active` → `Won` or `Active` → `Lost`.
/// The terminal states never revert; once reached, key events no longer
/// mutate the board or cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting key events
    #[default]
    Active,
    /// A submitted row matched the target word
    Won,
    /// All tries were used without matching the target word
    Lost,
}

impl GameStatus {
    /// Check if the game has ended (won or lost)
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}
