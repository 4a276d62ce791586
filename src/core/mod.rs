//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O concerns.
//! All types here are pure, testable, and have clear invariants.

mod key;
mod status;
mod target;

pub use key::Key;
pub use status::{CellStatus, GameStatus};
pub use target::{ALPHABET, TargetWord, TargetWordError};
