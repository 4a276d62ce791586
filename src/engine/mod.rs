//! Game engine: board storage and the key-event state machine

mod board;
mod game;

pub use board::{Attempt, Board, Cursor};
pub use game::{ConfigError, Game};
