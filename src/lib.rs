//! Terminal Wordle
//!
//! A Wordle game engine with TUI and CLI front-ends. The engine is a pure
//! state machine: it owns the board exclusively, consumes key events one at
//! a time and derives everything the front-ends show (cell feedback, keyboard
//! coloring, the shareable result grid) from the submitted rows.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_play::core::{GameStatus, Key};
//! use wordle_play::engine::Game;
//!
//! let mut game = Game::new("hello", Game::DEFAULT_MAX_TRIES).unwrap();
//!
//! // Type a guess and submit it
//! for c in "world".chars() {
//!     game.press(Key::Letter(c));
//! }
//! let status = game.press(Key::Enter);
//!
//! assert_eq!(status, GameStatus::Active);
//! assert_eq!(game.share_text(), "⬜🟨⬜🟩⬜");
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod engine;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
