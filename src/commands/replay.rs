//! Scripted replay command
//!
//! Feeds a fixed sequence of guesses through a game and reports the feedback
//! for each row, for checking a line of play without the interactive UI.

use crate::core::{CellStatus, GameStatus, Key};
use crate::engine::Game;
use rustc_hash::FxHashMap;

/// Configuration for a replay
pub struct ReplayConfig {
    pub target: String,
    pub max_tries: usize,
}

impl ReplayConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_tries: Game::DEFAULT_MAX_TRIES,
        }
    }
}

/// One submitted row of a replay
pub struct RowOutcome {
    pub word: String,
    pub statuses: Vec<CellStatus>,
    /// Keycap summary as of this row
    pub keycaps: FxHashMap<char, CellStatus>,
}

/// Result of replaying a guess sequence
pub struct ReplayResult {
    pub target: String,
    pub rows: Vec<RowOutcome>,
    pub status: GameStatus,
    pub tries_left: usize,
    pub share_text: String,
    /// Guesses dropped because the game had already ended
    pub skipped: usize,
}

/// Replay a sequence of guesses against a target word
///
/// Each guess is typed letter by letter and submitted, then the row's
/// feedback is captured. Guesses beyond the winning or losing row are not
/// played; they are counted in [`ReplayResult::skipped`] instead.
///
/// # Errors
///
/// Returns an error if:
/// - The game configuration is invalid (bad target word or zero tries)
/// - A guess contains non-letters or has the wrong length
pub fn replay_game(config: &ReplayConfig, guesses: &[String]) -> Result<ReplayResult, String> {
    let mut game = Game::new(&config.target, config.max_tries).map_err(|e| e.to_string())?;

    let mut rows: Vec<RowOutcome> = Vec::new();
    let mut skipped = 0;

    for guess in guesses {
        if game.status().is_over() {
            skipped += 1;
            continue;
        }

        if !guess.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("Guess '{guess}' must be letters only"));
        }
        if guess.len() != game.word_length() {
            return Err(format!(
                "Guess '{guess}' must be {} letters",
                game.word_length()
            ));
        }

        for c in guess.chars() {
            game.press(Key::Letter(c));
        }
        game.press(Key::Enter);

        let row = game.cursor().row - 1;
        let statuses = (0..game.word_length())
            .map(|col| game.cell_status(row, col))
            .collect();

        rows.push(RowOutcome {
            word: game.attempt(row).text(),
            statuses,
            keycaps: game.keycap_summary(),
        });
    }

    Ok(ReplayResult {
        target: game.target().text().to_string(),
        tries_left: game.max_tries() - game.cursor().row,
        rows,
        status: game.status(),
        share_text: game.share_text(),
        skipped,
    })
}
