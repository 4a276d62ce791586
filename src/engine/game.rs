//! The game state machine
//!
//! `Game` owns the board and cursor exclusively, consumes [`Key`] events and
//! exposes the derived views front-ends render from: per-cell statuses, the
//! overall game status, the keycap summary, and the share text.

use super::board::{Attempt, Board, Cursor};
use crate::core::{ALPHABET, CellStatus, GameStatus, Key, TargetWord, TargetWordError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for invalid game configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The target word failed validation
    Target(TargetWordError),
    /// A game needs at least one try
    ZeroTries,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target(err) => write!(f, "Invalid target word: {err}"),
            Self::ZeroTries => write!(f, "Number of tries must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Target(err) => Some(err),
            Self::ZeroTries => None,
        }
    }
}

impl From<TargetWordError> for ConfigError {
    fn from(err: TargetWordError) -> Self {
        Self::Target(err)
    }
}

/// A single game session
///
/// The engine is a synchronous state machine: feed it one [`Key`] at a time
/// with [`press`](Self::press) and read the results back through the query
/// methods. It performs no I/O and holds no resources beyond its own memory.
///
/// # Examples
/// ```
/// use wordle_play::core::{GameStatus, Key};
/// use wordle_play::engine::Game;
///
/// let mut game = Game::new("hello", Game::DEFAULT_MAX_TRIES).unwrap();
/// for c in "hello".chars() {
///     game.press(Key::Letter(c));
/// }
/// assert_eq!(game.press(Key::Enter), GameStatus::Won);
/// assert_eq!(game.share_text(), "🟩🟩🟩🟩🟩");
/// ```
pub struct Game {
    target: TargetWord,
    board: Board,
    cursor: Cursor,
    status: GameStatus,
}

impl Game {
    /// Standard number of tries
    pub const DEFAULT_MAX_TRIES: usize = 6;

    /// Create a new game against `word` with `max_tries` attempts
    ///
    /// The board dimensions follow from the arguments: `max_tries` rows of
    /// `word.len()` slots each.
    ///
    /// # Errors
    /// Returns `ConfigError` if the word is empty or contains non-letters,
    /// or if `max_tries` is zero.
    pub fn new(word: &str, max_tries: usize) -> Result<Self, ConfigError> {
        if max_tries == 0 {
            return Err(ConfigError::ZeroTries);
        }

        let target = TargetWord::new(word)?;
        let board = Board::new(max_tries, target.len());

        Ok(Self {
            target,
            board,
            cursor: Cursor::default(),
            status: GameStatus::Active,
        })
    }

    /// Process one key event and return the status after it
    ///
    /// All invalid inputs are no-ops rather than errors: CLEAR at the start
    /// of a row, ENTER on an incomplete row, a letter when the row is full,
    /// letters outside the alphabet, and any key at all once the game is
    /// over. The status is re-derived exactly once per accepted ENTER.
    ///
    /// The return value doubles as the status-change notification point:
    /// callers that care about the win/loss transition compare it against
    /// the status they observed before the call.
    pub fn press(&mut self, key: Key) -> GameStatus {
        if self.status.is_over() {
            return self.status;
        }

        match key {
            Key::Letter(c) => self.type_letter(c),
            Key::Clear => self.erase_letter(),
            Key::Enter => self.submit_row(),
        }

        self.status
    }

    fn type_letter(&mut self, c: char) {
        let c = c.to_ascii_lowercase();
        if !c.is_ascii_lowercase() {
            // Out-of-alphabet input is a no-op, like every invalid key
            return;
        }

        if self.cursor.col < self.target.len() {
            self.board
                .attempt_mut(self.cursor.row)
                .set_slot(self.cursor.col, c as u8);
            self.cursor.col += 1;
        }
    }

    fn erase_letter(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
            self.board
                .attempt_mut(self.cursor.row)
                .clear_slot(self.cursor.col);
        }
    }

    fn submit_row(&mut self) {
        if self.cursor.col < self.target.len() {
            // Incomplete row: silently rejected, no dictionary is modeled
            return;
        }

        debug_assert!(self.board.attempt(self.cursor.row).is_full());
        self.cursor.row += 1;
        self.cursor.col = 0;
        self.status = self.derive_status();
    }

    /// Derive the game status from the most recently submitted row
    ///
    /// Runs synchronously inside the ENTER branch, after the cursor has
    /// advanced. The win check takes priority over the out-of-tries check,
    /// so a correct guess on the final row wins.
    fn derive_status(&self) -> GameStatus {
        debug_assert!(self.cursor.row > 0, "no row has been submitted");
        let last = self.board.attempt(self.cursor.row - 1);

        let is_correct = self
            .target
            .letters()
            .iter()
            .enumerate()
            .all(|(col, &letter)| last.slot(col) == Some(letter));

        if is_correct {
            GameStatus::Won
        } else if self.cursor.row == self.board.tries() {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    /// Evaluate a single board cell
    ///
    /// Cells in rows that have not been submitted yet are `Untested`. For
    /// submitted rows: `Correct` if the letter matches the target at that
    /// column, `Present` if it occurs anywhere else in the target, `Absent`
    /// otherwise. Deterministic and side-effect-free.
    ///
    /// # Panics
    /// Panics if `row >= self.max_tries()` or `col >= self.word_length()`
    #[must_use]
    pub fn cell_status(&self, row: usize, col: usize) -> CellStatus {
        let slot = self.board.attempt(row).slot(col);

        if row >= self.cursor.row {
            return CellStatus::Untested;
        }

        match slot {
            Some(letter) if letter == self.target.letter_at(col) => CellStatus::Correct,
            Some(letter) if self.target.contains(letter) => CellStatus::Present,
            // Submitted rows are always full, so the empty case is unreachable
            _ => CellStatus::Absent,
        }
    }

    /// Best observed status per alphabet letter, for keyboard coloring
    ///
    /// Every alphabet letter gets an entry; letters that never appeared in a
    /// submitted row stay `Untested`. Aggregation keeps the highest-priority
    /// status seen for each letter, so a keycap never downgrades.
    #[must_use]
    pub fn keycap_summary(&self) -> FxHashMap<char, CellStatus> {
        let mut summary: FxHashMap<char, CellStatus> = ALPHABET
            .chars()
            .map(|letter| (letter, CellStatus::Untested))
            .collect();

        for row in 0..self.cursor.row {
            for col in 0..self.target.len() {
                let Some(letter) = self.board.attempt(row).slot(col) else {
                    continue;
                };
                let status = self.cell_status(row, col);
                if let Some(entry) = summary.get_mut(&char::from(letter)) {
                    *entry = (*entry).max(status);
                }
            }
        }

        summary
    }

    /// Render the submitted rows as a shareable emoji grid
    ///
    /// One line per submitted row, one symbol per column (🟩 correct,
    /// 🟨 present, ⬜ absent), joined with newlines. Rows still in progress
    /// are excluded, so the result is empty before the first submission.
    #[must_use]
    pub fn share_text(&self) -> String {
        (0..self.cursor.row)
            .map(|row| {
                (0..self.target.len())
                    .map(|col| match self.cell_status(row, col) {
                        CellStatus::Correct => '🟩',
                        CellStatus::Present => '🟨',
                        CellStatus::Absent => '⬜',
                        // Submitted rows always carry feedback
                        CellStatus::Untested => {
                            unreachable!("untested cell in a submitted row")
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Start over against the same target word
    ///
    /// Clears the board, returns the cursor to the origin and reopens the
    /// game. The target and the number of tries are unchanged.
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.tries(), self.target.len());
        self.cursor = Cursor::default();
        self.status = GameStatus::Active;
    }

    /// Current overall status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Snapshot of the write position
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The letter typed into a cell, if any
    ///
    /// # Panics
    /// Panics if `row >= self.max_tries()` or `col >= self.word_length()`
    #[must_use]
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.board.attempt(row).slot(col).map(char::from)
    }

    /// Check if a cell is the one the next letter will be written into
    ///
    /// Always false once the game is over.
    #[must_use]
    pub fn is_cell_active(&self, row: usize, col: usize) -> bool {
        !self.status.is_over() && row == self.cursor.row && col == self.cursor.col
    }

    /// Read-only view of one attempt row
    ///
    /// # Panics
    /// Panics if `row >= self.max_tries()`
    #[inline]
    #[must_use]
    pub fn attempt(&self, row: usize) -> &Attempt {
        self.board.attempt(row)
    }

    /// The secret word this game is played against
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }

    /// Number of letters per attempt (the board's column count)
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    /// Number of attempts on the board
    #[inline]
    #[must_use]
    pub fn max_tries(&self) -> usize {
        self.board.tries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new("hello", Game::DEFAULT_MAX_TRIES).unwrap()
    }

    fn type_word(game: &mut Game, word: &str) {
        for c in word.chars() {
            game.press(Key::Letter(c));
        }
    }

    fn submit_word(game: &mut Game, word: &str) -> GameStatus {
        type_word(game, word);
        game.press(Key::Enter)
    }

    fn board_snapshot(game: &Game) -> Vec<Attempt> {
        (0..game.max_tries())
            .map(|row| game.attempt(row).clone())
            .collect()
    }

    #[test]
    fn new_game_starts_empty_and_active() {
        let game = game();

        assert_eq!(game.status(), GameStatus::Active);
        assert_eq!(game.cursor(), Cursor { row: 0, col: 0 });
        assert_eq!(game.word_length(), 5);
        assert_eq!(game.max_tries(), 6);

        for row in 0..6 {
            for col in 0..5 {
                assert_eq!(game.letter_at(row, col), None);
                assert_eq!(game.cell_status(row, col), CellStatus::Untested);
            }
        }
    }

    #[test]
    fn new_rejects_zero_tries() {
        assert!(matches!(
            Game::new("hello", 0),
            Err(ConfigError::ZeroTries)
        ));
    }

    #[test]
    fn new_rejects_invalid_words() {
        assert!(matches!(
            Game::new("", 6),
            Err(ConfigError::Target(TargetWordError::Empty))
        ));
        assert!(matches!(
            Game::new("h3llo", 6),
            Err(ConfigError::Target(TargetWordError::InvalidCharacters))
        ));
    }

    #[test]
    fn typing_fills_slots_and_advances_cursor() {
        let mut game = game();
        type_word(&mut game, "he");

        assert_eq!(game.cursor(), Cursor { row: 0, col: 2 });
        assert_eq!(game.letter_at(0, 0), Some('h'));
        assert_eq!(game.letter_at(0, 1), Some('e'));
        assert_eq!(game.letter_at(0, 2), None);
    }

    #[test]
    fn typing_normalizes_uppercase() {
        let mut game = game();
        game.press(Key::Letter('H'));

        assert_eq!(game.letter_at(0, 0), Some('h'));
    }

    #[test]
    fn typing_ignored_when_row_is_full() {
        let mut game = game();
        type_word(&mut game, "hello");
        game.press(Key::Letter('x'));

        assert_eq!(game.cursor(), Cursor { row: 0, col: 5 });
        assert_eq!(game.attempt(0).text(), "hello");
    }

    #[test]
    fn typing_ignores_out_of_alphabet_input() {
        let mut game = game();
        game.press(Key::Letter('3'));
        game.press(Key::Letter(' '));
        game.press(Key::Letter('é'));

        assert_eq!(game.cursor(), Cursor { row: 0, col: 0 });
        assert_eq!(game.letter_at(0, 0), None);
    }

    #[test]
    fn clear_removes_previous_letter() {
        let mut game = game();
        type_word(&mut game, "he");
        game.press(Key::Clear);

        assert_eq!(game.cursor(), Cursor { row: 0, col: 1 });
        assert_eq!(game.letter_at(0, 0), Some('h'));
        assert_eq!(game.letter_at(0, 1), None);
    }

    #[test]
    fn clear_at_row_start_is_noop() {
        let mut game = game();
        game.press(Key::Clear);
        assert_eq!(game.cursor(), Cursor { row: 0, col: 0 });

        // A fresh row after a submission cannot delete into the previous row
        submit_word(&mut game, "world");
        game.press(Key::Clear);
        assert_eq!(game.cursor(), Cursor { row: 1, col: 0 });
        assert_eq!(game.attempt(0).text(), "world");
    }

    #[test]
    fn enter_with_incomplete_row_is_noop() {
        let mut game = game();
        type_word(&mut game, "hel");
        game.press(Key::Enter);

        assert_eq!(game.cursor(), Cursor { row: 0, col: 3 });
        assert_eq!(game.status(), GameStatus::Active);
        assert_eq!(game.cell_status(0, 0), CellStatus::Untested);
    }

    #[test]
    fn submitting_the_target_wins_with_all_correct() {
        let mut game = game();
        let status = submit_word(&mut game, "hello");

        assert_eq!(status, GameStatus::Won);
        assert_eq!(game.status(), GameStatus::Won);
        for col in 0..5 {
            assert_eq!(game.cell_status(0, col), CellStatus::Correct);
        }
    }

    #[test]
    fn wrong_guess_keeps_game_active() {
        let mut game = game();
        let status = submit_word(&mut game, "world");

        assert_eq!(status, GameStatus::Active);
        assert_eq!(game.cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn world_vs_hello_cell_statuses() {
        let mut game = game();
        submit_word(&mut game, "world");

        assert_eq!(game.cell_status(0, 0), CellStatus::Absent); // w
        assert_eq!(game.cell_status(0, 1), CellStatus::Present); // o
        assert_eq!(game.cell_status(0, 2), CellStatus::Absent); // r
        assert_eq!(game.cell_status(0, 3), CellStatus::Correct); // l
        assert_eq!(game.cell_status(0, 4), CellStatus::Absent); // d
    }

    #[test]
    fn duplicate_letters_all_marked_by_containment() {
        // Containment rule: every occurrence of a target letter is colored,
        // no per-letter consumption as in official Wordle scoring
        let mut game = game();
        submit_word(&mut game, "lolly");

        assert_eq!(game.cell_status(0, 0), CellStatus::Present); // l
        assert_eq!(game.cell_status(0, 1), CellStatus::Present); // o
        assert_eq!(game.cell_status(0, 2), CellStatus::Correct); // l
        assert_eq!(game.cell_status(0, 3), CellStatus::Correct); // l
        assert_eq!(game.cell_status(0, 4), CellStatus::Absent); // y
    }

    #[test]
    fn unsubmitted_rows_are_untested() {
        let mut game = game();
        submit_word(&mut game, "world");
        type_word(&mut game, "he");

        // The row being typed has letters but no feedback yet
        assert_eq!(game.letter_at(1, 0), Some('h'));
        assert_eq!(game.cell_status(1, 0), CellStatus::Untested);

        for row in 1..6 {
            for col in 0..5 {
                assert_eq!(game.cell_status(row, col), CellStatus::Untested);
            }
        }
    }

    #[test]
    fn losing_after_all_tries_are_used() {
        let mut game = game();
        for turn in 0..6 {
            let status = submit_word(&mut game, "world");
            if turn < 5 {
                assert_eq!(status, GameStatus::Active, "turn {turn}");
            } else {
                assert_eq!(status, GameStatus::Lost);
            }
        }
        assert_eq!(game.cursor(), Cursor { row: 6, col: 0 });
    }

    #[test]
    fn winning_on_the_last_try() {
        // The win check takes priority over the out-of-tries check
        let mut game = game();
        for _ in 0..5 {
            submit_word(&mut game, "world");
        }
        assert_eq!(submit_word(&mut game, "hello"), GameStatus::Won);
    }

    #[test]
    fn terminal_status_freezes_all_state() {
        let mut game = game();
        submit_word(&mut game, "hello");
        assert_eq!(game.status(), GameStatus::Won);

        let board_before = board_snapshot(&game);
        let cursor_before = game.cursor();
        let share_before = game.share_text();

        for key in [Key::Letter('x'), Key::Clear, Key::Enter] {
            assert_eq!(game.press(key), GameStatus::Won);
        }

        assert_eq!(board_snapshot(&game), board_before);
        assert_eq!(game.cursor(), cursor_before);
        assert_eq!(game.share_text(), share_before);
    }

    #[test]
    fn lost_game_also_ignores_input() {
        let mut game = game();
        for _ in 0..6 {
            submit_word(&mut game, "world");
        }
        assert_eq!(game.status(), GameStatus::Lost);

        let board_before = board_snapshot(&game);
        for key in [Key::Letter('h'), Key::Clear, Key::Enter] {
            assert_eq!(game.press(key), GameStatus::Lost);
        }
        assert_eq!(board_snapshot(&game), board_before);
    }

    #[test]
    fn clear_then_retype_still_wins() {
        let mut game = game();
        type_word(&mut game, "hellx");
        game.press(Key::Clear);
        game.press(Key::Letter('o'));

        assert_eq!(game.press(Key::Enter), GameStatus::Won);
    }

    #[test]
    fn cursor_stays_in_bounds_for_any_event_sequence() {
        let mut game = game();
        let storm = [
            Key::Clear,
            Key::Clear,
            Key::Letter('a'),
            Key::Letter('b'),
            Key::Enter,
            Key::Letter('c'),
            Key::Letter('d'),
            Key::Letter('e'),
            Key::Letter('f'),
            Key::Letter('g'),
            Key::Enter,
            Key::Clear,
            Key::Letter('h'),
            Key::Letter('i'),
            Key::Letter('j'),
            Key::Letter('k'),
            Key::Letter('l'),
            Key::Letter('m'),
            Key::Enter,
            Key::Enter,
            Key::Clear,
        ];

        for (i, &key) in storm.iter().cycle().take(200).enumerate() {
            game.press(key);
            let cursor = game.cursor();
            assert!(cursor.col <= game.word_length(), "col out of bounds at {i}");
            assert!(cursor.row <= game.max_tries(), "row out of bounds at {i}");
        }
    }

    #[test]
    fn keycap_summary_covers_the_whole_alphabet() {
        let game = game();
        let summary = game.keycap_summary();

        assert_eq!(summary.len(), 26);
        assert!(summary.values().all(|&s| s == CellStatus::Untested));
    }

    #[test]
    fn keycap_summary_keeps_best_status_per_letter() {
        let mut game = game();
        submit_word(&mut game, "world"); // l is Correct at col 3
        submit_word(&mut game, "drool"); // l is only Present here

        let summary = game.keycap_summary();
        assert_eq!(summary[&'l'], CellStatus::Correct); // never downgrades
        assert_eq!(summary[&'o'], CellStatus::Present);
        assert_eq!(summary[&'w'], CellStatus::Absent);
        assert_eq!(summary[&'r'], CellStatus::Absent);
        assert_eq!(summary[&'d'], CellStatus::Absent);
        assert_eq!(summary[&'h'], CellStatus::Untested); // never guessed
        assert_eq!(summary[&'z'], CellStatus::Untested);
    }

    #[test]
    fn keycap_summary_never_below_any_observed_cell() {
        let mut game = game();
        submit_word(&mut game, "world");
        submit_word(&mut game, "lolly");

        let summary = game.keycap_summary();
        for row in 0..game.cursor().row {
            for col in 0..game.word_length() {
                let letter = game.letter_at(row, col).unwrap();
                assert!(summary[&letter] >= game.cell_status(row, col));
            }
        }
    }

    #[test]
    fn share_text_is_empty_before_first_submission() {
        let mut game = game();
        assert_eq!(game.share_text(), "");

        // A row in progress is not part of the share grid
        type_word(&mut game, "hel");
        assert_eq!(game.share_text(), "");
    }

    #[test]
    fn share_text_for_a_win_is_one_green_line() {
        let mut game = game();
        submit_word(&mut game, "hello");

        assert_eq!(game.share_text(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_text_joins_rows_with_newlines() {
        let mut game = game();
        submit_word(&mut game, "world");
        submit_word(&mut game, "hello");

        assert_eq!(game.share_text(), "⬜🟨⬜🟩⬜\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn active_cell_follows_the_cursor() {
        let mut game = game();
        assert!(game.is_cell_active(0, 0));
        assert!(!game.is_cell_active(0, 1));

        game.press(Key::Letter('h'));
        assert!(game.is_cell_active(0, 1));
        assert!(!game.is_cell_active(0, 0));

        submit_word(&mut game, "ello"); // completes "hello"
        assert_eq!(game.status(), GameStatus::Won);
        for row in 0..6 {
            for col in 0..5 {
                assert!(!game.is_cell_active(row, col));
            }
        }
    }

    #[test]
    fn board_dimensions_follow_the_target_word() {
        let mut game = Game::new("hi", 3).unwrap();
        assert_eq!(game.word_length(), 2);
        assert_eq!(game.max_tries(), 3);

        submit_word(&mut game, "ha");
        assert_eq!(game.cell_status(0, 0), CellStatus::Correct);
        assert_eq!(game.cell_status(0, 1), CellStatus::Absent);
        assert_eq!(game.status(), GameStatus::Active);
    }

    #[test]
    fn target_accessor_reveals_the_word() {
        let game = game();
        assert_eq!(game.target().text(), "hello");
    }

    #[test]
    fn reset_reopens_a_finished_game() {
        let mut game = game();
        submit_word(&mut game, "hello");
        assert_eq!(game.status(), GameStatus::Won);

        game.reset();

        assert_eq!(game.status(), GameStatus::Active);
        assert_eq!(game.cursor(), Cursor { row: 0, col: 0 });
        assert_eq!(game.letter_at(0, 0), None);
        assert_eq!(game.target().text(), "hello");

        // The fresh board plays normally again
        assert_eq!(submit_word(&mut game, "hello"), GameStatus::Won);
    }
}
