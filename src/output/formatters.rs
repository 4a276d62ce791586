//! Formatting utilities for terminal output

use crate::core::CellStatus;
use rustc_hash::FxHashMap;

/// Map a cell status to its grid symbol
#[must_use]
pub const fn status_symbol(status: CellStatus) -> char {
    match status {
        CellStatus::Correct => '🟩',
        CellStatus::Present => '🟨',
        CellStatus::Absent => '⬜',
        CellStatus::Untested => '⬛',
    }
}

/// Format a row of cell statuses as an emoji string
#[must_use]
pub fn statuses_to_emoji(statuses: &[CellStatus]) -> String {
    statuses.iter().copied().map(status_symbol).collect()
}

/// Format a keycap summary as one alphabet-ordered line
///
/// Only letters that have been evaluated appear; untested letters are
/// skipped. Returns an empty string before the first submitted row.
#[must_use]
pub fn keycap_line(summary: &FxHashMap<char, CellStatus>) -> String {
    let mut entries: Vec<(char, CellStatus)> = summary
        .iter()
        .filter(|(_, status)| status.is_evaluated())
        .map(|(&letter, &status)| (letter, status))
        .collect();
    entries.sort_unstable_by_key(|&(letter, _)| letter);

    entries
        .iter()
        .map(|&(letter, status)| {
            format!("{}{}", letter.to_ascii_uppercase(), status_symbol(status))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
