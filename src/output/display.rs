//! Display functions for command results

use super::formatters::{keycap_line, statuses_to_emoji};
use crate::commands::ReplayResult;
use crate::core::GameStatus;
use colored::Colorize;

/// Print the outcome of a scripted replay
pub fn print_replay_result(result: &ReplayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying against: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, row) in result.rows.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            row.word.to_uppercase(),
            statuses_to_emoji(&row.statuses)
        );

        if verbose {
            let keycaps = keycap_line(&row.keycaps);
            if !keycaps.is_empty() {
                println!("  Keycaps: {keycaps}");
            }
        }
    }

    println!();
    match result.status {
        GameStatus::Won => {
            println!(
                "{}",
                format!("✅ Guessed it in {} tries!", result.rows.len())
                    .green()
                    .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{}",
                format!(
                    "❌ Out of tries! The word was {}",
                    result.target.to_uppercase()
                )
                .red()
                .bold()
            );
        }
        GameStatus::Active => {
            println!(
                "{}",
                format!("⏳ Game still open with {} tries left", result.tries_left).yellow()
            );
        }
    }

    if result.skipped > 0 {
        println!(
            "{}",
            format!(
                "   ({} guesses ignored after the game ended)",
                result.skipped
            )
            .bright_black()
        );
    }

    if !result.share_text.is_empty() {
        print_share_block(&result.share_text);
    }
}

/// Print the shareable emoji grid with a small header
pub fn print_share_block(share_text: &str) {
    println!("\n{}", "Share your result:".bright_cyan().bold());
    for line in share_text.lines() {
        println!("  {line}");
    }
}
