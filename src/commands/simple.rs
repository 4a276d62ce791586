//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: one whole guess per prompt.

use crate::core::{GameStatus, Key};
use crate::engine::Game;
use crate::output::formatters::{keycap_line, statuses_to_emoji};
use crate::output::print_share_block;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the game configuration is invalid or if there's an
/// I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(word: &str, max_tries: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Text Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word. After each guess you get one symbol per letter:\n");
    println!("  - 🟩 right letter, right spot");
    println!("  - 🟨 the word contains this letter somewhere else");
    println!("  - ⬜ the word does not contain this letter\n");
    println!("Commands: 'quit' to exit, 'new' to restart, 'board' and 'keys' to review\n");

    let mut game = Game::new(word, max_tries).map_err(|e| e.to_string())?;

    loop {
        while !game.status().is_over() {
            let turn = game.cursor().row + 1;
            println!("────────────────────────────────────────────────────────────");
            println!(
                "Turn {turn}/{}: enter a {}-letter word",
                game.max_tries(),
                game.word_length()
            );

            let input = get_user_input("Guess")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    game.reset();
                    println!("\n🔄 New game started!\n");
                    continue;
                }
                "board" => {
                    print_board(&game);
                    continue;
                }
                "keys" => {
                    print_keycaps(&game);
                    continue;
                }
                _ => {}
            }

            if !input.chars().all(|c| c.is_ascii_alphabetic())
                || input.len() != game.word_length()
            {
                println!(
                    "❌ Guesses must be exactly {} letters, 'a' to 'z'\n",
                    game.word_length()
                );
                continue;
            }

            for c in input.chars() {
                game.press(Key::Letter(c));
            }
            game.press(Key::Enter);

            let row = game.cursor().row - 1;
            let statuses: Vec<_> = (0..game.word_length())
                .map(|col| game.cell_status(row, col))
                .collect();

            println!(
                "\n  {} {}",
                input.to_uppercase().bright_white().bold(),
                statuses_to_emoji(&statuses)
            );
            print_keycaps(&game);
        }

        match game.status() {
            GameStatus::Won => print_win(&game),
            GameStatus::Lost => print_loss(&game),
            GameStatus::Active => unreachable!("loop exits only on a finished game"),
        }

        print_share_block(&game.share_text());
        println!();

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                game.reset();
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_board(game: &Game) {
    println!();
    for row in 0..game.cursor().row {
        let statuses: Vec<_> = (0..game.word_length())
            .map(|col| game.cell_status(row, col))
            .collect();
        println!(
            "  {}. {} {}",
            (row + 1).to_string().bright_black(),
            game.attempt(row).text().to_uppercase(),
            statuses_to_emoji(&statuses)
        );
    }
    println!();
}

fn print_keycaps(game: &Game) {
    let line = keycap_line(&game.keycap_summary());
    if !line.is_empty() {
        println!("  Keys: {line}\n");
    }
}

fn print_win(game: &Game) {
    let turn = game.cursor().row;

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  Y O U   G O T   I T !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match turn {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding read!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Down to the wire!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Guessed in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "try" } else { "tries" }
    );

    print_board(game);
    println!("{}", "═".repeat(70).bright_cyan());
}

fn print_loss(game: &Game) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        format!(
            "    ❌ Out of tries! The word was {}    ",
            game.target().text().to_uppercase()
        )
        .red()
        .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    print_board(game);
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
