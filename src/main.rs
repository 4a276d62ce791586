//! Wordle - CLI
//!
//! Terminal Wordle with TUI, plain CLI and scripted replay modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_play::{
    commands::{ReplayConfig, replay_game, run_simple},
    engine::Game,
    interactive::{App, run_tui},
    output::print_replay_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_play",
    about = "Play Wordle in the terminal: full TUI, plain CLI, or scripted replays",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target word to guess
    #[arg(short = 'w', long, global = true, default_value = "hello")]
    word: String,

    /// Number of tries on the board
    #[arg(short = 't', long, global = true, default_value_t = Game::DEFAULT_MAX_TRIES)]
    tries: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one whole guess per prompt)
    Simple,

    /// Replay a scripted sequence of guesses
    Replay {
        /// Guesses to submit, in order
        guesses: Vec<String>,

        /// Show the keycap summary after each turn
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.word, cli.tries),
        Commands::Simple => run_simple(&cli.word, cli.tries).map_err(|e| anyhow::anyhow!(e)),
        Commands::Replay { guesses, verbose } => {
            run_replay_command(&cli.word, cli.tries, &guesses, verbose)
        }
    }
}

fn run_play_command(word: &str, tries: usize) -> Result<()> {
    let app = App::new(word, tries)?;
    run_tui(app)
}

fn run_replay_command(word: &str, tries: usize, guesses: &[String], verbose: bool) -> Result<()> {
    let config = ReplayConfig {
        target: word.to_string(),
        max_tries: tries,
    };

    let result = replay_game(&config, guesses).map_err(|e| anyhow::anyhow!(e))?;
    print_replay_result(&result, verbose);
    Ok(())
}
