//! TUI application state and logic

use crate::core::{GameStatus, Key};
use crate::engine::{ConfigError, Game};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins per number of tries used, indexed by tries - 1
    pub guess_distribution: Vec<usize>,
}

impl App {
    /// Create the application around a fresh game
    ///
    /// # Errors
    ///
    /// Returns an error if the target word or the number of tries is invalid.
    pub fn new(word: &str, max_tries: usize) -> Result<Self, ConfigError> {
        let game = Game::new(word, max_tries)?;

        Ok(Self {
            stats: Statistics {
                total_games: 0,
                games_won: 0,
                guess_distribution: vec![0; game.max_tries()],
            },
            game,
            messages: vec![
                Message {
                    text: "Welcome! Type letters to guess, Enter to submit.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Backspace clears, Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        })
    }

    /// Forward one key to the game and react to a status change
    pub fn press_key(&mut self, key: Key) {
        let before = self.game.status();
        let after = self.game.press(key);

        if before == after {
            return;
        }

        match after {
            GameStatus::Won => self.celebrate_win(),
            GameStatus::Lost => self.reveal_loss(),
            GameStatus::Active => {}
        }
    }

    fn celebrate_win(&mut self) {
        self.stats.total_games += 1;
        self.stats.games_won += 1;

        let tries = self.game.cursor().row;
        if let Some(count) = self.stats.guess_distribution.get_mut(tries - 1) {
            *count += 1;
        }

        let celebration = match tries {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two tries! 🔥",
            3 => "✨ SPLENDID! Three tries! ✨",
            4 => "👏 GREAT JOB! Four tries! 👏",
            5 => "🎉 NICE WORK! Five tries! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 GOT IT! 🎊",
        };

        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn reveal_loss(&mut self) {
        self.stats.total_games += 1;

        let reveal = format!(
            "❌ Out of tries! The word was {}",
            self.game.target().text().to_uppercase()
        );
        self.add_message(&reveal, MessageStyle::Error);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.messages.clear();
        self.add_message("New game started! Type your first guess.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else if app.game.status().is_over() {
                // Letters no longer reach the game; free the keys for commands
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {}
                }
            } else {
                // 'q' is a playable letter here, so quitting is Esc or Ctrl-C
                match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter => {
                        app.press_key(Key::Enter);
                    }
                    KeyCode::Backspace => {
                        app.press_key(Key::Clear);
                    }
                    KeyCode::Char(c) => {
                        if let Some(letter) = Key::letter(c) {
                            app.press_key(letter);
                        }
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
