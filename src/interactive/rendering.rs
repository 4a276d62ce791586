//! TUI rendering with ratatui
//!
//! Visualizations for the Wordle board, keyboard and session state.

use super::app::{App, MessageStyle};
use crate::core::{CellStatus, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Keyboard rows in display order
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Status bar
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE - Terminal Edition")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut lines: Vec<Line> = vec![Line::from("")];

    for row in 0..game.max_tries() {
        let mut spans: Vec<Span> = Vec::new();

        for col in 0..game.word_length() {
            let letter = game
                .letter_at(row, col)
                .map_or(' ', |c| c.to_ascii_uppercase());
            let status = game.cell_status(row, col);

            let span = if status.is_evaluated() {
                Span::styled(format!(" {letter} "), status_style(status))
            } else if game.is_cell_active(row, col) {
                Span::styled(
                    format!("[{letter}]"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else if letter == ' ' {
                Span::styled("[ ]", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(
                    format!("[{letter}]"),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            };

            spans.push(span);
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Keyboard
            Constraint::Percentage(30), // Share grid
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_share(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.game.keycap_summary();
    let mut lines: Vec<Line> = vec![Line::from("")];

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans: Vec<Span> = vec![Span::raw(" ".repeat(2 * i))];

        for letter in row.chars() {
            let status = summary
                .get(&letter)
                .copied()
                .unwrap_or(CellStatus::Untested);

            let style = if status.is_evaluated() {
                status_style(status)
            } else {
                Style::default().fg(Color::White)
            };

            spans.push(Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // The two action caps map to physical keys in the terminal
    let cap_style = Style::default().fg(Color::Black).bg(Color::White);
    lines.push(Line::from(vec![
        Span::styled(" ENTER ⏎ ", cap_style),
        Span::raw("   "),
        Span::styled(" CLEAR ⌫ ", cap_style),
    ]));

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let (title, border_color, lines) = match app.game.status() {
        GameStatus::Won => (
            " 🎉 Share your win ",
            Color::Green,
            share_lines(&app.game.share_text()),
        ),
        GameStatus::Lost => (
            " Share your attempt ",
            Color::Red,
            share_lines(&app.game.share_text()),
        ),
        GameStatus::Active => (
            " Share ",
            Color::DarkGray,
            vec![
                Line::from(""),
                Line::from("Finish the game to get"),
                Line::from("a shareable grid"),
            ],
        ),
    };

    let share = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(share, area);
}

fn share_lines(share_text: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    lines.extend(share_text.lines().map(|line| Line::from(line.to_string())));
    lines
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let turn_text = if app.game.status().is_over() {
        format!("Round over ({})", app.game.status())
    } else {
        format!(
            "Turn: {}/{}",
            app.game.cursor().row + 1,
            app.game.max_tries()
        )
    };
    let turn = Paragraph::new(turn_text).alignment(Alignment::Center);
    f.render_widget(turn, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let dist_text = format!(
        "Wins by try: {}",
        app.stats
            .guess_distribution
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/")
    );
    let dist = Paragraph::new(dist_text).alignment(Alignment::Center);
    f.render_widget(dist, chunks[2]);

    let help_text = if app.game.status().is_over() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit | Backspace: Clear"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn status_style(status: CellStatus) -> Style {
    match status {
        CellStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellStatus::Untested => Style::default().fg(Color::White),
    }
}
