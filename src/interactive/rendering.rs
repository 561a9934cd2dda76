//! TUI rendering with ratatui
//!
//! Board, hints and status for the Ghost game.

use super::app::{App, InputMode, MessageStyle, Player};
use crate::output::formatters::stall_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("👻 GHOST - Don't finish the word")
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

fn player_color(player: Player) -> Color {
    match player {
        Player::Human => Color::Yellow,
        Player::Computer => Color::Magenta,
    }
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Word
            Constraint::Percentage(60), // History
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let letters: Vec<Span> = if app.moves.is_empty() {
        vec![Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        app.moves
            .iter()
            .map(|entry| {
                Span::styled(
                    format!(" {} ", entry.letter.to_ascii_uppercase()),
                    Style::default()
                        .fg(player_color(entry.player))
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect()
    };

    let content = vec![
        Line::from(letters),
        Line::from(""),
        Line::from(vec![
            Span::styled("■", Style::default().fg(player_color(Player::Human))),
            Span::raw(" you  "),
            Span::styled("■", Style::default().fg(player_color(Player::Computer))),
            Span::raw(" computer"),
        ]),
        Line::from(format!("Letters played: {}", app.fragment.len())),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .moves
        .iter()
        .enumerate()
        .rev()
        .take(8)
        .map(|(i, entry)| {
            let who = match entry.player {
                Player::Human => "You",
                Player::Computer => "Computer",
            };
            ListItem::new(format!(
                "{}: {who} played {}",
                i + 1,
                entry.letter.to_ascii_uppercase()
            ))
            .style(Style::default().fg(player_color(entry.player)))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" Moves ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Hints
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_hints(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let content = match (&app.hints, app.show_hints) {
        (_, false) => vec![Line::from("Press '?' to show hints")],
        (None, true) => vec![Line::from("No moves left")],
        (Some(candidates), true) => {
            let mut lines = Vec::new();
            let winners: String = candidates
                .winners
                .iter()
                .map(|c| c.to_ascii_uppercase().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(Line::from(vec![
                Span::raw("Safe: "),
                Span::styled(
                    if winners.is_empty() {
                        "none".to_string()
                    } else {
                        winners
                    },
                    Style::default().fg(Color::Green),
                ),
            ]));

            let longest = candidates.longest_loss().unwrap_or(0);
            for loser in candidates.losers.iter().take(8) {
                lines.push(Line::from(Span::styled(
                    format!(
                        "{} [{}] {}",
                        loser.letter.to_ascii_uppercase(),
                        stall_bar(loser.length, longest, 12),
                        loser.length
                    ),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Hints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::GameOver {
            winner: Player::Human,
        } => (
            " 🎉 YOU WIN! 🎉 | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        InputMode::GameOver {
            winner: Player::Computer,
        } => (
            " 👻 GHOST! I win | Press 'n' for new game or 'q' to quit ",
            Color::Red,
        ),
        InputMode::Playing => (" Your letter (a-z) ", Color::Yellow),
    };

    let input = Paragraph::new(app.fragment.as_str().to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = format!("Min word: {} letters", app.engine.trie().min_length());
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "You {} - {} Computer",
        app.stats.human_wins, app.stats.computer_wins
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.input_mode == InputMode::Playing {
        "Esc: Quit | Backspace: Undo | Tab: New Game | ?: Hints"
    } else {
        "q: Quit | n: New Game"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
