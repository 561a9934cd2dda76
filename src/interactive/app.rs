//! TUI application state and logic

use crate::core::{Decision, Fragment};
use crate::solver::{Candidates, GhostEngine, Resolution};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub engine: &'a GhostEngine,
    pub fragment: Fragment,
    pub moves: Vec<MoveEntry>,
    /// The human's options at the current fragment
    pub hints: Option<Candidates>,
    pub show_hints: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    Computer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver { winner: Player },
}

#[derive(Debug, Clone)]
pub struct MoveEntry {
    pub player: Player,
    pub letter: char,
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
    pub human_wins: usize,
    pub computer_wins: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: &'a GhostEngine) -> Self {
        let mut app = Self {
            engine,
            fragment: Fragment::default(),
            moves: Vec::new(),
            hints: None,
            show_hints: false,
            messages: vec![
                Message {
                    text: "Welcome! Add letters in turn; don't complete a word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "You go first. Type a letter to play it.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
        };
        app.refresh_hints();
        app
    }

    /// Classify the human's options at the current fragment
    pub fn refresh_hints(&mut self) {
        self.hints = match self.engine.resolve(self.fragment.as_str()) {
            Resolution::Candidates(candidates) => Some(candidates),
            Resolution::Terminal(_) => None,
        };
    }

    /// Play the human's letter, then the computer's reply
    pub fn play_letter(&mut self, letter: char) {
        if self.input_mode != InputMode::Playing {
            return;
        }
        if let Err(e) = self.fragment.push(letter) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }
        self.moves.push(MoveEntry {
            player: Player::Human,
            letter: letter.to_ascii_lowercase(),
        });

        match self.engine.next_move(self.fragment.as_str()) {
            Ok(Decision::Continue(reply)) => {
                if self.push_computer(reply) {
                    self.add_message(
                        &format!("I play {}", reply.to_ascii_uppercase()),
                        MessageStyle::Info,
                    );
                    self.refresh_hints();
                }
            }
            Ok(Decision::HumanWins(reply)) => {
                if self.push_computer(reply) {
                    let text = format!(
                        "I had to complete {}. You win! 🎉",
                        self.fragment.as_str().to_uppercase()
                    );
                    self.finish(Player::Human, &text);
                }
            }
            Ok(Decision::ComputerWins(reason)) => {
                let text = format!("{reason} I win! 👻");
                self.finish(Player::Computer, &text);
            }
            Err(e) => {
                self.take_back_human();
                self.add_message(&format!("Engine failure: {e}"), MessageStyle::Error);
            }
        }
    }

    /// Append the computer's reply; an unplayable reply takes back the whole turn
    fn push_computer(&mut self, letter: char) -> bool {
        if let Err(e) = self.fragment.push(letter) {
            self.take_back_human();
            self.add_message(
                &format!("Engine replied with an unplayable letter: {e}"),
                MessageStyle::Error,
            );
            return false;
        }
        self.moves.push(MoveEntry {
            player: Player::Computer,
            letter,
        });
        true
    }

    fn take_back_human(&mut self) {
        self.fragment.pop();
        self.moves.pop();
    }

    fn finish(&mut self, winner: Player, text: &str) {
        self.stats.total_games += 1;
        match winner {
            Player::Human => self.stats.human_wins += 1,
            Player::Computer => self.stats.computer_wins += 1,
        }
        self.hints = None;
        self.input_mode = InputMode::GameOver { winner };
        let style = match winner {
            Player::Human => MessageStyle::Success,
            Player::Computer => MessageStyle::Error,
        };
        self.add_message(text, style);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.fragment.clear();
        self.moves.clear();
        self.messages.clear();
        self.input_mode = InputMode::Playing;
        self.add_message("New game started! You go first.", MessageStyle::Info);
        self.refresh_hints();
    }

    /// Take back the last round: the computer's reply and the human letter before it
    pub fn undo_last(&mut self) {
        if self.input_mode != InputMode::Playing {
            return;
        }
        let Some(last_human) = self
            .moves
            .iter()
            .rposition(|entry| entry.player == Player::Human)
        else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        };

        while self.moves.len() > last_human {
            self.moves.pop();
            self.fragment.pop();
        }
        self.refresh_hints();
        self.add_message("Undone!", MessageStyle::Info);
    }

    pub fn toggle_hints(&mut self) {
        self.show_hints = !self.show_hints;
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
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
            }

            match app.input_mode {
                InputMode::GameOver { .. } => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') | KeyCode::Enter => {
                        app.new_game();
                    }
                    _ => {
                        // Game over, ignore other keys
                    }
                },
                InputMode::Playing => match key.code {
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.new_game();
                    }
                    KeyCode::Backspace => {
                        app.undo_last();
                    }
                    KeyCode::Char('?') => {
                        app.toggle_hints();
                    }
                    KeyCode::Char(c)
                        if c.is_ascii_alphabetic()
                            && !key.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        app.play_letter(c);
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
