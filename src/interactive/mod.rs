//! Interactive terminal game
//!
//! Play Ghost against the engine in a ratatui interface.

mod app;
mod rendering;

pub use app::{App, InputMode, Player, run_tui};
