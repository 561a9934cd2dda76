//! Core domain types for Ghost
//!
//! Fragments typed by the players and the decisions the engine hands back.
//! Nothing here knows about the dictionary.

mod decision;
mod fragment;

pub use decision::{Decision, MoveResponse, TerminalReason};
pub use fragment::{Fragment, FragmentError};
