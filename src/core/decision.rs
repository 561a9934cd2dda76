//! Engine decisions and their wire shape

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the computer wins without playing a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalReason {
    /// No dictionary word starts with the fragment
    NoWordStarts,
    /// The fragment already spells an accepted word
    CompletedWord,
}

impl TerminalReason {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoWordStarts => "No word starts with these letters.",
            Self::CompletedWord => "You have completed a valid word.",
        }
    }
}

impl fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// The engine's answer for one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Play this letter; the game goes on
    Continue(char),
    /// The game is already over in the computer's favor
    ComputerWins(TerminalReason),
    /// The computer is forced to play this letter, which completes a word
    HumanWins(char),
}

impl Decision {
    /// The letter the engine plays, if any
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Continue(letter) | Self::HumanWins(letter) => Some(letter),
            Self::ComputerWins(_) => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Continue(_))
    }

    /// Convert into the JSON shape served to clients
    #[must_use]
    pub fn to_response(self) -> MoveResponse {
        match self {
            Self::Continue(letter) => MoveResponse {
                letter: letter.to_string(),
                win: String::new(),
                reason: None,
            },
            Self::HumanWins(letter) => MoveResponse {
                letter: letter.to_string(),
                win: "human".to_string(),
                reason: None,
            },
            Self::ComputerWins(reason) => MoveResponse {
                letter: String::new(),
                win: "computer".to_string(),
                reason: Some(reason.message().to_string()),
            },
        }
    }
}

/// Decision as serialized for a transport: `{"letter", "win", "reason"?}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub letter: String,
    pub win: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
