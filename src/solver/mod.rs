//! Ghost decision engine
//!
//! Parity search, candidate resolution and move selection over the dictionary trie.

mod candidates;
mod engine;
mod outcome;
mod selector;

pub use candidates::{Candidates, Loser, Resolution, resolve};
pub use engine::{DEFAULT_MIN_LENGTH, EngineConfig, GhostEngine};
pub use outcome::{Outcome, classify};
pub use selector::{RngTieBreaker, SelectionError, TieBreaker, choose};
