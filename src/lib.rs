//! Ghost Solver
//!
//! A Ghost word game engine: a pruned dictionary trie plus a depth-parity search that picks the
//! computer's next letter.
//!
//! # Quick Start
//!
//! ```rust
//! use ghost_solver::core::Decision;
//! use ghost_solver::solver::GhostEngine;
//!
//! // Build once, then share by reference
//! let engine = GhostEngine::build(["asgf", "asd", "bsd"], 3);
//!
//! assert_eq!(engine.next_move("as").unwrap(), Decision::Continue('g'));
//! println!("{}", serde_json::to_string(&engine.next_move("bsd").unwrap().to_response()).unwrap());
//! ```

// Core domain types
pub mod core;

// Dictionary trie
pub mod trie;

// Decision engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
