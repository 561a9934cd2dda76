//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_move, print_move_json, print_selfplay_statistics,
    print_trie_summary,
};
