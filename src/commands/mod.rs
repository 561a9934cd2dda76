//! Command implementations

pub mod analyze;
pub mod next;
pub mod selfplay;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_fragment};
pub use next::{MoveReport, next_letter};
pub use selfplay::{SelfPlayConfig, SelfPlayStatistics, run_selfplay};
pub use simple::run_simple;
