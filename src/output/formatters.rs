//! Formatting utilities for terminal output

use crate::core::Decision;

/// Uppercase a fragment with a dot between letters, e.g. `G·H·O`
#[must_use]
pub fn spaced_fragment(fragment: &str) -> String {
    if fragment.is_empty() {
        return "(empty)".to_string();
    }
    fragment
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join("·")
}

/// One-line summary of a decision
#[must_use]
pub fn describe_decision(decision: Decision) -> String {
    match decision {
        Decision::Continue(letter) => format!("play {}", letter.to_ascii_uppercase()),
        Decision::HumanWins(letter) => format!(
            "forced to play {} - human wins",
            letter.to_ascii_uppercase()
        ),
        Decision::ComputerWins(reason) => format!("computer wins - {reason}"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how long a losing letter can stall relative to the longest one
#[must_use]
pub fn stall_bar(length: usize, longest: usize, width: usize) -> String {
    create_progress_bar(length as f64, longest as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TerminalReason;

    #[test]
    fn spaced_fragment_uppercases() {
        assert_eq!(spaced_fragment("gho"), "G·H·O");
        assert_eq!(spaced_fragment(""), "(empty)");
    }

    #[test]
    fn describe_each_decision() {
        assert_eq!(describe_decision(Decision::Continue('s')), "play S");
        assert_eq!(
            describe_decision(Decision::HumanWins('h')),
            "forced to play H - human wins"
        );
        assert_eq!(
            describe_decision(Decision::ComputerWins(TerminalReason::NoWordStarts)),
            "computer wins - No word starts with these letters."
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn stall_bar_half() {
        assert_eq!(stall_bar(3, 6, 10), "█████░░░░░");
        assert_eq!(stall_bar(0, 0, 4), "░░░░");
    }
}
