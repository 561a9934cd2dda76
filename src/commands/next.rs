//! Next-letter command
//!
//! Asks the engine for its move on a single fragment.

use crate::core::{Decision, Fragment};
use crate::solver::{GhostEngine, TieBreaker};

/// The engine's answer for one fragment
pub struct MoveReport {
    pub fragment: Fragment,
    pub decision: Decision,
}

impl MoveReport {
    /// The word as it stands after the engine's letter, if one was played
    #[must_use]
    pub fn resulting_word(&self) -> String {
        let mut word = self.fragment.as_str().to_string();
        if let Some(letter) = self.decision.letter() {
            word.push(letter);
        }
        word
    }
}

/// Decide the computer's letter for `input`
///
/// # Errors
///
/// Returns an error if the input is not made of letters or if the engine finds no candidate
/// for a live fragment.
pub fn next_letter<T: TieBreaker + ?Sized>(
    engine: &GhostEngine,
    input: &str,
    tie_breaker: &mut T,
) -> Result<MoveReport, String> {
    let fragment = Fragment::new(input).map_err(|e| format!("Invalid fragment: {e}"))?;
    let decision = engine
        .next_move_with(fragment.as_str(), tie_breaker)
        .map_err(|e| format!("Engine failure: {e}"))?;

    Ok(MoveReport { fragment, decision })
}
