//! Fragment analysis command
//!
//! Shows how the engine classifies every next letter of a fragment.

use crate::core::Fragment;
use crate::solver::{GhostEngine, Resolution};

/// Result of analyzing a fragment
pub struct AnalysisResult {
    pub fragment: Fragment,
    pub resolution: Resolution,
    /// Words still reachable from the fragment
    pub reachable_words: usize,
}

/// Classify the next letters of `input`
///
/// # Errors
///
/// Returns an error if the input is not made of letters.
pub fn analyze_fragment(engine: &GhostEngine, input: &str) -> Result<AnalysisResult, String> {
    let fragment = Fragment::new(input).map_err(|e| format!("Invalid fragment: {e}"))?;

    let reachable_words = engine
        .trie()
        .locate(fragment.as_str())
        .map_or(0, |node| node.word_count());
    let resolution = engine.resolve(fragment.as_str());

    Ok(AnalysisResult {
        fragment,
        resolution,
        reachable_words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TerminalReason;
    use crate::solver::Loser;

    fn engine() -> GhostEngine {
        GhostEngine::build(["asgf", "asd", "bsd", "csdfgh", "cdml"], 2)
    }

    #[test]
    fn analyze_live_fragment() {
        let result = analyze_fragment(&engine(), "c").unwrap();
        assert_eq!(result.reachable_words, 2);

        let Resolution::Candidates(candidates) = result.resolution else {
            panic!("expected candidates");
        };
        assert!(candidates.winners.is_empty());
        assert_eq!(
            candidates.losers,
            vec![
                Loser {
                    letter: 's',
                    length: 6
                },
                Loser {
                    letter: 'd',
                    length: 4
                },
            ]
        );
    }

    #[test]
    fn analyze_unknown_fragment() {
        let result = analyze_fragment(&engine(), "zz").unwrap();
        assert_eq!(result.reachable_words, 0);
        assert_eq!(
            result.resolution,
            Resolution::Terminal(TerminalReason::NoWordStarts)
        );
    }

    #[test]
    fn analyze_invalid_fragment() {
        assert!(analyze_fragment(&engine(), "c3").is_err());
    }
}
