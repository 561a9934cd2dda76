//! Main Ghost engine interface

use super::candidates::{Resolution, resolve};
use super::selector::{RngTieBreaker, SelectionError, TieBreaker, choose};
use crate::core::Decision;
use crate::trie::DictionaryTrie;

/// Words shorter than this never count as a completed word
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub min_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// Main Ghost engine
///
/// Owns the dictionary trie. Build it once at startup and share it by reference; every method
/// takes `&self`, so any number of turns can be evaluated concurrently.
#[derive(Debug, Clone)]
pub struct GhostEngine {
    trie: DictionaryTrie,
}

impl GhostEngine {
    /// Build an engine from a word list, in source order
    pub fn build<I, S>(words: I, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            trie: DictionaryTrie::build(words, min_length),
        }
    }

    /// Build an engine from a word list with the given configuration
    pub fn with_config<I, S>(words: I, config: EngineConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(words, config.min_length)
    }

    #[inline]
    #[must_use]
    pub const fn trie(&self) -> &DictionaryTrie {
        &self.trie
    }

    /// Classify the next letters for `fragment` without choosing one
    #[must_use]
    pub fn resolve(&self, fragment: &str) -> Resolution {
        resolve(&self.trie, fragment)
    }

    /// Decide the computer's move for `fragment`, breaking ties at random
    ///
    /// # Errors
    /// Returns [`SelectionError`] if the trie is malformed at `fragment`.
    ///
    /// # Examples
    /// ```
    /// use ghost_solver::core::Decision;
    /// use ghost_solver::solver::GhostEngine;
    ///
    /// let engine = GhostEngine::build(["asgf", "asd", "bsd"], 3);
    /// assert_eq!(engine.next_move("as").unwrap(), Decision::Continue('g'));
    /// ```
    pub fn next_move(&self, fragment: &str) -> Result<Decision, SelectionError> {
        self.next_move_with(fragment, &mut RngTieBreaker::thread())
    }

    /// Decide the computer's move for `fragment` using the given tie breaker
    ///
    /// # Errors
    /// Returns [`SelectionError`] if the trie is malformed at `fragment`.
    pub fn next_move_with<T: TieBreaker + ?Sized>(
        &self,
        fragment: &str,
        tie_breaker: &mut T,
    ) -> Result<Decision, SelectionError> {
        let resolution = self.resolve(fragment);
        choose(&resolution, fragment.chars().count(), tie_breaker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TerminalReason;

    struct FirstPick;

    impl TieBreaker for FirstPick {
        fn pick(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn three_words() -> GhostEngine {
        GhostEngine::build(["asgf", "asd", "bsd"], 3)
    }

    fn five_words() -> GhostEngine {
        GhostEngine::build(["asgf", "asd", "bsd", "csdfgh", "cdml"], 2)
    }

    #[test]
    fn only_child_is_played() {
        let engine = three_words();
        assert_eq!(engine.next_move("a").unwrap(), Decision::Continue('s'));
        assert_eq!(engine.next_move("b").unwrap(), Decision::Continue('s'));
    }

    #[test]
    fn unique_winner_beats_short_loser() {
        let engine = three_words();
        assert_eq!(engine.next_move("as").unwrap(), Decision::Continue('g'));
    }

    #[test]
    fn completed_word_ends_the_game() {
        let engine = three_words();
        assert_eq!(
            engine.next_move("bsd").unwrap(),
            Decision::ComputerWins(TerminalReason::CompletedWord)
        );
    }

    #[test]
    fn unknown_prefix_ends_the_game() {
        let engine = three_words();
        assert_eq!(
            engine.next_move("z").unwrap(),
            Decision::ComputerWins(TerminalReason::NoWordStarts)
        );
    }

    #[test]
    fn longest_loser_stalls() {
        let engine = five_words();
        assert_eq!(engine.next_move("c").unwrap(), Decision::Continue('s'));
    }

    #[test]
    fn forced_completion_is_a_human_win() {
        let engine = five_words();
        assert_eq!(engine.next_move("csdfg").unwrap(), Decision::HumanWins('h'));
    }

    #[test]
    fn injected_tie_breaker_is_used() {
        let engine = GhostEngine::build(["abcd", "axyz"], 4);
        // Both "b" and "x" lead to a word completed on the fourth letter
        let decision = engine.next_move_with("a", &mut FirstPick).unwrap();
        assert_eq!(decision, Decision::Continue('b'));
    }

    #[test]
    fn config_defaults_to_four_letters() {
        let engine = GhostEngine::with_config(["ghost", "gho"], EngineConfig::default());
        assert_eq!(engine.trie().min_length(), DEFAULT_MIN_LENGTH);
        assert!(!engine.trie().locate("gho").unwrap().is_word_end());
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GhostEngine>();

        let engine = five_words();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| engine.next_move("csdfg").unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), Decision::HumanWins('h'));
            }
        });
    }
}
