//! Candidate resolution for the current fragment

use super::outcome::{Outcome, classify};
use crate::core::TerminalReason;
use crate::trie::DictionaryTrie;
use tracing::debug;

/// A next letter with no favorable completion, ranked by how long it can stall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loser {
    pub letter: char,
    /// Length of the longest word reachable through `letter` (0 if none)
    pub length: usize,
}

/// Classified next letters for a live fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    /// Letters whose subtree holds a word ending on the opponent's turn
    pub winners: Vec<char>,
    /// Every other child letter, in trie order
    pub losers: Vec<Loser>,
}

impl Candidates {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.winners.is_empty() && self.losers.is_empty()
    }

    /// Longest stall among the losers, if there are any
    #[must_use]
    pub fn longest_loss(&self) -> Option<usize> {
        self.losers.iter().map(|loser| loser.length).max()
    }

    /// Losers sharing the longest stall, in trie order
    #[must_use]
    pub fn longest_losers(&self) -> Vec<Loser> {
        self.longest_loss()
            .map(|longest| {
                self.losers
                    .iter()
                    .copied()
                    .filter(|loser| loser.length == longest)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Either the game is already decided, or there are letters to weigh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Terminal(TerminalReason),
    Candidates(Candidates),
}

/// Resolve `fragment` against the dictionary
///
/// A fragment that leaves the trie, or that already spells a word, is terminal. Otherwise every
/// child letter is classified from the point of view of the player about to move.
///
/// # Examples
/// ```
/// use ghost_solver::core::TerminalReason;
/// use ghost_solver::solver::{Resolution, resolve};
/// use ghost_solver::trie::DictionaryTrie;
///
/// let trie = DictionaryTrie::build(["asgf", "asd", "bsd"], 3);
///
/// assert_eq!(resolve(&trie, "z"), Resolution::Terminal(TerminalReason::NoWordStarts));
/// assert_eq!(resolve(&trie, "bsd"), Resolution::Terminal(TerminalReason::CompletedWord));
/// ```
#[must_use]
pub fn resolve(trie: &DictionaryTrie, fragment: &str) -> Resolution {
    let Some(node) = trie.locate(fragment) else {
        debug!(fragment, "fragment leaves the dictionary");
        return Resolution::Terminal(TerminalReason::NoWordStarts);
    };

    if node.is_word_end() {
        debug!(fragment, "fragment completes a word");
        return Resolution::Terminal(TerminalReason::CompletedWord);
    }

    let depth = fragment.chars().count() + 1;
    let mut candidates = Candidates::default();

    for (letter, child) in node.children() {
        match classify(child, depth, depth % 2) {
            Outcome::Winning => candidates.winners.push(letter),
            Outcome::Losing { max_depth } => candidates.losers.push(Loser {
                letter,
                length: max_depth,
            }),
        }
    }

    debug!(
        fragment,
        winners = ?candidates.winners,
        losers = ?candidates.losers,
        "candidates resolved"
    );
    Resolution::Candidates(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> DictionaryTrie {
        DictionaryTrie::build(["asgf", "asd", "bsd"], 3)
    }

    fn candidates(resolution: Resolution) -> Candidates {
        match resolution {
            Resolution::Candidates(candidates) => candidates,
            Resolution::Terminal(reason) => panic!("unexpected terminal: {reason}"),
        }
    }

    #[test]
    fn single_child_is_winner() {
        let trie = small();
        let result = candidates(resolve(&trie, "a"));
        assert_eq!(result.winners, vec!['s']);
        assert!(result.losers.is_empty());
    }

    #[test]
    fn winners_and_losers_split() {
        let trie = small();
        let result = candidates(resolve(&trie, "as"));
        assert_eq!(result.winners, vec!['g']);
        assert_eq!(
            result.losers,
            vec![Loser {
                letter: 'd',
                length: 3
            }]
        );
    }

    #[test]
    fn empty_fragment_classifies_first_letters() {
        let trie = small();
        let result = candidates(resolve(&trie, ""));
        // From the root the mover plays letter 1: "asd" and "bsd" end on odd depths
        assert_eq!(result.winners, vec!['a']);
        assert_eq!(
            result.losers,
            vec![Loser {
                letter: 'b',
                length: 3
            }]
        );
    }

    #[test]
    fn word_end_is_terminal_even_with_children() {
        let trie = DictionaryTrie::build(["asd", "as"], 2);
        assert_eq!(
            resolve(&trie, "as"),
            Resolution::Terminal(TerminalReason::CompletedWord)
        );
    }

    #[test]
    fn unknown_prefix_is_terminal() {
        let trie = small();
        assert_eq!(
            resolve(&trie, "z"),
            Resolution::Terminal(TerminalReason::NoWordStarts)
        );
        assert_eq!(
            resolve(&trie, "asx"),
            Resolution::Terminal(TerminalReason::NoWordStarts)
        );
    }

    #[test]
    fn empty_trie_yields_empty_candidates() {
        let trie = DictionaryTrie::build(Vec::<&str>::new(), 4);
        let result = candidates(resolve(&trie, ""));
        assert!(result.is_empty());
        assert_eq!(result.longest_loss(), None);
        assert!(result.longest_losers().is_empty());
    }

    #[test]
    fn longest_losers_keep_ties_in_order() {
        let result = Candidates {
            winners: Vec::new(),
            losers: vec![
                Loser {
                    letter: 'x',
                    length: 6,
                },
                Loser {
                    letter: 'y',
                    length: 4,
                },
                Loser {
                    letter: 'z',
                    length: 6,
                },
            ],
        };
        assert_eq!(result.longest_loss(), Some(6));
        let letters: Vec<char> = result.longest_losers().iter().map(|l| l.letter).collect();
        assert_eq!(letters, vec!['x', 'z']);
    }
}
