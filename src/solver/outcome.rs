//! Parity search over a candidate subtree
//!
//! A word ending at depth `d` is completed by whoever plays letter `d`. The player who moves at
//! depth `d` loses on words of depth parity `d % 2`, so a candidate branch is favorable when its
//! subtree holds at least one word end of the other parity.

use crate::trie::TrieNode;
use rustc_hash::FxHashSet;
use std::ptr;
use tracing::trace;

/// Classification of one candidate branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Some word in the subtree ends on the opponent's letter
    Winning,
    /// Every word in the subtree ends on our letter; `max_depth` is the longest (0 if none)
    Losing { max_depth: usize },
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_winning(self) -> bool {
        matches!(self, Self::Winning)
    }
}

/// Classify the subtree rooted at `node`
///
/// `depth` is the fragment length `node` represents and `losing_parity` the depth parity on
/// which a completed word counts against the mover. Returns [`Outcome::Winning`] as soon as a
/// word end of the other parity is found; otherwise reports the deepest word end seen.
///
/// Uses an explicit stack, so deep subtrees cannot overflow the call stack.
///
/// # Examples
/// ```
/// use ghost_solver::solver::{Outcome, classify};
/// use ghost_solver::trie::DictionaryTrie;
///
/// let trie = DictionaryTrie::build(["asgf", "asd"], 3);
/// let g = trie.locate("asg").unwrap();
/// let d = trie.locate("asd").unwrap();
///
/// assert_eq!(classify(g, 3, 1), Outcome::Winning);
/// assert_eq!(classify(d, 3, 1), Outcome::Losing { max_depth: 3 });
/// ```
#[must_use]
pub fn classify(node: &TrieNode, depth: usize, losing_parity: usize) -> Outcome {
    let mut stack = vec![(node, depth)];
    let mut visited: FxHashSet<*const TrieNode> = FxHashSet::default();
    let mut max_depth = 0;

    while let Some((current, current_depth)) = stack.pop() {
        if current.is_word_end() {
            if current_depth % 2 != losing_parity {
                trace!(depth, losing_parity, word_depth = current_depth, "winning branch");
                return Outcome::Winning;
            }
            max_depth = max_depth.max(current_depth);
        }

        if visited.insert(ptr::from_ref(current)) {
            stack.extend(
                current
                    .children()
                    .map(|(_, child)| (child, current_depth + 1)),
            );
        }
    }

    trace!(depth, losing_parity, max_depth, "losing branch");
    Outcome::Losing { max_depth }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::DictionaryTrie;

    fn sample() -> DictionaryTrie {
        DictionaryTrie::build(["asgf", "asd", "bsd", "csdfgh", "cdml"], 2)
    }

    #[test]
    fn favorable_word_anywhere_wins() {
        let trie = sample();
        // "as" at depth 2: "asd" ends on depth 3, odd, against losing parity 0
        let node = trie.locate("as").unwrap();
        assert_eq!(classify(node, 2, 0), Outcome::Winning);
    }

    #[test]
    fn only_unfavorable_words_lose_with_deepest_depth() {
        let trie = sample();
        let node = trie.locate("cs").unwrap();
        assert_eq!(classify(node, 2, 0), Outcome::Losing { max_depth: 6 });

        let node = trie.locate("cd").unwrap();
        assert_eq!(classify(node, 2, 0), Outcome::Losing { max_depth: 4 });
    }

    #[test]
    fn mixed_subtree_is_winning_for_either_parity_present() {
        let trie = sample();
        // "asgf" ends at 4 and "asd" at 3
        let node = trie.locate("a").unwrap();
        assert!(classify(node, 1, 0).is_winning());
        assert!(classify(node, 1, 1).is_winning());
    }

    #[test]
    fn max_depth_is_the_true_maximum() {
        let trie = DictionaryTrie::build(["abcd", "abcdef", "abxy", "abxyzw"], 4);
        let node = trie.locate("ab").unwrap();
        assert_eq!(classify(node, 2, 0), Outcome::Losing { max_depth: 4 });

        let trie = DictionaryTrie::build(["abcdef", "abxy", "abcd"], 4);
        let node = trie.locate("ab").unwrap();
        assert_eq!(classify(node, 2, 0), Outcome::Losing { max_depth: 6 });
    }

    #[test]
    fn word_end_at_start_node_counts() {
        let trie = DictionaryTrie::build(["bsd"], 3);
        let node = trie.locate("bsd").unwrap();
        assert_eq!(classify(node, 3, 1), Outcome::Losing { max_depth: 3 });
        assert_eq!(classify(node, 3, 0), Outcome::Winning);
    }

    #[test]
    fn subtree_without_word_ends_loses_at_zero() {
        let empty = TrieNode::root();
        assert_eq!(classify(&empty, 1, 1), Outcome::Losing { max_depth: 0 });
    }

    #[test]
    fn long_chain_reports_its_length() {
        let word: String = "ab".repeat(500);
        let trie = DictionaryTrie::build([word.as_str()], 1);
        let outcome = classify(trie.root(), 0, 0);
        assert_eq!(outcome, Outcome::Losing { max_depth: 1_000 });
    }
}
