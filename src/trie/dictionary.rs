//! Dictionary trie construction and lookup

use super::TrieNode;
use tracing::info;

/// Prefix tree of every playable letter sequence in the dictionary
///
/// Built once from a word list, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryTrie {
    root: TrieNode,
    min_length: usize,
    accepted: usize,
}

impl DictionaryTrie {
    /// Build the trie from a word list
    ///
    /// Words shorter than `min_length` characters are ignored, as are empty entries. Words are
    /// inserted in source order. An insertion stops as soon as it reaches a node that already
    /// ends a word, so a longer word whose prefix is an earlier accepted word adds nothing past
    /// that prefix.
    ///
    /// # Examples
    /// ```
    /// use ghost_solver::trie::DictionaryTrie;
    ///
    /// let trie = DictionaryTrie::build(["as", "asd"], 2);
    /// let node = trie.locate("as").unwrap();
    /// assert!(node.is_word_end());
    /// assert!(node.child('d').is_none());
    /// ```
    pub fn build<I, S>(words: I, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = TrieNode::root();
        let mut accepted = 0;

        for word in words {
            let word = word.as_ref();
            let length = word.chars().count();
            if length == 0 || length < min_length {
                continue;
            }
            accepted += 1;

            let mut node = &mut root;
            for letter in word.chars() {
                if node.is_word_end() {
                    break;
                }
                node = node.child_or_insert(letter);
            }
            node.mark_word_end();
        }

        let trie = Self {
            root,
            min_length,
            accepted,
        };
        info!(
            min_length,
            accepted,
            nodes = trie.root.node_count(),
            words = trie.root.word_count(),
            "dictionary trie built"
        );
        trie
    }

    /// Follow `fragment` from the root
    ///
    /// Returns `None` if some letter has no edge. The empty fragment resolves to the root.
    #[must_use]
    pub fn locate(&self, fragment: &str) -> Option<&TrieNode> {
        fragment
            .chars()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Number of words long enough to be walked into the trie
    #[inline]
    #[must_use]
    pub const fn accepted_words(&self) -> usize {
        self.accepted
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Number of distinct word ends; pruned and duplicate words are not counted
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.root.word_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_word_prunes_longer_one() {
        let trie = DictionaryTrie::build(["as", "asd"], 2);

        let node = trie.locate("as").unwrap();
        assert!(node.is_word_end());
        assert!(node.child('d').is_none());
        assert!(!node.has_children());
        assert!(trie.locate("asd").is_none());
    }

    #[test]
    fn longer_word_first_keeps_its_branch() {
        // Insertion order decides the shape: here the longer word is already present
        let trie = DictionaryTrie::build(["asd", "as"], 2);

        let node = trie.locate("as").unwrap();
        assert!(node.is_word_end());
        assert!(node.child('d').unwrap().is_word_end());
    }

    #[test]
    fn short_words_are_ignored() {
        let trie = DictionaryTrie::build(["ox", "oxen", "a"], 3);

        assert_eq!(trie.accepted_words(), 1);
        assert!(!trie.locate("ox").unwrap().is_word_end());
        assert!(trie.locate("oxen").unwrap().is_word_end());
        assert!(trie.locate("a").is_none());
    }

    #[test]
    fn empty_words_never_mark_the_root() {
        let trie = DictionaryTrie::build(["", "ghost"], 0);

        assert!(!trie.root().is_word_end());
        assert!(trie.locate("ghost").unwrap().is_word_end());
    }

    #[test]
    fn empty_fragment_locates_root() {
        let trie = DictionaryTrie::build(["ghost", "goblin"], 4);
        assert!(std::ptr::eq(trie.locate("").unwrap(), trie.root()));

        let empty = DictionaryTrie::build(Vec::<String>::new(), 4);
        assert!(std::ptr::eq(empty.locate("").unwrap(), empty.root()));
    }

    #[test]
    fn missing_edge_is_not_found() {
        let trie = DictionaryTrie::build(["ghost"], 4);
        assert!(trie.locate("gha").is_none());
        assert!(trie.locate("x").is_none());
        assert!(trie.locate("ghosts").is_none());
    }

    #[test]
    fn build_is_reproducible() {
        let words = ["asgf", "asd", "bsd", "csdfgh", "cdml", "as"];
        let first = DictionaryTrie::build(words, 2);
        let second = DictionaryTrie::build(words, 2);

        assert_eq!(first, second);
        assert_eq!(first.root().letters(), &['a', 'b', 'c']);
    }

    #[test]
    fn duplicate_words_are_idempotent() {
        let trie = DictionaryTrie::build(["ghost", "ghost"], 4);
        assert_eq!(trie.accepted_words(), 2);
        assert_eq!(trie.word_count(), 1);
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn every_childless_node_is_a_word_end() {
        let trie = DictionaryTrie::build(["asgf", "asd", "bsd", "csdfgh", "cdml"], 2);

        let mut stack = vec![trie.root()];
        while let Some(node) = stack.pop() {
            if !node.has_children() {
                assert!(node.is_word_end());
            }
            stack.extend(node.children().map(|(_, child)| child));
        }
    }

    #[test]
    fn embedded_dictionary_prunes_plurals() {
        use crate::wordlists::WORDS;

        let trie = DictionaryTrie::build(WORDS, 4);
        let game = trie.locate("game").unwrap();
        assert!(game.is_word_end());
        assert!(game.child('s').is_none());
        assert!(trie.locate("key").is_none());
    }
}
