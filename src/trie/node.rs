//! Trie node

use rustc_hash::FxHashMap;

/// One letter position in the dictionary trie
///
/// Children are owned outright. `order` records child letters in the order they were first
/// inserted so every traversal over children is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    letter: Option<char>,
    children: FxHashMap<char, TrieNode>,
    order: Vec<char>,
    word_end: bool,
}

impl TrieNode {
    /// Create an empty root node
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    fn with_letter(letter: char) -> Self {
        Self {
            letter: Some(letter),
            ..Self::default()
        }
    }

    /// The letter on the edge leading here (`None` at the root)
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Whether the path to this node spells an accepted word
    #[inline]
    #[must_use]
    pub const fn is_word_end(&self) -> bool {
        self.word_end
    }

    #[inline]
    #[must_use]
    pub fn child(&self, letter: char) -> Option<&Self> {
        self.children.get(&letter)
    }

    /// Children in insertion order
    pub fn children(&self) -> impl Iterator<Item = (char, &Self)> {
        self.order
            .iter()
            .filter_map(|&letter| self.children.get(&letter).map(|child| (letter, child)))
    }

    /// Child letters in insertion order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.order
    }

    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.order.is_empty()
    }

    pub(crate) fn child_or_insert(&mut self, letter: char) -> &mut Self {
        if !self.children.contains_key(&letter) {
            self.order.push(letter);
        }
        self.children
            .entry(letter)
            .or_insert_with(|| Self::with_letter(letter))
    }

    pub(crate) fn mark_word_end(&mut self) {
        self.word_end = true;
    }

    /// Count nodes in this subtree, including this one
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }

    /// Count word-end nodes in this subtree
    #[must_use]
    pub fn word_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += usize::from(node.word_end);
            stack.extend(node.children.values());
        }
        count
    }
}
