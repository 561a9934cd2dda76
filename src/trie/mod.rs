//! Dictionary trie
//!
//! Prefix tree of playable letter sequences with word-end markers.

mod dictionary;
mod node;

pub use dictionary::DictionaryTrie;
pub use node::TrieNode;
