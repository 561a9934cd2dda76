//! Word list loading utilities
//!
//! Reads dictionaries from files or from the embedded constant, keeping source order.

use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load words from a file, one word per line
///
/// Lines are trimmed and lowercased; blank lines are skipped. Source order is kept because
/// trie construction depends on it.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use ghost_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split raw dictionary text into normalized words
///
/// Entries containing anything but ASCII letters (apostrophes, spaces, digits, accents) can never
/// be spelled in play and are dropped.
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    let mut skipped = 0;
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let playable = line.chars().all(|c| c.is_ascii_alphabetic());
            skipped += usize::from(!playable);
            playable
        })
        .map(str::to_lowercase)
        .collect();

    if skipped > 0 {
        warn!(skipped, kept = words.len(), "skipped words with non-letter characters");
    }
    words
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use ghost_solver::wordlists::loader::words_from_slice;
/// use ghost_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_text_trims_and_skips_blank_lines() {
        let words = words_from_text("ghost\r\n\n  Trie \nword\n");
        assert_eq!(words, vec!["ghost", "trie", "word"]);
    }

    #[test]
    fn words_from_text_keeps_source_order() {
        let words = words_from_text("zebra\napple\nmango");
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn words_from_text_drops_unplayable_entries() {
        let words = words_from_text("o'clock\nice cream\nghost\nr2d2\ncaf\u{e9}\nTrie\n");
        assert_eq!(words, vec!["ghost", "trie"]);
    }

    #[test]
    fn load_from_file_keeps_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Zebra\n\n  apple\nMANGO\n").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
        assert_eq!(words[0], WORDS[0]);
    }
}
