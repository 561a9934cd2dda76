//! Ghost word fragment
//!
//! The letters both players have played so far, in order.

use std::fmt;

/// The word built so far by both players combined
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment {
    text: String,
}

/// Error type for invalid fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    NonAscii,
    InvalidCharacter(char),
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonAscii => write!(f, "Fragment must contain only ASCII letters"),
            Self::InvalidCharacter(c) => write!(f, "Fragment contains invalid character '{c}'"),
        }
    }
}

impl std::error::Error for FragmentError {}

impl Fragment {
    /// Create a fragment from user input
    ///
    /// Input is trimmed and lowercased. An empty fragment is valid (no letters played yet).
    ///
    /// # Errors
    /// Returns `FragmentError` if the input contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use ghost_solver::core::Fragment;
    ///
    /// let fragment = Fragment::new("GHo").unwrap();
    /// assert_eq!(fragment.as_str(), "gho");
    ///
    /// assert!(Fragment::new("gh0").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, FragmentError> {
        let text = text.into().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(FragmentError::NonAscii);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(FragmentError::InvalidCharacter(bad));
        }

        Ok(Self { text })
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of letters played
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a letter
    ///
    /// # Errors
    /// Returns `FragmentError` if `letter` is not an ASCII letter.
    pub fn push(&mut self, letter: char) -> Result<(), FragmentError> {
        if !letter.is_ascii_alphabetic() {
            return Err(FragmentError::InvalidCharacter(letter));
        }
        self.text.push(letter.to_ascii_lowercase());
        Ok(())
    }

    /// Remove and return the last letter
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
