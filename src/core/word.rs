//! Vocabulary word representation
//!
//! A Word stores an uppercase-normalized chain word validated against the
//! global length and alphabet policy.

use std::fmt;

/// Minimum accepted word length
pub const MIN_WORD_LEN: usize = 3;

/// Maximum accepted word length
pub const MAX_WORD_LEN: usize = 15;

/// A validated chain word, 3-15 uppercase ASCII letters
///
/// Construction normalizes to uppercase; two words differing only in case
/// compare equal after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    TooShort(usize),
    TooLong(usize),
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => {
                write!(f, "Word must be at least {MIN_WORD_LEN} letters, got {len}")
            }
            Self::TooLong(len) => {
                write!(f, "Word must be at most {MAX_WORD_LEN} letters, got {len}")
            }
            Self::InvalidCharacter(c) => write!(f, "Word contains invalid character '{c}'"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is under 3 or over 15
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use letterchain::core::Word;
    ///
    /// let word = Word::new("cats").unwrap();
    /// assert_eq!(word.text(), "CATS");
    ///
    /// assert!(Word::new("at").is_err());
    /// assert!(Word::new("ca7s").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_uppercase();

        // Validate length
        if text.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort(text.len()));
        }
        if text.len() > MAX_WORD_LEN {
            return Err(WordError::TooLong(text.len()));
        }

        // Validate alphabet
        if let Some(bad) = text.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice (always uppercase)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word length in letters
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // a valid word is never empty
    pub fn len(&self) -> usize {
        self.text.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CATS").unwrap();
        assert_eq!(word.text(), "CATS");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("cats").unwrap();
        assert_eq!(word.text(), "CATS");

        let word2 = Word::new("CaTs").unwrap();
        assert_eq!(word2.text(), "CATS");
    }

    #[test]
    fn word_creation_too_short() {
        assert!(matches!(Word::new("at"), Err(WordError::TooShort(2))));
        assert!(matches!(Word::new("a"), Err(WordError::TooShort(1))));
        assert!(matches!(Word::new(""), Err(WordError::TooShort(0))));
    }

    #[test]
    fn word_creation_too_long() {
        let sixteen = "ABCDEFGHIJKLMNOP";
        assert!(matches!(Word::new(sixteen), Err(WordError::TooLong(16))));
    }

    #[test]
    fn word_creation_boundary_lengths() {
        assert!(Word::new("CAT").is_ok()); // 3 letters
        assert!(Word::new("ABCDEFGHIJKLMNO").is_ok()); // 15 letters
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("CA7S"),
            Err(WordError::InvalidCharacter('7'))
        ));
        assert!(Word::new("CA TS").is_err()); // Space
        assert!(Word::new("CAT-S").is_err()); // Punctuation
    }

    #[test]
    fn word_display() {
        let word = Word::new("cats").unwrap();
        assert_eq!(format!("{word}"), "CATS");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("cats").unwrap();
        let word2 = Word::new("CATS").unwrap();
        let word3 = Word::new("dogs").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
