//! Turn records and the move error taxonomy

use std::fmt;

/// Where and what a structurally valid move inserted
///
/// `position` is an index into the current word, `0..=current.len()`
/// inclusive. When repeated adjacent letters allow more than one
/// explanation of the same pair, the leftmost position is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    pub letter: char,
    pub position: usize,
}

/// Record of an accepted turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnData {
    /// The accepted word, uppercase
    pub word: String,
    pub inserted_letter: char,
    pub insert_position: usize,
    pub score: u32,
}

/// Why a proposed turn was rejected
///
/// Invalid moves are an expected outcome of normal play; these are result
/// values, not failures. The `Display` impl carries the player-facing
/// message for each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    /// Candidate word under the 3-letter minimum
    TooShort,
    /// Candidate missing from the dictionary (or the dictionary has not
    /// finished loading; callers distinguish via `Dictionary::is_loaded`)
    NotInDictionary,
    /// Candidate is not the current word plus exactly one inserted letter
    NotSingleInsertion,
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "Word must be at least 3 letters"),
            Self::NotInDictionary => write!(f, "Not a valid word"),
            Self::NotSingleInsertion => write!(f, "Must insert exactly one letter"),
        }
    }
}

impl std::error::Error for TurnError {}
