//! Core domain types
//!
//! Words, turn records, and the move error taxonomy.

mod turn;
mod word;

pub use turn::{Insertion, TurnData, TurnError};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
