//! Word scoring command

use crate::validator::{Scoring, TurnContext};

/// Score of a word under the selected strategy
pub struct ScoreResult {
    pub word: String,
    pub chain_length: usize,
    pub score: u32,
}

/// Score a word as if it were the next accepted turn
///
/// Pot scoring cares which letter the turn inserted; since this command
/// sees only the word, the leading letter stands in for it (the pot game
/// always prepends).
pub fn run_score<S: Scoring>(scoring: &S, word: &str, chain_length: usize) -> ScoreResult {
    let word = word.to_uppercase();
    let inserted_letter = word.chars().next().unwrap_or('A');

    let score = scoring.score(&TurnContext {
        word: &word,
        inserted_letter,
        chain_length,
    });

    ScoreResult {
        word,
        chain_length,
        score,
    }
}
