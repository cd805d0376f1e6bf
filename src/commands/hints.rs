//! Hint commands: prefix completions and legal next moves

use crate::dictionary::Dictionary;
use crate::validator::possible_words;

/// Dictionary completions of a prefix
pub struct HintsResult {
    pub prefix: String,
    pub words: Vec<String>,
}

/// Legal next words reachable from a current word
pub struct MovesResult {
    pub current: String,
    pub words: Vec<String>,
}

/// Collect up to `count` dictionary words starting with `prefix`
pub fn run_hints(dictionary: &Dictionary, prefix: &str, count: usize) -> HintsResult {
    HintsResult {
        prefix: prefix.to_uppercase(),
        words: dictionary.hints(prefix, count),
    }
}

/// Collect up to `count` legal single-insertion moves from `current`
pub fn run_moves(dictionary: &Dictionary, current: &str, count: usize) -> MovesResult {
    MovesResult {
        current: current.to_uppercase(),
        words: possible_words(current, dictionary, count),
    }
}
