//! Legal-move enumeration
//!
//! Finds dictionary words reachable from the current word by a single
//! insertion, for hints and game-over detection.

use crate::dictionary::Dictionary;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Probe order for the existence check: most common letters first
const COMMON_FIRST: &str = "AEIOULNRSTBCDFGHJKMPQVWXYZ";

/// Enumerate legal next words, up to `max_results`
///
/// Tries every letter at every insertion position, left to right, keeping
/// words the dictionary accepts. Duplicates (the same word reachable from
/// several positions) are reported once.
#[must_use]
pub fn possible_words(current: &str, dictionary: &Dictionary, max_results: usize) -> Vec<String> {
    let current = current.to_uppercase();
    if !current.is_ascii() {
        return Vec::new();
    }
    let mut possibilities: Vec<String> = Vec::new();

    for position in 0..=current.len() {
        for letter in ALPHABET.chars() {
            let word = insert_at(&current, position, letter);
            if dictionary.contains(&word) && !possibilities.contains(&word) {
                possibilities.push(word);
                if possibilities.len() >= max_results {
                    return possibilities;
                }
            }
        }
    }

    possibilities
}

/// Check whether any legal move exists from the current word
///
/// Exhaustive over all letters and positions, but probes common letters
/// first so the usual case exits early.
#[must_use]
pub fn has_valid_moves(current: &str, dictionary: &Dictionary) -> bool {
    let current = current.to_uppercase();
    if !current.is_ascii() {
        return false;
    }

    for letter in COMMON_FIRST.chars() {
        for position in 0..=current.len() {
            if dictionary.contains(&insert_at(&current, position, letter)) {
                return true;
            }
        }
    }

    false
}

fn insert_at(word: &str, position: usize, letter: char) -> String {
    let mut out = String::with_capacity(word.len() + 1);
    out.push_str(&word[..position]);
    out.push(letter);
    out.push_str(&word[position..]);
    out
}
