//! Turn validation
//!
//! Combines the structural insertion check with dictionary membership and
//! scoring to decide whether a proposed turn is legal.

use super::insertion::can_form_by_insertion;
use super::scoring::{Scoring, TurnContext};
use crate::core::{MIN_WORD_LEN, TurnData, TurnError};
use crate::dictionary::Dictionary;

/// Validates proposed turns against a dictionary and a scoring strategy
///
/// Stateless across calls: the chain itself is owned by the surrounding
/// game session, which passes the current chain length in for scoring.
pub struct Validator<'a, S: Scoring> {
    scoring: S,
    dictionary: &'a Dictionary,
}

impl<'a, S: Scoring> Validator<'a, S> {
    /// Create a new validator over the given dictionary
    pub const fn new(scoring: S, dictionary: &'a Dictionary) -> Self {
        Self {
            scoring,
            dictionary,
        }
    }

    /// Decide whether `candidate` is a legal continuation of `current`
    ///
    /// Checks, in order: the 3-letter minimum, dictionary membership, and
    /// the single-insertion relationship. A dictionary that has not
    /// finished loading rejects every candidate as `NotInDictionary`;
    /// callers who care about the difference check
    /// [`Dictionary::is_loaded`] first.
    ///
    /// # Errors
    ///
    /// Returns the [`TurnError`] kind describing why the move is illegal.
    /// Illegal moves are an ordinary outcome of play, not a failure of the
    /// validator.
    pub fn validate_turn(
        &self,
        current: &str,
        candidate: &str,
        chain_length: usize,
    ) -> Result<TurnData, TurnError> {
        let word = candidate.to_uppercase();

        if word.len() < MIN_WORD_LEN {
            return Err(TurnError::TooShort);
        }

        if !self.dictionary.contains(&word) {
            return Err(TurnError::NotInDictionary);
        }

        let insertion =
            can_form_by_insertion(current, &word).ok_or(TurnError::NotSingleInsertion)?;

        let score = self.scoring.score(&TurnContext {
            word: &word,
            inserted_letter: insertion.letter,
            chain_length,
        });

        Ok(TurnData {
            word,
            inserted_letter: insertion.letter,
            insert_position: insertion.position,
            score,
        })
    }

    /// Total score of a played chain
    ///
    /// Recounts the game total from scratch: every chain word is scored,
    /// seed included. The context for word `i` uses chain length `i` and
    /// the letter its predecessor's insertion contributed; where no
    /// predecessor relationship exists (the seed, or a broken link) the
    /// word's leading letter stands in.
    pub fn chain_score<T: AsRef<str>>(&self, chain: &[T]) -> u32 {
        chain
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let word = word.as_ref().to_uppercase();
                let inserted_letter = i
                    .checked_sub(1)
                    .and_then(|prev| can_form_by_insertion(chain[prev].as_ref(), &word))
                    .map_or_else(|| word.chars().next().unwrap_or('A'), |ins| ins.letter);

                self.scoring.score(&TurnContext {
                    word: &word,
                    inserted_letter,
                    chain_length: i,
                })
            })
            .sum()
    }

    /// The dictionary this validator queries
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }
}
