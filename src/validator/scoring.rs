//! Turn scoring strategies
//!
//! Defines the Scoring trait and the two game variants' formulas. The
//! formulas are different products and are never merged; a game instance
//! picks exactly one.

/// Context a strategy may draw on when scoring an accepted turn
pub struct TurnContext<'a> {
    /// The accepted word, uppercase
    pub word: &'a str,
    /// The letter this turn inserted
    pub inserted_letter: char,
    /// Number of accepted turns before this one
    pub chain_length: usize,
}

/// A strategy for scoring an accepted turn
pub trait Scoring {
    /// Points awarded for the turn
    fn score(&self, turn: &TurnContext<'_>) -> u32;
}

/// Enum wrapper for all scoring strategies
///
/// Allows runtime selection of scoring while maintaining static dispatch.
pub enum ScoringKind {
    /// Word-length scoring with a long-word bonus (default)
    Length(LengthScoring),
    /// Pot-style payout with chain and rare-letter multipliers
    Pot(PotScoring),
}

impl Scoring for ScoringKind {
    fn score(&self, turn: &TurnContext<'_>) -> u32 {
        match self {
            Self::Length(s) => s.score(turn),
            Self::Pot(s) => s.score(turn),
        }
    }
}

impl ScoringKind {
    /// Create a scoring strategy from a name string
    ///
    /// Supported names: "length", "pot". Defaults to length scoring if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "pot" => Self::Pot(PotScoring::default()),
            _ => Self::Length(LengthScoring),
        }
    }
}

/// Length-based scoring
///
/// Base: 10 points per letter. Bonus: 5 points for each letter beyond 5.
/// A pure function of word length; dictionary contents, chain history and
/// the inserted letter play no part.
pub struct LengthScoring;

impl LengthScoring {
    /// Score a single word by length alone
    ///
    /// # Examples
    /// ```
    /// use letterchain::validator::LengthScoring;
    ///
    /// assert_eq!(LengthScoring::score_word("CAT"), 30);
    /// assert_eq!(LengthScoring::score_word("CASTLE"), 65);
    /// ```
    #[must_use]
    pub fn score_word(word: &str) -> u32 {
        let len = word.chars().count() as u32;
        10 * len + 5 * len.saturating_sub(5)
    }
}

impl Scoring for LengthScoring {
    fn score(&self, turn: &TurnContext<'_>) -> u32 {
        Self::score_word(turn.word)
    }
}

/// Letters that earn the rare-letter multiplier in pot scoring
const RARE_LETTERS: [char; 4] = ['Q', 'Z', 'J', 'X'];

/// Default ante risked per turn in pot scoring
pub const DEFAULT_ANTE: u32 = 10;

/// Pot-style payout scoring
///
/// Payout is `ante` times a multiplier that compounds with chain length:
/// 1.2 per link, times 1.5 when the inserted letter is rare (Q, Z, J, X),
/// times 10 once the chain reaches 10 links. The multiplier is rounded to
/// two decimals before applying, matching the displayed value.
pub struct PotScoring {
    pub ante: u32,
}

impl PotScoring {
    #[must_use]
    pub const fn new(ante: u32) -> Self {
        Self { ante }
    }

    /// The payout multiplier for a turn, rounded to two decimals
    #[must_use]
    pub fn multiplier(&self, chain_length: usize, inserted_letter: char) -> f64 {
        let mut base = 1.2_f64.powi(chain_length as i32);
        if RARE_LETTERS.contains(&inserted_letter.to_ascii_uppercase()) {
            base *= 1.5;
        }
        if chain_length >= 10 {
            base *= 10.0;
        }
        (base * 100.0).round() / 100.0
    }
}

impl Default for PotScoring {
    fn default() -> Self {
        Self::new(DEFAULT_ANTE)
    }
}

impl Scoring for PotScoring {
    fn score(&self, turn: &TurnContext<'_>) -> u32 {
        let multiplier = self.multiplier(turn.chain_length, turn.inserted_letter);
        (f64::from(self.ante) * multiplier).round() as u32
    }
}
