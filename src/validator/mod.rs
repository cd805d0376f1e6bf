//! Move validation and scoring
//!
//! The structural single-insertion check, turn validation against a
//! dictionary, pluggable scoring strategies, and legal-move enumeration.

mod insertion;
mod moves;
mod scoring;
mod turn;

pub use insertion::can_form_by_insertion;
pub use moves::{has_valid_moves, possible_words};
pub use scoring::{DEFAULT_ANTE, LengthScoring, PotScoring, Scoring, ScoringKind, TurnContext};
pub use turn::Validator;
