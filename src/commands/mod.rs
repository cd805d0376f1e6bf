//! Command implementations

pub mod check;
pub mod hints;
pub mod play;
pub mod score;

pub use check::{CheckResult, run_check};
pub use hints::{HintsResult, MovesResult, run_hints, run_moves};
pub use play::run_play;
pub use score::{ScoreResult, run_score};
