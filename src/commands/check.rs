//! Single-move check command

use crate::core::{TurnData, TurnError};
use crate::validator::{Scoring, Validator};

/// Result of checking one proposed move
pub struct CheckResult {
    pub current: String,
    pub candidate: String,
    pub outcome: Result<TurnData, TurnError>,
}

/// Validate one `current -> candidate` move and capture the verdict
pub fn run_check<S: Scoring>(
    validator: &Validator<'_, S>,
    current: &str,
    candidate: &str,
    chain_length: usize,
) -> CheckResult {
    CheckResult {
        current: current.to_uppercase(),
        candidate: candidate.to_uppercase(),
        outcome: validator.validate_turn(current, candidate, chain_length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::validator::LengthScoring;

    #[test]
    fn check_reports_verdict_and_normalized_words() {
        let mut dict = Dictionary::new();
        dict.insert("CATS");
        let validator = Validator::new(LengthScoring, &dict);

        let result = run_check(&validator, "cat", "cats", 0);
        assert_eq!(result.current, "CAT");
        assert_eq!(result.candidate, "CATS");
        assert_eq!(result.outcome.as_ref().unwrap().score, 40);

        let result = run_check(&validator, "cat", "coast", 0);
        assert_eq!(result.outcome, Err(TurnError::NotInDictionary));
    }
}
