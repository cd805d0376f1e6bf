//! Word lists for the chain game
//!
//! Provides the embedded fallback vocabulary and seed-word pool compiled
//! into the binary, plus file loading utilities.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK, FALLBACK_COUNT, SEEDS, SEEDS_COUNT};

/// Pick a random seed word to start a chain
///
/// Seeds are short common words, 3-5 letters.
#[must_use]
pub fn random_seed() -> &'static str {
    use rand::prelude::IndexedRandom;

    SEEDS.choose(&mut rand::rng()).copied().unwrap_or("CAT")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_count_matches_const() {
        assert_eq!(FALLBACK.len(), FALLBACK_COUNT);
    }

    #[test]
    fn seeds_count_matches_const() {
        assert_eq!(SEEDS.len(), SEEDS_COUNT);
    }

    #[test]
    fn fallback_words_are_in_policy() {
        // All fallback words should be 3-15 letters, uppercase A-Z
        for &word in FALLBACK {
            assert!(
                (3..=15).contains(&word.len()),
                "Word '{word}' is out of the 3-15 length policy"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn fallback_contains_common_words() {
        // Spot checks only; the exact fallback membership is not contractual
        assert!(FALLBACK.contains(&"CAT"));
        assert!(FALLBACK.contains(&"DOG"));
    }

    #[test]
    fn seeds_are_short_starters() {
        for &word in SEEDS {
            assert!(
                (3..=5).contains(&word.len()),
                "Seed '{word}' is not 3-5 letters"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Seed '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn random_seed_returns_pool_member() {
        for _ in 0..20 {
            let seed = random_seed();
            assert!(SEEDS.contains(&seed));
        }
    }

    #[test]
    fn random_seed_varies() {
        let distinct: std::collections::HashSet<_> = (0..40).map(|_| random_seed()).collect();
        // Should see at least a few different seeds in 40 draws
        assert!(distinct.len() > 3);
    }
}
