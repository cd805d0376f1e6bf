//! Single-letter-insertion check

use crate::core::Insertion;

/// Determine whether `candidate` is `current` with exactly one letter inserted
///
/// Both inputs are compared after uppercase normalization. Returns `None`
/// unless the candidate is exactly one character longer and some insertion
/// position reconstructs it; deletion, substitution, and reordering all
/// fail. Positions are scanned left to right and the first match wins, so
/// pairs with repeated adjacent letters report the leftmost explanation:
/// `("AAA", "AAAA")` always reports position 0.
#[must_use]
pub fn can_form_by_insertion(current: &str, candidate: &str) -> Option<Insertion> {
    let current: Vec<char> = current.to_uppercase().chars().collect();
    let candidate: Vec<char> = candidate.to_uppercase().chars().collect();

    if candidate.len() != current.len() + 1 {
        return None;
    }

    for i in 0..=current.len() {
        // Inserting candidate[i] at position i must reconstruct the candidate
        if current[..i] == candidate[..i] && current[i..] == candidate[i + 1..] {
            return Some(Insertion {
                letter: candidate[i],
                position: i,
            });
        }
    }

    None
}
