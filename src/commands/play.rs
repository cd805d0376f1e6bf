//! Interactive chain game
//!
//! Text-based play loop: extend the chain one letter at a time until lives
//! or legal moves run out.

use crate::validator::{Scoring, Validator, has_valid_moves, possible_words};
use crate::wordlists::random_seed;
use std::io::{self, Write};

/// Run the interactive play loop
///
/// A `lives` of zero is treated as one, so every game allows at least one
/// miss before ending.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play<S: Scoring>(
    validator: &Validator<'_, S>,
    seed: Option<&str>,
    lives: u32,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Letterchain - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Grow the chain by inserting exactly one letter anywhere in the");
    println!("current word. Every new word must be in the dictionary.\n");
    println!("Commands: 'hint' for suggestions, 'new' for a fresh chain, 'quit' to exit\n");

    let lives = starting_lives(lives);
    let mut current = seed.map_or_else(|| random_seed().to_string(), str::to_uppercase);
    let mut chain: Vec<String> = vec![current.clone()];
    let mut total_score: u32 = 0;
    let mut lives_left = lives;

    loop {
        if !has_valid_moves(&current, validator.dictionary()) {
            println!("\n🏁 No word can be built from {current} - chain complete!");
            break;
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Word: {current}   Chain: {}   Score: {total_score}   Lives: {lives_left}",
            chain.len()
        );
        println!("────────────────────────────────────────────────────────────");

        let input = get_user_input("Next word")?;

        match input.to_lowercase().as_str() {
            "quit" => break,
            "new" => {
                current = random_seed().to_string();
                chain = vec![current.clone()];
                total_score = 0;
                lives_left = lives;
                println!("\n🔄 New chain started!\n");
                continue;
            }
            "hint" => {
                let suggestions = possible_words(&current, validator.dictionary(), 5);
                if suggestions.is_empty() {
                    println!("No suggestions available.\n");
                } else {
                    println!("Try one of:");
                    for word in suggestions {
                        println!("  • {word}");
                    }
                    println!();
                }
                continue;
            }
            "" => continue,
            _ => {}
        }

        match validator.validate_turn(&current, &input, chain.len() - 1) {
            Ok(turn) => {
                println!(
                    "\n✅ {} accepted! Inserted '{}' at position {} for {} points\n",
                    turn.word, turn.inserted_letter, turn.insert_position, turn.score
                );
                total_score += turn.score;
                current = turn.word.clone();
                chain.push(turn.word);
            }
            Err(kind) => {
                lives_left -= 1;
                println!("\n❌ {kind}");
                if lives_left == 0 {
                    println!("\n💀 Out of lives!");
                    break;
                }
                println!("{lives_left} lives remaining\n");
            }
        }
    }

    println!("\n════════════════════════════════════════════════════════════");
    println!(" Final chain ({} words): {}", chain.len(), chain.join(" → "));
    println!(" Total score: {total_score}");
    println!("════════════════════════════════════════════════════════════\n");

    Ok(())
}

// Zero lives would underflow on the first miss; every game starts with at least one
fn starting_lives(requested: u32) -> u32 {
    requested.max(1)
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_lives_clamped_to_one() {
        assert_eq!(starting_lives(0), 1);
        assert_eq!(starting_lives(1), 1);
        assert_eq!(starting_lives(3), 3);
    }
}

