//! Display functions for command results

use crate::commands::{CheckResult, HintsResult, MovesResult, ScoreResult};
use crate::dictionary::LoadOrigin;
use colored::Colorize;

/// Print the verdict of a single-move check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Move: {} → {}",
        result.current.bright_yellow().bold(),
        result.candidate.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        Ok(turn) => {
            println!("{}", "✅ Legal move!".green().bold());
            println!(
                "  Inserted:  '{}' at position {}",
                turn.inserted_letter, turn.insert_position
            );
            println!("  Score:     {}", turn.score);
        }
        Err(kind) => {
            println!("{}", format!("❌ {kind}").red().bold());
        }
    }
    println!();
}

/// Print dictionary completions of a prefix
pub fn print_hints_result(result: &HintsResult) {
    if result.words.is_empty() {
        println!(
            "\nNo dictionary words start with {}\n",
            result.prefix.bright_yellow().bold()
        );
        return;
    }

    println!(
        "\nWords starting with {}:",
        result.prefix.bright_yellow().bold()
    );
    for word in &result.words {
        println!("  • {word}");
    }
    println!();
}

/// Print legal next moves from a word
pub fn print_moves_result(result: &MovesResult) {
    if result.words.is_empty() {
        println!(
            "\n{} from {}\n",
            "No legal moves".red().bold(),
            result.current.bright_yellow().bold()
        );
        return;
    }

    println!(
        "\nLegal moves from {}:",
        result.current.bright_yellow().bold()
    );
    for word in &result.words {
        println!("  • {word}");
    }
    println!();
}

/// Print a word's score under the selected strategy
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} scores {} at chain length {}\n",
        result.word.bright_yellow().bold(),
        result.score.to_string().green().bold(),
        result.chain_length
    );
}

/// Warn when the dictionary came from somewhere other than the primary source
///
/// Logging only; a fallback-loaded dictionary is fully usable.
pub fn print_load_origin(origin: Option<&LoadOrigin>) {
    match origin {
        Some(LoadOrigin::Fallback { reason }) => {
            eprintln!(
                "{} {}",
                "⚠ Word list unavailable, using built-in fallback:".yellow(),
                reason
            );
        }
        Some(LoadOrigin::Primary { words }) => {
            eprintln!("Loaded {words} words");
        }
        Some(LoadOrigin::Seeded) | None => {}
    }
}
