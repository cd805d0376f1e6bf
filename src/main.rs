//! Letterchain - CLI
//!
//! Word-chain game engine: play in the terminal, or check moves, hints and
//! scores against the loaded dictionary.

use anyhow::Result;
use clap::{Parser, Subcommand};
use letterchain::{
    commands::{run_check, run_hints, run_moves, run_play, run_score},
    dictionary::{Dictionary, FileSource, SliceSource},
    output::{
        print_check_result, print_hints_result, print_load_origin, print_moves_result,
        print_score_result,
    },
    validator::{ScoringKind, Validator},
    wordlists::FALLBACK,
};

#[derive(Parser)]
#[command(
    name = "letterchain",
    about = "Word-chain game engine: insert one letter per turn, every word must be real",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scoring: length (default) or pot
    #[arg(short, long, global = true, default_value = "length")]
    scoring: String,

    /// Wordlist: 'builtin' (default) or path to a newline-delimited word file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chain game (default)
    Play {
        /// Starting word (random seed if omitted)
        #[arg(short = 'S', long)]
        seed: Option<String>,

        /// Lives before the game ends
        #[arg(short, long, default_value = "3")]
        lives: u32,
    },

    /// Check a single move
    Check {
        /// The current chain word
        current: String,

        /// The proposed next word
        candidate: String,

        /// Accepted turns so far (affects pot scoring)
        #[arg(short, long, default_value = "0")]
        chain_length: usize,
    },

    /// List dictionary words starting with a prefix
    Hints {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of completions
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// List legal next words from a chain word
    Moves {
        /// The current chain word
        word: String,

        /// Maximum number of moves to list
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Show a word's score under the selected scoring strategy
    Score {
        /// Word to score
        word: String,

        /// Accepted turns so far (affects pot scoring)
        #[arg(short, long, default_value = "0")]
        chain_length: usize,
    },
}

/// Build and load the dictionary based on the -w flag
///
/// Any load failure falls back to the built-in word list; the outcome is
/// reported on stderr either way.
fn load_dictionary(wordlist_mode: &str) -> Dictionary {
    let dict = Dictionary::new();

    match wordlist_mode {
        "builtin" => {
            dict.load(&SliceSource::new(FALLBACK));
        }
        path => {
            dict.load(&FileSource::new(path));
        }
    }

    print_load_origin(dict.origin());
    dict
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dict = load_dictionary(&cli.wordlist);
    let scoring = ScoringKind::from_name(&cli.scoring);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        lives: 3,
    });

    match command {
        Commands::Play { seed, lives } => {
            let validator = Validator::new(scoring, &dict);
            run_play(&validator, seed.as_deref(), lives).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check {
            current,
            candidate,
            chain_length,
        } => {
            let validator = Validator::new(scoring, &dict);
            let result = run_check(&validator, &current, &candidate, chain_length);
            print_check_result(&result);
            Ok(())
        }
        Commands::Hints { prefix, count } => {
            let result = run_hints(&dict, &prefix, count);
            print_hints_result(&result);
            Ok(())
        }
        Commands::Moves { word, count } => {
            let result = run_moves(&dict, &word, count);
            print_moves_result(&result);
            Ok(())
        }
        Commands::Score { word, chain_length } => {
            let result = run_score(&scoring, &word, chain_length);
            print_score_result(&result);
            Ok(())
        }
    }
}
