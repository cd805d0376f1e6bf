//! Letterchain
//!
//! A word-chain dictionary and move validation engine: each turn extends the
//! current word by inserting exactly one letter, and the result must be a
//! dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use letterchain::dictionary::Dictionary;
//! use letterchain::validator::{LengthScoring, Validator};
//!
//! let mut dict = Dictionary::new();
//! dict.insert("CATS");
//!
//! let validator = Validator::new(LengthScoring, &dict);
//! let turn = validator.validate_turn("CAT", "CATS", 0).unwrap();
//! assert_eq!(turn.inserted_letter, 'S');
//! assert_eq!(turn.score, 40);
//! ```

// Core domain types
pub mod core;

// Trie-backed dictionary with load lifecycle
pub mod dictionary;

// Move validation and scoring
pub mod validator;

// Embedded and file-based word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
