//! Terminal output formatting
//!
//! Display utilities for CLI results and load diagnostics.

pub mod display;

pub use display::{
    print_check_result, print_hints_result, print_load_origin, print_moves_result,
    print_score_result,
};
