//! Word list loading utilities

use std::fs;
use std::io;
use std::path::Path;

/// Load raw candidate words from a newline-delimited file
///
/// Lines are trimmed; blank lines are skipped. No vocabulary filtering
/// happens here, that is the dictionary's job at insert time.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letterchain::wordlists::loader::load_lines;
///
/// let words = load_lines("data/words.txt").unwrap();
/// println!("Read {} candidate words", words.len());
/// ```
pub fn load_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect())
}
