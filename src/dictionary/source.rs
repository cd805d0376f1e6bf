//! Word list sources
//!
//! The external interface `Dictionary::load` consumes: something that can
//! produce a list of candidate vocabulary words, arbitrary case and length.

use crate::wordlists::loader::load_lines;
use std::io;
use std::path::{Path, PathBuf};

/// A source of candidate vocabulary words
///
/// Implementations may do I/O; a fetch error makes the dictionary fall
/// back to its built-in list rather than surfacing to callers.
pub trait WordSource: Send + Sync {
    /// Fetch the raw word list
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source is unavailable or unreadable.
    fn fetch(&self) -> io::Result<Vec<String>>;
}

/// Newline-delimited word list file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl WordSource for FileSource {
    fn fetch(&self) -> io::Result<Vec<String>> {
        load_lines(&self.path)
    }
}

/// In-memory word list, for embedded data and tests
pub struct SliceSource {
    words: &'static [&'static str],
}

impl SliceSource {
    #[must_use]
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }
}

impl WordSource for SliceSource {
    fn fetch(&self) -> io::Result<Vec<String>> {
        Ok(self.words.iter().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_yields_all_words() {
        let source = SliceSource::new(&["CAT", "DOG"]);
        let words = source.fetch().unwrap();
        assert_eq!(words, vec!["CAT".to_string(), "DOG".to_string()]);
    }

    #[test]
    fn file_source_missing_file_errors() {
        let source = FileSource::new("/nonexistent/words.txt");
        assert!(source.fetch().is_err());
    }

    #[test]
    fn file_source_reads_lines() {
        use std::fs;
        use std::io::Write;

        let path = std::env::temp_dir().join("letterchain_file_source_test.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "CAT\ndogs").unwrap();
        drop(file);

        let words = FileSource::new(&path).fetch().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(words, vec!["CAT".to_string(), "dogs".to_string()]);
    }
}
