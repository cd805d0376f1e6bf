//! Trie-backed dictionary with a load-once lifecycle
//!
//! A `Dictionary` starts empty, is bulk-populated exactly once from a
//! [`WordSource`], and is read-only afterwards. Loading that fails falls
//! back to a built-in word list so the dictionary always ends up usable;
//! the failure is recorded for logging, never raised to query callers.

mod source;
mod trie;

pub use source::{FileSource, SliceSource, WordSource};
pub use trie::Trie;

use crate::core::{MIN_WORD_LEN, Word};
use crate::wordlists::FALLBACK;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Load lifecycle, monotonic: `Unloaded` to `Loading` to `Loaded`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loading,
    Loaded,
}

/// Where the loaded vocabulary came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Primary source succeeded; `words` is the count that survived filtering
    Primary { words: usize },
    /// Primary source failed; the built-in fallback list was used instead
    Fallback { reason: String },
    /// Populated directly through `insert`, bypassing `load`
    Seeded,
}

/// A word set with membership and prefix queries
///
/// Queries issued before loading completes return `false`/empty (fail
/// closed) rather than blocking or panicking. The populated trie is
/// published through a write-once cell, so every query issued after `load`
/// returns observes the complete vocabulary.
#[derive(Debug, Default)]
pub struct Dictionary {
    inner: OnceLock<Inner>,
    loading: AtomicBool,
}

#[derive(Debug)]
struct Inner {
    trie: Trie,
    origin: LoadOrigin,
}

impl Dictionary {
    /// Create an empty, unloaded dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load the vocabulary from a source
    ///
    /// Each candidate word is filtered through the global policy (3-15
    /// characters, A-Z after uppercasing); failures are silently dropped.
    /// If the source errors, or yields no usable words, the built-in
    /// fallback list is loaded instead and the reason recorded. Always
    /// finishes `Loaded`.
    ///
    /// At most one load runs: a second call while a load is in flight
    /// blocks on the same initialization and shares its outcome, so the
    /// source is fetched at most once per dictionary.
    pub fn load(&self, source: &dyn WordSource) -> LoadState {
        if self.inner.get().is_none() {
            self.loading.store(true, Ordering::Release);
            self.inner.get_or_init(|| Self::build(source));
            self.loading.store(false, Ordering::Release);
        }
        LoadState::Loaded
    }

    fn build(source: &dyn WordSource) -> Inner {
        match source.fetch() {
            Ok(candidates) => {
                let mut trie = Trie::new();
                let mut words = 0;
                for candidate in &candidates {
                    if let Ok(word) = Word::new(candidate.as_str()) {
                        trie.insert(word.text());
                        words += 1;
                    }
                }

                if words == 0 {
                    return Self::build_fallback("word list contained no usable words".to_string());
                }

                Inner {
                    trie,
                    origin: LoadOrigin::Primary { words },
                }
            }
            Err(e) => Self::build_fallback(e.to_string()),
        }
    }

    fn build_fallback(reason: String) -> Inner {
        let mut trie = Trie::new();
        for word in FALLBACK {
            trie.insert(word);
        }
        Inner {
            trie,
            origin: LoadOrigin::Fallback { reason },
        }
    }

    /// Insert a single word directly
    ///
    /// Building primitive for pre-seeded dictionaries (mainly in tests).
    /// Inserting into an unloaded dictionary marks it loaded with origin
    /// `Seeded`; inserting after `load` extends the loaded vocabulary.
    pub fn insert(&mut self, word: &str) {
        if self.inner.get().is_none() {
            let _ = self.inner.set(Inner {
                trie: Trie::new(),
                origin: LoadOrigin::Seeded,
            });
        }
        if let Some(inner) = self.inner.get_mut() {
            inner.trie.insert(word);
        }
    }

    /// Current point in the load lifecycle
    #[must_use]
    pub fn state(&self) -> LoadState {
        if self.inner.get().is_some() {
            LoadState::Loaded
        } else if self.loading.load(Ordering::Acquire) {
            LoadState::Loading
        } else {
            LoadState::Unloaded
        }
    }

    /// Whether loading has completed (via primary source or fallback)
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.inner.get().is_some()
    }

    /// Where the vocabulary came from, once loaded
    #[must_use]
    pub fn origin(&self) -> Option<&LoadOrigin> {
        self.inner.get().map(|inner| &inner.origin)
    }

    /// Check whether a word is valid, case-insensitively
    ///
    /// Enforces the 3-letter minimum on top of trie membership. Returns
    /// `false` while the dictionary is still loading.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        word.len() >= MIN_WORD_LEN
            && self
                .inner
                .get()
                .is_some_and(|inner| inner.trie.contains(word))
    }

    /// Check whether any valid word starts with the given prefix
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.inner
            .get()
            .is_some_and(|inner| inner.trie.has_prefix(prefix))
    }

    /// Collect up to `count` valid words starting with the prefix
    ///
    /// Empty while the dictionary is still loading.
    #[must_use]
    pub fn hints(&self, prefix: &str, count: usize) -> Vec<String> {
        self.inner
            .get()
            .map(|inner| inner.trie.words_with_prefix(prefix, count))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::atomic::AtomicUsize;

    struct FailingSource;

    impl WordSource for FailingSource {
        fn fetch(&self) -> io::Result<Vec<String>> {
            Err(io::Error::new(io::ErrorKind::NotFound, "source down"))
        }
    }

    struct CountingSource {
        calls: AtomicUsize,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl WordSource for CountingSource {
        fn fetch(&self) -> io::Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec!["CAT".to_string(), "CATS".to_string()])
        }
    }

    #[test]
    fn queries_fail_closed_before_load() {
        let dict = Dictionary::new();
        assert_eq!(dict.state(), LoadState::Unloaded);
        assert!(!dict.is_loaded());
        assert!(!dict.contains("CAT"));
        assert!(!dict.has_prefix("CA"));
        assert!(dict.hints("CA", 5).is_empty());
    }

    #[test]
    fn load_from_slice_source() {
        let dict = Dictionary::new();
        let state = dict.load(&SliceSource::new(&["CAT", "CATS", "dog"]));

        assert_eq!(state, LoadState::Loaded);
        assert!(dict.is_loaded());
        assert!(dict.contains("CAT"));
        assert!(dict.contains("cats"));
        assert!(dict.contains("DOG"));
        assert!(!dict.contains("BIRD"));
        assert_eq!(dict.origin(), Some(&LoadOrigin::Primary { words: 3 }));
    }

    #[test]
    fn load_filters_out_of_policy_words() {
        let dict = Dictionary::new();
        dict.load(&SliceSource::new(&[
            "CAT",
            "AT",                // too short
            "ABCDEFGHIJKLMNOP",  // too long
            "CA7S",              // digit
            "TWO WORDS",         // space
        ]));

        assert!(dict.contains("CAT"));
        assert!(!dict.contains("CA7S"));
        assert_eq!(dict.origin(), Some(&LoadOrigin::Primary { words: 1 }));
    }

    #[test]
    fn failed_source_falls_back() {
        let dict = Dictionary::new();
        let state = dict.load(&FailingSource);

        assert_eq!(state, LoadState::Loaded);
        assert!(dict.is_loaded());
        // Only spot-check common words; the full fallback set is not contractual
        assert!(dict.contains("CAT"));
        assert!(dict.contains("DOG"));
        assert!(matches!(
            dict.origin(),
            Some(LoadOrigin::Fallback { reason }) if reason.contains("source down")
        ));
    }

    #[test]
    fn unusable_word_list_falls_back() {
        let dict = Dictionary::new();
        dict.load(&SliceSource::new(&["A", "12345"]));

        assert!(dict.is_loaded());
        assert!(dict.contains("CAT"));
        assert!(matches!(dict.origin(), Some(LoadOrigin::Fallback { .. })));
    }

    #[test]
    fn second_load_shares_first_outcome() {
        let dict = Dictionary::new();
        let source = CountingSource::new();

        dict.load(&source);
        dict.load(&source);

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(dict.contains("CAT"));
    }

    #[test]
    fn concurrent_loads_fetch_once() {
        let dict = Dictionary::new();
        let source = CountingSource::new();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(dict.load(&source), LoadState::Loaded);
                });
            }
        });

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(dict.is_loaded());
        assert!(dict.contains("CATS"));
    }

    #[test]
    fn contains_enforces_minimum_length() {
        let mut dict = Dictionary::new();
        // Bypass load-time filtering to plant a short path in the trie
        dict.insert("AB");
        dict.insert("CAT");

        assert!(dict.contains("CAT"));
        assert!(!dict.contains("AB"));
    }

    #[test]
    fn seeded_dictionary_is_loaded() {
        let mut dict = Dictionary::new();
        dict.insert("CATS");

        assert!(dict.is_loaded());
        assert_eq!(dict.origin(), Some(&LoadOrigin::Seeded));
        assert!(dict.contains("CATS"));
    }

    #[test]
    fn hints_come_from_loaded_trie() {
        let dict = Dictionary::new();
        dict.load(&SliceSource::new(&["CAT", "CATS", "CART", "DOG"]));

        let mut hints = dict.hints("CA", 10);
        hints.sort();
        assert_eq!(hints, vec!["CART", "CAT", "CATS"]);
    }
}
