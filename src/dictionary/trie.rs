//! Prefix tree over uppercase words
//!
//! Membership and prefix queries run in O(word length), independent of
//! vocabulary size.

use rustc_hash::FxHashMap;

/// One character position in the vocabulary
///
/// The root node is a sentinel with no character of its own. Nodes are
/// created on demand during insertion and never removed.
#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    is_end_of_word: bool,
}

/// Trie-backed word set
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Create an empty trie
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating nodes as needed
    ///
    /// The word is normalized to uppercase. Inserting the same word twice
    /// has no additional effect.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.to_uppercase().chars() {
            node = node.children.entry(c).or_default();
        }
        node.is_end_of_word = true;
    }

    /// Check whether a complete word is in the set, case-insensitively
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.is_end_of_word)
    }

    /// Check whether any stored word starts with the given prefix
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Collect up to `max_results` stored words starting with the prefix
    ///
    /// Returns an empty vector if the prefix is unreachable. When the
    /// result is truncated by `max_results`, which completions are kept
    /// depends on child-map iteration order and is unspecified.
    #[must_use]
    pub fn words_with_prefix(&self, prefix: &str, max_results: usize) -> Vec<String> {
        let prefix = prefix.to_uppercase();
        let mut results = Vec::new();

        let Some(node) = self.walk(&prefix) else {
            return results;
        };

        Self::dfs(node, &prefix, &mut results, max_results);
        results
    }

    /// Follow a path from the root, returning the final node if it exists
    fn walk(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in path.to_uppercase().chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    fn dfs(node: &TrieNode, current: &str, results: &mut Vec<String>, max_results: usize) {
        if results.len() >= max_results {
            return;
        }

        if node.is_end_of_word {
            results.push(current.to_string());
        }

        for (c, child) in &node.children {
            let mut next = String::with_capacity(current.len() + 1);
            next.push_str(current);
            next.push(*c);
            Self::dfs(child, &next, results, max_results);
        }
    }
}
