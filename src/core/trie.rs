//! Prefix index over a word list, used for autocomplete suggestions.

use std::collections::BTreeMap;

pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_end_of_word: bool,
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.to_lowercase().chars() {
            node = node.children.entry(ch).or_default();
        }
        node.is_end_of_word = true;
    }

    /// Up to [`DEFAULT_SUGGESTION_LIMIT`] words starting with `prefix`.
    pub fn search(&self, prefix: &str) -> Vec<String> {
        self.search_with_limit(prefix, DEFAULT_SUGGESTION_LIMIT)
    }

    /// Words starting with `prefix`, the prefix itself first when it is a
    /// word, then depth-first in character order.
    pub fn search_with_limit(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let mut node = &self.root;
        for ch in prefix.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut results = Vec::new();
        let mut current = prefix;
        collect_words(node, &mut current, limit, &mut results);
        results
    }
}

fn collect_words(node: &TrieNode, current: &mut String, limit: usize, results: &mut Vec<String>) {
    if results.len() >= limit {
        return;
    }
    if node.is_end_of_word {
        results.push(current.clone());
    }
    for (&ch, child) in &node.children {
        if results.len() >= limit {
            return;
        }
        current.push(ch);
        collect_words(child, current, limit, results);
        current.pop();
    }
}
