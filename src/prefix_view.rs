//! Prefix view into a weighted trie.
//!
//! This module provides the `PrefixView` type, a borrowed window onto the
//! subtree below a key prefix. Completion ranks the words of a view; `items`
//! iterates the view of the whole trie.

use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::node::TrieNode;
use crate::rank;
use crate::symbols::Symbols;
use crate::Trie;

/// A lightweight view into the subtree defined by a key prefix.
///
/// # Examples
///
/// ```
/// use weighted_trie::StringTrie;
///
/// let mut trie = StringTrie::new();
/// trie.insert("hello", 1.0);
/// trie.insert("help", 2.0);
///
/// let view = trie.view_prefix("hel");
/// assert!(view.exists());
/// assert_eq!(view.top_k(1), vec![("help".to_string(), 2.0)]);
///
/// let words: Vec<String> = view.iter().map(|(word, _)| word).collect();
/// assert_eq!(words, vec!["hello", "help"]);
/// ```
pub struct PrefixView<'a, C: Symbols> {
    /// The prefix defining this view, as symbols
    prefix: Vec<C::Symbol>,

    /// The node at the end of the prefix, if the path exists
    subtrie_node: Option<&'a TrieNode<C::Symbol>>,

    _symbols: PhantomData<C>,
}

/// An iterator over the entries of a `PrefixView`.
///
/// Performs a depth-first, pre-order walk with children taken in ascending
/// symbol order, so words come out in lexicographic order. One path buffer is
/// shared across the walk.
pub struct PrefixViewIter<'a, C: Symbols> {
    /// Nodes still to visit, each with its edge symbol and the path length of
    /// its parent
    stack: Vec<(&'a TrieNode<C::Symbol>, Option<&'a C::Symbol>, usize)>,

    /// Symbols from the root to the node visited last
    path: Vec<C::Symbol>,
}

impl<'a, C: Symbols> PrefixView<'a, C> {
    /// Creates a new prefix view for the given trie and prefix.
    pub fn new(trie: &'a Trie<C>, prefix: &C::Key) -> Self {
        let prefix: Vec<C::Symbol> = C::symbols(prefix).collect();
        let subtrie_node = trie.root.descend(prefix.iter().cloned());

        PrefixView {
            prefix,
            subtrie_node,
            _symbols: PhantomData,
        }
    }

    /// Creates a view with the empty prefix, covering the whole trie.
    pub(crate) fn whole(trie: &'a Trie<C>) -> Self {
        PrefixView {
            prefix: Vec::new(),
            subtrie_node: Some(&trie.root),
            _symbols: PhantomData,
        }
    }

    /// Returns the key prefix for this view.
    pub fn prefix(&self) -> C::Owned {
        C::assemble(&self.prefix)
    }

    /// Returns whether the prefix exists in the trie.
    pub fn exists(&self) -> bool {
        self.subtrie_node.is_some()
    }

    /// Returns the number of words in this view.
    pub fn len(&self) -> usize {
        self.subtrie_node.map_or(0, TrieNode::subtree_size)
    }

    /// Returns whether this view contains no words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the view contains a word.
    ///
    /// Only returns true if the word is in the trie and starts with the prefix.
    pub fn contains(&self, word: &C::Key) -> bool {
        self.find(word).is_some()
    }

    /// Gets the weight of a word if it is in this view.
    pub fn weight(&self, word: &C::Key) -> Option<f64> {
        self.find(word).map(|node| node.weight)
    }

    /// Returns an iterator over `(word, weight)` pairs in lexicographic order.
    pub fn iter(&self) -> PrefixViewIter<'a, C> {
        let stack = match self.subtrie_node {
            Some(node) => vec![(node, None, self.prefix.len())],
            None => Vec::new(),
        };
        PrefixViewIter {
            stack,
            path: self.prefix.clone(),
        }
    }

    /// Returns every word in the view with its weight, heaviest first and
    /// ties broken by ascending word.
    pub fn ranked(&self) -> Vec<(C::Owned, f64)> {
        self.top_k(usize::MAX)
    }

    /// Returns the `k` best words in the view with their weights, in ranking
    /// order. All words below the prefix are collected and ranked first.
    pub fn top_k(&self, k: usize) -> Vec<(C::Owned, f64)> {
        let candidates: Vec<_> = self.iter().collect();

        trace!(candidates = candidates.len(), k, "ranking completions");
        rank::top_k(candidates, k)
    }

    // Finds the terminal node for `word`, provided `word` starts with the
    // prefix.
    fn find(&self, word: &C::Key) -> Option<&'a TrieNode<C::Symbol>> {
        let node = self.subtrie_node?;
        let mut symbols = C::symbols(word);

        for expected in &self.prefix {
            if symbols.next().as_ref() != Some(expected) {
                return None;
            }
        }

        node.descend(symbols).filter(|node| node.is_terminal)
    }
}

impl<C: Symbols> fmt::Debug for PrefixView<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("exists", &self.exists())
            .field("len", &self.len())
            .finish()
    }
}

impl<'a, C: Symbols> IntoIterator for &PrefixView<'a, C> {
    type Item = (C::Owned, f64);
    type IntoIter = PrefixViewIter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: Symbols> Iterator for PrefixViewIter<'_, C> {
    type Item = (C::Owned, f64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, symbol, depth)) = self.stack.pop() {
            self.path.truncate(depth);
            if let Some(symbol) = symbol {
                self.path.push(symbol.clone());
            }

            // Push in reverse so the smallest symbol is popped first
            let len = self.path.len();
            for (symbol, child) in node.children.iter().rev() {
                self.stack.push((child, Some(symbol), len));
            }

            if node.is_terminal {
                return Some((C::assemble(&self.path), node.weight));
            }
        }

        None
    }
}
