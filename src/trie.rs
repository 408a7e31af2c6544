//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! storing weighted words and answering ranked completion queries.

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::node::TrieNode;
use crate::prefix_view::PrefixView;
use crate::stats::Stats;
use crate::symbols::{ByteSymbols, CharSymbols, Symbols};

/// A mutable prefix trie of weighted words.
///
/// Each word is a path of symbols from the root; the node at the end of the
/// path is marked terminal and carries the word's weight. Nodes are created
/// lazily on insertion and pruned on removal, so every node other than the
/// root is either terminal or on the path to a terminal node.
///
/// The trie keeps its word and node counts up to date, so [`len`](Trie::len)
/// and [`node_count`](Trie::node_count) are O(1).
pub struct Trie<C: Symbols = CharSymbols> {
    /// The root node, standing for the empty prefix
    pub(crate) root: TrieNode<C::Symbol>,

    /// The number of terminal nodes
    word_count: usize,

    /// The number of nodes, root included
    node_count: usize,

    _symbols: PhantomData<C>,
}

/// A trie over `char` symbols with `String` keys.
pub type StringTrie = Trie<CharSymbols>;

/// A trie over byte symbols with `Vec<u8>` keys.
pub type BytesTrie = Trie<ByteSymbols>;

impl<C: Symbols> Trie<C> {
    /// Creates a new, empty trie holding only the root node.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_trie::StringTrie;
    ///
    /// let trie = StringTrie::new();
    /// assert!(trie.is_empty());
    /// assert_eq!(trie.node_count(), 1);
    /// ```
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            word_count: 0,
            node_count: 1,
            _symbols: PhantomData,
        }
    }

    /// Returns the number of words stored in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if the trie contains no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the root node, for read-only inspection of the structure.
    pub fn root(&self) -> &TrieNode<C::Symbol> {
        &self.root
    }

    /// Returns the number of nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the length in edges of the longest path from the root.
    ///
    /// This walks the whole trie.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns the word count, height, and node count of the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("cat", 1.0);
    /// trie.insert("car", 2.0);
    ///
    /// let (words, height, nodes) = trie.stats().into();
    /// assert_eq!((words, height, nodes), (2, 3, 5));
    /// ```
    pub fn stats(&self) -> Stats {
        Stats {
            words: self.word_count,
            height: self.height(),
            nodes: self.node_count,
        }
    }

    /// Inserts `word` with the given weight.
    ///
    /// If the word is already present its weight is replaced, not added to.
    /// Runs in O(L) for a word of L symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("hello", 2.0);
    /// trie.insert("hello", 5.0);
    ///
    /// assert_eq!(trie.len(), 1);
    /// assert_eq!(trie.get("hello"), Some(5.0));
    /// ```
    pub fn insert(&mut self, word: &C::Key, weight: f64) {
        let mut current = &mut self.root;
        let mut depth = 0;
        let mut created = 0;

        for symbol in C::symbols(word) {
            current = current.children.entry(symbol).or_insert_with(|| {
                created += 1;
                TrieNode::new()
            });
            depth += 1;
        }

        let is_new = !current.is_terminal;
        current.is_terminal = true;
        current.weight = weight;

        self.node_count += created;
        if is_new {
            self.word_count += 1;
        }

        debug!(len = depth, created, is_new, weight, "inserted word");
    }

    /// Inserts `word` like [`insert`](Trie::insert), but rejects NaN and
    /// infinite weights, leaving the trie unchanged.
    pub fn try_insert(&mut self, word: &C::Key, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            return Err(Error::InvalidWeight(weight));
        }
        self.insert(word, weight);
        Ok(())
    }

    /// Removes `word` from the trie, returning whether it was present.
    ///
    /// Nodes left with neither children nor a word of their own are pruned, so
    /// the trie never keeps dead branches. The root always survives. Runs in
    /// O(L) for a word of L symbols, without recursion.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("cat", 1.0);
    /// trie.insert("car", 1.0);
    ///
    /// assert!(trie.remove("cat"));
    /// assert!(!trie.remove("cat"));
    /// assert!(trie.contains("car"));
    /// assert_eq!(trie.node_count(), 4);
    /// ```
    pub fn remove(&mut self, word: &C::Key) -> bool {
        let path: Vec<C::Symbol> = C::symbols(word).collect();

        // First pass: find the word, and the deepest node on its path that
        // must survive because another word ends there or branches off.
        let mut node = &self.root;
        let mut keep = 0;
        for (depth, symbol) in path.iter().enumerate() {
            if node.is_terminal || node.children.len() > 1 {
                keep = depth;
            }
            node = match node.children.get(symbol) {
                Some(child) => child,
                None => {
                    trace!("remove: word not present");
                    return false;
                }
            };
        }
        if !node.is_terminal {
            trace!("remove: word not present");
            return false;
        }

        // Everything below `keep` exists only for this word when its node is
        // a leaf. The root is never pruned.
        let pruned = if node.is_leaf() { path.len() - keep } else { 0 };

        // Second pass: cut the dead chain at its top edge, or just unmark the
        // node when it still leads to other words.
        if pruned > 0 {
            let Some(survivor) = self.root.descend_mut(path[..keep].iter().cloned()) else {
                return false;
            };
            survivor.children.remove(&path[keep]);
            trace!(symbol = ?path[keep], pruned, "pruned chain");
        } else {
            let Some(target) = self.root.descend_mut(path.iter().cloned()) else {
                return false;
            };
            target.is_terminal = false;
            target.weight = 0.0;
        }

        self.word_count -= 1;
        self.node_count -= pruned;
        debug!(pruned, "removed word");
        true
    }

    /// Returns `true` if `word` was inserted (and not since removed).
    ///
    /// A word that only exists as a path to longer words is not contained.
    pub fn contains(&self, word: &C::Key) -> bool {
        self.root
            .descend(C::symbols(word))
            .is_some_and(|node| node.is_terminal)
    }

    /// Returns the weight stored for `word`, if present.
    pub fn get(&self, word: &C::Key) -> Option<f64> {
        self.root
            .descend(C::symbols(word))
            .filter(|node| node.is_terminal)
            .map(|node| node.weight)
    }

    /// Returns `true` if some stored word starts with `prefix`.
    ///
    /// The empty prefix always matches.
    pub fn has_prefix(&self, prefix: &C::Key) -> bool {
        self.root.descend(C::symbols(prefix)).is_some()
    }

    /// Creates a view of the subtree below `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("hello", 1.0);
    /// trie.insert("help", 2.0);
    /// trie.insert("world", 3.0);
    ///
    /// let view = trie.view_prefix("hel");
    /// assert_eq!(view.len(), 2);
    /// assert!(view.contains("help"));
    /// assert!(!view.contains("world"));
    /// ```
    pub fn view_prefix(&self, prefix: &C::Key) -> PrefixView<'_, C> {
        PrefixView::new(self, prefix)
    }

    /// Returns up to `k` words starting with `prefix`, heaviest first, ties
    /// broken by ascending word.
    ///
    /// Every word under the prefix is ranked before truncating, so this runs
    /// in O(m + c log c) for m nodes and c words below the prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_trie::StringTrie;
    ///
    /// let mut trie = StringTrie::new();
    /// trie.insert("cat", 5.0);
    /// trie.insert("car", 5.0);
    /// trie.insert("can", 3.0);
    ///
    /// assert_eq!(trie.complete("ca", 2), vec!["car", "cat"]);
    /// assert!(trie.complete("ca", 0).is_empty());
    /// ```
    pub fn complete(&self, prefix: &C::Key, k: usize) -> Vec<C::Owned> {
        self.complete_with_weights(prefix, k)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }

    /// Like [`complete`](Trie::complete), keeping each word's weight.
    pub fn complete_with_weights(&self, prefix: &C::Key, k: usize) -> Vec<(C::Owned, f64)> {
        if k == 0 {
            return Vec::new();
        }
        self.view_prefix(prefix).top_k(k)
    }

    /// Returns every `(word, weight)` pair in ascending word order.
    pub fn items(&self) -> Vec<(C::Owned, f64)> {
        PrefixView::whole(self).iter().collect()
    }

    /// Removes every word, leaving only a fresh root.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.word_count = 0;
        self.node_count = 1;
    }
}

impl<C: Symbols> Default for Trie<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Symbols> Clone for Trie<C> {
    fn clone(&self) -> Self {
        Trie {
            root: self.root.clone(),
            word_count: self.word_count,
            node_count: self.node_count,
            _symbols: PhantomData,
        }
    }
}

impl<C: Symbols> fmt::Debug for Trie<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("words", &self.word_count)
            .field("nodes", &self.node_count)
            .field("root", &self.root)
            .finish()
    }
}

/// Two tries are equal when they hold the same words with the same weights.
/// NaN weights equal each other, so a trie always equals its clone.
impl<C: Symbols> PartialEq for Trie<C> {
    fn eq(&self, other: &Self) -> bool {
        self.word_count == other.word_count
            && self.node_count == other.node_count
            && self.root == other.root
    }
}

impl<C: Symbols> Extend<(C::Owned, f64)> for Trie<C> {
    fn extend<T: IntoIterator<Item = (C::Owned, f64)>>(&mut self, iter: T) {
        for (word, weight) in iter {
            self.insert(C::borrow_key(&word), weight);
        }
    }
}

impl<C: Symbols> FromIterator<(C::Owned, f64)> for Trie<C> {
    fn from_iter<T: IntoIterator<Item = (C::Owned, f64)>>(iter: T) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[(&str, f64)]) -> StringTrie {
        let mut trie = StringTrie::new();
        for &(word, weight) in words {
            trie.insert(word, weight);
        }
        trie
    }

    // Every non-root node must be terminal or have a child.
    fn assert_no_dead_nodes(node: &TrieNode<char>) {
        for child in node.children.values() {
            assert!(!child.is_prunable(), "dead node left behind");
            assert_no_dead_nodes(child);
        }
    }

    #[test]
    fn test_new_trie() {
        let trie = StringTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert_eq!(trie.stats(), Stats { words: 0, height: 0, nodes: 1 });
    }

    #[test]
    fn test_insert_counts_nodes() {
        let mut trie = StringTrie::new();
        trie.insert("cat", 1.0);
        assert_eq!(trie.node_count(), 4);

        // "car" shares "ca"
        trie.insert("car", 1.0);
        assert_eq!(trie.node_count(), 5);

        // "ca" adds no nodes, only marks one terminal
        trie.insert("ca", 1.0);
        assert_eq!(trie.node_count(), 5);
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_insert_replace_overwrites_weight() {
        let mut trie = trie_of(&[("hello", 42.0)]);
        trie.insert("hello", 100.0);

        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get("hello"), Some(100.0));

        // Overwrite, not accumulate
        trie.insert("hello", 1.0);
        assert_eq!(trie.get("hello"), Some(1.0));
    }

    #[test]
    fn test_try_insert_rejects_non_finite() {
        let mut trie = StringTrie::new();
        assert_eq!(
            trie.try_insert("nan", f64::NAN).map_err(|e| e.to_string()),
            Err("weight must be finite, got NaN".to_string())
        );
        assert!(trie.try_insert("inf", f64::INFINITY).is_err());
        assert_eq!(trie.stats(), Stats { words: 0, height: 0, nodes: 1 });

        assert!(trie.try_insert("ok", 2.5).is_ok());
        assert_eq!(trie.get("ok"), Some(2.5));
    }

    #[test]
    fn test_contains_requires_terminal() {
        let trie = trie_of(&[("hello", 1.0)]);
        assert!(trie.contains("hello"));
        assert!(!trie.contains("hell"));
        assert!(!trie.contains("hello!"));
        assert!(!trie.contains(""));
        assert!(trie.has_prefix("hell"));
        assert!(trie.has_prefix(""));
        assert!(!trie.has_prefix("x"));
    }

    #[test]
    fn test_get_nonexistent() {
        let trie = trie_of(&[("hello", 1.0)]);
        assert_eq!(trie.get("hell"), None);
        assert_eq!(trie.get("world"), None);
    }

    #[test]
    fn test_remove_existing_restores_stats() {
        let mut trie = trie_of(&[("dog", 1.0)]);
        let before = trie.stats();

        trie.insert("cat", 2.0);
        assert!(trie.remove("cat"));

        assert_eq!(trie.stats(), before);
        assert!(!trie.contains("cat"));
        assert!(trie.contains("dog"));
    }

    #[test]
    fn test_remove_twice() {
        let mut trie = trie_of(&[("cat", 1.0)]);
        assert!(trie.remove("cat"));
        assert!(!trie.remove("cat"));
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.len(), 0);
    }

    #[test]
    fn test_remove_nonexistent_does_not_mutate() {
        let mut trie = trie_of(&[("cat", 1.0), ("cart", 2.0)]);
        let snapshot = trie.clone();

        assert!(!trie.remove("ca"));
        assert!(!trie.remove("car"));
        assert!(!trie.remove("cats"));
        assert!(!trie.remove("dog"));
        assert_eq!(trie, snapshot);
    }

    #[test]
    fn test_remove_keeps_shared_prefix() {
        let mut trie = trie_of(&[("cat", 1.0), ("car", 1.0)]);
        assert!(trie.remove("cat"));

        assert!(trie.contains("car"));
        assert!(!trie.contains("cat"));
        assert!(trie.has_prefix("ca"));
        assert_eq!(trie.node_count(), 4);
        assert_no_dead_nodes(&trie.root);
    }

    #[test]
    fn test_remove_prefix_word_keeps_longer_word() {
        let mut trie = trie_of(&[("abc", 1.0), ("abcde", 2.0)]);
        assert!(trie.remove("abc"));

        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 6);
        assert_eq!(trie.get("abcde"), Some(2.0));
    }

    #[test]
    fn test_remove_longer_word_stops_at_terminal() {
        let mut trie = trie_of(&[("abc", 1.0), ("abcde", 2.0)]);
        assert!(trie.remove("abcde"));

        // "d" and "e" go, "abc" stays
        assert_eq!(trie.node_count(), 4);
        assert!(trie.contains("abc"));
        assert_eq!(trie.height(), 3);
        assert_no_dead_nodes(&trie.root);
    }

    #[test]
    fn test_empty_word_marks_root() {
        let mut trie = trie_of(&[("", 7.0), ("a", 1.0)]);
        assert!(trie.contains(""));
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.node_count(), 2);
        assert_eq!(trie.complete("", 1), vec![String::new()]);

        assert!(trie.remove(""));
        assert!(!trie.contains(""));
        assert!(trie.remove("a"));
        assert_eq!(trie.stats(), Stats { words: 0, height: 0, nodes: 1 });
    }

    #[test]
    fn test_complete_ranking() {
        let trie = trie_of(&[("cat", 5.0), ("car", 5.0), ("can", 3.0)]);
        assert_eq!(trie.complete("ca", 2), vec!["car", "cat"]);
        assert_eq!(trie.complete("ca", 10), vec!["car", "cat", "can"]);
        assert_eq!(
            trie.complete_with_weights("ca", 1),
            vec![("car".to_string(), 5.0)]
        );
    }

    #[test]
    fn test_complete_includes_prefix_word() {
        let trie = trie_of(&[("ca", 1.0), ("cat", 0.5)]);
        assert_eq!(trie.complete("ca", 5), vec!["ca", "cat"]);
    }

    #[test]
    fn test_complete_missing_prefix() {
        let trie = StringTrie::new();
        assert!(trie.complete("xyz", 3).is_empty());

        let trie = trie_of(&[("cat", 1.0)]);
        assert!(trie.complete("cb", 3).is_empty());
        assert!(trie.complete("cat", 0).is_empty());
    }

    #[test]
    fn test_items_in_word_order() {
        let trie = trie_of(&[("zebra", 1.0), ("apple", 2.0), ("app", 3.0), ("b", 4.0)]);
        let items = trie.items();
        let words: Vec<&str> = items.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["app", "apple", "b", "zebra"]);
        assert_eq!(items[0].1, 3.0);
    }

    #[test]
    fn test_stats_height() {
        let mut trie = StringTrie::new();
        trie.insert("hello", 1.0);
        assert_eq!(trie.stats(), Stats { words: 1, height: 5, nodes: 6 });

        trie.insert("hi", 1.0);
        assert_eq!(trie.height(), 5);
        assert!(trie.remove("hello"));
        assert_eq!(trie.stats(), Stats { words: 1, height: 2, nodes: 3 });
    }

    #[test]
    fn test_counters_match_structure() {
        let mut trie = trie_of(&[("a", 1.0), ("ab", 1.0), ("abc", 1.0), ("b", 1.0), ("bcd", 1.0)]);
        trie.remove("ab");
        trie.remove("bcd");

        assert_eq!(trie.node_count(), trie.root.subtree_node_count());
        assert_eq!(trie.len(), trie.root.subtree_size());
        assert_no_dead_nodes(&trie.root);
    }

    #[test]
    fn test_clear() {
        let mut trie = trie_of(&[("a", 1.0), ("bc", 1.0)]);
        trie.clear();
        assert_eq!(trie.stats(), Stats { words: 0, height: 0, nodes: 1 });
        assert!(!trie.contains("a"));
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut trie: StringTrie = vec![("one".to_string(), 1.0), ("two".to_string(), 2.0)]
            .into_iter()
            .collect();
        assert_eq!(trie.len(), 2);

        trie.extend(vec![("one".to_string(), 10.0), ("three".to_string(), 3.0)]);
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.get("one"), Some(10.0));
    }

    #[test]
    fn test_bytes_trie() {
        let mut trie = BytesTrie::new();
        trie.insert(b"ab", 1.0);
        trie.insert(b"ac", 2.0);
        trie.insert(b"\xff", 0.5);

        assert!(trie.contains(b"ab"));
        assert_eq!(trie.complete(b"a", 5), vec![b"ac".to_vec(), b"ab".to_vec()]);
        assert_eq!(trie.items()[2].0, vec![0xff]);
        assert!(trie.remove(b"ab"));
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn test_unicode_symbols_are_atomic() {
        let trie = trie_of(&[("héllo", 1.0), ("hèllo", 2.0)]);
        // 'h' + two distinct accented branches of four nodes each
        assert_eq!(trie.node_count(), 1 + 1 + 4 + 4);
        assert_eq!(trie.complete("h", 2), vec!["hèllo", "héllo"]);
        assert_eq!(trie.height(), 5);
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let trie = trie_of(&[("b", 0.0), ("a", -0.0)]);
        assert_eq!(trie.complete("", 2), vec!["a", "b"]);
    }

    #[test]
    fn test_nan_weight_trie_equals_clone() {
        let trie = trie_of(&[("nan", f64::NAN), ("one", 1.0)]);
        assert_eq!(trie.clone(), trie);

        let mut other = trie.clone();
        other.insert("nan", 2.0);
        assert_ne!(other, trie);
    }

    #[test]
    fn test_very_long_word() {
        let depth = 200_000;
        let handle = std::thread::Builder::new()
            .stack_size(512 * 1024)
            .spawn(move || {
                let long = "a".repeat(depth);
                let mut trie = StringTrie::new();
                trie.insert(&long, 1.0);
                trie.insert(&long[..10], 2.0);

                assert_eq!(trie.stats(), Stats { words: 2, height: depth, nodes: depth + 1 });
                assert_eq!(trie.complete("aaa", 1), vec!["a".repeat(10)]);
                assert_eq!(trie.items().len(), 2);

                let copy = trie.clone();
                assert_eq!(copy, trie);
                drop(copy);

                // Prunes everything below the shorter word
                assert!(trie.remove(&long));
                assert_eq!(trie.stats(), Stats { words: 1, height: 10, nodes: 11 });

                trie.insert(&long, 1.0);
                drop(trie);
            })
            .unwrap();
        handle.join().unwrap();
    }
}
