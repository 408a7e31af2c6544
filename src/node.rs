//! Internal node implementation for the weighted trie.
//!
//! This module contains the `TrieNode` structure that forms the backbone of the
//! trie. Every node is owned by exactly one parent through its `children` map;
//! the root is owned by the `Trie` itself.
//!
//! A word of L symbols is a chain of L nodes, so nothing here recurses over
//! the tree: walks, clones, comparisons and drops all use explicit stacks.

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::mem;

/// A single node of the trie.
///
/// Each node holds a map of children keyed by symbol, a terminal flag, and the
/// weight of the word ending here. `weight` is only meaningful while
/// `is_terminal` is set.
pub struct TrieNode<S> {
    /// Child nodes indexed by the symbol on the connecting edge.
    ///
    /// `BTreeMap` keeps the edges in ascending symbol order, which is the
    /// order completion and iteration walk them in.
    pub children: BTreeMap<S, TrieNode<S>>,

    /// Whether an inserted word ends at this node
    pub is_terminal: bool,

    /// The weight of the word ending at this node
    pub weight: f64,
}

impl<S: Ord> TrieNode<S> {
    /// Creates a new, non-terminal node with no children
    pub fn new() -> Self {
        TrieNode {
            children: BTreeMap::new(),
            is_terminal: false,
            weight: 0.0,
        }
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether this node carries nothing: no word ends here and no
    /// word passes through. Such a node must be pruned by its parent.
    pub fn is_prunable(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Returns the number of terminal nodes in this subtree, this node included
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        self.walk(|node, _| {
            if node.is_terminal {
                count += 1;
            }
        });
        count
    }

    /// Returns the number of nodes in this subtree, this node included
    pub fn subtree_node_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }

    /// Returns the maximum number of edges from this node down to any descendant.
    /// A leaf has height 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        self.walk(|_, depth| height = height.max(depth));
        height
    }

    // Visits every node of the subtree with its depth below `self`, in no
    // particular order.
    fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&TrieNode<S>, usize),
    {
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            visit(node, depth);
            stack.extend(node.children.values().map(|child| (child, depth + 1)));
        }
    }

    /// Walks the path spelled by `symbols` and returns the node it ends at, if
    /// every edge exists.
    pub fn descend<I>(&self, symbols: I) -> Option<&TrieNode<S>>
    where
        I: IntoIterator<Item = S>,
    {
        let mut current = self;
        for symbol in symbols {
            current = current.children.get(&symbol)?;
        }
        Some(current)
    }

    /// Mutable counterpart of [`descend`](TrieNode::descend).
    pub fn descend_mut<I>(&mut self, symbols: I) -> Option<&mut TrieNode<S>>
    where
        I: IntoIterator<Item = S>,
    {
        let mut current = self;
        for symbol in symbols {
            current = current.children.get_mut(&symbol)?;
        }
        Some(current)
    }

    // Copies the flags and weight, leaving the children out.
    fn shallow_copy(&self) -> Self {
        TrieNode {
            children: BTreeMap::new(),
            is_terminal: self.is_terminal,
            weight: self.weight,
        }
    }
}

impl<S: Ord> Default for TrieNode<S> {
    fn default() -> Self {
        Self::new()
    }
}

// Children are moved onto a heap stack before they drop, so a long chain is
// torn down one node at a time.
impl<S> Drop for TrieNode<S> {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<S>> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl<S: Ord + Clone> Clone for TrieNode<S> {
    fn clone(&self) -> Self {
        let mut root = self.shallow_copy();
        let mut root_children = self.children.iter();
        // Each frame: edge symbol, children left to copy, copy under construction
        let mut stack: Vec<(&S, btree_map::Iter<'_, S, TrieNode<S>>, TrieNode<S>)> = Vec::new();

        loop {
            let next = match stack.last_mut() {
                Some((_, children, _)) => children.next(),
                None => root_children.next(),
            };

            match next {
                Some((symbol, child)) => {
                    stack.push((symbol, child.children.iter(), child.shallow_copy()));
                }
                None => match stack.pop() {
                    Some((symbol, _, copy)) => {
                        let parent = match stack.last_mut() {
                            Some((_, _, parent)) => parent,
                            None => &mut root,
                        };
                        parent.children.insert(symbol.clone(), copy);
                    }
                    None => return root,
                },
            }
        }
    }
}

/// Weights compare as equal when both are NaN, so every node equals its own
/// clone. `0.0` and `-0.0` are equal, as in ranking.
impl<S: PartialEq> PartialEq for TrieNode<S> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            let same_weight = a.weight == b.weight || (a.weight.is_nan() && b.weight.is_nan());
            if a.is_terminal != b.is_terminal || !same_weight || a.children.len() != b.children.len()
            {
                return false;
            }
            for ((symbol_a, child_a), (symbol_b, child_b)) in a.children.iter().zip(&b.children) {
                if symbol_a != symbol_b {
                    return false;
                }
                stack.push((child_a, child_b));
            }
        }

        true
    }
}

// Lists child symbols only; descendants are not printed.
impl<S: fmt::Debug> fmt::Debug for TrieNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("weight", &self.weight)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
