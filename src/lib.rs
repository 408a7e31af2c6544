//! # Weighted Trie
//!
//! A prefix trie of weighted words for ranked autocomplete.
//!
//! Words are stored as paths of symbols from a shared root. Each word carries
//! a weight, and completion returns the heaviest words below a prefix.
//!
//! ## Features
//!
//! - **Ranked completion**: top-k words under a prefix, by weight descending
//!   with ties broken by ascending word
//! - **Pruning removal**: removing a word drops every node it alone kept alive
//! - **O(1) counters**: word and node counts are maintained on every update
//! - **Pluggable symbols**: branch on `char`s ([`StringTrie`]) or bytes
//!   ([`BytesTrie`]) through the [`Symbols`] trait
//! - **Prefix Views**: borrow the subtree under a prefix for lookup, ordered
//!   iteration and ranking
//!
//! ## Example
//!
//! ```rust
//! use weighted_trie::StringTrie;
//!
//! let mut trie = StringTrie::new();
//! trie.insert("cat", 5.0);
//! trie.insert("car", 5.0);
//! trie.insert("can", 3.0);
//!
//! assert_eq!(trie.complete("ca", 2), vec!["car", "cat"]);
//!
//! assert!(trie.remove("cat"));
//! assert!(trie.contains("car"));
//! assert_eq!(trie.stats().words, 2);
//! ```
//!
//! The trie is not synchronized; wrap it in a lock to share it across threads.

mod entries;
mod error;
pub mod node;
mod prefix_view;
mod rank;
mod stats;
mod symbols;
mod trie;

// Re-export public types
pub use crate::entries::parse_entries;
pub use crate::error::{Error, Result};
pub use crate::node::TrieNode;
pub use crate::prefix_view::{PrefixView, PrefixViewIter};
pub use crate::rank::rank_order;
pub use crate::stats::Stats;
pub use crate::symbols::{ByteSymbols, CharSymbols, Symbols};
pub use crate::trie::{BytesTrie, StringTrie, Trie};
