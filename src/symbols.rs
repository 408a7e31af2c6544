//! Defines the trait and structs for splitting trie keys into symbols.
use std::fmt::Debug;

/// Describes how a key is split into the symbols the trie branches on, and
/// how a path of symbols is reassembled into an owned key.
///
/// Symbols are opaque: two symbols are the same edge iff they compare equal,
/// and completion order follows `Ord` on the symbol type.
pub trait Symbols {
    /// One atomic unit of a key.
    type Symbol: Ord + Clone + Debug;

    /// The borrowed key form accepted by lookups and insertion.
    type Key: ?Sized;

    /// The owned key form returned by completion and iteration.
    type Owned: Clone + Ord + Debug;

    /// Iterates over the symbols of `key` in order.
    fn symbols(key: &Self::Key) -> impl Iterator<Item = Self::Symbol> + '_;

    /// Builds an owned key from a path of symbols.
    fn assemble(path: &[Self::Symbol]) -> Self::Owned;

    /// Borrows an owned key back into its lookup form.
    fn borrow_key(owned: &Self::Owned) -> &Self::Key;
}

/// Keys are strings, symbols are `char`s.
#[derive(Debug, Clone, Copy)]
pub struct CharSymbols;

impl Symbols for CharSymbols {
    type Symbol = char;
    type Key = str;
    type Owned = String;

    fn symbols(key: &str) -> impl Iterator<Item = char> + '_ {
        key.chars()
    }

    fn assemble(path: &[char]) -> String {
        path.iter().collect()
    }

    fn borrow_key(owned: &String) -> &str {
        owned.as_str()
    }
}

/// Keys are byte strings, symbols are single bytes.
#[derive(Debug, Clone, Copy)]
pub struct ByteSymbols;

impl Symbols for ByteSymbols {
    type Symbol = u8;
    type Key = [u8];
    type Owned = Vec<u8>;

    fn symbols(key: &[u8]) -> impl Iterator<Item = u8> + '_ {
        key.iter().copied()
    }

    fn assemble(path: &[u8]) -> Vec<u8> {
        path.to_vec()
    }

    fn borrow_key(owned: &Vec<u8>) -> &[u8] {
        owned.as_slice()
    }
}
