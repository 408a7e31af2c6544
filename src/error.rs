//! Errors reported by the fallible trie helpers.
//!
//! The core operations never fail; only weight validation and entry parsing
//! produce these.

use thiserror::Error;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The weight is NaN or infinite
    #[error("weight must be finite, got {0}")]
    InvalidWeight(f64),

    /// A line of an entry listing could not be parsed
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
