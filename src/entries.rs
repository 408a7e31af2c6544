//! Parsing of plain-text word listings used to seed a trie.
//!
//! Each non-blank line holds a word followed by whitespace and its weight.
//! The weight is taken from the last whitespace-separated field, so words may
//! themselves contain spaces. Lines starting with `#` are comments.
//!
//! ```text
//! # word      weight
//! thanks      40
//! thank you   12.5
//! ```

use tracing::debug;

use crate::error::{Error, Result};

/// Parses a word listing into `(word, weight)` pairs, in input order.
///
/// Line numbers in errors are 1-based. Weights must be finite.
///
/// # Examples
///
/// ```
/// use weighted_trie::{parse_entries, StringTrie};
///
/// let entries = parse_entries("cat 5\ncar 5\n# skipped\ncan 3\n").unwrap();
/// let trie: StringTrie = entries.into_iter().collect();
///
/// assert_eq!(trie.complete("ca", 2), vec!["car", "cat"]);
/// ```
pub fn parse_entries(text: &str) -> Result<Vec<(String, f64)>> {
    let mut entries = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = |reason: String| Error::Parse {
            line: idx + 1,
            reason,
        };

        let (word, weight) = line
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| parse_error("missing weight".to_string()))?;

        let weight: f64 = weight
            .parse()
            .map_err(|_| parse_error(format!("invalid weight `{}`", weight)))?;
        if !weight.is_finite() {
            return Err(parse_error(format!("weight must be finite, got {}", weight)));
        }

        entries.push((word.trim_end().to_string(), weight));
    }

    debug!(count = entries.len(), "parsed word entries");
    Ok(entries)
}
