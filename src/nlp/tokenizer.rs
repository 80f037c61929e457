//! Whitespace tokenizer
//!
//! Splits text on a fixed set of delimiter characters. No normalization is
//! applied here; the candidate generator lowercases tokens itself.

use rustc_hash::FxHashSet;

/// Space, tab, newline, carriage return, vertical tab, form feed.
pub const DEFAULT_WORD_DELIMITERS: &str = " \t\n\r\x0b\x0c";

/// Splits text into tokens on delimiter characters.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiters: FxHashSet<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a tokenizer splitting on [`DEFAULT_WORD_DELIMITERS`]
    pub fn new() -> Self {
        Self::with_delimiters(DEFAULT_WORD_DELIMITERS)
    }

    /// Create a tokenizer splitting on every character of `delimiters`
    pub fn with_delimiters(delimiters: &str) -> Self {
        Self {
            delimiters: delimiters.chars().collect(),
        }
    }

    /// Whether `c` separates tokens
    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    /// Split `text`, dropping empty tokens produced by consecutive delimiters
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(|c: char| self.is_delimiter(c))
            .filter(|t| !t.is_empty())
            .collect()
    }
}
