//! Word-frequency counting.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::frequency::count_frequencies;
//!
//! let counts = count_frequencies("a a b").unwrap();
//! assert_eq!(counts.get("a"), Some(&2));
//! assert_eq!(counts.get("b"), Some(&1));
//! ```

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::tokenizer::{Tokenizer, WordBoundaryTokenizer};
use crate::error::Result;

/// Counts token occurrences in text.
///
/// Tokenization defaults to Unicode word boundaries; a different tokenizer
/// can be injected with [`FrequencyCounter::with_tokenizer`].
#[derive(Clone)]
pub struct FrequencyCounter {
    tokenizer: Arc<dyn Tokenizer>,
}

impl FrequencyCounter {
    /// Create a new frequency counter with the default word-boundary
    /// tokenizer.
    pub fn new() -> Self {
        FrequencyCounter {
            tokenizer: Arc::new(WordBoundaryTokenizer::new()),
        }
    }

    /// Create a frequency counter with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        FrequencyCounter { tokenizer }
    }

    /// Count token occurrences in the given text.
    pub fn count(&self, text: &str) -> Result<AHashMap<String, usize>> {
        let mut counts = AHashMap::new();
        for token in self.tokenizer.tokenize(text)? {
            *counts.entry(token.text).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Count token occurrences using the default word-boundary tokenizer.
pub fn count_frequencies(text: &str) -> Result<AHashMap<String, usize>> {
    FrequencyCounter::new().count(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_frequencies() {
        let counts = count_frequencies("a a b").unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("a"), Some(&2));
        assert_eq!(counts.get("b"), Some(&1));
    }

    #[test]
    fn test_count_frequencies_ignores_punctuation() {
        let counts = count_frequencies("hello, hello world!").unwrap();
        assert_eq!(counts.get("hello"), Some(&2));
        assert_eq!(counts.get("world"), Some(&1));
    }

    #[test]
    fn test_count_frequencies_case_sensitive() {
        let counts = count_frequencies("Rust rust").unwrap();
        assert_eq!(counts.get("Rust"), Some(&1));
        assert_eq!(counts.get("rust"), Some(&1));
    }

    #[test]
    fn test_count_frequencies_empty() {
        let counts = count_frequencies("").unwrap();
        assert!(counts.is_empty());
    }
}
