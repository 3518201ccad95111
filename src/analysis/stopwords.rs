//! Stopword filtering.
//!
//! Removes common words (stop words) that typically carry little content.
//! Ships a default English list; custom lists are supported via
//! [`StopWordFilter::from_words`].
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::stopwords::remove_stopwords;
//!
//! let filtered = remove_stopwords("the cat sat").unwrap();
//! assert_eq!(filtered, "cat sat");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::tokenizer::{Tokenizer, WordBoundaryTokenizer};
use crate::error::Result;

/// Default English stop words list.
///
/// Articles, prepositions, conjunctions, pronouns, and auxiliary verbs.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "below", "between", "but", "by", "can", "did",
    "do", "does", "down", "during", "for", "from", "had", "has", "have", "he", "her", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "my", "no", "not", "of",
    "off", "on", "once", "or", "our", "out", "over", "she", "so", "some", "such", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "those", "to", "too",
    "under", "until", "up", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "why", "will", "with", "you", "your",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from text.
///
/// Tokens whose lowercase form is in the stop word set are dropped; the
/// remaining tokens keep their order and are rejoined with single spaces.
#[derive(Clone)]
pub struct StopWordFilter {
    /// The set of stop words to remove (stored lowercase)
    stop_words: Arc<HashSet<String>>,
    /// Tokenizer used to split the input
    tokenizer: Arc<dyn Tokenizer>,
}

impl StopWordFilter {
    /// Create a new stop word filter with the default English stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis::analysis::stopwords::StopWordFilter;
    ///
    /// let filter = StopWordFilter::new();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(!filter.is_stop_word("hello"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop word filter with a custom stop word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopWordFilter {
            stop_words: Arc::new(stop_words),
            tokenizer: Arc::new(WordBoundaryTokenizer::new()),
        }
    }

    /// Create a new stop word filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexis::analysis::stopwords::StopWordFilter;
    ///
    /// let filter = StopWordFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.into().to_lowercase())
            .collect();
        Self::with_stop_words(stop_words)
    }

    /// Replace the tokenizer used to split the input.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Check if a word is a stop word (case-insensitive).
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }

    /// Remove stop words from the given text.
    ///
    /// Remaining tokens preserve their order and are joined with a single
    /// space.
    pub fn remove_from(&self, text: &str) -> Result<String> {
        let kept: Vec<String> = self
            .tokenizer
            .tokenize(text)?
            .filter(|token| !self.is_stop_word(&token.text))
            .map(|token| token.text)
            .collect();

        Ok(kept.join(" "))
    }
}

impl Default for StopWordFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove default English stop words from the given text.
pub fn remove_stopwords(text: &str) -> Result<String> {
    StopWordFilter::new().remove_from(text)
}
