//! Word-boundary tokenizer implementation.

use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries (UAX #29).
///
/// Unlike [`super::WhitespaceTokenizer`], punctuation is never part of a
/// token: `"hello, world!"` produces `["hello", "world"]`.
#[derive(Clone, Debug, Default)]
pub struct WordBoundaryTokenizer;

impl WordBoundaryTokenizer {
    /// Create a new word-boundary tokenizer.
    pub fn new() -> Self {
        WordBoundaryTokenizer
    }
}

impl Tokenizer for WordBoundaryTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .unicode_word_indices()
            .enumerate()
            .map(|(position, (offset, word))| {
                Token::with_offsets(word, position, offset, offset + word.len())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_boundary"
    }
}
