//! Token-level synonym rewriting.
//!
//! Rewrites each whitespace-delimited token of a text through the synonym
//! resolver: tokens with at least one resolved synonym are replaced, all
//! others pass through unchanged. Output tokens are rejoined with single
//! spaces.

use std::sync::Arc;

use rand::seq::IteratorRandom;

use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;
use crate::synonym::{ResolveMethod, SynonymResolver, SynonymSet};

/// Rewrites text by substituting synonyms token by token.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lexis::synonym::{ResolveMethod, SynonymResolver, SynonymRewriter};
///
/// let rewriter = SynonymRewriter::new(Arc::new(SynonymResolver::new()));
/// let rewritten = rewriter
///     .replace_with_first("the car", ResolveMethod::Direct)
///     .unwrap();
///
/// // "the" has no synonyms; "car" takes its first resolved form
/// assert_eq!(rewritten, "the auto");
/// ```
pub struct SynonymRewriter {
    resolver: Arc<SynonymResolver>,
    tokenizer: WhitespaceTokenizer,
}

impl SynonymRewriter {
    /// Create a rewriter over the given resolver.
    pub fn new(resolver: Arc<SynonymResolver>) -> Self {
        SynonymRewriter {
            resolver,
            tokenizer: WhitespaceTokenizer::new(),
        }
    }

    /// Replace each token with its first resolved synonym, if any.
    ///
    /// "First" follows the synonym set's deterministic iteration order.
    pub fn replace_with_first(&self, text: &str, method: ResolveMethod) -> Result<String> {
        self.rewrite(text, method, |synonyms| synonyms.iter().next().cloned())
    }

    /// Replace each token with a uniformly random resolved synonym, if any.
    pub fn replace_with_random(&self, text: &str, method: ResolveMethod) -> Result<String> {
        let mut rng = rand::rng();
        self.rewrite(text, method, move |synonyms| {
            synonyms.iter().choose(&mut rng).cloned()
        })
    }

    fn rewrite<F>(&self, text: &str, method: ResolveMethod, mut pick: F) -> Result<String>
    where
        F: FnMut(&SynonymSet) -> Option<String>,
    {
        let rewritten: Vec<String> = self
            .tokenizer
            .tokenize(text)?
            .map(|token| {
                let synonyms = self.resolver.resolve(&token.text, method);
                if synonyms.is_empty() {
                    token.text
                } else {
                    pick(&synonyms).unwrap_or(token.text)
                }
            })
            .collect();

        Ok(rewritten.join(" "))
    }

    /// Get the resolver backing this rewriter.
    pub fn resolver(&self) -> &Arc<SynonymResolver> {
        &self.resolver
    }
}
