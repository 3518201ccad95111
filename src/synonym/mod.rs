//! Synonym resolution against a lexical knowledge base.
//!
//! [`SynonymResolver`] returns the set of alternative surface forms for a
//! word under one of three normalization strategies ([`ResolveMethod`]):
//!
//! - `Direct` — look up the word as-is
//! - `Stem` — reduce to a Porter stem first (mechanical, may miss)
//! - `Lemmatize` — tag the word's likely part of speech and reduce to its
//!   dictionary form first
//!
//! Results exclude the normalized base form itself and are memoized per
//! `(word, method)` pair in a resolver-owned cache.
//!
//! # Examples
//!
//! ```
//! use lexis::synonym::{ResolveMethod, SynonymResolver};
//!
//! let resolver = SynonymResolver::new();
//!
//! let direct = resolver.resolve("happy", ResolveMethod::Direct);
//! assert!(direct.contains("glad"));
//!
//! // "cats" has no entry of its own; stemming finds the base form
//! assert!(resolver.resolve("cats", ResolveMethod::Direct).is_empty());
//! assert!(resolver.resolve("cats", ResolveMethod::Stem).contains("feline"));
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::lexicon::{Lexicon, PartOfSpeech};
use crate::morphology::{Lemmatizer, PorterStemmer, PosTagger, Stemmer};

pub mod cache;
pub mod rewrite;

pub use cache::{CacheStats, SynonymCache};
pub use rewrite::SynonymRewriter;

/// The set of alternative surface forms resolved for a word.
///
/// An ordered set: iteration order is deterministic, which makes the
/// "first synonym" rewrite reproducible.
pub type SynonymSet = BTreeSet<String>;

/// How a word is normalized before lexical lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMethod {
    /// Look up all senses of the word as-is.
    Direct,
    /// Reduce the word to its Porter stem, then look up the stem.
    Stem,
    /// Tag the word's likely part of speech, reduce to its dictionary form,
    /// then look up the lemma.
    Lemmatize,
}

impl fmt::Display for ResolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResolveMethod::Direct => "direct",
            ResolveMethod::Stem => "stem",
            ResolveMethod::Lemmatize => "lemmatize",
        };
        write!(f, "{name}")
    }
}

/// Eviction policy for the resolver's cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "policy")]
pub enum EvictionPolicy {
    /// Never evict; entries live for the resolver's lifetime.
    Unbounded,
    /// Evict the least recently used entry once `capacity` is reached.
    Lru {
        /// Maximum number of cached `(word, method)` entries
        capacity: usize,
    },
}

/// Configuration for [`SynonymResolver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymResolverConfig {
    /// Cache eviction policy.
    pub eviction: EvictionPolicy,
}

impl Default for SynonymResolverConfig {
    fn default() -> Self {
        Self {
            eviction: EvictionPolicy::Lru { capacity: 4096 },
        }
    }
}

/// Resolves the alternative surface forms of a word.
///
/// Owns its memoization cache; two resolvers never share cached state.
pub struct SynonymResolver {
    lexicon: Arc<Lexicon>,
    stemmer: PorterStemmer,
    lemmatizer: Lemmatizer,
    tagger: PosTagger,
    cache: SynonymCache,
}

impl SynonymResolver {
    /// Create a resolver over the embedded English lexicon with the default
    /// configuration.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::builtin(), SynonymResolverConfig::default())
    }

    /// Create a resolver over a custom lexicon.
    pub fn with_lexicon(lexicon: Arc<Lexicon>, config: SynonymResolverConfig) -> Self {
        SynonymResolver {
            stemmer: PorterStemmer::new(),
            lemmatizer: Lemmatizer::new(Arc::clone(&lexicon)),
            tagger: PosTagger::new(Arc::clone(&lexicon)),
            cache: SynonymCache::new(config.eviction),
            lexicon,
        }
    }

    /// Resolve the synonym set for `word` under the given method.
    ///
    /// The input is lowercased before lookup. Words without lexical entries
    /// resolve to an empty set, never an error. The normalized base form
    /// (the word itself, its stem, or its lemma) is excluded from the
    /// result.
    pub fn resolve(&self, word: &str, method: ResolveMethod) -> Arc<SynonymSet> {
        let word = word.to_lowercase();

        if let Some(cached) = self.cache.get(&word, method) {
            return cached;
        }

        let base = match method {
            ResolveMethod::Direct => word.clone(),
            ResolveMethod::Stem => self.stemmer.stem(&word),
            ResolveMethod::Lemmatize => {
                let pos = self
                    .tagger
                    .tag(&word)
                    .lexical_pos()
                    .unwrap_or(PartOfSpeech::Noun);
                self.lemmatizer.lemmatize(&word, pos)
            }
        };

        let mut synonyms = SynonymSet::new();
        for synset in self.lexicon.senses(&base) {
            for lemma in &synset.lemmas {
                if *lemma != base {
                    synonyms.insert(lemma.clone());
                }
            }
        }

        tracing::debug!(
            word = %word,
            method = %method,
            base = %base,
            count = synonyms.len(),
            "resolved synonyms"
        );

        let synonyms = Arc::new(synonyms);
        self.cache
            .insert(word, method, Arc::clone(&synonyms));
        synonyms
    }

    /// Get statistics for the resolver's cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Get the lexicon backing this resolver.
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }
}

impl Default for SynonymResolver {
    fn default() -> Self {
        Self::new()
    }
}
