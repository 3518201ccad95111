//! Lexical knowledge base: senses (synsets) looked up by lemma.
//!
//! A [`Lexicon`] maps word surface forms to the [`Synset`]s containing them.
//! A curated English dataset is embedded in the crate and shared via
//! [`Lexicon::builtin`]; custom datasets load from JSON files with
//! [`Lexicon::load_from_file`].
//!
//! The JSON format is an array of sense entries:
//!
//! ```json
//! [
//!   { "pos": "n", "lemmas": ["car", "auto", "automobile"], "gloss": "a motor vehicle" },
//!   { "pos": "a", "lemmas": ["big", "large"] }
//! ]
//! ```
//!
//! Multi-word lemmas use `_` joiners (`"domestic_dog"`), as lexical
//! databases conventionally store them.

use std::fmt;
use std::sync::{Arc, LazyLock};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};

/// Lexical category of a sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    /// Noun
    #[serde(rename = "n")]
    Noun,
    /// Verb
    #[serde(rename = "v")]
    Verb,
    /// Adjective
    #[serde(rename = "a")]
    Adjective,
    /// Adverb
    #[serde(rename = "r")]
    Adverb,
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        };
        write!(f, "{name}")
    }
}

/// A set of cognitively synonymous lemmas sharing one meaning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    /// Lexical category of this sense
    pub pos: PartOfSpeech,
    /// Surface forms expressing this sense
    pub lemmas: Vec<String>,
    /// Short definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
}

/// An immutable sense database indexed by lowercased lemma.
#[derive(Clone, Debug)]
pub struct Lexicon {
    /// All senses, in load order
    synsets: Vec<Synset>,
    /// Lowercased lemma -> indices into `synsets`
    by_lemma: AHashMap<String, Vec<u32>>,
}

static BUILTIN: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    let synsets: Vec<Synset> = serde_json::from_str(include_str!("../../resources/lexicon.json"))
        .expect("embedded lexicon data is valid JSON");
    Arc::new(Lexicon::from_synsets(synsets))
});

impl Lexicon {
    /// Get the shared embedded English lexicon.
    ///
    /// Parsed once per process; subsequent calls are cheap clones of the
    /// shared handle.
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    /// Build a lexicon from a list of senses.
    pub fn from_synsets(synsets: Vec<Synset>) -> Self {
        let mut by_lemma: AHashMap<String, Vec<u32>> = AHashMap::new();
        for (index, synset) in synsets.iter().enumerate() {
            for lemma in &synset.lemmas {
                by_lemma
                    .entry(lemma.to_lowercase())
                    .or_default()
                    .push(index as u32);
            }
        }
        Lexicon { synsets, by_lemma }
    }

    /// Load a lexicon from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LexisError::lexicon(format!("failed to read lexicon file '{path}': {e}"))
        })?;

        let synsets: Vec<Synset> = serde_json::from_str(&content).map_err(|e| {
            LexisError::lexicon(format!("failed to parse lexicon JSON from '{path}': {e}"))
        })?;

        let lexicon = Self::from_synsets(synsets);
        tracing::info!(
            path = %path,
            senses = lexicon.len(),
            lemmas = lexicon.lemma_count(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Get all senses containing the given word (case-insensitive).
    ///
    /// Unknown words yield an empty result, never an error.
    pub fn senses(&self, word: &str) -> Vec<&Synset> {
        self.by_lemma
            .get(&word.to_lowercase())
            .map(|indices| {
                indices
                    .iter()
                    .filter_map(|&i| self.synsets.get(i as usize))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the senses of the given word restricted to one lexical category.
    pub fn senses_with_pos(&self, word: &str, pos: PartOfSpeech) -> Vec<&Synset> {
        self.senses(word)
            .into_iter()
            .filter(|synset| synset.pos == pos)
            .collect()
    }

    /// Check whether any sense contains the given word.
    pub fn contains(&self, word: &str) -> bool {
        self.by_lemma.contains_key(&word.to_lowercase())
    }

    /// Check whether a sense of the given lexical category contains the word.
    pub fn contains_with_pos(&self, word: &str, pos: PartOfSpeech) -> bool {
        !self.senses_with_pos(word, pos).is_empty()
    }

    /// Get the number of senses.
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    /// Check if the lexicon has no senses.
    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Get the number of distinct lemma surface forms.
    pub fn lemma_count(&self) -> usize {
        self.by_lemma.len()
    }
}
