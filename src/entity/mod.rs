//! Named-entity extraction.
//!
//! [`EntityExtractor`] finds person, organization, and geo-political spans:
//! tokens are POS-tagged, consecutive proper nouns are grouped into chunks,
//! and each chunk is classified against small gazetteers (organization
//! markers, given names, place names). Chunks that match nothing are
//! dropped rather than guessed.
//!
//! # Examples
//!
//! ```
//! use lexis::entity::{EntityExtractor, EntityKind};
//!
//! let extractor = EntityExtractor::new();
//! let entities = extractor
//!     .extract("Barack Obama met Angela Merkel in Berlin")
//!     .unwrap();
//!
//! assert_eq!(entities.len(), 3);
//! assert_eq!(entities[0].text, "Barack Obama");
//! assert_eq!(entities[0].kind, EntityKind::Person);
//! assert_eq!(entities[2].kind, EntityKind::GeoPolitical);
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::stopwords::StopWordFilter;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::morphology::{PosTag, PosTagger};

/// The kind of a recognized entity span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A person's name
    Person,
    /// A company, institution, or other organization
    Organization,
    /// A country, city, state, or other geo-political entity
    GeoPolitical,
}

/// A recognized entity span.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// The span text, tokens joined with single spaces
    pub text: String,
    /// Classification of the span
    pub kind: EntityKind,
    /// Byte offset where the span starts in the original text
    pub start_offset: usize,
    /// Byte offset where the span ends in the original text
    pub end_offset: usize,
}

/// Suffix tokens that mark a chunk as an organization.
const ORGANIZATION_MARKERS: &[&str] = &[
    "Agency",
    "Association",
    "Bank",
    "Co",
    "Committee",
    "Company",
    "Corp",
    "Corporation",
    "Council",
    "Department",
    "Foundation",
    "Group",
    "Inc",
    "Institute",
    "LLC",
    "Laboratories",
    "Labs",
    "Ltd",
    "Ministry",
    "University",
];

/// Common given names used to recognize person chunks.
const GIVEN_NAMES: &[&str] = &[
    "Adam", "Alice", "Amy", "Andrew", "Angela", "Anna", "Anthony", "Barack", "Barbara", "Ben",
    "Bob", "Carlos", "Carol", "Charles", "Chris", "Daniel", "David", "Diana", "Donald", "Edward",
    "Elizabeth", "Emma", "Eric", "Frank", "George", "Grace", "Hannah", "Helen", "Henry", "Jack",
    "Jacob", "James", "Jane", "Jennifer", "John", "Joseph", "Karen", "Kate", "Kevin", "Laura",
    "Linda", "Lisa", "Margaret", "Maria", "Mark", "Martin", "Mary", "Michael", "Nancy", "Oliver",
    "Patricia", "Paul", "Peter", "Rachel", "Richard", "Robert", "Ruth", "Sarah", "Sophia",
    "Steven", "Susan", "Thomas", "Victoria", "William",
];

/// Countries, cities, and states recognized as geo-political entities.
const PLACES: &[&str] = &[
    "Australia",
    "Beijing",
    "Berlin",
    "Brazil",
    "California",
    "Canada",
    "Chicago",
    "China",
    "Egypt",
    "England",
    "France",
    "Germany",
    "India",
    "Italy",
    "Japan",
    "Kenya",
    "London",
    "Madrid",
    "Mexico",
    "Moscow",
    "New York",
    "Paris",
    "Rome",
    "Russia",
    "Spain",
    "Texas",
    "Tokyo",
    "United Kingdom",
    "United States",
    "Washington",
];

static ORGANIZATION_MARKER_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ORGANIZATION_MARKERS.iter().copied().collect());
static GIVEN_NAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| GIVEN_NAMES.iter().copied().collect());
static PLACE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PLACES.iter().copied().collect());

/// A proper-noun token collected into the current chunk.
struct ChunkWord {
    text: String,
    start: usize,
    end: usize,
}

/// Extracts person, organization, and geo-political spans from text.
pub struct EntityExtractor {
    tagger: PosTagger,
    tokenizer: WhitespaceTokenizer,
    stopwords: StopWordFilter,
}

impl EntityExtractor {
    /// Create an extractor over the embedded English lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::builtin())
    }

    /// Create an extractor over a custom lexicon.
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        EntityExtractor {
            tagger: PosTagger::new(lexicon),
            tokenizer: WhitespaceTokenizer::new(),
            stopwords: StopWordFilter::new(),
        }
    }

    /// Extract entity spans from the given text.
    ///
    /// Spans are returned in document order with byte offsets into the
    /// original text.
    pub fn extract(&self, text: &str) -> Result<Vec<Entity>> {
        let mut entities = Vec::new();
        let mut chunk: Vec<ChunkWord> = Vec::new();

        for token in self.tokenizer.tokenize(text)? {
            let trimmed = token.text.trim_matches(|c: char| c.is_ascii_punctuation());
            if trimmed.is_empty() || self.tagger.tag(trimmed) != PosTag::ProperNoun {
                self.flush_chunk(&mut chunk, &mut entities);
                continue;
            }

            let leading = token.text.len()
                - token
                    .text
                    .trim_start_matches(|c: char| c.is_ascii_punctuation())
                    .len();
            chunk.push(ChunkWord {
                text: trimmed.to_string(),
                start: token.start_offset + leading,
                end: token.start_offset + leading + trimmed.len(),
            });

            // Trailing punctuation closes the chunk ("Merkel," ends the name)
            if token.text.ends_with(|c: char| c.is_ascii_punctuation()) {
                self.flush_chunk(&mut chunk, &mut entities);
            }
        }
        self.flush_chunk(&mut chunk, &mut entities);

        tracing::debug!(count = entities.len(), "extracted entities");
        Ok(entities)
    }

    /// Classify and emit the pending chunk, if it classifies.
    fn flush_chunk(&self, chunk: &mut Vec<ChunkWord>, entities: &mut Vec<Entity>) {
        if chunk.is_empty() {
            return;
        }
        let words = std::mem::take(chunk);

        // A capitalized sentence-initial stopword is not part of the name
        // ("The United States" -> "United States")
        let words: Vec<ChunkWord> = words
            .into_iter()
            .skip_while(|w| self.stopwords.is_stop_word(&w.text))
            .collect();
        let Some((first, last)) = words.first().zip(words.last()) else {
            return;
        };

        let start_offset = first.start;
        let end_offset = last.end;
        let joined = words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let Some(kind) = classify(&words, &joined) else {
            return;
        };

        entities.push(Entity {
            text: joined,
            kind,
            start_offset,
            end_offset,
        });
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a proper-noun chunk, or drop it.
fn classify(words: &[ChunkWord], joined: &str) -> Option<EntityKind> {
    if words
        .iter()
        .any(|w| ORGANIZATION_MARKER_SET.contains(w.text.as_str()))
    {
        return Some(EntityKind::Organization);
    }

    if PLACE_SET.contains(joined) || words.iter().any(|w| PLACE_SET.contains(w.text.as_str())) {
        return Some(EntityKind::GeoPolitical);
    }

    if words
        .first()
        .is_some_and(|w| GIVEN_NAME_SET.contains(w.text.as_str()))
    {
        return Some(EntityKind::Person);
    }

    None
}
