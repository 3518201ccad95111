//! Best-effort part-of-speech tagging for single tokens.
//!
//! Without sentence context a tag can only be a guess: the tagger checks
//! surface shape (numbers, capitalization), then votes across the lexicon's
//! senses, then falls back to suffix heuristics and finally to noun. Callers
//! must treat wrong tags as degraded quality, not as failures.

use std::sync::Arc;

use crate::lexicon::{Lexicon, PartOfSpeech};
use crate::morphology::lemmatizer::irregular_pos;

/// The tag assigned to a single token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Common noun
    Noun,
    /// Capitalized token, assumed to name something
    ProperNoun,
    /// Verb
    Verb,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Numeric token
    Number,
    /// Empty or unclassifiable token
    Other,
}

impl PosTag {
    /// Map the tag into the lexicon's lexical categories.
    ///
    /// Proper nouns map to [`PartOfSpeech::Noun`]; numbers and
    /// unclassifiable tokens have no lexical category.
    pub fn lexical_pos(self) -> Option<PartOfSpeech> {
        match self {
            PosTag::Noun | PosTag::ProperNoun => Some(PartOfSpeech::Noun),
            PosTag::Verb => Some(PartOfSpeech::Verb),
            PosTag::Adjective => Some(PartOfSpeech::Adjective),
            PosTag::Adverb => Some(PartOfSpeech::Adverb),
            PosTag::Number | PosTag::Other => None,
        }
    }
}

const ADVERB_SUFFIXES: &[&str] = &["ly"];
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ness", "ment", "ity", "ance", "ence", "ship", "ism", "hood",
];
const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise", "ify"];
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ish", "ic", "al", "er", "est",
];

/// Assigns a best-effort part-of-speech tag to single tokens.
#[derive(Clone, Debug)]
pub struct PosTagger {
    lexicon: Arc<Lexicon>,
}

impl PosTagger {
    /// Create a new tagger backed by the given lexicon.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        PosTagger { lexicon }
    }

    /// Tag a single token.
    pub fn tag(&self, word: &str) -> PosTag {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return PosTag::Other;
        };

        if word.chars().any(|c| c.is_ascii_digit())
            && word.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '%'))
        {
            return PosTag::Number;
        }

        if first.is_uppercase() {
            return PosTag::ProperNoun;
        }

        let lower = word.to_lowercase();

        // Known words vote by sense count; known irregular forms ("went",
        // "better") tag by their table entry
        if let Some(pos) = self.lexicon_vote(&lower).or_else(|| irregular_pos(&lower)) {
            return match pos {
                PartOfSpeech::Noun => PosTag::Noun,
                PartOfSpeech::Verb => PosTag::Verb,
                PartOfSpeech::Adjective => PosTag::Adjective,
                PartOfSpeech::Adverb => PosTag::Adverb,
            };
        }

        Self::suffix_heuristic(&lower)
    }

    /// Pick the lexical category with the most senses for this word.
    ///
    /// Ties break in noun > verb > adjective > adverb order.
    fn lexicon_vote(&self, word: &str) -> Option<PartOfSpeech> {
        let senses = self.lexicon.senses(word);
        if senses.is_empty() {
            return None;
        }

        const ORDER: [PartOfSpeech; 4] = [
            PartOfSpeech::Noun,
            PartOfSpeech::Verb,
            PartOfSpeech::Adjective,
            PartOfSpeech::Adverb,
        ];

        let mut best = None;
        let mut best_count = 0;
        for pos in ORDER {
            let count = senses.iter().filter(|s| s.pos == pos).count();
            if count > best_count {
                best = Some(pos);
                best_count = count;
            }
        }
        best
    }

    fn suffix_heuristic(word: &str) -> PosTag {
        if ADVERB_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return PosTag::Adverb;
        }
        if NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return PosTag::Noun;
        }
        if VERB_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return PosTag::Verb;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return PosTag::Adjective;
        }
        PosTag::Noun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> PosTagger {
        PosTagger::new(Lexicon::builtin())
    }

    #[test]
    fn test_tag_from_lexicon() {
        let t = tagger();
        assert_eq!(t.tag("car"), PosTag::Noun);
        assert_eq!(t.tag("eat"), PosTag::Verb);
        assert_eq!(t.tag("happy"), PosTag::Adjective);
        assert_eq!(t.tag("quickly"), PosTag::Adverb);
    }

    #[test]
    fn test_tag_proper_noun() {
        let t = tagger();
        assert_eq!(t.tag("Berlin"), PosTag::ProperNoun);
        assert_eq!(t.tag("Alice"), PosTag::ProperNoun);
    }

    #[test]
    fn test_tag_number() {
        let t = tagger();
        assert_eq!(t.tag("42"), PosTag::Number);
        assert_eq!(t.tag("3.14"), PosTag::Number);
        assert_eq!(t.tag("1,024"), PosTag::Number);
    }

    #[test]
    fn test_tag_irregular_forms() {
        let t = tagger();
        assert_eq!(t.tag("went"), PosTag::Verb);
        assert_eq!(t.tag("children"), PosTag::Noun);
        assert_eq!(t.tag("better"), PosTag::Adjective);
    }

    #[test]
    fn test_tag_suffix_heuristics() {
        let t = tagger();
        // None of these are in the lexicon; suffixes decide
        assert_eq!(t.tag("refactoring"), PosTag::Verb);
        assert_eq!(t.tag("cheerfully"), PosTag::Adverb);
        assert_eq!(t.tag("modularity"), PosTag::Noun);
        assert_eq!(t.tag("portable"), PosTag::Adjective);
    }

    #[test]
    fn test_tag_empty_and_unknown() {
        let t = tagger();
        assert_eq!(t.tag(""), PosTag::Other);
        assert_eq!(t.tag("qwzzkx"), PosTag::Noun);
    }

    #[test]
    fn test_lexical_pos_mapping() {
        assert_eq!(PosTag::ProperNoun.lexical_pos(), Some(PartOfSpeech::Noun));
        assert_eq!(PosTag::Number.lexical_pos(), None);
        assert_eq!(PosTag::Adverb.lexical_pos(), Some(PartOfSpeech::Adverb));
    }
}
