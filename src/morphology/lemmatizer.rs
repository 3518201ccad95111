//! Dictionary-form reduction (lemmatization).
//!
//! Unlike stemming, lemmatization always produces a valid dictionary word:
//! an irregular-form table is consulted first, then part-of-speech-specific
//! detachment rules are applied and every candidate is validated against the
//! lexicon. Words that cannot be reduced pass through unchanged.
//!
//! # Examples
//!
//! ```
//! use lexis::lexicon::{Lexicon, PartOfSpeech};
//! use lexis::morphology::lemmatizer::Lemmatizer;
//!
//! let lemmatizer = Lemmatizer::new(Lexicon::builtin());
//!
//! assert_eq!(lemmatizer.lemmatize("cats", PartOfSpeech::Noun), "cat");
//! assert_eq!(lemmatizer.lemmatize("running", PartOfSpeech::Verb), "run");
//! assert_eq!(lemmatizer.lemmatize("happier", PartOfSpeech::Adjective), "happy");
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashMap;

use crate::lexicon::{Lexicon, PartOfSpeech};

/// Suffix detachment rules for nouns.
const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Suffix detachment rules for verbs.
const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

/// Suffix detachment rules for adjectives.
const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Irregular forms that detachment rules cannot reduce.
const IRREGULAR_FORMS: &[(PartOfSpeech, &str, &str)] = &[
    (PartOfSpeech::Verb, "am", "be"),
    (PartOfSpeech::Verb, "are", "be"),
    (PartOfSpeech::Verb, "ate", "eat"),
    (PartOfSpeech::Verb, "began", "begin"),
    (PartOfSpeech::Verb, "begun", "begin"),
    (PartOfSpeech::Verb, "been", "be"),
    (PartOfSpeech::Verb, "bought", "buy"),
    (PartOfSpeech::Verb, "brought", "bring"),
    (PartOfSpeech::Verb, "did", "do"),
    (PartOfSpeech::Verb, "done", "do"),
    (PartOfSpeech::Verb, "eaten", "eat"),
    (PartOfSpeech::Verb, "gave", "give"),
    (PartOfSpeech::Verb, "getting", "get"),
    (PartOfSpeech::Verb, "given", "give"),
    (PartOfSpeech::Verb, "gone", "go"),
    (PartOfSpeech::Verb, "got", "get"),
    (PartOfSpeech::Verb, "had", "have"),
    (PartOfSpeech::Verb, "has", "have"),
    (PartOfSpeech::Verb, "is", "be"),
    (PartOfSpeech::Verb, "made", "make"),
    (PartOfSpeech::Verb, "planned", "plan"),
    (PartOfSpeech::Verb, "planning", "plan"),
    (PartOfSpeech::Verb, "ran", "run"),
    (PartOfSpeech::Verb, "running", "run"),
    (PartOfSpeech::Verb, "said", "say"),
    (PartOfSpeech::Verb, "sat", "sit"),
    (PartOfSpeech::Verb, "saw", "see"),
    (PartOfSpeech::Verb, "seen", "see"),
    (PartOfSpeech::Verb, "sitting", "sit"),
    (PartOfSpeech::Verb, "slept", "sleep"),
    (PartOfSpeech::Verb, "spoke", "speak"),
    (PartOfSpeech::Verb, "spoken", "speak"),
    (PartOfSpeech::Verb, "stopped", "stop"),
    (PartOfSpeech::Verb, "swam", "swim"),
    (PartOfSpeech::Verb, "swimming", "swim"),
    (PartOfSpeech::Verb, "taken", "take"),
    (PartOfSpeech::Verb, "thought", "think"),
    (PartOfSpeech::Verb, "took", "take"),
    (PartOfSpeech::Verb, "was", "be"),
    (PartOfSpeech::Verb, "went", "go"),
    (PartOfSpeech::Verb, "were", "be"),
    (PartOfSpeech::Verb, "wrote", "write"),
    (PartOfSpeech::Noun, "children", "child"),
    (PartOfSpeech::Noun, "feet", "foot"),
    (PartOfSpeech::Noun, "geese", "goose"),
    (PartOfSpeech::Noun, "knives", "knife"),
    (PartOfSpeech::Noun, "lives", "life"),
    (PartOfSpeech::Noun, "men", "man"),
    (PartOfSpeech::Noun, "mice", "mouse"),
    (PartOfSpeech::Noun, "teeth", "tooth"),
    (PartOfSpeech::Noun, "wives", "wife"),
    (PartOfSpeech::Noun, "women", "woman"),
    (PartOfSpeech::Adjective, "best", "good"),
    (PartOfSpeech::Adjective, "better", "good"),
    (PartOfSpeech::Adjective, "bigger", "big"),
    (PartOfSpeech::Adjective, "biggest", "big"),
    (PartOfSpeech::Adjective, "easier", "easy"),
    (PartOfSpeech::Adjective, "easiest", "easy"),
    (PartOfSpeech::Adjective, "happier", "happy"),
    (PartOfSpeech::Adjective, "happiest", "happy"),
    (PartOfSpeech::Adjective, "worse", "bad"),
    (PartOfSpeech::Adjective, "worst", "bad"),
    (PartOfSpeech::Adverb, "best", "well"),
    (PartOfSpeech::Adverb, "better", "well"),
    (PartOfSpeech::Adverb, "further", "far"),
];

/// Irregular forms indexed by surface form.
static IRREGULAR_INDEX: LazyLock<AHashMap<&'static str, Vec<(PartOfSpeech, &'static str)>>> =
    LazyLock::new(|| {
        let mut index: AHashMap<&'static str, Vec<(PartOfSpeech, &'static str)>> = AHashMap::new();
        for &(pos, form, lemma) in IRREGULAR_FORMS {
            index.entry(form).or_default().push((pos, lemma));
        }
        index
    });

fn irregular_lemma(word: &str, pos: PartOfSpeech) -> Option<&'static str> {
    IRREGULAR_INDEX
        .get(word)?
        .iter()
        .find(|&&(p, _)| p == pos)
        .map(|&(_, lemma)| lemma)
}

/// Look up the lexical category of a known irregular form.
///
/// Ties break in noun > verb > adjective > adverb order ("better" is the
/// adjective before it is the adverb).
pub(crate) fn irregular_pos(word: &str) -> Option<PartOfSpeech> {
    const ORDER: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];
    let entries = IRREGULAR_INDEX.get(word)?;
    ORDER
        .into_iter()
        .find(|&pos| entries.iter().any(|&(p, _)| p == pos))
}

fn rules_for(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Reduces words to their dictionary base form using a part-of-speech hint.
#[derive(Clone, Debug)]
pub struct Lemmatizer {
    lexicon: Arc<Lexicon>,
}

impl Lemmatizer {
    /// Create a new lemmatizer backed by the given lexicon.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Lemmatizer { lexicon }
    }

    /// Reduce `word` to its dictionary form for the given lexical category.
    ///
    /// Falls back to the (lowercased) input when no reduction validates
    /// against the lexicon.
    pub fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        let word = word.to_lowercase();

        if let Some(lemma) = irregular_lemma(&word, pos) {
            return lemma.to_string();
        }

        if self.lexicon.contains_with_pos(&word, pos) {
            return word;
        }

        for (suffix, replacement) in rules_for(pos) {
            if let Some(stem) = word.strip_suffix(suffix) {
                let candidate = format!("{stem}{replacement}");
                if self.lexicon.contains_with_pos(&candidate, pos) {
                    return candidate;
                }
            }
        }

        word
    }
}
