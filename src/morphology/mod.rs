//! Morphological analysis: stemming, lemmatization, and part-of-speech
//! tagging.
//!
//! Stemming is mechanical suffix stripping and may produce forms that are
//! not dictionary words (`"flies"` → `"fli"`). Lemmatization reduces a word
//! to its dictionary base form using a part-of-speech hint and validates
//! every candidate against the lexicon (`"ladies"` + noun → `"lady"`).

pub mod lemmatizer;
pub mod stemmer;
pub mod tagger;

pub use lemmatizer::Lemmatizer;
pub use stemmer::{PorterStemmer, Stemmer};
pub use tagger::{PosTag, PosTagger};
