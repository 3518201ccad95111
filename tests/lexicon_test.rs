//! Integration tests for lexicon loading and lookup.

use std::io::Write;

use lexis::lexicon::{Lexicon, PartOfSpeech};

#[test]
fn test_builtin_lexicon_coverage() {
    let lexicon = Lexicon::builtin();

    assert!(!lexicon.is_empty());
    assert!(lexicon.lemma_count() > lexicon.len());

    // A few senses the rest of the library leans on
    assert!(lexicon.contains_with_pos("car", PartOfSpeech::Noun));
    assert!(lexicon.contains_with_pos("run", PartOfSpeech::Verb));
    assert!(lexicon.contains_with_pos("happy", PartOfSpeech::Adjective));
    assert!(lexicon.contains_with_pos("quickly", PartOfSpeech::Adverb));
}

#[test]
fn test_builtin_is_shared() {
    let a = Lexicon::builtin();
    let b = Lexicon::builtin();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{ "pos": "n", "lemmas": ["ship", "vessel"], "gloss": "a vessel that travels on water" }},
            {{ "pos": "v", "lemmas": ["ship", "transport"] }}
        ]"#
    )
    .unwrap();

    let lexicon = Lexicon::load_from_file(file.path().to_str().unwrap()).unwrap();

    assert_eq!(lexicon.len(), 2);
    assert_eq!(lexicon.senses("ship").len(), 2);
    assert_eq!(lexicon.senses_with_pos("ship", PartOfSpeech::Verb).len(), 1);
    assert!(lexicon.contains("vessel"));
    // The gloss is optional
    assert!(
        lexicon.senses_with_pos("ship", PartOfSpeech::Verb)[0]
            .gloss
            .is_none()
    );
}

#[test]
fn test_load_from_missing_file_fails() {
    let result = Lexicon::load_from_file("/nonexistent/lexicon.json");
    assert!(result.is_err());
}

#[test]
fn test_load_from_malformed_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let result = Lexicon::load_from_file(file.path().to_str().unwrap());
    assert!(result.is_err());
}

#[test]
fn test_unknown_words_degrade_to_empty() {
    let lexicon = Lexicon::builtin();
    assert!(lexicon.senses("zzyzxq").is_empty());
    assert!(!lexicon.contains("zzyzxq"));
}
