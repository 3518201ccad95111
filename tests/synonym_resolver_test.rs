//! Integration tests for synonym resolution and rewriting.

use std::sync::Arc;

use lexis::lexicon::{Lexicon, PartOfSpeech, Synset};
use lexis::synonym::{
    EvictionPolicy, ResolveMethod, SynonymResolver, SynonymResolverConfig, SynonymRewriter,
};

#[test]
fn test_all_methods_agree_on_base_forms() {
    let resolver = SynonymResolver::new();

    // "car" is already a dictionary base form, so every method resolves the
    // same senses
    let direct = resolver.resolve("car", ResolveMethod::Direct);
    let lemmatized = resolver.resolve("car", ResolveMethod::Lemmatize);

    assert_eq!(direct, lemmatized);
    assert!(direct.contains("automobile"));
}

#[test]
fn test_methods_differ_on_inflected_forms() {
    let resolver = SynonymResolver::new();

    // No lexical entry for the inflected form itself
    assert!(resolver.resolve("cats", ResolveMethod::Direct).is_empty());

    // Both normalizing methods reach the senses of "cat"
    let stemmed = resolver.resolve("cats", ResolveMethod::Stem);
    let lemmatized = resolver.resolve("cats", ResolveMethod::Lemmatize);
    assert!(stemmed.contains("feline"));
    assert_eq!(stemmed, lemmatized);
}

#[test]
fn test_stemming_can_miss_where_lemmatization_hits() {
    let resolver = SynonymResolver::new();

    // Porter reduces "flies" to "fli", which has no senses; an irregular
    // verb reduces properly through the lemmatizer
    assert!(resolver.resolve("went", ResolveMethod::Stem).is_empty());
    assert!(
        resolver
            .resolve("went", ResolveMethod::Lemmatize)
            .contains("proceed")
    );
}

#[test]
fn test_resolved_sets_never_contain_the_base_form() {
    let resolver = SynonymResolver::new();

    for word in ["car", "happy", "run", "eat", "quick"] {
        for method in [
            ResolveMethod::Direct,
            ResolveMethod::Stem,
            ResolveMethod::Lemmatize,
        ] {
            let synonyms = resolver.resolve(word, method);
            assert!(
                !synonyms.contains(word),
                "{word} leaked into its own {method:?} synonym set"
            );
        }
    }
}

#[test]
fn test_unknown_words_resolve_empty_for_every_method() {
    let resolver = SynonymResolver::new();

    for method in [
        ResolveMethod::Direct,
        ResolveMethod::Stem,
        ResolveMethod::Lemmatize,
    ] {
        assert!(resolver.resolve("zzyzxq", method).is_empty());
    }
}

#[test]
fn test_memoized_results_are_stable() {
    let resolver = SynonymResolver::new();

    let first = resolver.resolve("happy", ResolveMethod::Lemmatize);
    let second = resolver.resolve("happy", ResolveMethod::Lemmatize);
    let third = resolver.resolve("HAPPY", ResolveMethod::Lemmatize);

    assert_eq!(first, second);
    assert_eq!(first, third);

    let stats = resolver.cache_stats();
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
}

#[test]
fn test_lru_eviction_bounds_the_cache() {
    let resolver = SynonymResolver::with_lexicon(
        Lexicon::builtin(),
        SynonymResolverConfig {
            eviction: EvictionPolicy::Lru { capacity: 2 },
        },
    );

    resolver.resolve("car", ResolveMethod::Direct);
    resolver.resolve("cat", ResolveMethod::Direct);
    resolver.resolve("dog", ResolveMethod::Direct);

    let stats = resolver.cache_stats();
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.capacity, Some(2));
}

#[test]
fn test_unbounded_cache_never_evicts() {
    let resolver = SynonymResolver::with_lexicon(
        Lexicon::builtin(),
        SynonymResolverConfig {
            eviction: EvictionPolicy::Unbounded,
        },
    );

    for word in ["car", "cat", "dog", "house", "happy", "big"] {
        resolver.resolve(word, ResolveMethod::Direct);
    }

    let stats = resolver.cache_stats();
    assert_eq!(stats.entries, 6);
    assert_eq!(stats.capacity, None);
}

#[test]
fn test_resolver_over_custom_lexicon() {
    let lexicon = Arc::new(Lexicon::from_synsets(vec![Synset {
        pos: PartOfSpeech::Noun,
        lemmas: vec!["rocket".to_string(), "projectile".to_string()],
        gloss: None,
    }]));
    let resolver = SynonymResolver::with_lexicon(lexicon, SynonymResolverConfig::default());

    let synonyms = resolver.resolve("rocket", ResolveMethod::Direct);
    assert_eq!(synonyms.len(), 1);
    assert!(synonyms.contains("projectile"));

    // Words from the embedded lexicon are unknown here
    assert!(resolver.resolve("car", ResolveMethod::Direct).is_empty());
}

#[test]
fn test_rewriter_first_and_random_share_the_resolver_cache() {
    let resolver = Arc::new(SynonymResolver::new());
    let rewriter = SynonymRewriter::new(Arc::clone(&resolver));

    rewriter
        .replace_with_first("big car", ResolveMethod::Direct)
        .unwrap();
    rewriter
        .replace_with_random("big car", ResolveMethod::Direct)
        .unwrap();

    let stats = resolver.cache_stats();
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.hits, 2);
}

#[test]
fn test_rewriter_with_lemmatize_method() {
    let resolver = Arc::new(SynonymResolver::new());
    let rewriter = SynonymRewriter::new(resolver);

    let rewritten = rewriter
        .replace_with_first("children running", ResolveMethod::Lemmatize)
        .unwrap();

    // "children" -> senses of "child", "running" -> senses of "run";
    // the first form in each ordered set wins
    assert_eq!(rewritten, "kid dash");
}
