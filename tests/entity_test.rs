//! Integration tests for named-entity extraction.

use lexis::entity::{EntityExtractor, EntityKind};

#[test]
fn test_mixed_entity_kinds_in_document_order() {
    let extractor = EntityExtractor::new();
    let entities = extractor
        .extract("Maria left Acme Corp and moved from Berlin to Tokyo")
        .unwrap();

    let kinds: Vec<EntityKind> = entities.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::Person,
            EntityKind::Organization,
            EntityKind::GeoPolitical,
            EntityKind::GeoPolitical,
        ]
    );

    let texts: Vec<&str> = entities.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Maria", "Acme Corp", "Berlin", "Tokyo"]);
}

#[test]
fn test_offsets_index_the_original_text() {
    let extractor = EntityExtractor::new();
    let text = "Susan visited Paris, then London.";
    let entities = extractor.extract(text).unwrap();

    for entity in &entities {
        let span = &text[entity.start_offset..entity.end_offset];
        assert_eq!(span, entity.text);
    }
}

#[test]
fn test_multi_word_place_names() {
    let extractor = EntityExtractor::new();
    let entities = extractor.extract("flights to New York and London").unwrap();

    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].text, "New York");
    assert_eq!(entities[0].kind, EntityKind::GeoPolitical);
}

#[test]
fn test_organization_marker_positions() {
    let extractor = EntityExtractor::new();

    // Marker as the final token
    let entities = extractor.extract("he works at Globex Corporation").unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].kind, EntityKind::Organization);

    // Marker mid-chunk
    let entities = extractor.extract("the Stanford University campus").unwrap();
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].text, "Stanford University");
    assert_eq!(entities[0].kind, EntityKind::Organization);
}

#[test]
fn test_empty_and_entity_free_text() {
    let extractor = EntityExtractor::new();
    assert!(extractor.extract("").unwrap().is_empty());
    assert!(extractor.extract("nothing capitalized here").unwrap().is_empty());
}
