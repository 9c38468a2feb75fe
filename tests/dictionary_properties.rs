// Property-style checks over the built-in dictionaries
// WHY: Every curated pair must survive the full pipeline, not just a lookup

use transatlantic::dictionary::capitalize;
use transatlantic::{Direction, DictionaryStore, TranslationResult};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::translator;

fn in_sentence(term: &str) -> String {
    format!("I like the {term} here.")
}

#[test]
fn test_identity_on_text_without_terms() {
    let sentences = [
        "",
        "The quick brown fox jumps over the lazy dog.",
        "We watched the footie match for a while.",
        "Numbers like 1234 and 7 stay put!",
    ];
    for direction in [Direction::AmericanToBritish, Direction::BritishToAmerican] {
        for sentence in sentences {
            let result = translator().translate(sentence, direction);
            assert_eq!(
                result,
                TranslationResult::new(sentence.to_string(), Vec::new()),
                "{direction}: {sentence:?}"
            );
        }
    }
}

#[test]
fn test_spelling_round_trip() {
    let spelling = &DictionaryStore::builtin().canonical().american_to_british_spelling;
    assert!(!spelling.is_empty());

    for (american, british) in spelling.iter() {
        let there = translator().translate(&in_sentence(american), Direction::AmericanToBritish);
        assert_eq!(there.translated_text, in_sentence(british), "to british: {american}");
        assert_eq!(there.translated_spans, vec![british.to_string()]);

        let back = translator().translate(&there.translated_text, Direction::BritishToAmerican);
        assert_eq!(back.translated_text, in_sentence(american), "back to american: {british}");
    }
}

#[test]
fn test_title_round_trip() {
    let titles = &DictionaryStore::builtin().canonical().american_to_british_titles;
    for (american, _) in titles.iter() {
        let original = format!("Ask {} Jones.", capitalize(american));
        let there = translator().translate(&original, Direction::AmericanToBritish);
        let back = translator().translate(&there.translated_text, Direction::BritishToAmerican);
        assert_eq!(back.translated_text, original);
    }
}

#[test]
fn test_capitalization_preserved_for_every_pair() {
    let store = DictionaryStore::builtin();
    for direction in [Direction::AmericanToBritish, Direction::BritishToAmerican] {
        for (key, value) in store.vocabulary(direction).iter() {
            let lower = translator().translate(&format!("{key} is here"), direction);
            assert_eq!(lower.translated_text, format!("{value} is here"), "{direction}: {key}");

            let upper = translator().translate(&format!("{} is here", capitalize(key)), direction);
            assert_eq!(
                upper.translated_text,
                format!("{} is here", capitalize(value)),
                "{direction}: {key}"
            );
        }
    }
}

#[test]
fn test_keys_never_match_inside_longer_words() {
    let store = DictionaryStore::builtin();
    for direction in [Direction::AmericanToBritish, Direction::BritishToAmerican] {
        // Phrases are skipped: a shorter phrase key may legitimately match
        // inside them ("car boot" in "car boot salexyz")
        let single_words = store
            .vocabulary(direction)
            .iter()
            .filter(|(key, _)| !key.contains(' '));
        for (key, _) in single_words {
            for embedded in [
                format!("{key}xyz here"),
                format!("xyz{key} here"),
                format!("x-{key} here"),
            ] {
                let result = translator().translate(&embedded, direction);
                assert!(
                    result.translated_spans.is_empty(),
                    "{direction}: {key:?} matched inside {embedded:?}: {:?}",
                    result.translated_spans
                );
            }
        }
    }
}

#[test]
fn test_concurrent_translation_needs_no_coordination() {
    let inputs = [
        ("The parking lot was full.", Direction::AmericanToBritish, "The car park was full."),
        ("Have you met Mrs Kalyani?", Direction::BritishToAmerican, "Have you met Mrs. Kalyani?"),
        ("Lunch is at 12:15 today.", Direction::AmericanToBritish, "Lunch is at 12.15 today."),
    ];

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let (input, direction, expected) = inputs[worker % inputs.len()];
            scope.spawn(move || {
                for _ in 0..50 {
                    let result = translator().translate(input, direction);
                    assert_eq!(result.translated_text, expected);
                }
            });
        }
    });
}
