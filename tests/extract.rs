use std::path::Path;

use ner_workbench::config::Settings;
use ner_workbench::nlp::{
    self, lexicon,
    registry::{ModelId, ModelRegistry},
    NerError,
};

fn test_settings(dir: &Path) -> Settings {
    Settings {
        models_dir: dir.to_path_buf(),
        default_model: ModelId::EnCoreWebSm,
        max_input_chars: 50_000,
    }
}

#[test]
fn known_sentence_yields_person_and_location() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = ModelRegistry::new(test_settings(dir.path()));
    let spans = nlp::analyze(
        &registry,
        ModelId::EnCoreWebSm,
        "Barack Obama was born in Hawaii.",
    )
    .expect("analysis succeeds");

    let person = spans.iter().find(|s| s.label == "PERSON").expect("person");
    assert_eq!(person.text, "Barack Obama");
    assert_eq!((person.start, person.end), (0, 12));

    let place = spans.iter().find(|s| s.label == "GPE").expect("location");
    assert_eq!(place.text, "Hawaii");
    assert_eq!((place.start, place.end), (25, 31));
}

#[test]
fn empty_input_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = ModelRegistry::new(test_settings(dir.path()));
    let err = nlp::analyze(&registry, ModelId::EnCoreWebSm, "   \n\t").unwrap_err();
    assert!(matches!(err, NerError::EmptyInput));
}

#[test]
fn oversized_input_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut settings = test_settings(dir.path());
    settings.max_input_chars = 16;
    let registry = ModelRegistry::new(settings);
    let err = nlp::analyze(&registry, ModelId::EnCoreWebSm, "Barack Obama was born in Hawaii.")
        .unwrap_err();
    assert!(matches!(err, NerError::InputTooLong(16)));
}

#[test]
fn longest_match_wins_and_spans_never_overlap() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = test_settings(dir.path());
    lexicon::install(&settings, ModelId::EnCoreWebMd).expect("install md");
    let registry = ModelRegistry::new(settings);

    let text = "Apple Inc. is planning to open a new office in New York City next January.";
    let spans = nlp::analyze(&registry, ModelId::EnCoreWebMd, text).expect("analysis succeeds");

    let org = spans.iter().find(|s| s.label == "ORG").expect("org");
    assert_eq!(org.text, "Apple Inc.");
    assert!(!spans.iter().any(|s| s.text == "Apple"));

    let place = spans.iter().find(|s| s.label == "GPE").expect("gpe");
    assert_eq!(place.text, "New York City");

    assert!(spans.iter().any(|s| s.label == "DATE"));

    for pair in spans.windows(2) {
        assert!(pair[0].start < pair[1].start, "spans ordered by start");
        assert!(pair[0].end <= pair[1].start, "spans never overlap");
    }
}

#[test]
fn word_boundaries_prevent_substring_hits() {
    let dir = tempfile::tempdir().expect("tempdir");
    let registry = ModelRegistry::new(test_settings(dir.path()));
    let spans = nlp::analyze(&registry, ModelId::EnCoreWebSm, "Pineapple season in Japantown.")
        .expect("analysis succeeds");
    assert!(!spans.iter().any(|s| s.text == "Apple" || s.text == "apple"));
    assert!(!spans.iter().any(|s| s.text == "Japan"));
}

#[test]
fn switching_models_over_the_same_text_stays_consistent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = test_settings(dir.path());
    lexicon::install(&settings, ModelId::EnCoreWebMd).expect("install md");
    lexicon::install(&settings, ModelId::EnCoreWebLg).expect("install lg");
    let registry = ModelRegistry::new(settings);

    let text = "Tim Cook visited Boston last week and spoke about the iPhone.";
    for model in ModelId::ALL {
        let spans = nlp::analyze(&registry, model, text).expect("analysis succeeds");
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start, "no duplicates or overlaps");
        }
    }
}
