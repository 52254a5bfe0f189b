use mnemo_core::errors::{MnemoError, TrainingError};
use mnemo_core::Category;
use mnemo_training::{load_corpus, parse_corpus, parse_papers};
use test_fixtures::{fixture_path, read_fixture, LABELLED_CORPUS, UNTAGGED_BATCH};

#[test]
fn fixture_corpus_resolves_labels() {
    let corpus = load_corpus(&fixture_path(LABELLED_CORPUS)).unwrap();
    assert_eq!(corpus.len(), 12);
    assert_eq!(corpus.skipped_items, 0);
    // One unknown concept code and two periods contradicting the year.
    assert_eq!(corpus.dropped_labels, 3);

    let van_dijck = corpus
        .examples
        .iter()
        .find(|e| e.paper.key == "VANDIJCK2007")
        .unwrap();
    assert_eq!(van_dijck.paper.year, Some(2007));
    assert_eq!(van_dijck.paper.authors, ["Jose van Dijck"]);
    assert_eq!(van_dijck.labels_for(Category::Discipline), ["DSOC"]);
    assert_eq!(
        van_dijck.labels_for(Category::Concept),
        ["CTCollectiveMemory", "CTDigitalMemory"]
    );

    let nora = corpus.examples.iter().find(|e| e.paper.key == "NORA1989").unwrap();
    assert_eq!(nora.paper.year, Some(1989));
    assert_eq!(nora.paper.keywords, ["sites"]);
    assert_eq!(nora.paper.entry_type, "journalArticle");
}

#[test]
fn keyword_codes_stand_in_for_missing_ground_truth() {
    let json = r#"{"items": [
        {"key": "A", "title": "Monuments of the nation", "tags": ["MCMO", "DHIS", "monuments", "T4"]},
        {"key": "B", "title": "Plain paper", "tags": ["memory"]}
    ]}"#;
    let corpus = parse_corpus(json).unwrap();
    let a = &corpus.examples[0];
    assert_eq!(a.labels_for(Category::MemoryCarrier), ["MCMO"]);
    assert_eq!(a.labels_for(Category::Discipline), ["DHIS"]);
    assert!(a.labels_for(Category::Concept).is_empty());
    assert_eq!(a.paper.keywords, ["monuments", "T4"]);

    let b = &corpus.examples[1];
    assert!(b.labels.is_empty());
    assert_eq!(b.paper.keywords, ["memory"]);
}

#[test]
fn unreadable_items_are_skipped() {
    let json = r#"[{"key": "ok", "title": "Fine"}, {"key": "bad", "title": 42}]"#;
    let corpus = parse_corpus(json).unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.skipped_items, 1);
}

#[test]
fn structural_problems_abort() {
    assert!(matches!(
        parse_corpus(r#"{"items": []}"#),
        Err(MnemoError::TrainingError(TrainingError::EmptyCorpus))
    ));
    assert!(matches!(
        parse_corpus("not json"),
        Err(MnemoError::TrainingError(TrainingError::InvalidCorpus { .. }))
    ));
    assert!(matches!(
        parse_corpus(r#"[{"title": 1}, {"title": 2}]"#),
        Err(MnemoError::TrainingError(TrainingError::InvalidCorpus { .. }))
    ));
}

#[test]
fn papers_to_tag_accept_both_layouts() {
    let batch = parse_papers(&read_fixture(UNTAGGED_BATCH)).unwrap();
    assert_eq!(batch.len(), 4);
    assert_eq!(batch[0].year, Some(2020));
    assert_eq!(batch[3].year, None);
    assert!(batch[2].abstract_text.is_none());

    let bare = parse_papers(r#"[{"key": "x", "title": "T", "year": 1850}]"#).unwrap();
    assert_eq!(bare[0].year, Some(1850));
    assert!(matches!(parse_papers("{"), Err(MnemoError::SerializationError(_))));
}
