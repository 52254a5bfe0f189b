use std::sync::Arc;

use mnemo_core::config::MnemoConfig;
use mnemo_core::errors::{MnemoError, TrainingError};
use mnemo_core::{Category, CategoryStatus, Paper, TrainingExample};
use mnemo_store::ModelStore;
use mnemo_tagging::TaggingEngine;
use mnemo_training::{evaluate, parse_corpus, parse_papers, ModelTrainer, ValidationPlan};
use test_fixtures::{read_fixture, LABELLED_CORPUS, UNTAGGED_BATCH};

fn example(title: &str, abstract_text: &str, concepts: &[&str]) -> TrainingExample {
    TrainingExample::new(Paper::new(title, title).with_year(2015).with_abstract(abstract_text))
        .with_labels(Category::Concept, concepts.iter().copied())
}

fn digital_and_trauma() -> Vec<TrainingExample> {
    let both = ["CTCollectiveMemory", "CTDigitalMemory"];
    vec![
        example("Collective memory and digital media", "Collective memory in digital media.", &both),
        example("Digital collective memory", "Digital media and collective memory.", &both),
        example("Collective memory goes digital", "Collective memory digital archives.", &both),
        example("Trauma and testimony", "Psychological trauma and survivor testimony.", &["CTTrauma"]),
        example("Testimony of trauma survivors", "Survivor testimony of psychological trauma.", &["CTTrauma"]),
        example("Trauma after war", "War trauma and survivor testimony.", &["CTTrauma"]),
    ]
}

fn no_shared_vocabulary() -> Paper {
    Paper::new("weather", "Weather report")
        .with_year(2001)
        .with_abstract("Rain expected for the coming week.")
}

fn engine(model: mnemo_classify::TrainedModel) -> TaggingEngine {
    TaggingEngine::new(Arc::new(model), &MnemoConfig::default())
}

#[test]
fn lexical_evidence_and_training_agree() {
    let trainer = ModelTrainer::new(MnemoConfig::default());
    let (model, report) = trainer.train(&digital_and_trauma()).unwrap();
    let engine = engine(model);

    let paper = Paper::new("q", "Collective memory in a digital world")
        .with_year(2020)
        .with_abstract("Collective memory and digital media.");
    let tags = engine.tag(&paper);

    assert_eq!(tags.tags(Category::Time), ["T5"]);
    let concepts = tags.get(Category::Concept).unwrap();
    for code in ["CTCollectiveMemory", "CTDigitalMemory"] {
        let score = concepts.scores.iter().find(|s| s.code == code).unwrap();
        assert!(score.confidence.value() > 0.5, "{code}: {score:?}");
        assert_eq!(score.rule, 1.0);
    }
    assert!(!tags.has_tag(Category::Concept, "CTTrauma"));

    let concept_report = &report.categories[&Category::Concept];
    assert_eq!(concept_report.plan, ValidationPlan::LeaveOneOut);
    assert!(concept_report.score.is_some());
    assert_eq!(concept_report.candidate_scores.len(), 4);
    assert!(!concept_report.low_support);
}

#[test]
fn unlabelled_categories_are_flagged_low_support() {
    let trainer = ModelTrainer::new(MnemoConfig::default());
    let (model, report) = trainer.train(&digital_and_trauma()).unwrap();

    let low = report.low_support_categories();
    assert_eq!(low, vec![Category::Discipline, Category::MemoryCarrier]);
    let discipline = &report.categories[&Category::Discipline];
    assert!(matches!(discipline.plan, ValidationPlan::NoHoldout { .. }));
    assert_eq!(discipline.score, None);
    assert_eq!(discipline.trained_tags, 0);
    assert!(model.category(Category::Discipline).unwrap().low_support);
}

#[test]
fn single_example_tag_is_reproduced_but_not_generalised() {
    let mut corpus = digital_and_trauma();
    corpus.push(example(
        "Mnemonic standoff in divided cities",
        "A mnemonic standoff between rival communities over contested monuments.",
        &["CTMnemonicStandoff"],
    ));
    let trainer = ModelTrainer::new(MnemoConfig::default());
    let (model, report) = trainer.train(&corpus).unwrap();
    assert!(report.categories[&Category::Concept].low_support);
    let engine = engine(model);

    let own = engine.tag(&corpus[6].paper);
    let concepts = own.get(Category::Concept).unwrap();
    let score = concepts
        .scores
        .iter()
        .find(|s| s.code == "CTMnemonicStandoff")
        .unwrap();
    assert_eq!(score.support, 1);
    assert!(score.confidence.value() >= 0.3);
    assert!(score.confidence.value() <= 0.6);
    let floor = MnemoConfig::default().confidence.low_support_floor;
    assert!(own.confidence(Category::Concept).value() >= floor);

    let unrelated = engine.tag(&no_shared_vocabulary());
    assert!(!unrelated.has_tag(Category::Concept, "CTMnemonicStandoff"));
}

#[test]
fn one_linking_example_still_gives_a_confident_category() {
    let corpus: Vec<TrainingExample> = digital_and_trauma().into_iter().skip(2).collect();
    assert_eq!(corpus.len(), 4);
    let (model, _) = ModelTrainer::new(MnemoConfig::default())
        .train(&corpus)
        .unwrap();

    let paper = Paper::new("q", "Collective memory in a digital world")
        .with_year(2020)
        .with_abstract("Collective memory and digital media.");
    let tags = engine(model).tag(&paper);

    let concepts = tags.get(Category::Concept).unwrap();
    assert_eq!(concepts.tags.len(), 2);
    assert!(tags.has_tag(Category::Concept, "CTCollectiveMemory"));
    assert!(tags.has_tag(Category::Concept, "CTDigitalMemory"));
    for score in &concepts.scores {
        assert_eq!(score.support, 1);
        assert!(score.confidence.value() <= 0.6);
    }
    let confidence = tags.confidence(Category::Concept).value();
    assert!(confidence > 0.5, "{confidence}");
}

#[test]
fn missing_ground_truth_fields_count_as_empty_truth() {
    let json = r#"{"items": [{
        "key": "MUSEUM-1",
        "title": "Memorial museums",
        "year": 2015,
        "abstractNote": "Curation in memorial museums after the war.",
        "true_concepts": ["CTTrauma"]
    }]}"#;
    let corpus = parse_corpus(json).unwrap();
    let example = &corpus.examples[0];
    assert!(example.labels_for(Category::MemoryCarrier).is_empty());

    let report = evaluate(
        &TaggingEngine::rule_only(&MnemoConfig::default()),
        &corpus.examples,
    );
    let carriers = &report.categories[&Category::MemoryCarrier];
    assert_eq!(carriers.examples, 1);
    assert_eq!(carriers.mean_jaccard, 0.0);
    assert_eq!(report.categories[&Category::Discipline].examples, 1);
}

#[test]
fn no_signal_gives_empty_sets_with_zero_confidence() {
    let trainer = ModelTrainer::new(MnemoConfig::default());
    let (model, _) = trainer.train(&digital_and_trauma()).unwrap();
    let tags = engine(model).tag(&no_shared_vocabulary());

    for category in Category::LEARNED {
        let prediction = tags.get(category).unwrap();
        assert!(prediction.tags.is_empty());
        assert_eq!(prediction.confidence.value(), 0.0);
        assert_eq!(prediction.status, CategoryStatus::NeedsReview);
    }
    assert_eq!(tags.tags(Category::Time), ["T4"]);
}

#[test]
fn training_is_deterministic_with_or_without_parallelism() {
    let corpus = digital_and_trauma();
    let parallel = ModelTrainer::new(MnemoConfig::default());
    let mut config = MnemoConfig::default();
    config.training.parallel = false;
    let sequential = ModelTrainer::new(config);

    let (a, report_a) = parallel.train(&corpus).unwrap();
    let (b, report_b) = sequential.train(&corpus).unwrap();
    assert_eq!(report_a, report_b);
    assert_eq!(a.categories, b.categories);
    assert_eq!(a.extractor, b.extractor);

    let query = corpus[0].paper.clone();
    assert_eq!(engine(a).tag(&query), engine(b).tag(&query));
}

#[test]
fn fixture_corpus_trains_with_k_fold_and_round_trips_through_the_store() {
    let corpus = parse_corpus(&read_fixture(LABELLED_CORPUS)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let store = ModelStore::new(dir.path().join("model.bin"), 3);
    let config = MnemoConfig::default();

    let trainer = ModelTrainer::new(config.clone());
    let (model, report) = trainer.train_and_save(&corpus.examples, &store).unwrap();
    for category in Category::LEARNED {
        assert_eq!(report.categories[&category].plan, ValidationPlan::KFold { k: 4 });
    }
    assert!(report.low_support_categories().is_empty());

    let loaded = store.load(&config.features).unwrap();
    let batch = parse_papers(&read_fixture(UNTAGGED_BATCH)).unwrap();
    let before = engine(model).tag_batch(&batch).unwrap();
    let after = engine(loaded).tag_batch(&batch).unwrap();
    assert_eq!(before, after);

    let digital = &before[0];
    assert_eq!(digital.key, "QUERY-DIGITAL");
    assert!(digital.has_tag(Category::Concept, "CTCollectiveMemory"));
    assert_eq!(digital.tags(Category::Time), ["T5"]);

    let empty = &before[2];
    assert_eq!(empty.tags(Category::Time), ["T4"]);
    for category in Category::LEARNED {
        assert!(empty.tags(category).is_empty());
        assert_eq!(empty.confidence(category).value(), 0.0);
    }

    let undated = &before[3];
    assert_eq!(
        undated.get(Category::Time).unwrap().status,
        CategoryStatus::NoYear
    );
}

#[test]
fn evaluation_reports_every_labelled_category() {
    let corpus = parse_corpus(&read_fixture(LABELLED_CORPUS)).unwrap();
    let config = MnemoConfig::default();
    let (model, _) = ModelTrainer::new(config.clone())
        .train(&corpus.examples)
        .unwrap();

    let hybrid = evaluate(&engine(model), &corpus.examples);
    let rules = evaluate(&TaggingEngine::rule_only(&config), &corpus.examples);
    for report in [&hybrid, &rules] {
        assert_eq!(report.examples, 12);
        assert_eq!(
            report.categories.keys().copied().collect::<Vec<_>>(),
            Category::LEARNED.to_vec()
        );
        for evaluation in report.categories.values() {
            assert_eq!(evaluation.examples, 12);
            assert!((0.0..=1.0).contains(&evaluation.mean_jaccard));
            assert!(evaluation.exact_match <= evaluation.mean_jaccard);
        }
    }
    assert_eq!(hybrid.tagger, "hybrid");
    assert_eq!(rules.tagger, "rule-only");
}

#[test]
fn empty_corpus_is_rejected() {
    let trainer = ModelTrainer::new(MnemoConfig::default());
    let err = trainer.train(&[]).unwrap_err();
    assert!(matches!(err, MnemoError::TrainingError(TrainingError::EmptyCorpus)));
}

#[test]
fn corpus_without_text_is_rejected() {
    let examples = vec![
        TrainingExample::new(Paper::new("a", "")).with_labels(Category::Concept, ["CTTrauma"]),
        TrainingExample::new(Paper::new("b", "")).with_labels(Category::Concept, ["CTTrauma"]),
    ];
    let err = ModelTrainer::new(MnemoConfig::default())
        .train(&examples)
        .unwrap_err();
    assert!(matches!(
        err,
        MnemoError::TrainingError(TrainingError::InvalidCorpus { .. })
    ));
}

#[test]
fn labels_outside_the_vocabulary_are_ignored() {
    let mut corpus = digital_and_trauma();
    corpus[0] = corpus[0]
        .clone()
        .with_labels(Category::Concept, ["CTCollectiveMemory", "DSOC", "CTMadeUp"]);
    let (model, _) = ModelTrainer::new(MnemoConfig::default())
        .train(&corpus)
        .unwrap();
    let concepts = model.category(Category::Concept).unwrap();
    assert!(!concepts.tags.contains_key("DSOC"));
    assert!(!concepts.tags.contains_key("CTMadeUp"));
    assert!(model.validate().is_ok());
}
