//! Fixture integrity: every shared corpus parses through the production
//! loaders and only names tags that exist.

use mnemo_core::Category;
use mnemo_training::{parse_corpus, parse_papers};
use serde_json::Value;
use test_fixtures::{
    fixture_exists, list_fixtures, load_fixture, read_fixture, LABELLED_CORPUS, UNTAGGED_BATCH,
};

#[test]
fn corpus_directory_lists_both_fixtures() {
    assert!(fixture_exists(LABELLED_CORPUS));
    assert!(fixture_exists(UNTAGGED_BATCH));
    let names: Vec<String> = list_fixtures("corpus")
        .iter()
        .filter_map(|p| p.file_name()?.to_str().map(str::to_string))
        .collect();
    assert_eq!(names, ["labelled_corpus.json", "untagged_batch.json"]);
    assert!(list_fixtures("missing").is_empty());
}

#[test]
fn labelled_corpus_items_carry_keys_and_ground_truth() {
    let doc: Value = load_fixture(LABELLED_CORPUS);
    let items = doc["items"].as_array().expect("items array");
    assert_eq!(items.len(), 12);
    for item in items {
        assert!(item["key"].is_string(), "{item}");
        assert!(item["true_concepts"].is_array(), "{item}");
    }
}

#[test]
fn resolved_labels_are_in_the_taxonomy() {
    let corpus = parse_corpus(&read_fixture(LABELLED_CORPUS)).unwrap();
    for example in &corpus.examples {
        for (category, codes) in &example.labels {
            assert!(category.is_learned());
            for code in codes {
                assert!(category.contains(code), "{} has {code}", example.paper.key);
            }
        }
        for category in Category::LEARNED {
            assert!(!example.labels_for(category).is_empty(), "{}", example.paper.key);
        }
    }
}

#[test]
fn untagged_batch_has_no_ground_truth_fields() {
    let doc: Value = load_fixture(UNTAGGED_BATCH);
    for item in doc["items"].as_array().expect("items array") {
        for category in Category::ALL {
            assert!(item.get(category.corpus_field()).is_none());
        }
    }
    assert_eq!(parse_papers(&read_fixture(UNTAGGED_BATCH)).unwrap().len(), 4);
}
