use std::collections::BTreeMap;
use std::sync::Arc;

use mnemo_classify::{CategoryModel, FamilyWeights, TrainedModel};
use mnemo_core::config::{ClassifierConfig, FeatureConfig};
use mnemo_core::errors::StoreError;
use mnemo_core::{Category, Paper};
use mnemo_features::FeatureExtractor;
use mnemo_core::constants::{ARTIFACT_FORMAT_ID, ARTIFACT_FORMAT_VERSION, VERSION};
use mnemo_store::{artifact, ModelArtifactRef, ModelHandle, ModelStore};
use tempfile::TempDir;

fn papers() -> Vec<Paper> {
    vec![
        Paper::new("a", "Memory laws in Poland").with_abstract("Legislating the past."),
        Paper::new("b", "Memory laws and genocide denial").with_abstract("Criminal law and memory."),
        Paper::new("c", "Family photographs").with_abstract("Albums as family memory."),
    ]
}

fn trained(dimension_override: Option<usize>) -> TrainedModel {
    let papers = papers();
    let extractor = FeatureExtractor::fit(&papers, &FeatureConfig::default());
    let xs: Vec<_> = papers.iter().map(|p| extractor.extract(p)).collect();
    let labels = [
        vec!["CTMemoryLaws".to_string()],
        vec!["CTMemoryLaws".to_string()],
        vec!["CTFamilyMemory".to_string()],
    ];
    let refs: Vec<&[String]> = labels.iter().map(Vec::as_slice).collect();
    let model = CategoryModel::fit(
        Category::Concept,
        &xs,
        &refs,
        FamilyWeights::UNIFORM,
        &ClassifierConfig::default(),
        dimension_override.unwrap_or(extractor.dimension()),
    );
    let mut categories = BTreeMap::new();
    categories.insert(Category::Concept, model);
    TrainedModel::new(extractor, categories, papers.len())
}

fn store_in(dir: &TempDir) -> ModelStore {
    ModelStore::new(dir.path().join("models").join("mnemo.bin"), 3)
}

#[test]
fn save_then_load_predicts_identically() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let model = trained(None);
    store.save(&model).unwrap();
    assert!(store.exists());

    let loaded = store.load(&FeatureConfig::default()).unwrap();
    assert_eq!(loaded, model);
    for paper in papers() {
        let x = model.vectorize(&paper);
        assert_eq!(loaded.vectorize(&paper), x);
        assert_eq!(
            loaded.predict(Category::Concept, &x),
            model.predict(Category::Concept, &x)
        );
    }
}

#[test]
fn flipped_payload_byte_is_corruption() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.save(&trained(None)).unwrap();

    let mut bytes = std::fs::read(store.path()).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    std::fs::write(store.path(), &bytes).unwrap();

    let err = store.load(&FeatureConfig::default()).unwrap_err();
    assert!(matches!(err, StoreError::Corruption { .. }), "{err}");
}

#[test]
fn header_problems_are_corruption() {
    let model = trained(None);
    let good = artifact::encode(&ModelArtifactRef::new(&model), 3).unwrap();

    let mut bad_magic = good.clone();
    bad_magic[0] = b'X';
    assert!(matches!(artifact::decode(&bad_magic), Err(StoreError::Corruption { .. })));

    let mut bad_version = good.clone();
    bad_version[4..8].copy_from_slice(&99u32.to_le_bytes());
    let err = artifact::decode(&bad_version).unwrap_err();
    assert!(err.to_string().contains("99"));

    assert!(matches!(artifact::decode(&good[..20]), Err(StoreError::Corruption { .. })));
    assert!(artifact::decode(&good).is_ok());
}

#[test]
fn borrowed_artifact_decodes_to_an_owned_copy() {
    let model = trained(None);
    let written = ModelArtifactRef::new(&model);
    let bytes = artifact::encode(&written, 3).unwrap();

    let read = artifact::decode(&bytes).unwrap();
    assert_eq!(read.model, model);
    assert_eq!(read.format_id, ARTIFACT_FORMAT_ID);
    assert_eq!(read.format_version, ARTIFACT_FORMAT_VERSION);
    assert_eq!(read.crate_version, VERSION);
    assert_eq!(read.created_at, written.created_at);
}

#[test]
fn changed_feature_config_is_vocabulary_mismatch() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.save(&trained(None)).unwrap();

    let changed = FeatureConfig {
        ngram_max: 1,
        ..FeatureConfig::default()
    };
    let err = store.load(&changed).unwrap_err();
    assert!(matches!(err, StoreError::VocabularyMismatch { .. }));
}

#[test]
fn classifier_dimension_mismatch_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let tampered = trained(Some(7));
    // save refuses an inconsistent model outright
    assert!(matches!(
        store.save(&tampered),
        Err(StoreError::VocabularyMismatch { .. })
    ));

    // bypass save to simulate an artifact written by a buggy producer
    let bytes = artifact::encode(&ModelArtifactRef::new(&tampered), 3).unwrap();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), bytes).unwrap();
    let err = store.load(&FeatureConfig::default()).unwrap_err();
    assert!(matches!(err, StoreError::VocabularyMismatch { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = store_in(&dir).load(&FeatureConfig::default()).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn failed_reload_keeps_current_model() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let handle = ModelHandle::new(trained(None));
    let before = handle.snapshot();

    assert!(handle.reload_from(&store, &FeatureConfig::default()).is_err());
    assert!(Arc::ptr_eq(&before, &handle.snapshot()));
    assert_eq!(handle.version(), 1);

    store.save(&trained(None)).unwrap();
    assert_eq!(handle.reload_from(&store, &FeatureConfig::default()).unwrap(), 2);
    assert!(!Arc::ptr_eq(&before, &handle.snapshot()));
}

#[test]
fn snapshots_survive_a_swap() {
    let handle = ModelHandle::new(trained(None));
    let old = handle.snapshot();
    let swapped_in = trained(None);
    handle.swap(swapped_in);
    // the old snapshot is still fully usable
    let x = old.vectorize(&papers()[0]);
    assert!(!old.predict(Category::Concept, &x).is_empty());
}
