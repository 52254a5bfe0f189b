use mnemo_core::config::*;
use mnemo_core::MnemoError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MnemoConfig::from_toml("").unwrap();

    // Features
    assert_eq!(config.features.ngram_max, 2);
    assert_eq!(config.features.min_df, 1);
    assert_eq!(config.features.max_features, 5000);
    assert_eq!(config.features.abstract_weight, 1.5);
    assert_eq!(config.features.collection_weight, 0.5);
    assert!(config.features.remove_stop_words);

    // Classifier
    assert_eq!(config.classifier.forest_trees, 32);
    assert_eq!(config.classifier.seed, 42);

    // Training
    assert_eq!(config.training.max_folds, 5);
    assert_eq!(config.training.loo_max_examples, 10);
    assert_eq!(config.training.metric, AgreementMetric::Jaccard);

    // Blending
    assert_eq!(config.blending.ml_weight, 0.7);
    assert_eq!(config.blending.rule_weight, 0.3);
    assert_eq!(config.blending.threshold, 0.5);
    assert_eq!(config.blending.max_batch_size, 1000);

    // Confidence
    assert_eq!(config.confidence.min_support, 2);
    assert_eq!(config.confidence.low_support_floor, 0.3);
    assert_eq!(config.confidence.low_support_ceiling, 0.6);

    // Store / observability
    assert_eq!(config.store.model_path, "mnemo-model.bin");
    assert_eq!(config.store.compression_level, 3);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[blending]
threshold = 0.6

[training]
metric = "exact_match"
max_folds = 3
"#;
    let config = MnemoConfig::from_toml(toml).unwrap();
    assert_eq!(config.blending.threshold, 0.6);
    assert_eq!(config.training.metric, AgreementMetric::ExactMatch);
    assert_eq!(config.training.max_folds, 3);
    // Non-overridden fields keep defaults
    assert_eq!(config.blending.ml_weight, 0.7);
    assert_eq!(config.training.loo_max_examples, 10);
}

#[test]
fn config_ignores_unknown_keys() {
    let config = MnemoConfig::from_toml("[features]\nnot_a_field = 1\n").unwrap();
    assert_eq!(config.features, FeatureConfig::default());
}

#[test]
fn config_rejects_malformed_toml() {
    let err = MnemoConfig::from_toml("[blending\nthreshold = ").unwrap_err();
    assert!(matches!(err, MnemoError::ConfigError { .. }));
}

#[test]
fn config_rejects_out_of_range_threshold() {
    let err = MnemoConfig::from_toml("[blending]\nthreshold = 1.5\n").unwrap_err();
    assert!(err.to_string().contains("blending.threshold"));
}

#[test]
fn config_rejects_weights_not_summing_to_one() {
    let toml = "[blending]\nml_weight = 0.5\nrule_weight = 0.3\n";
    let err = MnemoConfig::from_toml(toml).unwrap_err();
    assert!(err.to_string().contains("ml_weight + rule_weight"));
}

#[test]
fn config_reports_every_violation() {
    let toml = r#"
[confidence]
low_support_floor = 0.9
low_support_ceiling = 0.4

[store]
compression_level = 0
"#;
    let violations = validation::validate(&toml::from_str::<MnemoConfig>(toml).unwrap());
    let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    assert!(fields.contains(&"confidence.low_support_floor"));
    assert!(fields.contains(&"store.compression_level"));
}

#[test]
fn config_from_missing_file_is_io_error() {
    let err = MnemoConfig::from_file(std::path::Path::new("/nonexistent/mnemo.toml")).unwrap_err();
    assert!(matches!(err, MnemoError::Io { .. }));
}
