//! Config validation: reject invalid values before any work starts.

use std::fmt;

use super::MnemoConfig;

/// A single invalid configuration value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigViolation {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a config, returning every violation found.
pub fn validate(config: &MnemoConfig) -> Vec<ConfigViolation> {
    let mut out = Vec::new();

    let f = &config.features;
    positive(&mut out, "features.ngram_max", f.ngram_max);
    positive(&mut out, "features.min_df", f.min_df);
    positive(&mut out, "features.max_features", f.max_features);
    for (field, weight) in [
        ("features.title_weight", f.title_weight),
        ("features.abstract_weight", f.abstract_weight),
        ("features.keyword_weight", f.keyword_weight),
        ("features.collection_weight", f.collection_weight),
    ] {
        if !weight.is_finite() || weight < 0.0 {
            out.push(violation(field, format!("must be finite and >= 0, got {weight}")));
        }
    }

    let c = &config.classifier;
    positive(&mut out, "classifier.forest_trees", c.forest_trees);
    positive(&mut out, "classifier.forest_min_samples_split", c.forest_min_samples_split);
    if !c.nb_alpha.is_finite() || c.nb_alpha <= 0.0 {
        out.push(violation("classifier.nb_alpha", format!("must be > 0, got {}", c.nb_alpha)));
    }
    if !c.logistic_learning_rate.is_finite() || c.logistic_learning_rate <= 0.0 {
        out.push(violation(
            "classifier.logistic_learning_rate",
            format!("must be > 0, got {}", c.logistic_learning_rate),
        ));
    }
    if !c.logistic_l2.is_finite() || c.logistic_l2 < 0.0 {
        out.push(violation(
            "classifier.logistic_l2",
            format!("must be >= 0, got {}", c.logistic_l2),
        ));
    }

    let t = &config.training;
    if t.max_folds < 2 {
        out.push(violation("training.max_folds", format!("must be >= 2, got {}", t.max_folds)));
    }

    let b = &config.blending;
    unit(&mut out, "blending.ml_weight", b.ml_weight);
    unit(&mut out, "blending.rule_weight", b.rule_weight);
    unit(&mut out, "blending.threshold", b.threshold);
    if b.ml_weight.is_finite()
        && b.rule_weight.is_finite()
        && (b.ml_weight + b.rule_weight - 1.0).abs() > 1e-9
    {
        out.push(violation(
            "blending.ml_weight",
            format!(
                "ml_weight + rule_weight must equal 1.0, got {}",
                b.ml_weight + b.rule_weight
            ),
        ));
    }
    positive(&mut out, "blending.max_batch_size", b.max_batch_size);

    let k = &config.confidence;
    unit(&mut out, "confidence.low_support_floor", k.low_support_floor);
    unit(&mut out, "confidence.low_support_ceiling", k.low_support_ceiling);
    if k.low_support_floor > k.low_support_ceiling {
        out.push(violation(
            "confidence.low_support_floor",
            format!(
                "must not exceed low_support_ceiling ({} > {})",
                k.low_support_floor, k.low_support_ceiling
            ),
        ));
    }
    if !k.tag_count_penalty.is_finite() || k.tag_count_penalty < 0.0 {
        out.push(violation(
            "confidence.tag_count_penalty",
            format!("must be >= 0, got {}", k.tag_count_penalty),
        ));
    }

    let s = &config.store;
    if s.model_path.trim().is_empty() {
        out.push(violation("store.model_path", "must not be empty".to_string()));
    }
    if !(1..=22).contains(&s.compression_level) {
        out.push(violation(
            "store.compression_level",
            format!("must be in [1, 22], got {}", s.compression_level),
        ));
    }

    let o = &config.observability;
    if !matches!(
        o.log_level.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    ) {
        out.push(violation(
            "observability.log_level",
            format!("unknown level {:?}", o.log_level),
        ));
    }

    out
}

fn violation(field: &str, message: String) -> ConfigViolation {
    ConfigViolation {
        field: field.to_string(),
        message,
    }
}

fn positive(out: &mut Vec<ConfigViolation>, field: &str, value: usize) {
    if value == 0 {
        out.push(violation(field, "must be > 0".to_string()));
    }
}

fn unit(out: &mut Vec<ConfigViolation>, field: &str, value: f64) {
    if !(0.0..=1.0).contains(&value) {
        out.push(violation(field, format!("must be in [0.0, 1.0], got {value}")));
    }
}
