//! All tag ensembles of one category.

use std::collections::BTreeMap;

use mnemo_core::config::ClassifierConfig;
use mnemo_core::errors::StoreError;
use mnemo_core::Category;
use mnemo_features::FeatureVector;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ensemble::{FamilyProbabilities, FamilyWeights, TagEnsemble};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagModel {
    /// Positive training examples.
    pub support: usize,
    pub ensemble: TagEnsemble,
}

/// Classifier output for one tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagProbability {
    pub families: FamilyProbabilities,
    /// Families combined with the category's weighting.
    pub probability: f64,
    pub support: usize,
}

/// One-vs-rest ensembles for every tag seen in training.
/// Tags absent from `tags` are untrained and score zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryModel {
    pub category: Category,
    pub weights: FamilyWeights,
    pub tags: BTreeMap<String, TagModel>,
    /// Set when the category had too little data for held-out validation.
    pub low_support: bool,
    pub example_count: usize,
    pub dimension: usize,
}

impl CategoryModel {
    /// Fit one ensemble per tag that has at least one positive example.
    ///
    /// `labels[i]` is the ground-truth tag set of `xs[i]`.
    pub fn fit(
        category: Category,
        xs: &[FeatureVector],
        labels: &[&[String]],
        weights: FamilyWeights,
        config: &ClassifierConfig,
        dimension: usize,
    ) -> Self {
        let mut support: BTreeMap<&str, usize> = BTreeMap::new();
        for set in labels {
            for code in set.iter() {
                *support.entry(code.as_str()).or_insert(0) += 1;
            }
        }

        let tags: BTreeMap<String, TagModel> = support
            .into_par_iter()
            .map(|(code, count)| {
                let ys: Vec<bool> = labels
                    .iter()
                    .map(|set| set.iter().any(|c| c == code))
                    .collect();
                let seed = tag_seed(config.seed, category, code);
                let ensemble = TagEnsemble::fit(xs, &ys, config, seed);
                (
                    code.to_string(),
                    TagModel {
                        support: count,
                        ensemble,
                    },
                )
            })
            .collect();

        debug!(
            category = %category,
            tags = tags.len(),
            examples = xs.len(),
            "fitted category model"
        );
        Self {
            category,
            weights,
            tags,
            low_support: false,
            example_count: xs.len(),
            dimension,
        }
    }

    pub fn with_low_support(mut self, low_support: bool) -> Self {
        self.low_support = low_support;
        self
    }

    /// Probabilities for every trained tag, keyed by code.
    pub fn predict(&self, x: &FeatureVector) -> BTreeMap<String, TagProbability> {
        self.tags
            .iter()
            .map(|(code, model)| {
                let families = model.ensemble.predict(x);
                (
                    code.clone(),
                    TagProbability {
                        families,
                        probability: families.aggregate(&self.weights),
                        support: model.support,
                    },
                )
            })
            .collect()
    }

    pub fn support(&self, code: &str) -> usize {
        self.tags.get(code).map_or(0, |t| t.support)
    }

    /// Every stored classifier must accept vectors of `expected` dimension.
    pub fn check_dimension(&self, expected: usize) -> Result<(), StoreError> {
        if self.dimension != expected {
            return Err(StoreError::VocabularyMismatch {
                details: format!(
                    "{} category model has {} features, vocabulary has {expected}",
                    self.category, self.dimension
                ),
            });
        }
        for (code, model) in &self.tags {
            if let Some(&actual) = model.ensemble.dimensions().iter().find(|&&d| d != expected) {
                return Err(StoreError::VocabularyMismatch {
                    details: format!(
                        "{}/{code} classifier has {actual} features, vocabulary has {expected}",
                        self.category
                    ),
                });
            }
            if !model.ensemble.is_consistent() {
                return Err(StoreError::Corruption {
                    details: format!("{}/{code} ensemble is internally inconsistent", self.category),
                });
            }
            if !self.category.contains(code) {
                return Err(StoreError::Corruption {
                    details: format!("{code} is not a {} tag", self.category),
                });
            }
        }
        Ok(())
    }
}

/// Per-tag seed: the configured seed mixed with a hash of category and code,
/// so adding a tag never perturbs another tag's forest.
pub fn tag_seed(base: u64, category: Category, code: &str) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(category.name().as_bytes());
    hasher.update(b"/");
    hasher.update(code.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    base ^ u64::from_le_bytes(bytes)
}
