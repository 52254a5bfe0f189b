use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use mnemo_core::errors::StoreError;
use mnemo_core::{Category, Paper};
use mnemo_features::{FeatureExtractor, FeatureVector};
use serde::{Deserialize, Serialize};

use crate::category_model::{CategoryModel, TagProbability};

/// Everything needed to tag papers: the frozen feature extractor and one
/// model per learned category. Immutable once built; retraining replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    pub extractor: FeatureExtractor,
    pub categories: BTreeMap<Category, CategoryModel>,
    pub trained_at: DateTime<Utc>,
    pub example_count: usize,
}

impl TrainedModel {
    pub fn new(
        extractor: FeatureExtractor,
        categories: BTreeMap<Category, CategoryModel>,
        example_count: usize,
    ) -> Self {
        Self {
            extractor,
            categories,
            trained_at: Utc::now(),
            example_count,
        }
    }

    pub fn vectorize(&self, paper: &Paper) -> FeatureVector {
        self.extractor.extract(paper)
    }

    pub fn category(&self, category: Category) -> Option<&CategoryModel> {
        self.categories.get(&category)
    }

    /// Per-tag classifier output for one category. Empty when the category
    /// was never trained.
    pub fn predict(&self, category: Category, x: &FeatureVector) -> BTreeMap<String, TagProbability> {
        self.category(category)
            .map(|m| m.predict(x))
            .unwrap_or_default()
    }

    pub fn dimension(&self) -> usize {
        self.extractor.dimension()
    }

    /// Every classifier dimension must equal the vocabulary dimension.
    pub fn validate(&self) -> Result<(), StoreError> {
        let expected = self.dimension();
        for (category, model) in &self.categories {
            if !category.is_learned() || model.category != *category {
                return Err(StoreError::Corruption {
                    details: format!("category model stored under wrong key {category}"),
                });
            }
            model.check_dimension(expected)?;
        }
        Ok(())
    }
}
