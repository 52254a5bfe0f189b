use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;
use crate::taxonomy::Category;

/// Outcome of tagging one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    /// At least one tag was emitted.
    Tagged,
    /// Neither the classifiers nor the rules produced a tag.
    NeedsReview,
    /// Time only: the paper has no year.
    NoYear,
}

/// Scores that produced one candidate tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagScore {
    pub code: String,
    /// Aggregated classifier probability.
    pub ml: f64,
    /// Lexical rule score, 0 or 1.
    pub rule: f64,
    pub blended: f64,
    /// Population standard deviation of the per-family probabilities.
    pub family_spread: f64,
    /// Positive training examples behind the classifier.
    pub support: usize,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPrediction {
    pub category: Category,
    /// Emitted codes, blended score descending then code.
    pub tags: Vec<String>,
    pub confidence: Confidence,
    pub status: CategoryStatus,
    /// Scores of emitted tags, in the same order as `tags`.
    pub scores: Vec<TagScore>,
}

impl CategoryPrediction {
    /// An explicit empty result with zero confidence.
    pub fn empty(category: Category, status: CategoryStatus) -> Self {
        Self {
            category,
            tags: Vec::new(),
            confidence: Confidence::ZERO,
            status,
            scores: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Full tagging result for one paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperTags {
    pub key: String,
    pub categories: BTreeMap<Category, CategoryPrediction>,
}

impl PaperTags {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            categories: BTreeMap::new(),
        }
    }

    pub fn get(&self, category: Category) -> Option<&CategoryPrediction> {
        self.categories.get(&category)
    }

    pub fn tags(&self, category: Category) -> &[String] {
        self.get(category).map(|p| p.tags.as_slice()).unwrap_or(&[])
    }

    pub fn confidence(&self, category: Category) -> Confidence {
        self.get(category)
            .map(|p| p.confidence)
            .unwrap_or(Confidence::ZERO)
    }

    pub fn has_tag(&self, category: Category, code: &str) -> bool {
        self.tags(category).iter().any(|t| t == code)
    }
}
