//! Per-category coverage and average confidence over a tagged batch.

use std::collections::BTreeMap;

use mnemo_core::{Category, CategoryStatus, PaperTags};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Papers with at least one tag.
    pub tagged: usize,
    pub needs_review: usize,
    /// `tagged / papers`.
    pub coverage: f64,
    /// Mean confidence over all papers, untagged ones counting as zero.
    pub average_confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub papers: usize,
    pub categories: BTreeMap<Category, CategorySummary>,
}

impl BatchSummary {
    pub fn from_results(results: &[PaperTags]) -> Self {
        let papers = results.len();
        let categories = Category::ALL
            .into_iter()
            .map(|category| {
                let mut summary = CategorySummary::default();
                let mut confidence_sum = 0.0;
                for result in results {
                    let Some(prediction) = result.get(category) else {
                        continue;
                    };
                    if !prediction.is_empty() {
                        summary.tagged += 1;
                    }
                    if prediction.status == CategoryStatus::NeedsReview {
                        summary.needs_review += 1;
                    }
                    confidence_sum += prediction.confidence.value();
                }
                if papers > 0 {
                    summary.coverage = summary.tagged as f64 / papers as f64;
                    summary.average_confidence = confidence_sum / papers as f64;
                }
                (category, summary)
            })
            .collect();
        Self { papers, categories }
    }

    pub fn category(&self, category: Category) -> Option<&CategorySummary> {
        self.categories.get(&category)
    }
}
