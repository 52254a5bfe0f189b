use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Paper;
use crate::taxonomy::Category;

/// A paper with its curated ground-truth tags, one set per category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub paper: Paper,
    pub labels: BTreeMap<Category, Vec<String>>,
}

impl TrainingExample {
    pub fn new(paper: Paper) -> Self {
        Self {
            paper,
            labels: BTreeMap::new(),
        }
    }

    /// Set the ground truth for one category. Duplicates are collapsed.
    pub fn with_labels<I, S>(mut self, category: Category, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut codes: Vec<String> = codes.into_iter().map(Into::into).collect();
        codes.sort();
        codes.dedup();
        self.labels.insert(category, codes);
        self
    }

    pub fn labels_for(&self, category: Category) -> &[String] {
        self.labels.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_label(&self, category: Category, code: &str) -> bool {
        self.labels_for(category).iter().any(|c| c == code)
    }
}
