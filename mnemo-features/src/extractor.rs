//! Paper → weighted term frequencies → TF-IDF vector.

use std::collections::BTreeMap;

use mnemo_core::config::FeatureConfig;
use mnemo_core::errors::FeatureError;
use mnemo_core::Paper;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::tokenizer;
use crate::vector::FeatureVector;
use crate::vocabulary::Vocabulary;

/// Frozen feature extractor: a vocabulary plus the config it was fitted with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureExtractor {
    config: FeatureConfig,
    vocabulary: Vocabulary,
}

impl FeatureExtractor {
    /// Fit the vocabulary over a training corpus.
    pub fn fit<'a, I>(papers: I, config: &FeatureConfig) -> Self
    where
        I: IntoIterator<Item = &'a Paper>,
    {
        let documents: Vec<Vec<String>> = papers
            .into_iter()
            .map(|p| weighted_terms(p, config).into_keys().collect())
            .collect();
        let vocabulary = Vocabulary::fit(&documents, config.min_df, config.max_features);
        debug!(
            documents = documents.len(),
            dimension = vocabulary.dimension(),
            "fitted feature vocabulary"
        );
        Self {
            config: config.clone(),
            vocabulary,
        }
    }

    /// L2-normalised TF-IDF vector. Out-of-vocabulary terms are ignored;
    /// a paper with no known terms yields the zero vector.
    pub fn extract(&self, paper: &Paper) -> FeatureVector {
        let pairs = weighted_terms(paper, &self.config)
            .into_iter()
            .filter_map(|(term, tf)| {
                let idx = self.vocabulary.index_of(&term)?;
                Some((idx, tf * self.vocabulary.idf(idx)))
            })
            .collect();
        FeatureVector::from_pairs(self.dimension(), pairs).l2_normalized()
    }

    pub fn dimension(&self) -> usize {
        self.vocabulary.dimension()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }
}

/// Term frequencies summed over source fields, each occurrence counted at
/// its field's weight.
pub fn weighted_terms(paper: &Paper, config: &FeatureConfig) -> BTreeMap<String, f64> {
    let mut tf = BTreeMap::new();
    let title = recover(&paper.key, "title", sanitize("title", Some(paper.title.as_str())));
    let abstract_text = recover(
        &paper.key,
        "abstract",
        sanitize("abstract", paper.abstract_text.as_deref()),
    );
    accumulate(&mut tf, title, config.title_weight, config);
    accumulate(&mut tf, abstract_text, config.abstract_weight, config);
    for keyword in &paper.keywords {
        let keyword = recover(&paper.key, "keywords", sanitize("keywords", Some(keyword.as_str())));
        accumulate(&mut tf, keyword, config.keyword_weight, config);
    }
    for collection in &paper.collections {
        let collection = recover(
            &paper.key,
            "collections",
            sanitize("collections", Some(collection.as_str())),
        );
        accumulate(&mut tf, collection, config.collection_weight, config);
    }
    tf
}

/// Reject absent or undecodable text. Blank strings count as absent.
pub fn sanitize<'t>(field: &str, text: Option<&'t str>) -> Result<&'t str, FeatureError> {
    let text = text.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
        FeatureError::AbsentField {
            field: field.to_string(),
        }
    })?;
    if text.contains('\u{FFFD}') || text.contains('\0') {
        return Err(FeatureError::MalformedField {
            field: field.to_string(),
            reason: "contains replacement or NUL characters".to_string(),
        });
    }
    Ok(text)
}

fn recover<'t>(key: &str, field: &str, result: Result<&'t str, FeatureError>) -> &'t str {
    match result {
        Ok(text) => text,
        Err(FeatureError::AbsentField { .. }) => {
            debug!(paper = key, field, "text field absent, treated as empty");
            ""
        }
        Err(err) => {
            warn!(paper = key, field, error = %err, "text field unusable, treated as empty");
            ""
        }
    }
}

fn accumulate(tf: &mut BTreeMap<String, f64>, text: &str, weight: f64, config: &FeatureConfig) {
    if weight == 0.0 || text.is_empty() {
        return;
    }
    for term in tokenizer::terms(text, config.ngram_max, config.remove_stop_words) {
        *tf.entry(term).or_insert(0.0) += weight;
    }
}
