use serde::{Deserialize, Serialize};

use super::defaults;

/// Feature extraction configuration.
///
/// A snapshot of this struct is stored inside every model artifact; loading
/// an artifact under a different configuration is a vocabulary mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Longest n-gram emitted by the tokenizer (1 = unigrams only).
    pub ngram_max: usize,
    /// Minimum number of training documents a term must appear in.
    pub min_df: usize,
    /// Upper bound on vocabulary size.
    pub max_features: usize,
    /// Per-source term weights.
    pub title_weight: f64,
    pub abstract_weight: f64,
    pub keyword_weight: f64,
    pub collection_weight: f64,
    /// Drop English stop words before building n-grams.
    pub remove_stop_words: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            ngram_max: defaults::DEFAULT_NGRAM_MAX,
            min_df: defaults::DEFAULT_MIN_DF,
            max_features: defaults::DEFAULT_MAX_FEATURES,
            title_weight: defaults::DEFAULT_TITLE_WEIGHT,
            abstract_weight: defaults::DEFAULT_ABSTRACT_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            collection_weight: defaults::DEFAULT_COLLECTION_WEIGHT,
            remove_stop_words: defaults::DEFAULT_REMOVE_STOP_WORDS,
        }
    }
}
