use serde::{Deserialize, Serialize};

use super::defaults;

/// Hybrid blending configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendingConfig {
    /// Weight of the aggregated ML probability.
    pub ml_weight: f64,
    /// Weight of the lexical rule score.
    pub rule_weight: f64,
    /// Classification threshold τ. ML candidates need a probability above it,
    /// emitted tags need a blended score at or above it.
    pub threshold: f64,
    /// Largest batch accepted by `tag_batch`.
    pub max_batch_size: usize,
}

impl Default for BlendingConfig {
    fn default() -> Self {
        Self {
            ml_weight: defaults::DEFAULT_ML_WEIGHT,
            rule_weight: defaults::DEFAULT_RULE_WEIGHT,
            threshold: defaults::DEFAULT_THRESHOLD,
            max_batch_size: defaults::DEFAULT_MAX_BATCH_SIZE,
        }
    }
}
