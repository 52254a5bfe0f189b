use serde::{Deserialize, Serialize};

use super::defaults;

/// Held-out multi-label agreement metric used to rank family weightings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementMetric {
    /// Mean Jaccard overlap between predicted and true tag sets.
    Jaccard,
    /// Fraction of examples whose predicted set equals the true set.
    ExactMatch,
}

/// Model trainer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Upper bound on k for k-fold cross-validation.
    pub max_folds: usize,
    /// Corpora at or below this size use leave-one-out.
    pub loo_max_examples: usize,
    pub metric: AgreementMetric,
    /// Train categories on the rayon pool.
    pub parallel: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            max_folds: defaults::DEFAULT_MAX_FOLDS,
            loo_max_examples: defaults::DEFAULT_LOO_MAX_EXAMPLES,
            metric: AgreementMetric::Jaccard,
            parallel: defaults::DEFAULT_PARALLEL_TRAINING,
        }
    }
}
