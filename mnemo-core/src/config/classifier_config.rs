use serde::{Deserialize, Serialize};

use super::defaults;

/// Hyper-parameters of the three classifier families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Number of trees in the forest.
    pub forest_trees: usize,
    /// Maximum tree depth (root = depth 0).
    pub forest_max_depth: usize,
    /// Nodes with fewer samples become leaves.
    pub forest_min_samples_split: usize,
    /// Base seed for bootstrap and feature sampling.
    pub seed: u64,
    /// Laplace smoothing for Bernoulli naive Bayes.
    pub nb_alpha: f64,
    /// Full-batch gradient descent epochs for logistic regression.
    pub logistic_epochs: usize,
    pub logistic_learning_rate: f64,
    /// L2 penalty on logistic weights.
    pub logistic_l2: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            forest_trees: defaults::DEFAULT_FOREST_TREES,
            forest_max_depth: defaults::DEFAULT_FOREST_MAX_DEPTH,
            forest_min_samples_split: defaults::DEFAULT_FOREST_MIN_SAMPLES_SPLIT,
            seed: defaults::DEFAULT_SEED,
            nb_alpha: defaults::DEFAULT_NB_ALPHA,
            logistic_epochs: defaults::DEFAULT_LOGISTIC_EPOCHS,
            logistic_learning_rate: defaults::DEFAULT_LOGISTIC_LEARNING_RATE,
            logistic_l2: defaults::DEFAULT_LOGISTIC_L2,
        }
    }
}
