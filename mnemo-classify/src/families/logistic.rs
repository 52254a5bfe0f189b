//! L2-regularised logistic regression, full-batch gradient descent.

use mnemo_core::config::ClassifierConfig;
use mnemo_features::FeatureVector;
use serde::{Deserialize, Serialize};

use super::{balanced_sample_weights, sigmoid};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticParams {
    pub epochs: usize,
    pub learning_rate: f64,
    pub l2: f64,
}

impl From<&ClassifierConfig> for LogisticParams {
    fn from(config: &ClassifierConfig) -> Self {
        Self {
            epochs: config.logistic_epochs,
            learning_rate: config.logistic_learning_rate,
            l2: config.logistic_l2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    weights: Vec<f64>,
    bias: f64,
}

impl LogisticModel {
    /// Starts from zero weights, so the result is fully determined by the data.
    pub fn fit(xs: &[FeatureVector], ys: &[bool], params: &LogisticParams) -> Self {
        let dimension = xs.first().map_or(0, FeatureVector::dimension);
        let n = xs.len().max(1) as f64;
        let sample_weights = balanced_sample_weights(ys);
        let mut weights = vec![0.0; dimension];
        let mut bias = 0.0;
        let mut grad = vec![0.0; dimension];

        for _ in 0..params.epochs {
            grad.iter_mut().for_each(|g| *g = 0.0);
            let mut grad_bias = 0.0;
            for ((x, &y), &s) in xs.iter().zip(ys).zip(&sample_weights) {
                let p = sigmoid(x.dot(&weights) + bias);
                let err = s * (p - if y { 1.0 } else { 0.0 }) / n;
                grad_bias += err;
                for &(j, v) in x.entries() {
                    if let Some(g) = grad.get_mut(j as usize) {
                        *g += err * v;
                    }
                }
            }
            for (w, g) in weights.iter_mut().zip(&grad) {
                *w -= params.learning_rate * (g + params.l2 * *w);
            }
            bias -= params.learning_rate * grad_bias;
        }
        Self { weights, bias }
    }

    pub fn predict(&self, x: &FeatureVector) -> f64 {
        sigmoid(x.dot(&self.weights) + self.bias)
    }

    pub fn dimension(&self) -> usize {
        self.weights.len()
    }
}
