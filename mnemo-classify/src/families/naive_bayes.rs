//! Bernoulli naive Bayes on feature presence.

use mnemo_features::FeatureVector;
use serde::{Deserialize, Serialize};

use super::sigmoid;

/// Stored in log-odds form: `bias + Σ weight[j]` over present features.
/// Class priors are uniform, matching the balanced training of the other families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BernoulliNaiveBayes {
    weights: Vec<f64>,
    bias: f64,
}

impl BernoulliNaiveBayes {
    pub fn fit(xs: &[FeatureVector], ys: &[bool], alpha: f64) -> Self {
        let dimension = xs.first().map_or(0, FeatureVector::dimension);
        let mut present_pos = vec![0usize; dimension];
        let mut present_neg = vec![0usize; dimension];
        let mut n_pos = 0usize;
        let mut n_neg = 0usize;
        for (x, &y) in xs.iter().zip(ys) {
            let counts = if y {
                n_pos += 1;
                &mut present_pos
            } else {
                n_neg += 1;
                &mut present_neg
            };
            for &(j, _) in x.entries() {
                if let Some(c) = counts.get_mut(j as usize) {
                    *c += 1;
                }
            }
        }

        let theta = |count: usize, n: usize| (count as f64 + alpha) / (n as f64 + 2.0 * alpha);
        let mut weights = Vec::with_capacity(dimension);
        let mut bias = 0.0;
        for j in 0..dimension {
            let tp = theta(present_pos[j], n_pos);
            let tn = theta(present_neg[j], n_neg);
            let absent = ((1.0 - tp) / (1.0 - tn)).ln();
            bias += absent;
            weights.push((tp / tn).ln() - absent);
        }
        Self { weights, bias }
    }

    pub fn log_odds(&self, x: &FeatureVector) -> f64 {
        self.bias
            + x.entries()
                .iter()
                .filter_map(|&(j, _)| self.weights.get(j as usize))
                .sum::<f64>()
    }

    pub fn predict(&self, x: &FeatureVector) -> f64 {
        sigmoid(self.log_odds(x))
    }

    pub fn dimension(&self) -> usize {
        self.weights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_of_positive_feature_raises_probability() {
        let xs = vec![
            FeatureVector::from_pairs(3, vec![(0, 1.0)]),
            FeatureVector::from_pairs(3, vec![(1, 1.0)]),
            FeatureVector::from_pairs(3, vec![(2, 1.0)]),
        ];
        let nb = BernoulliNaiveBayes::fit(&xs, &[true, false, false], 1.0);
        assert!(nb.predict(&xs[0]) > 0.5);
        assert!(nb.predict(&xs[1]) < 0.5);
        assert_eq!(nb.dimension(), 3);
    }
}
