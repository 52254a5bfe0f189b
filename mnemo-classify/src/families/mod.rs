//! The three classifier families. Each is a binary classifier over sparse
//! feature vectors returning P(tag | x).

pub mod forest;
pub mod logistic;
pub mod naive_bayes;

pub use forest::{ForestParams, RandomForest};
pub use logistic::{LogisticModel, LogisticParams};
pub use naive_bayes::BernoulliNaiveBayes;

/// Numerically stable logistic function.
pub(crate) fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Per-example weights giving both classes equal total mass `n / 2`.
pub(crate) fn balanced_sample_weights(ys: &[bool]) -> Vec<f64> {
    let n = ys.len() as f64;
    let pos = ys.iter().filter(|&&y| y).count() as f64;
    let neg = n - pos;
    ys.iter()
        .map(|&y| {
            let class = if y { pos } else { neg };
            if class == 0.0 {
                0.0
            } else {
                n / (2.0 * class)
            }
        })
        .collect()
}
