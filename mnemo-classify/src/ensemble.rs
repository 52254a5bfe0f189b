//! Per-tag ensemble and the family aggregation rule.

use mnemo_core::config::ClassifierConfig;
use mnemo_features::FeatureVector;
use serde::{Deserialize, Serialize};

use crate::families::{
    BernoulliNaiveBayes, ForestParams, LogisticModel, LogisticParams, RandomForest,
};

/// Mixing weights over the three families. Always sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FamilyWeights {
    pub forest: f64,
    pub bayes: f64,
    pub linear: f64,
}

impl FamilyWeights {
    pub const UNIFORM: FamilyWeights = FamilyWeights {
        forest: 1.0 / 3.0,
        bayes: 1.0 / 3.0,
        linear: 1.0 / 3.0,
    };

    /// Weightings tried during training, in tie-break order: uniform first,
    /// then each family emphasised in turn.
    pub fn candidates() -> [FamilyWeights; 4] {
        [
            Self::UNIFORM,
            FamilyWeights {
                forest: 0.5,
                bayes: 0.25,
                linear: 0.25,
            },
            FamilyWeights {
                forest: 0.25,
                bayes: 0.5,
                linear: 0.25,
            },
            FamilyWeights {
                forest: 0.25,
                bayes: 0.25,
                linear: 0.5,
            },
        ]
    }

    pub fn label(&self) -> &'static str {
        if self.forest > self.bayes && self.forest > self.linear {
            "forest"
        } else if self.bayes > self.forest && self.bayes > self.linear {
            "bayes"
        } else if self.linear > self.forest && self.linear > self.bayes {
            "linear"
        } else {
            "uniform"
        }
    }
}

impl Default for FamilyWeights {
    fn default() -> Self {
        Self::UNIFORM
    }
}

/// Raw per-family probabilities for one tag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FamilyProbabilities {
    pub forest: f64,
    pub bayes: f64,
    pub linear: f64,
}

impl FamilyProbabilities {
    pub const ZERO: FamilyProbabilities = FamilyProbabilities {
        forest: 0.0,
        bayes: 0.0,
        linear: 0.0,
    };

    pub fn constant(p: f64) -> Self {
        Self {
            forest: p,
            bayes: p,
            linear: p,
        }
    }

    /// Weighted arithmetic mean, clamped to [0, 1].
    pub fn aggregate(&self, w: &FamilyWeights) -> f64 {
        let total = w.forest + w.bayes + w.linear;
        if total <= 0.0 {
            return 0.0;
        }
        let mean = (w.forest * self.forest + w.bayes * self.bayes + w.linear * self.linear) / total;
        mean.clamp(0.0, 1.0)
    }

    /// Population standard deviation of the three probabilities.
    pub fn spread(&self) -> f64 {
        let values = [self.forest, self.bayes, self.linear];
        let mean = values.iter().sum::<f64>() / 3.0;
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 3.0).sqrt()
    }
}

/// One tag's binary classifier ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TagEnsemble {
    Trained {
        forest: RandomForest,
        bayes: BernoulliNaiveBayes,
        linear: LogisticModel,
    },
    /// Single-class training data: the base rate, every family agreeing.
    Constant { probability: f64 },
}

impl TagEnsemble {
    /// Fit all three families. Single-class labels yield `Constant`.
    pub fn fit(xs: &[FeatureVector], ys: &[bool], config: &ClassifierConfig, seed: u64) -> Self {
        let positives = ys.iter().filter(|&&y| y).count();
        if positives == 0 || positives == ys.len() {
            let probability = if ys.is_empty() {
                0.0
            } else {
                positives as f64 / ys.len() as f64
            };
            return TagEnsemble::Constant { probability };
        }
        TagEnsemble::Trained {
            forest: RandomForest::fit(xs, ys, &ForestParams::from(config), seed),
            bayes: BernoulliNaiveBayes::fit(xs, ys, config.nb_alpha),
            linear: LogisticModel::fit(xs, ys, &LogisticParams::from(config)),
        }
    }

    /// Per-family probabilities. A vector with no active features carries no
    /// evidence and scores zero everywhere.
    pub fn predict(&self, x: &FeatureVector) -> FamilyProbabilities {
        if x.is_zero() {
            return FamilyProbabilities::ZERO;
        }
        match self {
            TagEnsemble::Trained {
                forest,
                bayes,
                linear,
            } => FamilyProbabilities {
                forest: forest.predict(x),
                bayes: bayes.predict(x),
                linear: linear.predict(x),
            },
            TagEnsemble::Constant { probability } => FamilyProbabilities::constant(*probability),
        }
    }

    /// Input dimensions of the fitted families. Empty for `Constant`.
    pub fn dimensions(&self) -> Vec<usize> {
        match self {
            TagEnsemble::Trained {
                forest,
                bayes,
                linear,
            } => vec![forest.dimension(), bayes.dimension(), linear.dimension()],
            TagEnsemble::Constant { .. } => Vec::new(),
        }
    }

    /// False when a stored tree split points past the forest's own dimension.
    pub fn is_consistent(&self) -> bool {
        match self {
            TagEnsemble::Trained { forest, .. } => forest.splits_within_dimension(),
            TagEnsemble::Constant { probability } => (0.0..=1.0).contains(probability),
        }
    }
}
