//! Random forest of depth-limited Gini trees.

use std::collections::BTreeSet;

use mnemo_core::config::ClassifierConfig;
use mnemo_features::FeatureVector;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForestParams {
    pub trees: usize,
    pub max_depth: usize,
    pub min_samples_split: usize,
}

impl From<&ClassifierConfig> for ForestParams {
    fn from(config: &ClassifierConfig) -> Self {
        Self {
            trees: config.forest_trees,
            max_depth: config.forest_max_depth,
            min_samples_split: config.forest_min_samples_split,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Node {
    Split {
        feature: u32,
        threshold: f64,
        left: u32,
        right: u32,
    },
    Leaf {
        probability: f64,
    },
}

/// Flat node arena; the root is node 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    fn grow(
        xs: &[FeatureVector],
        ys: &[bool],
        sample: Vec<usize>,
        params: &ForestParams,
        rng: &mut StdRng,
    ) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        tree.build(xs, ys, sample, 0, params, rng);
        tree
    }

    fn build(
        &mut self,
        xs: &[FeatureVector],
        ys: &[bool],
        sample: Vec<usize>,
        depth: usize,
        params: &ForestParams,
        rng: &mut StdRng,
    ) -> u32 {
        let id = self.nodes.len() as u32;
        let positives = sample.iter().filter(|&&i| ys[i]).count();
        let probability = if sample.is_empty() {
            0.0
        } else {
            positives as f64 / sample.len() as f64
        };
        self.nodes.push(Node::Leaf { probability });

        let pure = positives == 0 || positives == sample.len();
        if pure || depth >= params.max_depth || sample.len() < params.min_samples_split {
            return id;
        }
        let Some((feature, threshold)) = best_split(xs, ys, &sample, rng) else {
            return id;
        };

        let (left, right): (Vec<usize>, Vec<usize>) = sample
            .into_iter()
            .partition(|&i| xs[i].get(feature) <= threshold);
        let left = self.build(xs, ys, left, depth + 1, params, rng);
        let right = self.build(xs, ys, right, depth + 1, params, rng);
        self.nodes[id as usize] = Node::Split {
            feature,
            threshold,
            left,
            right,
        };
        id
    }

    pub fn predict(&self, x: &FeatureVector) -> f64 {
        let mut at = 0usize;
        loop {
            match self.nodes.get(at) {
                Some(Node::Leaf { probability }) => return *probability,
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    at = if x.get(*feature) <= *threshold {
                        *left as usize
                    } else {
                        *right as usize
                    };
                }
                None => return 0.0,
            }
        }
    }

    pub fn max_feature(&self) -> Option<u32> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                Node::Split { feature, .. } => Some(*feature),
                Node::Leaf { .. } => None,
            })
            .max()
    }
}

fn gini(positives: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let p = positives as f64 / total as f64;
    2.0 * p * (1.0 - p)
}

/// Best Gini split over `ceil(sqrt(active))` randomly drawn candidate
/// features, where `active` are the features non-zero somewhere in the node.
fn best_split(
    xs: &[FeatureVector],
    ys: &[bool],
    sample: &[usize],
    rng: &mut StdRng,
) -> Option<(u32, f64)> {
    let active: Vec<u32> = sample
        .iter()
        .flat_map(|&i| xs[i].entries().iter().map(|&(f, _)| f))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if active.is_empty() {
        return None;
    }
    let k = ((active.len() as f64).sqrt().ceil() as usize).clamp(1, active.len());

    let total = sample.len();
    let total_pos = sample.iter().filter(|&&i| ys[i]).count();
    let parent = gini(total_pos, total);
    let mut best: Option<(u32, f64, f64)> = None;

    for pick in index::sample(rng, active.len(), k).into_iter() {
        let feature = active[pick];
        let mut values: Vec<(f64, bool)> =
            sample.iter().map(|&i| (xs[i].get(feature), ys[i])).collect();
        values.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut left_n = 0usize;
        let mut left_pos = 0usize;
        for w in 0..values.len() - 1 {
            left_n += 1;
            if values[w].1 {
                left_pos += 1;
            }
            if values[w].0 == values[w + 1].0 {
                continue;
            }
            let right_n = total - left_n;
            let right_pos = total_pos - left_pos;
            let impurity = (left_n as f64 * gini(left_pos, left_n)
                + right_n as f64 * gini(right_pos, right_n))
                / total as f64;
            let gain = parent - impurity;
            if gain > 1e-12 && best.map_or(true, |(_, _, g)| gain > g) {
                let threshold = (values[w].0 + values[w + 1].0) / 2.0;
                best = Some((feature, threshold, gain));
            }
        }
    }
    best.map(|(f, t, _)| (f, t))
}

/// Draw the same number of examples from each class, with replacement.
fn balanced_bootstrap(pos: &[usize], neg: &[usize], rng: &mut StdRng) -> Vec<usize> {
    let per_class = pos.len().max(neg.len());
    let mut sample = Vec::with_capacity(per_class * 2);
    for class in [pos, neg] {
        if class.is_empty() {
            continue;
        }
        for _ in 0..per_class {
            sample.push(class[rng.gen_range(0..class.len())]);
        }
    }
    sample
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    dimension: usize,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn fit(xs: &[FeatureVector], ys: &[bool], params: &ForestParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let pos: Vec<usize> = (0..ys.len()).filter(|&i| ys[i]).collect();
        let neg: Vec<usize> = (0..ys.len()).filter(|&i| !ys[i]).collect();
        let dimension = xs.first().map_or(0, FeatureVector::dimension);
        let trees = (0..params.trees)
            .map(|_| {
                let sample = balanced_bootstrap(&pos, &neg, &mut rng);
                DecisionTree::grow(xs, ys, sample, params, &mut rng)
            })
            .collect();
        Self { dimension, trees }
    }

    /// Mean leaf probability across trees.
    pub fn predict(&self, x: &FeatureVector) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        self.trees.iter().map(|t| t.predict(x)).sum::<f64>() / self.trees.len() as f64
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// True when every split refers to a feature inside `dimension`.
    pub fn splits_within_dimension(&self) -> bool {
        self.trees
            .iter()
            .filter_map(DecisionTree::max_feature)
            .all(|f| (f as usize) < self.dimension)
    }
}
