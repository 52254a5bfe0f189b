//! Validation plan selection and deterministic stratified folds.

use std::collections::BTreeMap;
use std::fmt;

use mnemo_core::config::TrainingConfig;
use serde::{Deserialize, Serialize};

/// How a category's family weighting is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationPlan {
    /// Too little data to hold anything out: fit once with uniform weights.
    NoHoldout { reason: String },
    LeaveOneOut,
    KFold { k: usize },
}

impl ValidationPlan {
    /// Pick a plan from one category's label sets (one per example).
    pub fn choose(labels: &[&[String]], config: &TrainingConfig) -> Self {
        let n = labels.len();
        if n < 2 {
            return ValidationPlan::NoHoldout {
                reason: format!("{n} training example(s)"),
            };
        }
        let support = tag_support(labels);
        let Some((rarest, &min_support)) = support.iter().min_by_key(|&(_, &s)| s) else {
            return ValidationPlan::NoHoldout {
                reason: "no labelled tag".to_string(),
            };
        };
        if min_support < 2 {
            return ValidationPlan::NoHoldout {
                reason: format!("tag {rarest} has a single example"),
            };
        }
        if n <= config.loo_max_examples {
            ValidationPlan::LeaveOneOut
        } else {
            ValidationPlan::KFold {
                k: config.max_folds.min(min_support).max(2),
            }
        }
    }

    pub fn holds_out(&self) -> bool {
        !matches!(self, ValidationPlan::NoHoldout { .. })
    }

    /// Held-out index sets. Every example is held out exactly once; empty
    /// for `NoHoldout`.
    pub fn folds(&self, labels: &[&[String]]) -> Vec<Vec<usize>> {
        match self {
            ValidationPlan::NoHoldout { .. } => Vec::new(),
            ValidationPlan::LeaveOneOut => (0..labels.len()).map(|i| vec![i]).collect(),
            ValidationPlan::KFold { k } => stratified_folds(labels, *k),
        }
    }
}

impl fmt::Display for ValidationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationPlan::NoHoldout { .. } => f.write_str("no-holdout"),
            ValidationPlan::LeaveOneOut => f.write_str("leave-one-out"),
            ValidationPlan::KFold { k } => write!(f, "{k}-fold"),
        }
    }
}

fn tag_support<'a>(labels: &[&'a [String]]) -> BTreeMap<&'a str, usize> {
    let mut support = BTreeMap::new();
    for set in labels {
        for code in set.iter() {
            *support.entry(code.as_str()).or_insert(0) += 1;
        }
    }
    support
}

/// Multi-label stratification: tags are visited rarest first, and each of a
/// tag's unassigned examples goes to the fold holding the fewest examples of
/// that tag, then the fewest examples overall, then the lowest index.
/// Unlabelled examples fill the smallest folds last.
fn stratified_folds(labels: &[&[String]], k: usize) -> Vec<Vec<usize>> {
    let k = k.clamp(1, labels.len().max(1));
    let mut folds: Vec<Vec<usize>> = vec![Vec::new(); k];
    let mut assigned = vec![false; labels.len()];

    let mut tags: Vec<(&str, usize)> = tag_support(labels).into_iter().collect();
    tags.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    for (tag, _) in tags {
        let mut per_fold: Vec<usize> = folds
            .iter()
            .map(|fold| {
                fold.iter()
                    .filter(|&&i| labels[i].iter().any(|c| c == tag))
                    .count()
            })
            .collect();
        for i in 0..labels.len() {
            if assigned[i] || !labels[i].iter().any(|c| c == tag) {
                continue;
            }
            let target = (0..k)
                .min_by_key(|&f| (per_fold[f], folds[f].len(), f))
                .unwrap_or(0);
            folds[target].push(i);
            per_fold[target] += 1;
            assigned[i] = true;
        }
    }

    for i in 0..labels.len() {
        if !assigned[i] {
            let target = (0..k).min_by_key(|&f| (folds[f].len(), f)).unwrap_or(0);
            folds[target].push(i);
        }
    }
    for fold in &mut folds {
        fold.sort_unstable();
    }
    folds
}
