//! Set-agreement metrics and evaluation of a tagger against ground truth.

use std::collections::{BTreeMap, BTreeSet};

use mnemo_core::config::AgreementMetric;
use mnemo_core::{Category, ITagger, PaperTags, TrainingExample};
use mnemo_observability::{evaluation_span, events};
use rayon::prelude::*;
use serde::Serialize;

/// |A ∩ B| / |A ∪ B|. Two empty sets agree perfectly.
pub fn jaccard<S: AsRef<str>, T: AsRef<str>>(predicted: &[S], truth: &[T]) -> f64 {
    let a: BTreeSet<&str> = predicted.iter().map(AsRef::as_ref).collect();
    let b: BTreeSet<&str> = truth.iter().map(AsRef::as_ref).collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 1.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

/// 1.0 when the sets are equal, ignoring order and duplicates.
pub fn exact_match<S: AsRef<str>, T: AsRef<str>>(predicted: &[S], truth: &[T]) -> f64 {
    let a: BTreeSet<&str> = predicted.iter().map(AsRef::as_ref).collect();
    let b: BTreeSet<&str> = truth.iter().map(AsRef::as_ref).collect();
    if a == b {
        1.0
    } else {
        0.0
    }
}

pub fn agreement<S: AsRef<str>, T: AsRef<str>>(
    metric: AgreementMetric,
    predicted: &[S],
    truth: &[T],
) -> f64 {
    match metric {
        AgreementMetric::Jaccard => jaccard(predicted, truth),
        AgreementMetric::ExactMatch => exact_match(predicted, truth),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEvaluation {
    /// Examples carrying ground truth for this category.
    pub examples: usize,
    pub exact_match: f64,
    pub mean_jaccard: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub tagger: String,
    pub examples: usize,
    pub categories: BTreeMap<Category, CategoryEvaluation>,
}

impl EvaluationReport {
    /// Mean Jaccard over evaluated categories, weighted by example count.
    pub fn mean_jaccard(&self) -> f64 {
        let (sum, n) = self
            .categories
            .values()
            .fold((0.0, 0usize), |(sum, n), c| {
                (sum + c.mean_jaccard * c.examples as f64, n + c.examples)
            });
        if n == 0 {
            0.0
        } else {
            sum / n as f64
        }
    }
}

/// Tag every example's paper and compare with its curated labels.
/// A category is scored on every example whose label map holds it. Corpus
/// loading gives each learned category an entry, possibly empty, whenever an
/// item has any ground truth, so a missing field counts as empty truth.
pub fn evaluate(tagger: &dyn ITagger, examples: &[TrainingExample]) -> EvaluationReport {
    let span = evaluation_span!(examples.len());
    let _guard = span.enter();

    let predictions: Vec<PaperTags> = examples.par_iter().map(|e| tagger.tag(&e.paper)).collect();

    let mut categories = BTreeMap::new();
    for category in Category::ALL {
        let pairs: Vec<(&[String], &[String])> = examples
            .iter()
            .zip(&predictions)
            .filter(|(e, _)| e.labels.contains_key(&category))
            .map(|(e, p)| (p.tags(category), e.labels_for(category)))
            .collect();
        if pairs.is_empty() {
            continue;
        }
        let n = pairs.len() as f64;
        categories.insert(
            category,
            CategoryEvaluation {
                examples: pairs.len(),
                exact_match: pairs.iter().map(|&(p, t)| exact_match(p, t)).sum::<f64>() / n,
                mean_jaccard: pairs.iter().map(|&(p, t)| jaccard(p, t)).sum::<f64>() / n,
            },
        );
    }

    let report = EvaluationReport {
        tagger: tagger.name().to_string(),
        examples: examples.len(),
        categories,
    };
    events::evaluation_completed(report.examples, report.mean_jaccard());
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn jaccard_edge_cases() {
        assert_eq!(jaccard(&NONE, &NONE), 1.0);
        assert_eq!(jaccard(&["A"], &NONE), 0.0);
        assert_eq!(jaccard(&["A", "B"], &["B", "C"]), 1.0 / 3.0);
        assert_eq!(jaccard(&["A", "A"], &["A"]), 1.0);
    }

    #[test]
    fn exact_match_ignores_order() {
        assert_eq!(exact_match(&["B", "A"], &["A", "B"]), 1.0);
        assert_eq!(exact_match(&["A"], &["A", "B"]), 0.0);
        assert_eq!(exact_match(&NONE, &NONE), 1.0);
    }

    #[test]
    fn agreement_dispatches_on_metric() {
        assert_eq!(agreement(AgreementMetric::Jaccard, &["A"], &["A", "B"]), 0.5);
        assert_eq!(agreement(AgreementMetric::ExactMatch, &["A"], &["A", "B"]), 0.0);
    }
}
