//! ModelTrainer: vocabulary fit, per-category validation plan, family
//! weighting selection, final fit.

use std::collections::BTreeMap;
use std::time::Instant;

use mnemo_classify::{CategoryModel, FamilyWeights, TagProbability, TrainedModel};
use mnemo_core::config::{AgreementMetric, MnemoConfig};
use mnemo_core::errors::{MnemoResult, TrainingError};
use mnemo_core::{Category, TrainingExample};
use mnemo_features::{FeatureExtractor, FeatureVector};
use mnemo_observability::{category_span, events, training_span};
use mnemo_store::ModelStore;
use mnemo_tagging::{blend_category, BlendMode, ConfidenceScorer, RuleSet};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::folds::ValidationPlan;
use crate::metrics::agreement;

/// Outcome of training one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryReport {
    pub plan: ValidationPlan,
    pub weights: FamilyWeights,
    /// Mean held-out agreement of the chosen weighting. `None` without holdout.
    pub score: Option<f64>,
    /// Held-out agreement of every candidate weighting, in trial order.
    pub candidate_scores: Vec<(String, f64)>,
    pub trained_tags: usize,
    pub low_support: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub examples: usize,
    pub dimension: usize,
    pub metric: AgreementMetric,
    pub categories: BTreeMap<Category, CategoryReport>,
}

impl TrainingReport {
    pub fn low_support_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|(_, r)| r.low_support)
            .map(|(&c, _)| c)
            .collect()
    }
}

pub struct ModelTrainer {
    config: MnemoConfig,
}

impl ModelTrainer {
    pub fn new(config: MnemoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MnemoConfig {
        &self.config
    }

    /// Train a model on a labelled corpus.
    ///
    /// Labels outside a category's vocabulary are ignored. Categories with
    /// too little data are trained without validation and flagged, never
    /// rejected. Only an empty corpus or one without usable text fails.
    pub fn train(&self, examples: &[TrainingExample]) -> MnemoResult<(TrainedModel, TrainingReport)> {
        if examples.is_empty() {
            return Err(TrainingError::EmptyCorpus.into());
        }
        let span = training_span!(examples.len());
        let _guard = span.enter();
        let started = Instant::now();

        let extractor =
            FeatureExtractor::fit(examples.iter().map(|e| &e.paper), &self.config.features);
        let dimension = extractor.dimension();
        if dimension == 0 {
            return Err(TrainingError::InvalidCorpus {
                reason: "corpus text yields an empty vocabulary".to_string(),
            }
            .into());
        }
        let xs: Vec<FeatureVector> = examples
            .par_iter()
            .map(|e| extractor.extract(&e.paper))
            .collect();

        let trained: Vec<(Category, CategoryModel, CategoryReport)> = if self.config.training.parallel {
            Category::LEARNED
                .par_iter()
                .map(|&c| self.train_category(c, examples, &xs, dimension))
                .collect()
        } else {
            Category::LEARNED
                .iter()
                .map(|&c| self.train_category(c, examples, &xs, dimension))
                .collect()
        };

        let mut models = BTreeMap::new();
        let mut reports = BTreeMap::new();
        for (category, model, report) in trained {
            models.insert(category, model);
            reports.insert(category, report);
        }

        let model = TrainedModel::new(extractor, models, examples.len());
        let report = TrainingReport {
            examples: examples.len(),
            dimension,
            metric: self.config.training.metric,
            categories: reports,
        };
        events::training_completed(examples.len(), dimension, started.elapsed().as_millis());
        Ok((model, report))
    }

    /// Train, then persist through `store`.
    pub fn train_and_save(
        &self,
        examples: &[TrainingExample],
        store: &ModelStore,
    ) -> MnemoResult<(TrainedModel, TrainingReport)> {
        let (model, report) = self.train(examples)?;
        store.save(&model)?;
        Ok((model, report))
    }

    fn train_category(
        &self,
        category: Category,
        examples: &[TrainingExample],
        xs: &[FeatureVector],
        dimension: usize,
    ) -> (Category, CategoryModel, CategoryReport) {
        let span = category_span!(category);
        let _guard = span.enter();

        let labels: Vec<Vec<String>> = examples
            .iter()
            .map(|e| {
                e.labels_for(category)
                    .iter()
                    .filter(|code| category.contains(code))
                    .cloned()
                    .collect()
            })
            .collect();
        let labels: Vec<&[String]> = labels.iter().map(Vec::as_slice).collect();
        let plan = ValidationPlan::choose(&labels, &self.config.training);

        let (weights, score, candidate_scores) = match &plan {
            ValidationPlan::NoHoldout { reason } => {
                let err = TrainingError::InsufficientTrainingData {
                    category: category.to_string(),
                    reason: reason.clone(),
                };
                events::low_training_support(category.name(), &err.to_string());
                (FamilyWeights::UNIFORM, None, Vec::new())
            }
            _ => {
                let candidates = FamilyWeights::candidates();
                let scores = self.cross_validate(category, examples, xs, &labels, &plan, dimension);
                let mut best = 0;
                for (i, &s) in scores.iter().enumerate() {
                    if s > scores[best] {
                        best = i;
                    }
                }
                let listed = candidates
                    .iter()
                    .zip(scores)
                    .map(|(w, s)| (w.label().to_string(), s))
                    .collect();
                (candidates[best], Some(scores[best]), listed)
            }
        };

        let low_support = !plan.holds_out();
        let model = CategoryModel::fit(
            category,
            xs,
            &labels,
            weights,
            &self.config.classifier,
            dimension,
        )
        .with_low_support(low_support);

        events::category_trained(category.name(), &plan.to_string(), weights.label(), score);
        let report = CategoryReport {
            plan,
            weights,
            score,
            candidate_scores,
            trained_tags: model.tags.len(),
            low_support,
        };
        (category, model, report)
    }

    /// Mean held-out agreement of each candidate weighting. Each fold is fitted
    /// once; the candidates only re-aggregate its family probabilities.
    fn cross_validate(
        &self,
        category: Category,
        examples: &[TrainingExample],
        xs: &[FeatureVector],
        labels: &[&[String]],
        plan: &ValidationPlan,
        dimension: usize,
    ) -> [f64; 4] {
        let candidates = FamilyWeights::candidates();
        let folds = plan.folds(labels);
        let score_fold = |held_out: &Vec<usize>| -> ([f64; 4], usize) {
            let (train_x, train_y): (Vec<FeatureVector>, Vec<&[String]>) = (0..xs.len())
                .filter(|i| held_out.binary_search(i).is_err())
                .map(|i| (xs[i].clone(), labels[i]))
                .unzip();
            let model = CategoryModel::fit(
                category,
                &train_x,
                &train_y,
                FamilyWeights::UNIFORM,
                &self.config.classifier,
                dimension,
            );
            let scorer = ConfidenceScorer::new(self.config.confidence.clone());
            let mut totals = [0.0; 4];
            for &i in held_out {
                let ml = model.predict(&xs[i]);
                let rules = RuleSet::shared().score(&examples[i].paper, category);
                for (slot, weights) in candidates.iter().enumerate() {
                    let prediction = blend_category(
                        category,
                        &reweight(&ml, weights),
                        &rules,
                        BlendMode::Hybrid,
                        &self.config.blending,
                        &scorer,
                    );
                    totals[slot] += agreement(
                        self.config.training.metric,
                        prediction.tags.as_slice(),
                        labels[i],
                    );
                }
            }
            (totals, held_out.len())
        };

        let per_fold: Vec<([f64; 4], usize)> = if self.config.training.parallel {
            folds.par_iter().map(score_fold).collect()
        } else {
            folds.iter().map(score_fold).collect()
        };

        let mut totals = [0.0; 4];
        let mut held = 0;
        for (fold_totals, n) in per_fold {
            for (t, f) in totals.iter_mut().zip(fold_totals) {
                *t += f;
            }
            held += n;
        }
        debug!(category = %category, plan = %plan, folds = folds.len(), "cross-validation finished");
        if held == 0 {
            return [0.0; 4];
        }
        totals.map(|t| t / held as f64)
    }
}

fn reweight(
    ml: &BTreeMap<String, TagProbability>,
    weights: &FamilyWeights,
) -> BTreeMap<String, TagProbability> {
    ml.iter()
        .map(|(code, p)| {
            (
                code.clone(),
                TagProbability {
                    probability: p.families.aggregate(weights),
                    ..*p
                },
            )
        })
        .collect()
}
