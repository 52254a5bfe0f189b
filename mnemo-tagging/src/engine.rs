//! TaggingEngine: runs the full pipeline for one paper or a batch.

use std::collections::BTreeMap;
use std::sync::Arc;

use mnemo_classify::TrainedModel;
use mnemo_core::config::{BlendingConfig, MnemoConfig};
use mnemo_core::errors::{MnemoError, MnemoResult};
use mnemo_core::{Category, ITagger, Paper, PaperTags};
use mnemo_observability::{events, tagging_span};
use rayon::prelude::*;
use tracing::debug;

use crate::blend::{blend_category, BlendMode};
use crate::confidence::ConfidenceScorer;
use crate::rules::RuleSet;
use crate::temporal::predict_time;

/// Hybrid tagging engine.
///
/// With a model it blends classifier probabilities with lexical rules; without
/// one it degrades to rule-only tagging. Time is always rule-derived.
/// Holds the model by `Arc`, so a concurrent model swap never affects a
/// running batch.
pub struct TaggingEngine {
    model: Option<Arc<TrainedModel>>,
    rules: &'static RuleSet,
    blending: BlendingConfig,
    scorer: ConfidenceScorer,
}

impl TaggingEngine {
    pub fn new(model: Arc<TrainedModel>, config: &MnemoConfig) -> Self {
        Self {
            model: Some(model),
            rules: RuleSet::shared(),
            blending: config.blending.clone(),
            scorer: ConfidenceScorer::new(config.confidence.clone()),
        }
    }

    /// Engine for when no trained model is available.
    pub fn rule_only(config: &MnemoConfig) -> Self {
        Self {
            model: None,
            rules: RuleSet::shared(),
            blending: config.blending.clone(),
            scorer: ConfidenceScorer::new(config.confidence.clone()),
        }
    }

    /// Same engine with a different classification threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.blending.threshold = threshold;
        self
    }

    pub fn mode(&self) -> BlendMode {
        if self.model.is_some() {
            BlendMode::Hybrid
        } else {
            BlendMode::RuleOnly
        }
    }

    pub fn model(&self) -> Option<&Arc<TrainedModel>> {
        self.model.as_ref()
    }

    pub fn threshold(&self) -> f64 {
        self.blending.threshold
    }

    /// Tag one paper across all four categories.
    pub fn tag(&self, paper: &Paper) -> PaperTags {
        let mut result = PaperTags::new(paper.key.clone());
        result.categories.insert(Category::Time, predict_time(paper.year));

        let vector = self.model.as_ref().map(|m| m.vectorize(paper));
        let mode = self.mode();
        for category in Category::LEARNED {
            let ml = match (&self.model, &vector) {
                (Some(model), Some(x)) => model.predict(category, x),
                _ => BTreeMap::new(),
            };
            let rules = self.rules.score(paper, category);
            let prediction =
                blend_category(category, &ml, &rules, mode, &self.blending, &self.scorer);
            result.categories.insert(category, prediction);
        }

        debug!(
            paper = %paper.key,
            active_features = vector.as_ref().map_or(0, |v| v.nnz()),
            tags = result.categories.values().map(|p| p.tags.len()).sum::<usize>(),
            "tagged paper"
        );
        result
    }

    /// Tag papers in parallel. Oversized batches are rejected before any work.
    pub fn tag_batch(&self, papers: &[Paper]) -> MnemoResult<Vec<PaperTags>> {
        let limit = self.blending.max_batch_size;
        if papers.len() > limit {
            return Err(MnemoError::BatchTooLarge {
                size: papers.len(),
                limit,
            });
        }
        let span = tagging_span!(papers.len(), ITagger::name(self));
        let _guard = span.enter();
        let results: Vec<PaperTags> = papers.par_iter().map(|p| self.tag(p)).collect();
        events::batch_tagged(results.len(), ITagger::name(self));
        Ok(results)
    }
}

impl ITagger for TaggingEngine {
    fn tag(&self, paper: &Paper) -> PaperTags {
        TaggingEngine::tag(self, paper)
    }

    fn tag_batch(&self, papers: &[Paper]) -> MnemoResult<Vec<PaperTags>> {
        TaggingEngine::tag_batch(self, papers)
    }

    fn name(&self) -> &str {
        match self.mode() {
            BlendMode::Hybrid => "hybrid",
            BlendMode::RuleOnly => "rule-only",
        }
    }
}
