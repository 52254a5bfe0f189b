//! Hybrid blending: classifier probabilities ⊕ rule scores → tag set.

use std::collections::{BTreeMap, BTreeSet};

use mnemo_classify::TagProbability;
use mnemo_core::config::BlendingConfig;
use mnemo_core::{Category, CategoryPrediction, CategoryStatus, TagScore};

use crate::confidence::ConfidenceScorer;

/// Whether a trained model contributes to the blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    Hybrid,
    /// No model: the rule score is the blended score.
    RuleOnly,
}

/// Merge classifier output and rule scores for one learned category.
///
/// Candidates are ML tags with probability above the threshold plus every
/// rule match; a candidate is emitted when its blended score reaches the
/// threshold. Neither source proposing anything yields an explicit empty
/// set with status `NeedsReview`.
pub fn blend_category(
    category: Category,
    ml: &BTreeMap<String, TagProbability>,
    rules: &BTreeMap<String, f64>,
    mode: BlendMode,
    config: &BlendingConfig,
    scorer: &ConfidenceScorer,
) -> CategoryPrediction {
    let threshold = config.threshold;
    let mut candidates: BTreeSet<&str> = rules
        .iter()
        .filter(|&(_, &r)| r > 0.0)
        .map(|(code, _)| code.as_str())
        .collect();
    if mode == BlendMode::Hybrid {
        candidates.extend(
            ml.iter()
                .filter(|(_, p)| p.probability > threshold)
                .map(|(code, _)| code.as_str()),
        );
    }

    let mut scores: Vec<TagScore> = candidates
        .into_iter()
        .filter(|code| category.contains(code))
        .filter_map(|code| {
            let rule = rules.get(code).copied().unwrap_or(0.0);
            let (p_ml, spread, support) = match (mode, ml.get(code)) {
                (BlendMode::Hybrid, Some(p)) => (p.probability, p.families.spread(), p.support),
                _ => (0.0, 0.0, 0),
            };
            let blended = match mode {
                BlendMode::Hybrid => config.ml_weight * p_ml + config.rule_weight * rule,
                BlendMode::RuleOnly => rule,
            };
            (blended >= threshold).then(|| TagScore {
                code: code.to_string(),
                ml: p_ml,
                rule,
                blended,
                family_spread: spread,
                support,
                confidence: scorer.tag_confidence(blended, spread, support),
            })
        })
        .collect();

    if scores.is_empty() {
        return CategoryPrediction::empty(category, CategoryStatus::NeedsReview);
    }

    scores.sort_by(|a, b| {
        b.blended
            .total_cmp(&a.blended)
            .then_with(|| a.code.cmp(&b.code))
    });
    let per_tag: Vec<_> = scores.iter().map(|s| s.confidence).collect();
    CategoryPrediction {
        category,
        tags: scores.iter().map(|s| s.code.clone()).collect(),
        confidence: scorer.category_confidence(&per_tag),
        status: CategoryStatus::Tagged,
        scores,
    }
}
