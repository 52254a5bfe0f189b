//! Confidence scoring for a predicted tag set.

use mnemo_core::config::ConfidenceConfig;
use mnemo_core::Confidence;

/// Turns blended scores into per-tag and per-category confidence.
#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    config: ConfidenceConfig,
}

impl ConfidenceScorer {
    pub fn new(config: ConfidenceConfig) -> Self {
        Self { config }
    }

    /// `blended · (1 − spread)`, pulled into the low-support band when the
    /// tag had fewer than `min_support` training examples.
    pub fn tag_confidence(&self, blended: f64, spread: f64, support: usize) -> Confidence {
        let raw = (blended * (1.0 - spread)).clamp(0.0, 1.0);
        if self.is_low_support(support) {
            Confidence::new(raw.clamp(
                self.config.low_support_floor,
                self.config.low_support_ceiling,
            ))
        } else {
            Confidence::new(raw)
        }
    }

    pub fn is_low_support(&self, support: usize) -> bool {
        support < self.config.min_support
    }

    /// Mean tag confidence discounted by set size. Empty set scores exactly zero.
    pub fn category_confidence(&self, tags: &[Confidence]) -> Confidence {
        if tags.is_empty() {
            return Confidence::ZERO;
        }
        let mean = tags.iter().map(|c| c.value()).sum::<f64>() / tags.len() as f64;
        let penalty = 1.0 + self.config.tag_count_penalty * (tags.len() - 1) as f64;
        Confidence::new(mean / penalty)
    }
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new(ConfidenceConfig::default())
    }
}
