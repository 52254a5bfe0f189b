use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence scorer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Tags with fewer training examples than this count as low support.
    pub min_support: usize,
    /// Emitted low-support tags never score below this.
    pub low_support_floor: f64,
    /// Low-support tags never score above this.
    pub low_support_ceiling: f64,
    /// Per extra tag in a set: confidence is divided by `1 + penalty * (n - 1)`.
    pub tag_count_penalty: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            min_support: defaults::DEFAULT_MIN_SUPPORT,
            low_support_floor: defaults::DEFAULT_LOW_SUPPORT_FLOOR,
            low_support_ceiling: defaults::DEFAULT_LOW_SUPPORT_CEILING,
            tag_count_penalty: defaults::DEFAULT_TAG_COUNT_PENALTY,
        }
    }
}
