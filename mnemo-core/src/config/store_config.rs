use serde::{Deserialize, Serialize};

use super::defaults;

/// Model store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the persisted model artifact.
    pub model_path: String,
    /// zstd compression level for the artifact payload.
    pub compression_level: i32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            model_path: defaults::DEFAULT_MODEL_PATH.to_string(),
            compression_level: defaults::DEFAULT_COMPRESSION_LEVEL,
        }
    }
}
