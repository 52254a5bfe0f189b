use super::{FeatureError, StoreError, TrainingError};

/// Top-level error for the Mnemo workspace.
#[derive(Debug, thiserror::Error)]
pub enum MnemoError {
    #[error("feature extraction failed: {0}")]
    FeatureError(#[from] FeatureError),

    #[error("model store failed: {0}")]
    StoreError(#[from] StoreError),

    #[error("training failed: {0}")]
    TrainingError(#[from] TrainingError),

    #[error("invalid configuration: {reason}")]
    ConfigError { reason: String },

    #[error("batch too large: {size} papers, limit {limit}")]
    BatchTooLarge { size: usize, limit: usize },

    #[error("I/O failed at {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl MnemoError {
    /// Structural integrity failures halt; everything else is a recoverable data issue.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            MnemoError::FeatureError(_)
                | MnemoError::TrainingError(TrainingError::InsufficientTrainingData { .. })
        )
    }
}
