/// Training errors.
///
/// `InsufficientTrainingData` is informational: the trainer recovers by
/// disabling cross-validation for the category and flagging it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrainingError {
    #[error("insufficient training data for {category}: {reason}")]
    InsufficientTrainingData { category: String, reason: String },

    #[error("training corpus is empty")]
    EmptyCorpus,

    #[error("invalid training corpus: {reason}")]
    InvalidCorpus { reason: String },
}
