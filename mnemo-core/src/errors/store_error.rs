/// Model store errors. Every variant is fatal at load time.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("vocabulary mismatch: {details}")]
    VocabularyMismatch { details: String },

    #[error("model artifact corrupted: {details}")]
    Corruption { details: String },

    #[error("model store I/O failed at {path}: {reason}")]
    Io { path: String, reason: String },
}
