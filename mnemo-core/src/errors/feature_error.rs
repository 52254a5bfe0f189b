/// Feature extraction errors. Always recovered locally as empty text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    #[error("text field {field} is absent")]
    AbsentField { field: String },

    #[error("text field {field} is malformed: {reason}")]
    MalformedField { field: String, reason: String },
}
