mod feature_error;
mod mnemo_error;
mod store_error;
mod training_error;

pub use feature_error::FeatureError;
pub use mnemo_error::MnemoError;
pub use store_error::StoreError;
pub use training_error::TrainingError;

/// Convenience result type for the whole workspace.
pub type MnemoResult<T> = Result<T, MnemoError>;
