//! # mnemo-core
//!
//! Foundation crate for the Mnemo auto-tagging engine.
//! Defines the paper and prediction types, the closed tag taxonomy,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod confidence;
pub mod constants;
pub mod errors;
pub mod models;
pub mod taxonomy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use confidence::Confidence;
pub use config::MnemoConfig;
pub use errors::{MnemoError, MnemoResult};
pub use models::{
    CategoryPrediction, CategoryStatus, Paper, PaperTags, TagScore, TrainingExample,
};
pub use taxonomy::{Category, TagDef};
pub use traits::ITagger;
