//! # mnemo-training
//!
//! Labelled-corpus loading, per-category cross-validated training with
//! family-weighting selection, and evaluation against ground truth.

pub mod corpus;
pub mod folds;
pub mod metrics;
pub mod trainer;

pub use corpus::{load_corpus, load_papers, parse_corpus, parse_papers, Corpus};
pub use folds::ValidationPlan;
pub use metrics::{evaluate, CategoryEvaluation, EvaluationReport};
pub use trainer::{CategoryReport, ModelTrainer, TrainingReport};
