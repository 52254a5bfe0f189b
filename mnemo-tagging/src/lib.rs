//! # mnemo-tagging
//!
//! The tagging pipeline: temporal rule for Time, lexical rules and trained
//! classifiers blended for the learned categories, then confidence scoring.

pub mod blend;
pub mod confidence;
pub mod engine;
pub mod rules;
pub mod summary;
pub mod temporal;

pub use blend::{blend_category, BlendMode};
pub use confidence::ConfidenceScorer;
pub use engine::TaggingEngine;
pub use rules::RuleSet;
pub use summary::{BatchSummary, CategorySummary};
pub use temporal::{period_for_year, predict_time};
