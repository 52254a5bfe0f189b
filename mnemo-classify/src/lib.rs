//! # mnemo-classify
//!
//! One-vs-rest ensembles per tag, grouped per category.
//! Three model families (tree ensemble, generative, margin-based) are combined
//! with a weighted arithmetic mean whose weights are chosen at training time.

pub mod category_model;
pub mod ensemble;
pub mod families;
pub mod model;

pub use category_model::{CategoryModel, TagModel, TagProbability};
pub use ensemble::{FamilyProbabilities, FamilyWeights, TagEnsemble};
pub use model::TrainedModel;
