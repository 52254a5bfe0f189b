//! # mnemo-features
//!
//! Paper text → fixed-dimension sparse TF-IDF vector.
//! The vocabulary is fitted once at training time and frozen inside the model.

pub mod extractor;
pub mod tokenizer;
pub mod vector;
pub mod vocabulary;

pub use extractor::FeatureExtractor;
pub use vector::FeatureVector;
pub use vocabulary::Vocabulary;
