//! # mnemo-store
//!
//! Persists a `TrainedModel` as a single versioned artifact and serves the
//! current model to readers through an atomically swappable handle.

pub mod artifact;
pub mod handle;
pub mod store;

pub use artifact::{decode, encode, ModelArtifact, ModelArtifactRef, ARTIFACT_MAGIC};
pub use handle::ModelHandle;
pub use store::ModelStore;
