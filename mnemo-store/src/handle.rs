//! Shared, atomically swappable model pointer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use mnemo_classify::TrainedModel;
use mnemo_core::config::FeatureConfig;
use mnemo_core::errors::StoreError;
use tracing::info;

use crate::store::ModelStore;

/// Readers take an `Arc` snapshot and keep using it for as long as they
/// like; a swap only affects snapshots taken afterwards.
pub struct ModelHandle {
    current: RwLock<Arc<TrainedModel>>,
    version: AtomicU64,
}

impl ModelHandle {
    pub fn new(model: TrainedModel) -> Self {
        Self {
            current: RwLock::new(Arc::new(model)),
            version: AtomicU64::new(1),
        }
    }

    pub fn snapshot(&self) -> Arc<TrainedModel> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the model wholesale. Returns the new version number.
    pub fn swap(&self, model: TrainedModel) -> u64 {
        let next = Arc::new(model);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        info!(version, "model swapped");
        version
    }

    /// Load from `store` and swap only if loading fully succeeds.
    pub fn reload_from(&self, store: &ModelStore, expected: &FeatureConfig) -> Result<u64, StoreError> {
        let model = store.load(expected)?;
        Ok(self.swap(model))
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }
}
