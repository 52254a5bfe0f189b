//! File-backed model store with atomic writes.

use std::io::Write;
use std::path::{Path, PathBuf};

use mnemo_classify::TrainedModel;
use mnemo_core::config::FeatureConfig;
use mnemo_core::errors::StoreError;
use mnemo_observability::{events, store_span};
use tempfile::NamedTempFile;

use crate::artifact::{self, ModelArtifactRef};

pub struct ModelStore {
    path: PathBuf,
    compression_level: i32,
}

fn io_error(path: &Path, err: impl std::fmt::Display) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>, compression_level: i32) -> Self {
        Self {
            path: path.into(),
            compression_level,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write the model atomically: temp file in the target directory, fsync,
    /// rename over the destination. A crash leaves the old artifact intact.
    pub fn save(&self, model: &TrainedModel) -> Result<(), StoreError> {
        let span = store_span!("save", self.path.display());
        let _guard = span.enter();
        model.validate()?;
        let bytes = artifact::encode(&ModelArtifactRef::new(model), self.compression_level)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;
        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| io_error(&dir, e))?;
        tmp.write_all(&bytes).map_err(|e| io_error(tmp.path(), e))?;
        tmp.as_file().sync_all().map_err(|e| io_error(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| io_error(&self.path, e.error))?;

        events::model_saved(
            &self.path.display().to_string(),
            bytes.len(),
            model.categories.len(),
        );
        Ok(())
    }

    /// Load and verify. The stored feature configuration must equal
    /// `expected` and every classifier must match the vocabulary dimension.
    pub fn load(&self, expected: &FeatureConfig) -> Result<TrainedModel, StoreError> {
        let span = store_span!("load", self.path.display());
        let _guard = span.enter();
        let bytes = std::fs::read(&self.path).map_err(|e| io_error(&self.path, e))?;
        let artifact = artifact::decode(&bytes).inspect_err(|err| {
            events::artifact_rejected(&self.path.display().to_string(), &err.to_string());
        })?;
        let model = artifact.model;

        if model.extractor.config() != expected {
            return Err(StoreError::VocabularyMismatch {
                details: format!(
                    "artifact was trained with {:?}, current configuration is {:?}",
                    model.extractor.config(),
                    expected
                ),
            });
        }
        model.validate()?;

        events::model_loaded(
            &self.path.display().to_string(),
            model.dimension(),
            &model.trained_at.to_rfc3339(),
        );
        Ok(model)
    }
}
