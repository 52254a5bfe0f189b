//! Configuration for the Mnemo workspace.
//! TOML-based: every section is optional and falls back to `defaults`.

pub mod blending_config;
pub mod classifier_config;
pub mod confidence_config;
pub mod defaults;
pub mod feature_config;
pub mod observability_config;
pub mod store_config;
pub mod training_config;
pub mod validation;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use blending_config::BlendingConfig;
pub use classifier_config::ClassifierConfig;
pub use confidence_config::ConfidenceConfig;
pub use feature_config::FeatureConfig;
pub use observability_config::ObservabilityConfig;
pub use store_config::StoreConfig;
pub use training_config::{AgreementMetric, TrainingConfig};
pub use validation::ConfigViolation;

use crate::errors::{MnemoError, MnemoResult};

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MnemoConfig {
    pub features: FeatureConfig,
    pub classifier: ClassifierConfig,
    pub training: TrainingConfig,
    pub blending: BlendingConfig,
    pub confidence: ConfidenceConfig,
    pub store: StoreConfig,
    pub observability: ObservabilityConfig,
}

impl MnemoConfig {
    /// Parse and validate a configuration from a TOML string.
    /// Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> MnemoResult<Self> {
        let config: MnemoConfig =
            toml::from_str(toml_str).map_err(|e| MnemoError::ConfigError {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> MnemoResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MnemoError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|err| match err {
            MnemoError::ConfigError { reason } => MnemoError::ConfigError {
                reason: format!("{}: {reason}", path.display()),
            },
            other => other,
        })
    }

    /// Reject out-of-range values. Reports every violation at once.
    pub fn validate(&self) -> MnemoResult<()> {
        let violations = validation::validate(self);
        if violations.is_empty() {
            return Ok(());
        }
        let reason = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(MnemoError::ConfigError { reason })
    }
}
