/// Mnemo system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format identifier written into every persisted model artifact.
pub const ARTIFACT_FORMAT_ID: &str = "mnemo-model";

/// Current model artifact format version. Bump on any incompatible payload change.
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "MNEMO_LOG";
