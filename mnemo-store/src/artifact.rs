//! Artifact wire format.
//!
//! ```text
//! "MNMO" | format version (u32 LE) | blake3(payload) (32 bytes) | payload
//! ```
//! The payload is zstd-compressed JSON of [`ModelArtifact`], written from a
//! borrowed [`ModelArtifactRef`].

use std::io::Read;

use chrono::{DateTime, Utc};
use mnemo_classify::TrainedModel;
use mnemo_core::constants::{ARTIFACT_FORMAT_ID, ARTIFACT_FORMAT_VERSION};
use mnemo_core::errors::StoreError;
use serde::{Deserialize, Serialize};

pub const ARTIFACT_MAGIC: &[u8; 4] = b"MNMO";
const HEADER_LEN: usize = 4 + 4 + 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_id: String,
    pub format_version: u32,
    pub created_at: DateTime<Utc>,
    pub crate_version: String,
    pub model: TrainedModel,
}

/// Borrowing view of [`ModelArtifact`] used when writing.
#[derive(Debug, Serialize)]
pub struct ModelArtifactRef<'a> {
    pub format_id: &'static str,
    pub format_version: u32,
    pub created_at: DateTime<Utc>,
    pub crate_version: &'static str,
    pub model: &'a TrainedModel,
}

impl<'a> ModelArtifactRef<'a> {
    pub fn new(model: &'a TrainedModel) -> Self {
        Self {
            format_id: ARTIFACT_FORMAT_ID,
            format_version: ARTIFACT_FORMAT_VERSION,
            created_at: Utc::now(),
            crate_version: mnemo_core::constants::VERSION,
            model,
        }
    }
}

fn corruption(details: impl Into<String>) -> StoreError {
    StoreError::Corruption {
        details: details.into(),
    }
}

pub fn encode(
    artifact: &ModelArtifactRef<'_>,
    compression_level: i32,
) -> Result<Vec<u8>, StoreError> {
    let json = serde_json::to_vec(artifact)
        .map_err(|e| corruption(format!("cannot serialize model: {e}")))?;
    let payload = zstd::encode_all(json.as_slice(), compression_level)
        .map_err(|e| corruption(format!("cannot compress model: {e}")))?;
    let checksum = blake3::hash(&payload);

    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(ARTIFACT_MAGIC);
    out.extend_from_slice(&ARTIFACT_FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(checksum.as_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decode and verify an artifact. Any structural problem is `Corruption`.
pub fn decode(bytes: &[u8]) -> Result<ModelArtifact, StoreError> {
    if bytes.len() < HEADER_LEN {
        return Err(corruption(format!(
            "artifact truncated: {} bytes, header needs {HEADER_LEN}",
            bytes.len()
        )));
    }
    if &bytes[..4] != ARTIFACT_MAGIC {
        return Err(corruption("bad magic, not a model artifact"));
    }
    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version != ARTIFACT_FORMAT_VERSION {
        return Err(corruption(format!(
            "unsupported format version {version}, expected {ARTIFACT_FORMAT_VERSION}"
        )));
    }
    let stored: [u8; 32] = bytes[8..HEADER_LEN]
        .try_into()
        .map_err(|_| corruption("checksum truncated"))?;
    let payload = &bytes[HEADER_LEN..];
    if blake3::hash(payload) != blake3::Hash::from(stored) {
        return Err(corruption("checksum mismatch"));
    }

    let mut json = Vec::new();
    zstd::Decoder::new(payload)
        .and_then(|mut d| d.read_to_end(&mut json))
        .map_err(|e| corruption(format!("cannot decompress payload: {e}")))?;
    let artifact: ModelArtifact = serde_json::from_slice(&json)
        .map_err(|e| corruption(format!("cannot parse payload: {e}")))?;

    if artifact.format_id != ARTIFACT_FORMAT_ID || artifact.format_version != version {
        return Err(corruption(format!(
            "payload identifies as {} v{}",
            artifact.format_id, artifact.format_version
        )));
    }
    Ok(artifact)
}
