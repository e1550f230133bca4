use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_FILE_SIZE, PDF_MIME_TYPE};

/// Client-side acceptance and chunking options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOptions {
    /// Bytes per chunk.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u64,
    /// Largest file accepted for upload.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// MIME type a file must have to be accepted.
    #[serde(default = "default_mime_type")]
    pub accepted_mime_type: String,
}

fn default_chunk_size() -> u64 {
    DEFAULT_CHUNK_SIZE
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

fn default_mime_type() -> String {
    PDF_MIME_TYPE.into()
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            max_file_size: default_max_file_size(),
            accepted_mime_type: default_mime_type(),
        }
    }
}

/// Lifecycle of one upload session.
///
/// `Idle → Uploading → {Completed | Failed | Cancelled}`; a terminal state is
/// only left by starting a new upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadStatus {
    #[default]
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "uploading")]
    Uploading,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "failed")]
    Failed,
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl UploadStatus {
    /// Returns `true` once the session can no longer change.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }
}
