//! Upload error types.

use gigapdf_transfer::TransferError;

/// Errors from a single chunk request.
#[derive(Debug, thiserror::Error)]
pub enum TransmitError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(String),
}

/// Errors that end an upload.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("file rejected: {0}")]
    FileRejected(#[source] TransferError),

    #[error("an upload is already in progress")]
    AlreadyInProgress,

    #[error("chunk {chunk_index} of {total_chunks} failed: {source}")]
    Transport {
        chunk_index: u32,
        total_chunks: u32,
        #[source]
        source: TransmitError,
    },

    #[error("cancelled")]
    Cancelled,

    #[error("transfer error: {0}")]
    Transfer(#[from] TransferError),
}

impl UploadError {
    /// Returns the failing chunk index for transport errors.
    pub fn chunk_index(&self) -> Option<u32> {
        match self {
            Self::Transport { chunk_index, .. } => Some(*chunk_index),
            _ => None,
        }
    }
}
