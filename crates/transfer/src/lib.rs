//! Client-side transfer primitives for chunked PDF uploads.
//!
//! Everything here is transport-agnostic: planning byte ranges, reading them
//! from the source, deciding whether a file may be uploaded at all, and the
//! bookkeeping of a single upload session.

mod plan;
mod progress;
mod source;
mod types;
mod validation;

pub use plan::{ChunkPlan, ChunkRange, plan};
pub use progress::{Phase, SUMMARIZING_THRESHOLD, phase_message, progress_percent};
pub use source::SourceFile;
pub use types::UploadSession;
pub use validation::{validate_filename, validate_source};

/// Errors produced by the transfer crate.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("file too large: {size} bytes exceeds limit of {max} bytes")]
    FileTooLarge { size: u64, max: u64 },

    #[error("unsupported file type: {name} (expected {expected})")]
    UnsupportedType { name: String, expected: String },

    #[error("invalid file name: {0}")]
    InvalidName(String),
}

impl TransferError {
    /// Returns `true` for errors that mean "this file may not be uploaded",
    /// as opposed to a failure while reading or planning.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::FileTooLarge { .. } | Self::UnsupportedType { .. } | Self::InvalidName(_)
        )
    }
}
