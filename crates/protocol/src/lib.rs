//! Wire contract between the GigaPDF client and the remote processing service.
//!
//! The service accepts a PDF as a sequence of `multipart/form-data` POSTs,
//! one per chunk, and answers the final chunk with the generated summary.

pub mod constants;
pub mod envelope;
pub mod messages;
pub mod types;

// Re-export primary types for convenience.
pub use envelope::ChunkEnvelope;
pub use messages::{ServerProgress, ServerResponse};
pub use types::{UploadOptions, UploadStatus};
