//! Sequential chunked upload of a PDF to the remote processing service.
//!
//! The [`UploadOrchestrator`] plans the file into chunks, sends them one at
//! a time through a [`ChunkTransmitter`], reports progress through
//! [`UploadCallbacks`], and hands the summary from the final response to the
//! caller. The production transmitter is [`HttpTransmitter`]; tests plug in
//! their own.
//!
//! # Pipeline
//!
//! 1. **Validate**: a file must be selected, be a PDF, and fit the size limit
//! 2. **Plan**: split the file into fixed-size byte ranges
//! 3. **Upload**: POST each range as multipart, strictly in order
//! 4. **Complete**: deliver `summary_html` from the last response

pub mod error;
pub mod http;
pub mod orchestrator;
pub mod transmitter;
pub mod types;

// Re-export primary types for convenience.
pub use error::{TransmitError, UploadError};
pub use http::{HttpTransmitter, progress_url};
pub use orchestrator::UploadOrchestrator;
pub use transmitter::ChunkTransmitter;
pub use types::{UploadCallbacks, UploadConfig};

pub use reqwest::Url;
