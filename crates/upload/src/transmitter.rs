//! Chunk transmitter trait.
//!
//! The orchestrator only ever talks to the network through this trait,
//! which keeps the upload loop testable with in-process mocks.

use std::future::Future;
use std::pin::Pin;

use gigapdf_protocol::{ChunkEnvelope, ServerResponse};
use reqwest::Url;

use crate::error::TransmitError;

/// Sends one chunk to the processing service.
///
/// Implementations perform exactly one request per call and never retry;
/// retry policy belongs to the caller.
pub trait ChunkTransmitter: Send + Sync {
    /// Sends `envelope` to `endpoint` and returns the decoded response.
    fn send<'a>(
        &'a self,
        endpoint: &'a Url,
        envelope: ChunkEnvelope,
    ) -> Pin<Box<dyn Future<Output = Result<ServerResponse, TransmitError>> + Send + 'a>>;
}
