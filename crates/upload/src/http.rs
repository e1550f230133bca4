//! HTTP chunk transmitter.
//!
//! Async client using `reqwest` multipart bodies against the service's
//! chunk endpoint, plus the read-only progress probe.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use gigapdf_protocol::constants::{
    FIELD_CHUNK_INDEX, FIELD_FILE, FIELD_FILENAME, FIELD_TOTAL_CHUNKS, PDF_MIME_TYPE,
    PROGRESS_SEGMENT,
};
use gigapdf_protocol::{ChunkEnvelope, ServerProgress, ServerResponse};
use reqwest::Url;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::error::TransmitError;
use crate::transmitter::ChunkTransmitter;

/// Longest error body kept in [`TransmitError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Sends chunks as `multipart/form-data` POSTs.
#[derive(Debug, Clone)]
pub struct HttpTransmitter {
    http: reqwest::Client,
}

impl HttpTransmitter {
    /// Creates a transmitter whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransmitError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// Creates a transmitter on top of an existing client.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    async fn post_chunk(
        &self,
        endpoint: &Url,
        envelope: ChunkEnvelope,
    ) -> Result<ServerResponse, TransmitError> {
        let ChunkEnvelope {
            data,
            chunk_index,
            total_chunks,
            filename,
        } = envelope;

        let file_part = Part::bytes(data)
            .file_name(filename.clone())
            .mime_str(PDF_MIME_TYPE)?;
        let form = Form::new()
            .part(FIELD_FILE, file_part)
            .text(FIELD_CHUNK_INDEX, chunk_index.to_string())
            .text(FIELD_TOTAL_CHUNKS, total_chunks.to_string())
            .text(FIELD_FILENAME, filename);

        let resp = self.http.post(endpoint.clone()).multipart(form).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TransmitError::Status {
                status: status.as_u16(),
                body: truncate(body),
            });
        }

        let body = resp.bytes().await?;
        debug!(
            chunk = chunk_index,
            status = status.as_u16(),
            len = body.len(),
            "chunk acknowledged"
        );
        decode_response(&body)
    }

    /// Asks the service how far it got with `filename`.
    ///
    /// The service answers unknown names with status `"Not Found"` rather
    /// than an HTTP error; see [`ServerProgress::is_not_found`].
    pub async fn progress(
        &self,
        endpoint: &Url,
        filename: &str,
    ) -> Result<ServerProgress, TransmitError> {
        let url = progress_url(endpoint, filename)?;
        let resp = self.http.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TransmitError::Status {
                status: status.as_u16(),
                body: truncate(body),
            });
        }

        Ok(serde_json::from_slice(&resp.bytes().await?)?)
    }
}

impl Default for HttpTransmitter {
    fn default() -> Self {
        Self::with_client(reqwest::Client::new())
    }
}

impl ChunkTransmitter for HttpTransmitter {
    fn send<'a>(
        &'a self,
        endpoint: &'a Url,
        envelope: ChunkEnvelope,
    ) -> Pin<Box<dyn Future<Output = Result<ServerResponse, TransmitError>> + Send + 'a>> {
        Box::pin(self.post_chunk(endpoint, envelope))
    }
}

/// Derives the progress URL for `filename` from the chunk endpoint.
///
/// The progress route is a sibling of the chunk route:
/// `http://host/upload-pdf-chunk` → `http://host/progress/{filename}`.
pub fn progress_url(endpoint: &Url, filename: &str) -> Result<Url, TransmitError> {
    let mut url = endpoint.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| TransmitError::Endpoint(format!("cannot be a base URL: {endpoint}")))?
        .pop_if_empty()
        .pop()
        .push(PROGRESS_SEGMENT)
        .push(filename);
    Ok(url)
}

/// Decodes a chunk response; an empty body is an acknowledgement without data.
fn decode_response(body: &[u8]) -> Result<ServerResponse, TransmitError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ServerResponse::default());
    }
    Ok(serde_json::from_slice(body)?)
}

fn truncate(mut body: String) -> String {
    if body.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push_str("...");
    }
    body
}
