//! Configuration and callback types for an upload run.

use gigapdf_protocol::UploadOptions;
use reqwest::Url;

/// Callback invoked with the upload percentage after each acknowledged chunk.
pub type ProgressCallback = Box<dyn Fn(u8) + Send + Sync>;

/// Callback invoked once with the summary markup of a completed upload.
pub type CompleteCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Callback invoked once with a user-facing message when an upload fails.
pub type ErrorCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Where and how to upload.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Chunk upload endpoint (`POST`).
    pub endpoint: Url,
    /// Chunk size and acceptance rules.
    pub options: UploadOptions,
}

impl UploadConfig {
    pub fn new(endpoint: Url, options: UploadOptions) -> Self {
        Self { endpoint, options }
    }
}

/// Presentation hooks for one upload run.
///
/// Exactly one of `on_complete` / `on_error` fires per run.
#[derive(Default)]
pub struct UploadCallbacks {
    on_progress: Option<ProgressCallback>,
    on_complete: Option<CompleteCallback>,
    on_error: Option<ErrorCallback>,
}

impl UploadCallbacks {
    /// Creates callbacks that ignore every event.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_progress(mut self, f: impl Fn(u8) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }

    pub fn on_complete(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub(crate) fn progress(&self, percent: u8) {
        if let Some(cb) = &self.on_progress {
            cb(percent);
        }
    }

    pub(crate) fn complete(&self, summary: &str) {
        if let Some(cb) = &self.on_complete {
            cb(summary);
        }
    }

    pub(crate) fn error(&self, message: &str) {
        if let Some(cb) = &self.on_error {
            cb(message);
        }
    }
}
