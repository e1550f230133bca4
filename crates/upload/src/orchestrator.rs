//! Upload orchestrator.
//!
//! Drives one file through the chunk plan strictly in order, owns the
//! session state, and enforces the one-upload-at-a-time policy.

use std::sync::{Arc, Mutex, RwLock};

use gigapdf_protocol::constants::NO_SUMMARY_PLACEHOLDER;
use gigapdf_protocol::{ChunkEnvelope, ServerResponse};
use gigapdf_transfer::{ChunkPlan, SourceFile, UploadSession, plan, validate_source};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::error::UploadError;
use crate::transmitter::ChunkTransmitter;
use crate::types::{UploadCallbacks, UploadConfig};

/// Uploads files chunk by chunk, one file at a time.
///
/// A second [`run`](Self::run) while one is in flight is rejected with
/// [`UploadError::AlreadyInProgress`]; the running upload is not affected.
pub struct UploadOrchestrator {
    transmitter: Arc<dyn ChunkTransmitter>,
    session: RwLock<UploadSession>,
    cancel: Mutex<CancellationToken>,
}

impl UploadOrchestrator {
    /// Creates an idle orchestrator sending through `transmitter`.
    pub fn new(transmitter: Arc<dyn ChunkTransmitter>) -> Self {
        Self {
            transmitter,
            session: RwLock::new(UploadSession::new()),
            cancel: Mutex::new(CancellationToken::new()),
        }
    }

    /// Returns a snapshot of the current (or last) session.
    pub fn session(&self) -> UploadSession {
        self.session.read().unwrap().clone()
    }

    /// Aborts the upload in flight, if any.
    ///
    /// The pending chunk request is dropped and no further chunks are sent.
    /// Only an upload that has already claimed the session is affected: a
    /// cancel while idle, or before a `run` future is first polled, is a
    /// no-op and never carries over into the next upload.
    pub fn cancel(&self) {
        self.cancel.lock().unwrap().cancel();
    }

    /// Uploads `file` and returns the summary markup from the final response.
    ///
    /// Progress and the outcome are also reported through `callbacks`:
    /// `on_progress` once per acknowledged chunk, then exactly one of
    /// `on_complete` or `on_error`.
    pub async fn run(
        &self,
        file: Option<&SourceFile>,
        config: &UploadConfig,
        callbacks: &UploadCallbacks,
    ) -> Result<String, UploadError> {
        let result = self.try_run(file, config, callbacks).await;
        match &result {
            Ok(summary) => callbacks.complete(summary),
            Err(e) => callbacks.error(&e.to_string()),
        }
        result
    }

    async fn try_run(
        &self,
        file: Option<&SourceFile>,
        config: &UploadConfig,
        callbacks: &UploadCallbacks,
    ) -> Result<String, UploadError> {
        let file = file.ok_or(UploadError::NoFileSelected)?;

        validate_source(file, &config.options).map_err(|e| {
            if e.is_rejection() {
                UploadError::FileRejected(e)
            } else {
                UploadError::Transfer(e)
            }
        })?;

        let chunk_plan = plan(file.len(), config.options.chunk_size)?;
        let (session_id, cancel) = self.begin(file, &chunk_plan)?;
        let active = ActiveRun {
            session: &self.session,
            callbacks,
            session_id: &session_id,
            armed: true,
        };

        info!(
            session = %session_id,
            file = %file.name(),
            bytes = file.len(),
            chunks = chunk_plan.total_chunks(),
            "upload started"
        );

        let outcome = self
            .upload_chunks(file, &chunk_plan, config, callbacks, &cancel, &session_id)
            .await;
        active.disarm();

        let mut session = self.session.write().unwrap();
        match &outcome {
            Ok(summary) => {
                session.complete(summary);
                info!(session = %session_id, "upload completed");
            }
            Err(UploadError::Cancelled) => {
                session.cancel();
                info!(
                    session = %session_id,
                    uploaded = session.uploaded_chunks(),
                    "upload cancelled"
                );
            }
            Err(e) => {
                session.fail(&e.to_string());
                error!(session = %session_id, error = %e, "upload failed");
            }
        }

        outcome
    }

    /// Claims the session for a new upload.
    fn begin(
        &self,
        file: &SourceFile,
        chunk_plan: &ChunkPlan,
    ) -> Result<(String, CancellationToken), UploadError> {
        let mut session = self.session.write().unwrap();
        if session.is_active() {
            return Err(UploadError::AlreadyInProgress);
        }
        session.start(file.name(), file.len(), chunk_plan.total_chunks());

        let token = CancellationToken::new();
        *self.cancel.lock().unwrap() = token.clone();
        Ok((session.id().to_string(), token))
    }

    /// Sends every chunk in plan order; the first failure ends the upload.
    async fn upload_chunks(
        &self,
        file: &SourceFile,
        chunk_plan: &ChunkPlan,
        config: &UploadConfig,
        callbacks: &UploadCallbacks,
        cancel: &CancellationToken,
        session_id: &str,
    ) -> Result<String, UploadError> {
        let total_chunks = chunk_plan.total_chunks();
        let mut last_response: Option<ServerResponse> = None;

        for range in chunk_plan.iter() {
            if cancel.is_cancelled() {
                return Err(UploadError::Cancelled);
            }

            let data = file.read_range(&range).await?;
            let envelope = ChunkEnvelope::new(data, range.index, total_chunks, file.name());

            debug!(
                session = %session_id,
                chunk = range.index,
                total = total_chunks,
                bytes = range.len(),
                "sending chunk"
            );

            let response = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(UploadError::Cancelled),
                result = self.transmitter.send(&config.endpoint, envelope) => {
                    result.map_err(|source| UploadError::Transport {
                        chunk_index: range.index,
                        total_chunks,
                        source,
                    })?
                }
            };

            let percent = self.session.write().unwrap().record_chunk();
            callbacks.progress(percent);

            // Only the final response carries the result.
            last_response = Some(response);
        }

        let summary = last_response
            .as_ref()
            .and_then(ServerResponse::summary)
            .unwrap_or(NO_SUMMARY_PLACEHOLDER);
        Ok(summary.to_string())
    }
}

/// Ends the session as cancelled if a run future is dropped mid-upload.
///
/// A caller-side timeout, `select!` or task abort can drop a run between
/// awaits; the session must still leave `Uploading` and `on_error` must
/// still fire once.
struct ActiveRun<'a> {
    session: &'a RwLock<UploadSession>,
    callbacks: &'a UploadCallbacks,
    session_id: &'a str,
    armed: bool,
}

impl ActiveRun<'_> {
    /// The run reached its own outcome; nothing to clean up.
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for ActiveRun<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let Ok(mut session) = self.session.write() else {
            return;
        };
        if !session.is_active() || session.id() != self.session_id {
            return;
        }
        session.cancel();
        warn!(
            session = %self.session_id,
            uploaded = session.uploaded_chunks(),
            "upload dropped before finishing"
        );
        drop(session);
        self.callbacks.error(&UploadError::Cancelled.to_string());
    }
}
