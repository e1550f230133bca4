use chrono::{DateTime, Utc};
use gigapdf_protocol::UploadStatus;

use crate::progress::progress_percent;

/// Progress and outcome of one upload.
///
/// Owned by the orchestrator driving the upload; everybody else sees
/// snapshots. `progress_percent` only ever grows within a session.
#[derive(Debug, Clone, Default)]
pub struct UploadSession {
    id: String,
    status: UploadStatus,
    filename: String,
    total_bytes: u64,
    total_chunks: u32,
    uploaded_chunks: u32,
    progress_percent: u8,
    summary: Option<String>,
    error: Option<String>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl UploadSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all counters and enters `Uploading` under a fresh session id.
    pub fn start(&mut self, filename: &str, total_bytes: u64, total_chunks: u32) {
        *self = Self {
            id: uuid::Uuid::new_v4().to_string(),
            status: UploadStatus::Uploading,
            filename: filename.to_string(),
            total_bytes,
            total_chunks,
            started_at: Some(Utc::now()),
            ..Self::default()
        };
    }

    /// Counts one acknowledged chunk and returns the new percentage.
    pub fn record_chunk(&mut self) -> u8 {
        self.uploaded_chunks = (self.uploaded_chunks + 1).min(self.total_chunks);
        let percent = progress_percent(self.uploaded_chunks, self.total_chunks);
        self.progress_percent = self.progress_percent.max(percent);
        self.progress_percent
    }

    /// Marks the session as completed with the summary that was delivered.
    pub fn complete(&mut self, summary: &str) {
        self.status = UploadStatus::Completed;
        self.summary = Some(summary.to_string());
        self.finished_at = Some(Utc::now());
    }

    /// Marks the session as failed. Progress stays at its last value.
    pub fn fail(&mut self, err: &str) {
        self.status = UploadStatus::Failed;
        self.error = Some(err.to_string());
        self.finished_at = Some(Utc::now());
    }

    /// Marks the session as cancelled by the caller.
    pub fn cancel(&mut self) {
        self.status = UploadStatus::Cancelled;
        self.error = Some("cancelled".into());
        self.finished_at = Some(Utc::now());
    }

    /// Returns `true` while chunks are being sent.
    pub fn is_active(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Session id (empty for a session that never started).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn total_chunks(&self) -> u32 {
        self.total_chunks
    }

    pub fn uploaded_chunks(&self) -> u32 {
        self.uploaded_chunks
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    /// Summary delivered on completion. Never set for failed sessions.
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let session = UploadSession::new();
        assert_eq!(session.status(), UploadStatus::Idle);
        assert!(!session.is_active());
        assert_eq!(session.progress_percent(), 0);
        assert!(session.id().is_empty());
    }

    #[test]
    fn start_sets_uploading() {
        let mut session = UploadSession::new();
        session.start("a.pdf", 100, 4);
        assert_eq!(session.status(), UploadStatus::Uploading);
        assert!(session.is_active());
        assert_eq!(session.filename(), "a.pdf");
        assert_eq!(session.total_chunks(), 4);
        assert!(!session.id().is_empty());
        assert!(session.started_at().is_some());
    }

    #[test]
    fn record_chunk_updates_percent() {
        let mut session = UploadSession::new();
        session.start("a.pdf", 100, 4);
        assert_eq!(session.record_chunk(), 25);
        assert_eq!(session.record_chunk(), 50);
        assert_eq!(session.uploaded_chunks(), 2);
        assert_eq!(session.record_chunk(), 75);
        assert_eq!(session.record_chunk(), 100);
        assert_eq!(session.record_chunk(), 100);
        assert_eq!(session.uploaded_chunks(), 4);
    }

    #[test]
    fn complete_stores_summary() {
        let mut session = UploadSession::new();
        session.start("a.pdf", 10, 1);
        session.record_chunk();
        session.complete("<p>done</p>");
        assert_eq!(session.status(), UploadStatus::Completed);
        assert_eq!(session.summary(), Some("<p>done</p>"));
        assert!(session.finished_at().is_some());
        assert!(!session.is_active());
    }

    #[test]
    fn fail_keeps_last_progress() {
        let mut session = UploadSession::new();
        session.start("a.pdf", 100, 4);
        session.record_chunk();
        session.fail("connection reset");
        assert_eq!(session.status(), UploadStatus::Failed);
        assert_eq!(session.progress_percent(), 25);
        assert_eq!(session.error(), Some("connection reset"));
        assert!(session.summary().is_none());
    }

    #[test]
    fn cancel_marks_cancelled() {
        let mut session = UploadSession::new();
        session.start("a.pdf", 100, 4);
        session.cancel();
        assert_eq!(session.status(), UploadStatus::Cancelled);
        assert!(!session.is_active());
    }

    #[test]
    fn restart_resets_previous_outcome() {
        let mut session = UploadSession::new();
        session.start("a.pdf", 10, 1);
        session.record_chunk();
        session.complete("old");
        let old_id = session.id().to_string();

        session.start("b.pdf", 20, 2);
        assert_eq!(session.uploaded_chunks(), 0);
        assert_eq!(session.progress_percent(), 0);
        assert!(session.summary().is_none());
        assert!(session.error().is_none());
        assert!(session.finished_at().is_none());
        assert_ne!(session.id(), old_id);
    }
}
