use std::time::Duration;

/// Multipart field carrying the chunk bytes.
pub const FIELD_FILE: &str = "file";

/// Multipart field carrying the 0-based chunk index.
pub const FIELD_CHUNK_INDEX: &str = "chunkIndex";

/// Multipart field carrying the total number of chunks for the file.
pub const FIELD_TOTAL_CHUNKS: &str = "totalChunks";

/// Multipart field carrying the original file name.
pub const FIELD_FILENAME: &str = "filename";

/// Default chunk size: 5 MiB.
pub const DEFAULT_CHUNK_SIZE: u64 = 5 * 1024 * 1024;

/// Default upper bound for accepted files: 5 GiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024 * 1024;

/// The only MIME type the service accepts.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// File extension matching [`PDF_MIME_TYPE`].
pub const PDF_EXTENSION: &str = "pdf";

/// Default upload endpoint of a locally running service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/upload-pdf-chunk";

/// Path segment of the server-side progress endpoint (`GET /progress/{filename}`).
pub const PROGRESS_SEGMENT: &str = "progress";

/// Timeout for a single chunk request.
///
/// The final chunk blocks until the server has parsed and summarized the
/// whole document, so this is far above what a 5 MiB body alone needs.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Shown instead of an empty render when the final response has no summary.
pub const NO_SUMMARY_PLACEHOLDER: &str = "<p>No summary generated.</p>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_limits() {
        assert_eq!(DEFAULT_CHUNK_SIZE, 5_242_880);
        assert_eq!(DEFAULT_MAX_FILE_SIZE, 5_368_709_120);
        assert_eq!(DEFAULT_MAX_FILE_SIZE % DEFAULT_CHUNK_SIZE, 0);
    }
}
