use serde::{Deserialize, Serialize};

/// Body of the service's answer to a chunk POST.
///
/// Intermediate chunks are acknowledged with `message` + `filename`; the
/// final chunk's answer carries the processing result, most importantly
/// `summary_html`. Keys this client does not model are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ServerResponse {
    /// Returns the summary markup if the response carries a non-blank one.
    pub fn summary(&self) -> Option<&str> {
        self.summary_html
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

/// Server-side progress record returned by `GET /progress/{filename}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerProgress {
    #[serde(default)]
    pub progress_percent: u8,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_chunks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_chunks: Option<u32>,
}

impl ServerProgress {
    /// Status the service reports for names it has never seen.
    pub const NOT_FOUND: &'static str = "Not Found";

    /// Returns `true` if the service knows nothing about the file.
    pub fn is_not_found(&self) -> bool {
        self.status == Self::NOT_FOUND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_ack_has_no_summary() {
        let json = r#"{"message":"Chunk 1/3 received","filename":"uploaded_20240101_120000.pdf"}"#;
        let resp: ServerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Chunk 1/3 received"));
        assert!(resp.summary().is_none());
        assert!(resp.extra.is_empty());
    }

    #[test]
    fn final_response_keeps_unknown_keys() {
        let json = r#"{
            "filename":"report.pdf",
            "pdf_path":"uploads/report.pdf",
            "num_pages":12,
            "status":"Done",
            "summary_text":"**Intro**",
            "summary_html":"<p>**Intro**</p>",
            "processing_time":3.5,
            "indexed_sections":{}
        }"#;
        let resp: ServerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.summary(), Some("<p>**Intro**</p>"));
        assert_eq!(resp.num_pages, Some(12));
        assert!(resp.extra.contains_key("pdf_path"));
        assert!(resp.extra.contains_key("indexed_sections"));
    }

    #[test]
    fn blank_summary_counts_as_missing() {
        let resp: ServerResponse = serde_json::from_str(r#"{"summary_html":"  \n"}"#).unwrap();
        assert!(resp.summary().is_none());
    }

    #[test]
    fn unknown_file_progress() {
        let json = r#"{"progress_percent":0,"status":"Not Found","summary":""}"#;
        let p: ServerProgress = serde_json::from_str(json).unwrap();
        assert!(p.is_not_found());
        assert_eq!(p.progress_percent, 0);
    }

    #[test]
    fn tracked_file_progress() {
        let json = r#"{"uploaded_chunks":2,"total_chunks":4,"progress_percent":50,"status":"Uploading...","summary":""}"#;
        let p: ServerProgress = serde_json::from_str(json).unwrap();
        assert!(!p.is_not_found());
        assert_eq!(p.uploaded_chunks, Some(2));
        assert_eq!(p.total_chunks, Some(4));
    }
}
