fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use gigapdf_protocol::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_FILE_SIZE};
    use gigapdf_protocol::{ServerProgress, ServerResponse, UploadOptions};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Normalizes JSON numbers so that `65` and `65.0` compare as equal.
    fn normalize_value(v: &serde_json::Value) -> serde_json::Value {
        match v {
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => serde_json::json!(f),
                None => v.clone(),
            },
            serde_json::Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), normalize_value(v)))
                    .collect(),
            ),
            serde_json::Value::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(normalize_value).collect())
            }
            _ => v.clone(),
        }
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and compares
    /// the JSON values (order-independent, float-normalized comparison).
    fn roundtrip_test<T>(name: &str) -> T
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));

        assert_eq!(
            normalize_value(&fixture),
            normalize_value(&reserialized),
            "roundtrip mismatch for {name}:\n  server: {fixture}\n  client: {reserialized}"
        );
        parsed
    }

    #[test]
    fn fixture_chunk_ack() {
        let ack: ServerResponse = roundtrip_test("chunk_ack.json");
        assert_eq!(ack.message.as_deref(), Some("Chunk 1/3 received"));
        assert_eq!(ack.filename.as_deref(), Some("annual report.pdf"));
        assert!(ack.summary().is_none());
        assert!(ack.extra.is_empty());
    }

    #[test]
    fn fixture_final_response() {
        let resp: ServerResponse = roundtrip_test("final_response.json");
        assert_eq!(
            resp.summary(),
            Some("**Overview**\nRevenue grew in every region.")
        );
        assert_eq!(resp.filename.as_deref(), Some("uploaded_20250214_101530.pdf"));
        assert_eq!(resp.num_pages, Some(4));
        assert_eq!(resp.status.as_deref(), Some("Done"));
        assert_eq!(resp.processing_time, Some(83.42));

        // Processing details the client does not model survive a round trip.
        assert_eq!(resp.extra["pdf_path"], "uploads/uploaded_20250214_101530.pdf");
        assert_eq!(resp.extra["indexed_sections"]["4"], "Financial Results");

        let pages = resp.extra["extracted_pages"].as_array().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1]["page"], 2);
        assert!(pages[0]["charts"][0]["chart_data"].is_null());
        assert_eq!(pages[1]["charts"][0]["chart_data"][2], "21.75");
    }

    #[test]
    fn fixture_progress() {
        let progress: ServerProgress = roundtrip_test("progress.json");
        assert_eq!(progress.progress_percent, 67);
        assert_eq!(progress.uploaded_chunks, Some(2));
        assert!(!progress.is_not_found());
    }

    #[test]
    fn fixture_progress_not_found() {
        let progress: ServerProgress = roundtrip_test("progress_not_found.json");
        assert!(progress.is_not_found());
        assert_eq!(progress.progress_percent, 0);
        assert!(progress.total_chunks.is_none());
    }

    #[test]
    fn fixture_upload_options() {
        let options: UploadOptions = roundtrip_test("upload_options.json");
        assert_eq!(options, UploadOptions::default());
        assert_eq!(options.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(options.max_file_size, DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn upload_options_defaults_fill_missing_keys() {
        let options: UploadOptions = serde_json::from_str(r#"{"chunkSize": 1024}"#).unwrap();
        assert_eq!(options.chunk_size, 1024);
        assert_eq!(options.accepted_mime_type, "application/pdf");
    }

    #[test]
    fn ack_with_unknown_keys_is_accepted() {
        let resp: ServerResponse =
            serde_json::from_str(r#"{"message": "ok", "chunk": 4, "debug": {"a": 1}}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("ok"));
        assert_eq!(resp.extra.len(), 2);
    }
}
