/// One chunk as it goes over the wire.
///
/// Built fresh for every request and dropped once the request finishes.
/// Field names on the wire are the `FIELD_*` constants in
/// [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkEnvelope {
    /// Raw chunk bytes (`file`).
    pub data: Vec<u8>,
    /// 0-based position of this chunk (`chunkIndex`).
    pub chunk_index: u32,
    /// Number of chunks the file was split into (`totalChunks`).
    pub total_chunks: u32,
    /// Original file name (`filename`).
    pub filename: String,
}

impl ChunkEnvelope {
    /// Creates an envelope for one chunk.
    pub fn new(
        data: Vec<u8>,
        chunk_index: u32,
        total_chunks: u32,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            data,
            chunk_index,
            total_chunks,
            filename: filename.into(),
        }
    }

    /// Returns `true` if this is the chunk that triggers server-side processing.
    pub fn is_final(&self) -> bool {
        self.chunk_index + 1 == self.total_chunks
    }

    /// Payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` for the zero-length chunk of an empty file.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_chunk_detection() {
        let first = ChunkEnvelope::new(vec![1, 2], 0, 3, "a.pdf");
        let last = ChunkEnvelope::new(vec![3], 2, 3, "a.pdf");
        assert!(!first.is_final());
        assert!(last.is_final());
    }

    #[test]
    fn single_empty_chunk_is_final() {
        let env = ChunkEnvelope::new(Vec::new(), 0, 1, "empty.pdf");
        assert!(env.is_final());
        assert!(env.is_empty());
        assert_eq!(env.len(), 0);
    }
}
