use crate::TransferError;

/// One contiguous byte range of the source file, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    /// 0-based chunk position.
    pub index: u32,
    /// Number of chunks in the plan this range belongs to.
    pub total_chunks: u32,
    /// First byte offset (inclusive).
    pub start: u64,
    /// Last byte offset (exclusive).
    pub end: u64,
}

impl ChunkRange {
    /// Length of the range in bytes.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Returns `true` for the zero-length chunk of an empty file.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this is the last range of its plan.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total_chunks
    }
}

/// Ordered, gap-free partition of `[0, total_length)` into chunk ranges.
///
/// Ranges are derived on demand, so a plan costs the same memory regardless
/// of how many chunks it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    total_length: u64,
    chunk_size: u64,
    total_chunks: u32,
}

/// Splits `total_length` bytes into chunks of at most `chunk_size` bytes.
///
/// An empty file still yields one zero-length chunk, so every upload makes
/// at least one request. Fails with [`TransferError::InvalidArgument`] on a
/// zero chunk size or when the chunk count does not fit the wire's 32-bit
/// chunk index.
pub fn plan(total_length: u64, chunk_size: u64) -> Result<ChunkPlan, TransferError> {
    if chunk_size == 0 {
        return Err(TransferError::InvalidArgument(
            "chunk size must be positive".into(),
        ));
    }

    let chunks = total_length.div_ceil(chunk_size).max(1);
    let total_chunks = u32::try_from(chunks).map_err(|_| {
        TransferError::InvalidArgument(format!(
            "{total_length} bytes in chunks of {chunk_size} needs {chunks} chunks"
        ))
    })?;

    Ok(ChunkPlan {
        total_length,
        chunk_size,
        total_chunks,
    })
}

impl ChunkPlan {
    /// Number of chunks (at least 1).
    pub fn total_chunks(&self) -> u32 {
        self.total_chunks
    }

    /// Total bytes covered by the plan.
    pub fn total_length(&self) -> u64 {
        self.total_length
    }

    /// Configured maximum chunk size.
    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Returns the range for chunk `index`, or `None` past the end.
    pub fn get(&self, index: u32) -> Option<ChunkRange> {
        if index >= self.total_chunks {
            return None;
        }
        let start = (u64::from(index) * self.chunk_size).min(self.total_length);
        let end = start.saturating_add(self.chunk_size).min(self.total_length);
        Some(ChunkRange {
            index,
            total_chunks: self.total_chunks,
            start,
            end,
        })
    }

    /// Iterates the ranges in transmission order.
    pub fn iter(&self) -> impl Iterator<Item = ChunkRange> + '_ {
        (0..self.total_chunks).filter_map(move |i| self.get(i))
    }
}
