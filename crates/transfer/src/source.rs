use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::TransferError;
use crate::plan::ChunkRange;

/// Read-only handle to the file being uploaded.
///
/// The length is captured when the handle is created; chunks are read
/// range-by-range so a multi-gigabyte file is never held in memory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    len: u64,
    backing: Backing,
}

#[derive(Debug, Clone)]
enum Backing {
    Disk(PathBuf),
    Memory(Arc<[u8]>),
}

impl SourceFile {
    /// Opens a file on disk. The display name is the path's final component.
    pub fn open(path: &Path) -> Result<Self, TransferError> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(TransferError::InvalidArgument(format!(
                "not a regular file: {}",
                path.display()
            )));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            name,
            len: metadata.len(),
            backing: Backing::Disk(path.to_path_buf()),
        })
    }

    /// Wraps an in-memory buffer.
    pub fn from_bytes(name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        let data = data.into();
        Self {
            name: name.into(),
            len: data.len() as u64,
            backing: Backing::Memory(data),
        }
    }

    /// Display name sent as `filename`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total size in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns `true` for a zero-byte file.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Path on disk, if the source is file-backed.
    pub fn path(&self) -> Option<&Path> {
        match &self.backing {
            Backing::Disk(p) => Some(p),
            Backing::Memory(_) => None,
        }
    }

    /// Reads the bytes of one chunk.
    pub async fn read_range(&self, range: &ChunkRange) -> Result<Vec<u8>, TransferError> {
        if range.end > self.len || range.start > range.end {
            return Err(TransferError::InvalidArgument(format!(
                "range {}..{} outside file of {} bytes",
                range.start, range.end, self.len
            )));
        }

        match &self.backing {
            Backing::Memory(data) => Ok(data[range.start as usize..range.end as usize].to_vec()),
            Backing::Disk(path) => {
                let mut buf = vec![0u8; range.len() as usize];
                if buf.is_empty() {
                    return Ok(buf);
                }
                let mut file = tokio::fs::File::open(path).await?;
                file.seek(SeekFrom::Start(range.start)).await?;
                file.read_exact(&mut buf).await?;
                Ok(buf)
            }
        }
    }
}
