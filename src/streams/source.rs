use super::memory_stream::MemorySeekableStream;
use super::seekable_stream::{LocalSeekableStream, SeekableStream};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Opens independent streams over the same underlying bytes.
///
/// Every call to `open` yields a stream with its own cursor, so concurrent
/// scans never share a read position.
#[async_trait]
pub trait StreamSource: Send + Sync + 'static {
    type Stream: SeekableStream + 'static;

    async fn open(&self) -> io::Result<Self::Stream>;
}

/// A file on the local file system
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StreamSource for FileSource {
    type Stream = LocalSeekableStream;

    async fn open(&self) -> io::Result<Self::Stream> {
        LocalSeekableStream::open(&self.path).await
    }
}

/// Shared in-memory bytes; counts reads across every stream it opened
#[derive(Debug, Clone)]
pub struct MemorySource {
    data: Arc<[u8]>,
    reads: Arc<AtomicU64>,
}

impl MemorySource {
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            data: data.into(),
            reads: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Total read calls issued by all streams opened from this source.
    pub fn total_reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[async_trait]
impl StreamSource for MemorySource {
    type Stream = MemorySeekableStream;

    async fn open(&self) -> io::Result<Self::Stream> {
        Ok(MemorySeekableStream::with_counter(
            Arc::clone(&self.data),
            Arc::clone(&self.reads),
        ))
    }
}
