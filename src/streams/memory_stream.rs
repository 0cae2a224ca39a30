use super::SeekableStream;
use async_trait::async_trait;
use std::io::{self, SeekFrom};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// In-memory stream over shared bytes.
///
/// Streams created from the same `MemorySource` share one read counter, so
/// the total work done by several concurrent scans can be observed.
pub struct MemorySeekableStream {
    data: Arc<[u8]>,
    position: u64,
    reads: Arc<AtomicU64>,
}

impl MemorySeekableStream {
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        Self::with_counter(data.into(), Arc::new(AtomicU64::new(0)))
    }

    pub(crate) fn with_counter(data: Arc<[u8]>, reads: Arc<AtomicU64>) -> Self {
        Self {
            data,
            position: 0,
            reads,
        }
    }
}

#[async_trait]
impl SeekableStream for MemorySeekableStream {
    async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        let len = self.data.len() as u64;
        if self.position >= len {
            return Ok(0);
        }
        let start = self.position as usize;
        let count = buf.len().min(self.data.len() - start);
        buf[..count].copy_from_slice(&self.data[start..start + count]);
        self.position += count as u64;
        Ok(count)
    }

    async fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let len = self.data.len() as i128;
        let target = match pos {
            SeekFrom::Start(offset) => offset as i128,
            SeekFrom::End(delta) => len + delta as i128,
            SeekFrom::Current(delta) => self.position as i128 + delta as i128,
        };
        if target < 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "invalid seek to a negative position",
            ));
        }
        self.position = target as u64;
        Ok(self.position)
    }

    fn read_count(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }
}
