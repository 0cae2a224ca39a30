use async_trait::async_trait;
use std::io::{self, SeekFrom};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

/// A seekable byte stream that the duration readers scan.
#[async_trait]
pub trait SeekableStream: Send {
    async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    async fn seek(&mut self, pos: SeekFrom) -> io::Result<u64>;

    /// Fill `buf` from the current position. Returns fewer bytes than
    /// `buf.len()` only at end of stream.
    async fn read_all(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.read(&mut buf[filled..]).await {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    /// Number of read calls issued against this stream.
    fn read_count(&self) -> u64 {
        0
    }
}

/// Local file wrapper
pub struct LocalSeekableStream {
    file: File,
    read_count: u64,
}

impl LocalSeekableStream {
    pub async fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(LocalSeekableStream {
            file: File::open(path).await?,
            read_count: 0,
        })
    }
}

#[async_trait]
impl SeekableStream for LocalSeekableStream {
    async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_count += 1;
        self.file.read(buf).await
    }

    async fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos).await
    }

    fn read_count(&self) -> u64 {
        self.read_count
    }
}
