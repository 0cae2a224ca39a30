use super::mvhd::{MovieHeaderAtom, MVHD_CANDIDATE_LEN, MVHD_SIGNATURE};
use crate::streams::SeekableStream;
use log::debug;
use std::io::{self, SeekFrom};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Search window in bytes (32KB)
pub const DEFAULT_WINDOW_SIZE: usize = 32 * 1024;
/// Smallest window a scan will use
pub const MIN_WINDOW_SIZE: usize = 16;

/// Consecutive windows share this many bytes so a signature that straddles
/// a window boundary is still seen.
const WINDOW_OVERLAP: usize = MVHD_SIGNATURE.len();

/// Which end of the file a scan starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    Forward,
    Backward,
}

/// Shared flag telling scans to stop before their next read
#[derive(Debug, Clone, Default)]
pub struct ScanCancel {
    cancelled: Arc<AtomicBool>,
}

impl ScanCancel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// A plausible movie header and where its signature was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieHeaderMatch {
    pub position: u64,
    pub atom: MovieHeaderAtom,
}

/// Scan `stream` window by window for the first plausible `mvhd` atom.
///
/// Returns `Ok(None)` when the stream is exhausted or `cancel` fires. Implausible
/// candidates are skipped and the scan carries on.
pub async fn find_movie_header<S: SeekableStream>(
    stream: &mut S,
    direction: ScanDirection,
    window_size: usize,
    cancel: &ScanCancel,
) -> io::Result<Option<MovieHeaderMatch>> {
    let window_size = window_size.max(MIN_WINDOW_SIZE);
    let file_size = stream.seek(SeekFrom::End(0)).await?;
    let mut buffer = vec![0u8; window_size];
    let mut offset = 0u64;

    while offset < file_size {
        if cancel.is_cancelled() {
            debug!("{:?} scan cancelled at offset {}", direction, offset);
            return Ok(None);
        }

        let window_start = match direction {
            ScanDirection::Forward => offset,
            ScanDirection::Backward => file_size.saturating_sub(offset + window_size as u64),
        };
        stream.seek(SeekFrom::Start(window_start)).await?;
        let bytes_read = stream.read_all(&mut buffer).await?;
        if bytes_read <= WINDOW_OVERLAP {
            break;
        }

        for i in 0..bytes_read - WINDOW_OVERLAP {
            if &buffer[i..i + MVHD_SIGNATURE.len()] != MVHD_SIGNATURE {
                continue;
            }
            if cancel.is_cancelled() {
                debug!("{:?} scan cancelled at offset {}", direction, offset);
                return Ok(None);
            }
            let position = window_start + i as u64;
            match read_candidate(stream, position).await? {
                Some(atom) if atom.is_plausible() => {
                    debug!(
                        "{:?} scan found mvhd at {} (timescale {}, duration {})",
                        direction, position, atom.time_scale, atom.duration
                    );
                    return Ok(Some(MovieHeaderMatch { position, atom }));
                }
                Some(atom) => debug!(
                    "{:?} scan rejected mvhd at {} (timescale {}, duration {})",
                    direction, position, atom.time_scale, atom.duration
                ),
                None => debug!("{:?} scan: truncated mvhd at {}", direction, position),
            }
        }

        let reached_end = match direction {
            ScanDirection::Forward => window_start + bytes_read as u64 >= file_size,
            ScanDirection::Backward => window_start == 0,
        };
        if reached_end {
            break;
        }
        offset += (bytes_read - WINDOW_OVERLAP) as u64;

        // Let a concurrent scan run between windows
        tokio::task::yield_now().await;
    }

    debug!("{:?} scan exhausted {} bytes without a match", direction, file_size);
    Ok(None)
}

async fn read_candidate<S: SeekableStream>(
    stream: &mut S,
    position: u64,
) -> io::Result<Option<MovieHeaderAtom>> {
    stream.seek(SeekFrom::Start(position)).await?;
    let mut candidate = [0u8; MVHD_CANDIDATE_LEN];
    let read = stream.read_all(&mut candidate).await?;
    Ok(MovieHeaderAtom::decode(&candidate[..read]))
}
