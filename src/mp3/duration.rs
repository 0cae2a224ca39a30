use super::frame::{is_frame_sync, FrameHeader};
use super::id3::{id3v2_skip_len, is_id3v1_tag, ID3V1_TAG_LEN};
use crate::errors::DurationResult;
use crate::streams::{LocalSeekableStream, SeekableStream};
use log::{debug, info};
use std::io::{self, SeekFrom};
use std::path::Path;

/// Bytes that must be available at the cursor to classify the next item
const LOOKAHEAD_LEN: usize = 10;

/// Outcome of scanning an MPEG audio stream
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mp3Scan {
    /// Leading bytes skipped as an ID3v2 tag
    pub id3v2_len: usize,
    /// Frames counted towards the duration
    pub frames: u64,
    /// ID3v1 tags skipped
    pub id3v1_tags: u64,
    /// Bytes stepped over one at a time while looking for a frame
    pub resync_bytes: u64,
    /// Accumulated playback time
    pub seconds: f64,
}

impl Mp3Scan {
    pub fn duration_ms(&self) -> u64 {
        (self.seconds * 1000.0).round() as u64
    }
}

/// Walk `data` frame by frame, summing each frame's playback time.
///
/// Never fails: anything that is neither a playable frame nor an ID3v1 tag is
/// stepped over one byte at a time.
pub fn duration_from_bytes(data: &[u8]) -> Mp3Scan {
    let mut scan = Mp3Scan {
        id3v2_len: id3v2_skip_len(data),
        ..Mp3Scan::default()
    };
    if scan.id3v2_len > 0 {
        debug!("Skipping ID3v2 tag: {} bytes", scan.id3v2_len);
    }

    let mut offset = scan.id3v2_len;
    while offset < data.len() {
        let Some(window) = data.get(offset..offset + LOOKAHEAD_LEN) else {
            break;
        };
        if is_frame_sync(window) {
            match FrameHeader::decode(window) {
                Some(header) if header.is_playable() => {
                    offset += header.frame_size;
                    scan.frames += 1;
                    scan.seconds += header.duration_secs();
                }
                _ => {
                    offset += 1;
                    scan.resync_bytes += 1;
                }
            }
        } else if is_id3v1_tag(window) {
            offset += ID3V1_TAG_LEN;
            scan.id3v1_tags += 1;
        } else {
            offset += 1;
            scan.resync_bytes += 1;
        }
    }

    debug!(
        "MP3 scan: {} frames, {} ID3v1 tags, {} resync bytes over {} bytes",
        scan.frames,
        scan.id3v1_tags,
        scan.resync_bytes,
        data.len()
    );
    scan
}

/// Read the whole stream into memory and scan it.
pub async fn duration_from_stream<S: SeekableStream>(stream: &mut S) -> io::Result<Mp3Scan> {
    let size = stream.seek(SeekFrom::End(0)).await?;
    let size = usize::try_from(size)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "stream too large"))?;
    stream.seek(SeekFrom::Start(0)).await?;

    let mut data = vec![0u8; size];
    let read = stream.read_all(&mut data).await?;
    data.truncate(read);
    Ok(duration_from_bytes(&data))
}

/// Duration of an MP3 file in milliseconds.
pub async fn mp3_duration<P: AsRef<Path>>(path: P) -> DurationResult<u64> {
    let path = path.as_ref();
    let mut stream = LocalSeekableStream::open(path).await?;
    let scan = duration_from_stream(&mut stream).await?;
    let duration_ms = scan.duration_ms();
    info!("{}: {} ms ({} frames)", path.display(), duration_ms, scan.frames);
    Ok(duration_ms)
}
