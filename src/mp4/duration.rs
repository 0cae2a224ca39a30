use super::mvhd_finder::{
    find_movie_header, MovieHeaderMatch, ScanCancel, ScanDirection, DEFAULT_WINDOW_SIZE,
    MIN_WINDOW_SIZE,
};
use crate::errors::{DurationError, DurationResult};
use crate::streams::{FileSource, SeekableStream, StreamSource};
use log::{debug, info};
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Options for the movie header search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub window_size: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl ScanOptions {
    pub fn with_window_size(window_size: usize) -> Self {
        Self {
            window_size: window_size.max(MIN_WINDOW_SIZE),
        }
    }
}

/// The winning scan's result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    pub direction: ScanDirection,
    pub found: MovieHeaderMatch,
}

impl ScanOutcome {
    pub fn duration_ms(&self) -> u64 {
        self.found.atom.duration_ms()
    }
}

/// Race a forward and a backward scan over `source` for a plausible `mvhd` atom.
///
/// Each scan opens its own stream. The first plausible match wins and the other
/// scan is cancelled; `Ok(None)` means neither direction found one.
pub async fn find_movie_header_racing<S: StreamSource>(
    source: Arc<S>,
    options: ScanOptions,
) -> DurationResult<Option<ScanOutcome>> {
    let cancel = ScanCancel::new();
    let mut scans = JoinSet::new();

    for direction in [ScanDirection::Forward, ScanDirection::Backward] {
        let source = Arc::clone(&source);
        let cancel = cancel.clone();
        scans.spawn(async move {
            let mut stream = source.open().await?;
            let found =
                find_movie_header(&mut stream, direction, options.window_size, &cancel).await?;
            if found.is_some() {
                cancel.cancel();
            }
            debug!(
                "{:?} scan finished after {} reads",
                direction,
                stream.read_count()
            );
            Ok::<_, std::io::Error>(found.map(|found| ScanOutcome { direction, found }))
        });
    }

    let mut outcome = None;
    while let Some(joined) = scans.join_next().await {
        let result = match joined {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => continue,
            Err(e) => {
                cancel.cancel();
                return Err(e.into());
            }
        };
        match result {
            Ok(Some(found)) => {
                outcome = Some(found);
                break;
            }
            Ok(None) => continue,
            Err(e) => {
                cancel.cancel();
                return Err(DurationError::Io(e));
            }
        }
    }

    cancel.cancel();
    scans.abort_all();
    Ok(outcome)
}

/// Duration in milliseconds from any stream source; 0 when no plausible atom exists.
pub async fn duration_from_source<S: StreamSource>(
    source: Arc<S>,
    options: ScanOptions,
) -> DurationResult<u64> {
    let outcome = find_movie_header_racing(source, options).await?;
    Ok(outcome.map_or(0, |outcome| outcome.duration_ms()))
}

/// Duration of an MP4/M4A/M4B file in milliseconds.
pub async fn m4a_duration<P: AsRef<Path>>(path: P) -> DurationResult<u64> {
    let path = path.as_ref();
    let outcome =
        find_movie_header_racing(Arc::new(FileSource::new(path)), ScanOptions::default()).await?;
    match outcome {
        Some(outcome) => {
            let duration_ms = outcome.duration_ms();
            info!(
                "{}: {} ms (mvhd at {}, {:?} scan)",
                path.display(),
                duration_ms,
                outcome.found.position,
                outcome.direction
            );
            Ok(duration_ms)
        }
        None => {
            info!("{}: no movie header found", path.display());
            Ok(0)
        }
    }
}
