use super::types::AudioFormat;
use crate::errors::{DurationResult, UnsupportedFormatError};
use crate::mp3::mp3_duration;
use crate::mp4::m4a_duration;
use std::path::Path;

/// Detect the audio format from the path's extension (case-insensitive)
pub fn detect_format<P: AsRef<Path>>(path: P) -> Option<AudioFormat> {
    let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "mp3" => Some(AudioFormat::MP3),
        "mp4" => Some(AudioFormat::MP4),
        "m4a" => Some(AudioFormat::M4A),
        "m4b" => Some(AudioFormat::M4B),
        _ => None,
    }
}

/// Duration in milliseconds of an `mp3`, `mp4`, `m4a` or `m4b` file
pub async fn duration<P: AsRef<Path>>(path: P) -> DurationResult<u64> {
    let path = path.as_ref();
    match detect_format(path) {
        Some(AudioFormat::MP3) => mp3_duration(path).await,
        Some(format) if format.is_mp4_family() => m4a_duration(path).await,
        _ => Err(UnsupportedFormatError::new(format!(
            "Unsupported content type: {}",
            path.display()
        ))
        .into()),
    }
}
