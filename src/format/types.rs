use serde::Serialize;

/// Audio container family, inferred from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AudioFormat {
    MP3,
    MP4,
    M4A,
    M4B,
}

impl AudioFormat {
    pub fn name(&self) -> &str {
        match self {
            AudioFormat::MP3 => "MP3",
            AudioFormat::MP4 => "MP4",
            AudioFormat::M4A => "M4A",
            AudioFormat::M4B => "M4B",
        }
    }

    /// Formats whose duration comes from the movie header atom
    pub fn is_mp4_family(&self) -> bool {
        matches!(self, AudioFormat::MP4 | AudioFormat::M4A | AudioFormat::M4B)
    }
}

/// Duration of one file, as reported by the command line tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    pub path: String,
    pub format: AudioFormat,
    pub duration_ms: u64,
}
