pub mod bits;
pub use bits::reader::BitReader;

pub mod mp3;
pub use mp3::{mp3_duration, FrameHeader, Mp3Scan};

pub mod mp4;
pub use mp4::{m4a_duration, MovieHeaderAtom, ScanOptions};

pub mod streams;
pub use streams::{
    FileSource, LocalSeekableStream, MemorySeekableStream, MemorySource, SeekableStream,
    StreamSource,
};

pub mod format;
pub use format::{detect_format, duration, AudioFormat, DurationReport};

pub mod errors;
pub use errors::{DurationError, DurationResult, ScanError, UnsupportedFormatError};
