pub mod duration;
pub use duration::{duration_from_bytes, duration_from_stream, mp3_duration, Mp3Scan};
pub mod frame;
pub use frame::{is_frame_sync, FrameHeader, Layer, MpegVersion};
pub mod id3;
pub use id3::{id3v2_skip_len, is_id3v1_tag};
