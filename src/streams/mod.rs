pub mod memory_stream;
pub mod seekable_stream;
pub mod source;

pub use memory_stream::MemorySeekableStream;
pub use seekable_stream::{LocalSeekableStream, SeekableStream};
pub use source::{FileSource, MemorySource, StreamSource};
