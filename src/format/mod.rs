mod detector;
mod types;

pub use detector::{detect_format, duration};
pub use types::*;
