use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while computing a duration
#[derive(Debug)]
pub enum DurationError {
    Io(io::Error),
    UnsupportedFormat(UnsupportedFormatError),
    Scan(ScanError),
}

/// Raised by extension dispatch when the path matches no supported format
#[derive(Debug)]
pub struct UnsupportedFormatError {
    pub message: String,
}

impl UnsupportedFormatError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A scan task ended abnormally instead of returning a result
#[derive(Debug)]
pub struct ScanError {
    pub message: String,
}

impl ScanError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationError::Io(err) => write!(f, "I/O error: {}", err),
            DurationError::UnsupportedFormat(err) => write!(f, "Unsupported format: {}", err),
            DurationError::Scan(err) => write!(f, "Scan error: {}", err),
        }
    }
}

impl fmt::Display for UnsupportedFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for DurationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DurationError::Io(err) => Some(err),
            DurationError::UnsupportedFormat(err) => Some(err),
            DurationError::Scan(err) => Some(err),
        }
    }
}
impl Error for UnsupportedFormatError {}
impl Error for ScanError {}

// Conversion implementations
impl From<io::Error> for DurationError {
    fn from(err: io::Error) -> Self {
        DurationError::Io(err)
    }
}

impl From<UnsupportedFormatError> for DurationError {
    fn from(err: UnsupportedFormatError) -> Self {
        DurationError::UnsupportedFormat(err)
    }
}

impl From<ScanError> for DurationError {
    fn from(err: ScanError) -> Self {
        DurationError::Scan(err)
    }
}

impl From<tokio::task::JoinError> for DurationError {
    fn from(err: tokio::task::JoinError) -> Self {
        DurationError::Scan(ScanError::new(format!("scan task failed: {}", err)))
    }
}

// Conversion to io::Error for callers working in io::Result
impl From<DurationError> for io::Error {
    fn from(err: DurationError) -> Self {
        match err {
            DurationError::Io(inner) => inner,
            DurationError::UnsupportedFormat(inner) => {
                io::Error::new(io::ErrorKind::Unsupported, inner)
            }
            DurationError::Scan(inner) => io::Error::other(inner),
        }
    }
}

impl DurationError {
    /// True when the error came from opening or reading the file.
    pub fn is_io(&self) -> bool {
        matches!(self, DurationError::Io(_))
    }
}

// Type alias for Result with DurationError
pub type DurationResult<T> = Result<T, DurationError>;
