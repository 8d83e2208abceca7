use core::fmt;

/// Rasterizer failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoError {
    /// The backend has nothing to draw on.
    NoSurface,
    /// The surface exists but has no pixels.
    ZeroSized,
    InvalidArgument(&'static str),
    Unsupported(&'static str),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSurface => write!(f, "no drawing surface"),
            Self::ZeroSized => write!(f, "drawing surface is zero-sized"),
            Self::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
            Self::Unsupported(what) => write!(f, "unsupported operation: {}", what),
        }
    }
}

impl std::error::Error for VideoError {}

pub type VideoResult<T = ()> = Result<T, VideoError>;
