use std::path::PathBuf;

use bstr::BString;

/// The final output size is larger than the configured total size ceiling.
///
/// Returned by [`SizeLimits::validate_total_size`](crate::SizeLimits::validate_total_size)
/// when the behavior is [`TotalSizeBehavior::ThrowException`](crate::TotalSizeBehavior::ThrowException).
/// The request that produced the size must be aborted; the same input will
/// always exceed the same limit, so retrying is pointless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error(
    "The dimensions of the output image ({width}x{height}) exceed the configured maximum dimensions of {max_width}x{max_height}. You can change these limits through the sizelimits settings."
)]
pub struct SizeLimitExceeded {
    pub width: u32,
    pub height: u32,
    pub max_width: u32,
    pub max_height: u32,
}

/// Generic image processing failure as seen by the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ImageProcessingError {
    #[error(transparent)]
    SizeLimit(#[from] SizeLimitExceeded),

    #[error("Invalid dimensions: {0} (expected WIDTHxHEIGHT)")]
    InvalidDimensions(BString),

    #[error("IO error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImageProcessingError {
    /// Create an Io error with the given path and source error.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImageProcessingError::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the size limit violation if this error was caused by one.
    pub fn as_size_limit(&self) -> Option<&SizeLimitExceeded> {
        match self {
            ImageProcessingError::SizeLimit(err) => Some(err),
            _ => None,
        }
    }
}
