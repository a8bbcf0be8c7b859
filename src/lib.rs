//! Size ceilings for image processing pipelines.
//!
//! The guard keeps oversized requests from ever reaching bitmap allocation.
//! It knows two limits:
//!
//! - an **image size** ceiling the layout phase shrinks requested sizes into, and
//! - an absolute **total size** ceiling checked against the final output size.
//!
//! ```
//! use sizelimits::prelude::*;
//!
//! let settings =
//!     RawSettings::from_bytes(b"sizelimits.totalWidth = 1000\nsizelimits.totalHeight = 1000");
//! let limits = SizeLimits::from_config(&SizeLimitsConfig::from_settings(&settings));
//!
//! // Layout phase: read the image ceiling.
//! assert!(!limits.has_image_size());
//!
//! // After layout, before allocating anything.
//! let result: Result<()> = limits
//!     .validate_total_size(Dimensions::new(1920, 1080))
//!     .map_err(ImageProcessingError::from);
//! assert!(matches!(result, Err(ImageProcessingError::SizeLimit(_))));
//! ```

pub type Result<T> = std::result::Result<T, ImageProcessingError>;

pub mod behavior;
pub use behavior::TotalSizeBehavior;

pub mod config;
pub use config::SizeLimitsConfig;

pub mod dimensions;
pub use dimensions::Dimensions;

pub mod errors;
pub use errors::{ImageProcessingError, SizeLimitExceeded};

pub mod issues;
pub use issues::{Issue, IssueProvider, IssueSeverity, IssueSink};

pub mod limits;
pub use limits::{DEFAULT_IMAGE_SIZE, DEFAULT_TOTAL_SIZE, SizeLimits};

pub mod settings;
pub use settings::RawSettings;

pub mod shared;
pub use shared::SharedSizeLimits;

pub mod prelude;

#[cfg(test)]
mod tests {
    use crate::{Dimensions, ImageProcessingError, SizeLimits, SizeLimitsConfig};

    fn render(limits: &SizeLimits, size: Dimensions) -> crate::Result<Vec<u8>> {
        limits.validate_total_size(size)?;
        Ok(vec![0; (size.width * size.height) as usize])
    }

    #[test]
    fn test_size_limit_propagates_as_processing_error() {
        let limits = SizeLimits::from_config(&SizeLimitsConfig::default().with_total_size(4, 4));
        assert_eq!(render(&limits, Dimensions::new(4, 4)).unwrap().len(), 16);

        let err = render(&limits, Dimensions::new(5, 4)).unwrap_err();
        let exceeded = err.as_size_limit().expect("should be a size limit error");
        assert_eq!(exceeded.width, 5);
        assert!(matches!(err, ImageProcessingError::SizeLimit(_)));
    }

    #[test]
    fn test_guard_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SizeLimits>();
        assert_send_sync::<crate::SharedSizeLimits>();
    }
}
