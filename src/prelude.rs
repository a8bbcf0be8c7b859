//! Crate prelude: the types a pipeline needs to configure the guard and run
//! both checks.
//!
//! ```
//! use sizelimits::prelude::*;
//!
//! let limits = SizeLimits::from_config(
//!     &SizeLimitsConfig::default()
//!         .with_image_size(1600, 1200)
//!         .with_total_behavior(TotalSizeBehavior::ThrowException),
//! );
//! assert!(limits.has_image_size());
//! assert!(limits.validate_total_size(Dimensions::new(3200, 3200)).is_ok());
//! ```
//!
//! Lower-level items (settings key constants, default values) stay at their
//! module paths, e.g. `sizelimits::config::KEY_TOTAL_WIDTH`.

pub use crate::{
    // Guard
    SizeLimits,
    SharedSizeLimits,
    SizeLimitsConfig,
    TotalSizeBehavior,
    Dimensions,
    RawSettings,
    // Errors
    ImageProcessingError,
    SizeLimitExceeded,
    Result,
    // Issues
    Issue,
    IssueProvider,
    IssueSeverity,
};
