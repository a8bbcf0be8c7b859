//! The size limit guard.
//!
//! [`SizeLimits`] enforces two independent ceilings:
//!
//! - **Image size**: the largest size an un-rotated source image may be drawn
//!   at. Borders, padding, rotation and effects are not included, so this is
//!   no protection against attacks on its own. The layout phase reads the
//!   ceiling and shrinks `width`/`height`/`maxwidth`/`maxheight` to fit; the
//!   guard does not do that arithmetic. `0x0` means unlimited.
//! - **Total size**: an absolute ceiling on the final output dimensions,
//!   checked after layout and before any bitmap is allocated.
//!
//! # Example
//!
//! ```
//! use sizelimits::{Dimensions, SizeLimits, SizeLimitsConfig};
//!
//! let limits = SizeLimits::from_config(&SizeLimitsConfig::default().with_total_size(100, 100));
//! assert!(limits.validate_total_size(Dimensions::new(100, 100)).is_ok());
//!
//! let err = limits.validate_total_size(Dimensions::new(101, 50)).unwrap_err();
//! assert_eq!(err.max_width, 100);
//! ```

use crate::{
    Dimensions, Issue, IssueProvider, IssueSeverity, IssueSink, SizeLimitExceeded,
    SizeLimitsConfig, TotalSizeBehavior,
};

/// Default total size ceiling.
pub const DEFAULT_TOTAL_SIZE: Dimensions = Dimensions::new(3200, 3200);

/// Default image size ceiling (unlimited).
pub const DEFAULT_IMAGE_SIZE: Dimensions = Dimensions::new(0, 0);

/// Source name used for issues raised by the guard.
pub const ISSUE_SOURCE: &str = "SizeLimits";

pub(crate) const INVALID_TOTAL_SIZE_MESSAGE: &str = concat!(
    "sizelimits.totalWidth and sizelimits.totalHeight must both be greater than 0 ",
    "and at most 4294967295. Reverting to defaults."
);

#[derive(Debug)]
pub struct SizeLimits {
    total_size: Dimensions,
    image_size: Dimensions,
    total_behavior: TotalSizeBehavior,
    issues: IssueSink,
}

impl Default for SizeLimits {
    fn default() -> Self {
        SizeLimits::new()
    }
}

impl SizeLimits {
    /// A guard with the default limits: 3200x3200 total, unlimited image
    /// size, [`TotalSizeBehavior::ThrowException`].
    pub fn new() -> Self {
        SizeLimits {
            total_size: DEFAULT_TOTAL_SIZE,
            image_size: DEFAULT_IMAGE_SIZE,
            total_behavior: TotalSizeBehavior::default(),
            issues: IssueSink::new(ISSUE_SOURCE),
        }
    }

    /// Build a guard from configuration. Never fails.
    ///
    /// The total size is all-or-default: if either configured axis is below 1
    /// the whole pair is rejected, the default is kept and a
    /// [`IssueSeverity::ConfigurationError`] issue is recorded.
    pub fn from_config(config: &SizeLimitsConfig) -> Self {
        let mut limits = SizeLimits::new();

        limits.image_size = Dimensions::new(
            config.image_width.unwrap_or(limits.image_size.width),
            config.image_height.unwrap_or(limits.image_size.height),
        );

        let total_width = config.total_width.unwrap_or(i64::from(limits.total_size.width));
        let total_height = config.total_height.unwrap_or(i64::from(limits.total_size.height));
        match (total_axis(total_width), total_axis(total_height)) {
            (Some(width), Some(height)) => limits.total_size = Dimensions::new(width, height),
            _ => limits.issues.accept(
                format!("{INVALID_TOTAL_SIZE_MESSAGE} (got {total_width}x{total_height})"),
                IssueSeverity::ConfigurationError,
            ),
        }

        limits.total_behavior = config.total_behavior.unwrap_or_default();
        limits
    }

    /// The maximum final size of a generated image.
    pub fn total_size(&self) -> Dimensions {
        self.total_size
    }

    /// Replace the total size ceiling. The value is not validated.
    pub fn set_total_size(&mut self, size: Dimensions) {
        self.total_size = size;
    }

    pub fn total_behavior(&self) -> TotalSizeBehavior {
        self.total_behavior
    }

    pub fn set_total_behavior(&mut self, behavior: TotalSizeBehavior) {
        self.total_behavior = behavior;
    }

    /// The maximum size an un-rotated source image may be drawn at.
    pub fn image_size(&self) -> Dimensions {
        self.image_size
    }

    /// Replace the image size ceiling. The value is not validated.
    pub fn set_image_size(&mut self, size: Dimensions) {
        self.image_size = size;
    }

    /// Returns `true` if an image size ceiling is configured, i.e. both axes
    /// are greater than zero.
    pub fn has_image_size(&self) -> bool {
        self.image_size.width > 0 && self.image_size.height > 0
    }

    /// Returns `true` if `size` needs no shrinking to respect the image size
    /// ceiling. Always `true` without a ceiling.
    ///
    /// This only informs the layout phase; nothing enforces it.
    pub fn fits_inside_image_size(&self, size: Dimensions) -> bool {
        !self.has_image_size() || size.fits_inside(self.image_size)
    }

    pub fn fits_inside_total_size(&self, size: Dimensions) -> bool {
        size.fits_inside(self.total_size)
    }

    /// Check the final output size. Must run after layout and before any
    /// bitmap allocation.
    ///
    /// With [`TotalSizeBehavior::IgnoreLimits`] this always succeeds.
    pub fn validate_total_size(&self, size: Dimensions) -> Result<(), SizeLimitExceeded> {
        if self.total_behavior == TotalSizeBehavior::ThrowException
            && !self.fits_inside_total_size(size)
        {
            log::debug!("output size {size} exceeds total size limit {}", self.total_size);
            return Err(SizeLimitExceeded {
                width: size.width,
                height: size.height,
                max_width: self.total_size.width,
                max_height: self.total_size.height,
            });
        }
        Ok(())
    }

    /// The issue sink owned by this guard.
    pub fn issue_sink(&self) -> &IssueSink {
        &self.issues
    }
}

fn total_axis(value: i64) -> Option<u32> {
    if value < 1 {
        return None;
    }
    u32::try_from(value).ok()
}

impl IssueProvider for SizeLimits {
    fn issues(&self) -> Vec<Issue> {
        self.issues.issues()
    }
}
