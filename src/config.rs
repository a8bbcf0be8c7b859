use crate::{RawSettings, TotalSizeBehavior};

pub const KEY_IMAGE_WIDTH: &str = "sizelimits.imageWidth";
pub const KEY_IMAGE_HEIGHT: &str = "sizelimits.imageHeight";
pub const KEY_TOTAL_WIDTH: &str = "sizelimits.totalWidth";
pub const KEY_TOTAL_HEIGHT: &str = "sizelimits.totalHeight";
pub const KEY_TOTAL_BEHAVIOR: &str = "sizelimits.totalbehavior";

/// Recognized size limit options. Every field is optional; an absent field
/// keeps the guard's default for that value.
///
/// The total axes are signed so that out of range input survives until the
/// guard can reject it and report an issue.
///
/// ```
/// use sizelimits::{SizeLimitsConfig, TotalSizeBehavior};
/// let config = SizeLimitsConfig::default()
///     .with_total_size(2000, 1500)
///     .with_total_behavior(TotalSizeBehavior::IgnoreLimits);
/// assert_eq!(config.total_width, Some(2000));
/// assert_eq!(config.image_width, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeLimitsConfig {
    pub image_width: Option<u32>,
    pub image_height: Option<u32>,
    pub total_width: Option<i64>,
    pub total_height: Option<i64>,
    pub total_behavior: Option<TotalSizeBehavior>,
}

impl SizeLimitsConfig {
    #[must_use]
    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.image_width = Some(width);
        self.image_height = Some(height);
        self
    }

    #[must_use]
    pub fn with_total_size(mut self, width: i64, height: i64) -> Self {
        self.total_width = Some(width);
        self.total_height = Some(height);
        self
    }

    #[must_use]
    pub fn with_total_behavior(mut self, behavior: TotalSizeBehavior) -> Self {
        self.total_behavior = Some(behavior);
        self
    }

    /// Map the `sizelimits.*` keys of `settings` onto a config.
    ///
    /// Malformed values are logged and treated as absent. Total axes are
    /// passed through unchecked, including zero and negative values.
    pub fn from_settings(settings: &RawSettings) -> Self {
        SizeLimitsConfig {
            image_width: image_axis(settings, KEY_IMAGE_WIDTH),
            image_height: image_axis(settings, KEY_IMAGE_HEIGHT),
            total_width: settings.get_i64(KEY_TOTAL_WIDTH),
            total_height: settings.get_i64(KEY_TOTAL_HEIGHT),
            total_behavior: settings.get(KEY_TOTAL_BEHAVIOR).and_then(|raw| {
                let behavior = TotalSizeBehavior::from_bytes(raw);
                if behavior.is_none() {
                    log::warn!(
                        "setting {KEY_TOTAL_BEHAVIOR} = '{raw}' is not a known behavior - using default"
                    );
                }
                behavior
            }),
        }
    }
}

fn image_axis(settings: &RawSettings, key: &str) -> Option<u32> {
    let value = settings.get_i64(key)?;
    match u32::try_from(value) {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("setting {key} = {value} is out of range - using default");
            None
        }
    }
}

impl From<&RawSettings> for SizeLimitsConfig {
    fn from(settings: &RawSettings) -> Self {
        SizeLimitsConfig::from_settings(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings() {
        assert_eq!(
            SizeLimitsConfig::from_settings(&RawSettings::new()),
            SizeLimitsConfig::default()
        );
    }

    #[test]
    fn test_all_keys() {
        let settings = RawSettings::from_bytes(
            b"sizelimits.imagewidth = 800\n\
              sizelimits.imageheight = 600\n\
              sizelimits.totalwidth = 0\n\
              sizelimits.totalheight = -7\n\
              sizelimits.totalBehavior = IgnoreLimits\n",
        );
        let config = SizeLimitsConfig::from(&settings);
        assert_eq!(config.image_width, Some(800));
        assert_eq!(config.image_height, Some(600));
        assert_eq!(config.total_width, Some(0));
        assert_eq!(config.total_height, Some(-7));
        assert_eq!(config.total_behavior, Some(TotalSizeBehavior::IgnoreLimits));
    }

    #[test]
    fn test_malformed_values_are_absent() {
        let settings = RawSettings::new()
            .with(KEY_IMAGE_WIDTH, "-1")
            .with(KEY_IMAGE_HEIGHT, "wide")
            .with(KEY_TOTAL_WIDTH, "1e3")
            .with(KEY_TOTAL_BEHAVIOR, "panic");
        assert_eq!(SizeLimitsConfig::from_settings(&settings), SizeLimitsConfig::default());
    }
}
