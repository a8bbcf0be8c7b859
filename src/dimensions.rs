//! Pixel dimensions.
//!
//! `Dimensions` is the `(width, height)` pair used for both the configured
//! ceilings and the candidate sizes handed to the guard by the layout phase.
//!
//! # Text Format
//!
//! - `Display` renders `WIDTHxHEIGHT` (e.g. `800x600`).
//! - `from_bytes()` / `FromStr` parse the same form. The separator may be
//!   `x` or `X` and surrounding ASCII whitespace is ignored. Other Unicode
//!   whitespace is rejected.
//!
//! # Examples
//!
//! ```
//! use sizelimits::Dimensions;
//! let d = Dimensions::new(800, 600);
//! assert_eq!(d.to_string(), "800x600");
//!
//! let parsed: Dimensions = " 1024X768 ".parse().unwrap();
//! assert_eq!(parsed, Dimensions::new(1024, 768));
//! ```

use std::str::FromStr;

use bstr::{BString, ByteSlice};

use crate::ImageProcessingError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Dimensions { width, height }
    }

    /// Returns `true` if either axis is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if both axes are less than or equal to the axes of `bounds`.
    ///
    /// ```
    /// use sizelimits::Dimensions;
    /// let bounds = Dimensions::new(100, 100);
    /// assert!(Dimensions::new(100, 20).fits_inside(bounds));
    /// assert!(!Dimensions::new(101, 20).fits_inside(bounds));
    /// ```
    pub const fn fits_inside(&self, bounds: Dimensions) -> bool {
        self.width <= bounds.width && self.height <= bounds.height
    }

    /// Parse `WIDTHxHEIGHT` from raw bytes.
    ///
    /// Returns `None` if the separator is missing or either side is not a
    /// base 10 `u32`.
    ///
    /// ```
    /// use sizelimits::Dimensions;
    /// assert_eq!(Dimensions::from_bytes(b"640x350"), Some(Dimensions::new(640, 350)));
    /// assert!(Dimensions::from_bytes(b"640").is_none());
    /// assert!(Dimensions::from_bytes(b"-1x5").is_none());
    /// ```
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        let data = data.trim_ascii();
        let sep = data.find_byteset(b"xX")?;
        let width = parse_axis(&data[..sep])?;
        let height = parse_axis(&data[sep + 1..])?;
        Some(Dimensions { width, height })
    }
}

fn parse_axis(data: &[u8]) -> Option<u32> {
    let data = data.trim_ascii();
    if data.is_empty() || !data.iter().all(u8::is_ascii_digit) {
        return None;
    }
    data.to_str().ok()?.parse().ok()
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = ImageProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimensions::from_bytes(s.as_bytes())
            .ok_or_else(|| ImageProcessingError::InvalidDimensions(BString::from(s)))
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Dimensions { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(Dimensions::default().is_empty());
        assert!(Dimensions::new(0, 10).is_empty());
        assert!(Dimensions::new(10, 0).is_empty());
        assert!(!Dimensions::new(1, 1).is_empty());
    }

    #[test]
    fn test_fits_inside_is_per_axis() {
        let bounds = Dimensions::new(100, 50);
        assert!(Dimensions::new(100, 50).fits_inside(bounds));
        assert!(Dimensions::new(0, 0).fits_inside(bounds));
        assert!(!Dimensions::new(50, 51).fits_inside(bounds));
        // Area is irrelevant, only the axes count.
        assert!(!Dimensions::new(101, 1).fits_inside(bounds));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Dimensions::from_bytes(b"1x2"), Some(Dimensions::new(1, 2)));
        assert_eq!(
            Dimensions::from_bytes(b"\t3200 x 3200\n"),
            Some(Dimensions::new(3200, 3200))
        );
        assert!(Dimensions::from_bytes(b"").is_none());
        assert!(Dimensions::from_bytes(b"x").is_none());
        assert!(Dimensions::from_bytes(b"10x").is_none());
        assert!(Dimensions::from_bytes(b"+10x10").is_none());
        assert!(Dimensions::from_bytes(b"10x10x10").is_none());
        assert!(Dimensions::from_bytes(b"99999999999x1").is_none());
        assert!(Dimensions::from_bytes("\u{00A0}800x600".as_bytes()).is_none());
        assert!(Dimensions::from_bytes("800x600\u{2003}".as_bytes()).is_none());
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Dimensions::from((640, 350)), Dimensions::new(640, 350));
    }

    #[test]
    fn test_from_str_error() {
        let err = "wide".parse::<Dimensions>().unwrap_err();
        match err {
            ImageProcessingError::InvalidDimensions(raw) => assert_eq!(raw, BString::from("wide")),
            other => panic!("Unexpected error: {other:?}"),
        }
    }
}
