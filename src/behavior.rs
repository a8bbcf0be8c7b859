use std::str::FromStr;

use bstr::ByteSlice;

/// What to do when a final output size exceeds the total size ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TotalSizeBehavior {
    /// Abort the request with a [`SizeLimitExceeded`](crate::SizeLimitExceeded) error.
    #[default]
    ThrowException,
    /// Skip the total size check entirely.
    IgnoreLimits,
}

impl TotalSizeBehavior {
    /// Parse the settings value (`throwexception` or `ignorelimits`), ignoring
    /// ASCII case and surrounding whitespace.
    ///
    /// ```
    /// use sizelimits::TotalSizeBehavior;
    /// assert_eq!(
    ///     TotalSizeBehavior::from_bytes(b"IgnoreLimits"),
    ///     Some(TotalSizeBehavior::IgnoreLimits)
    /// );
    /// assert_eq!(TotalSizeBehavior::from_bytes(b"explode"), None);
    /// ```
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        let data = data.trim();
        if data.eq_ignore_ascii_case(b"throwexception") {
            Some(TotalSizeBehavior::ThrowException)
        } else if data.eq_ignore_ascii_case(b"ignorelimits") {
            Some(TotalSizeBehavior::IgnoreLimits)
        } else {
            None
        }
    }
}

impl std::fmt::Display for TotalSizeBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TotalSizeBehavior::ThrowException => write!(f, "throwexception"),
            TotalSizeBehavior::IgnoreLimits => write!(f, "ignorelimits"),
        }
    }
}

impl FromStr for TotalSizeBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TotalSizeBehavior::from_bytes(s.as_bytes()).ok_or_else(|| {
            format!("unknown total size behavior '{s}' (expected throwexception or ignorelimits)")
        })
    }
}
