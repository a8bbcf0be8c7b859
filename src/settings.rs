//! Raw `key = value` settings.
//!
//! This is a deliberately small reader for the settings a host hands to the
//! guard. Hosts with their own configuration system fill a
//! [`SizeLimitsConfig`](crate::SizeLimitsConfig) directly instead.
//!
//! # Format
//!
//! ```text
//! # comment
//! ; also a comment
//! sizelimits.totalWidth  = 2000
//! sizelimits.totalHeight = 2000
//! sizelimits.totalbehavior = ignorelimits
//! ```
//!
//! - Keys and values are trimmed; keys compare ignoring ASCII case.
//! - The last occurrence of a key wins.
//! - Lines without `=` are skipped with a warning.
//! - A leading UTF-8 byte order mark is ignored.

use std::path::Path;

use bstr::{BStr, BString, ByteSlice};

use crate::ImageProcessingError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSettings {
    entries: Vec<(BString, BString)>,
}

impl RawSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        let mut settings = RawSettings::new();
        for (idx, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(b"#") || line.starts_with(b";") {
                continue;
            }
            let Some(eq) = line.find_byte(b'=') else {
                log::warn!("settings line {} has no '=' - ignoring: {}", idx + 1, line.as_bstr());
                continue;
            };
            let key = line[..eq].trim();
            if key.is_empty() {
                log::warn!("settings line {} has an empty key - ignoring", idx + 1);
                continue;
            }
            settings.set(key, line[eq + 1..].trim());
        }
        settings
    }

    pub fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|err| ImageProcessingError::io_error(path, err))?;
        Ok(Self::from_bytes(&data))
    }

    /// Insert or overwrite a key.
    pub fn set(&mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) {
        let key = key.as_ref();
        let value = BString::from(value.as_ref());
        match self.entries.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
            Some((_, v)) => *v = value,
            None => self.entries.push((BString::from(key), value)),
        }
    }

    /// Builder form of [`RawSettings::set`].
    #[must_use]
    pub fn with(mut self, key: impl AsRef<[u8]>, value: impl AsRef<[u8]>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&BStr> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key.as_bytes()))
            .map(|(_, v)| v.as_bstr())
    }

    /// Read a base 10 integer. Missing keys yield `None` silently; malformed
    /// values yield `None` with a warning.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        let raw = self.get(key)?;
        let parsed = raw.to_str().ok().and_then(|s| s.parse::<i64>().ok());
        if parsed.is_none() {
            log::warn!("setting {key} = '{raw}' is not an integer - using default");
        }
        parsed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BStr, &BStr)> {
        self.entries.iter().map(|(k, v)| (k.as_bstr(), v.as_bstr()))
    }
}
