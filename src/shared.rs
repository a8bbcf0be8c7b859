//! Runtime reconfiguration.
//!
//! A [`SizeLimits`] is never mutated while requests read it. Reloading builds
//! a new guard and swaps it in; requests that already hold a snapshot keep
//! using the old one until they finish.
//!
//! ```
//! use sizelimits::{Dimensions, SharedSizeLimits, SizeLimitsConfig};
//!
//! let shared = SharedSizeLimits::default();
//! let before = shared.current();
//!
//! shared.reload(&SizeLimitsConfig::default().with_total_size(10, 10));
//! assert_eq!(before.total_size(), Dimensions::new(3200, 3200));
//! assert_eq!(shared.current().total_size(), Dimensions::new(10, 10));
//! ```

use std::sync::{Arc, RwLock};

use crate::{SizeLimits, SizeLimitsConfig};

#[derive(Debug, Default)]
pub struct SharedSizeLimits {
    current: RwLock<Arc<SizeLimits>>,
}

impl SharedSizeLimits {
    pub fn new(limits: SizeLimits) -> Self {
        SharedSizeLimits {
            current: RwLock::new(Arc::new(limits)),
        }
    }

    pub fn from_config(config: &SizeLimitsConfig) -> Self {
        Self::new(SizeLimits::from_config(config))
    }

    /// The guard to use for one request.
    pub fn current(&self) -> Arc<SizeLimits> {
        // The lock only ever guards an Arc swap, a poisoned value is still whole.
        let guard = self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Publish `limits`, returning the guard it replaced.
    pub fn replace(&self, limits: SizeLimits) -> Arc<SizeLimits> {
        let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, Arc::new(limits))
    }

    /// Build a guard from `config`, publish it and return it.
    pub fn reload(&self, config: &SizeLimitsConfig) -> Arc<SizeLimits> {
        let limits = Arc::new(SizeLimits::from_config(config));
        let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::clone(&limits);
        limits
    }
}

impl From<SizeLimits> for SharedSizeLimits {
    fn from(limits: SizeLimits) -> Self {
        SharedSizeLimits::new(limits)
    }
}
