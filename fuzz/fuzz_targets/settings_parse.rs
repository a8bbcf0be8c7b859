#![no_main]
use libfuzzer_sys::fuzz_target;
use sizelimits::{RawSettings, SizeLimits, SizeLimitsConfig};

fuzz_target!(|data: &[u8]| {
    // Any settings text must produce a working guard
    let settings = RawSettings::from_bytes(data);
    let limits = SizeLimits::from_config(&SizeLimitsConfig::from_settings(&settings));
    assert!(limits.total_size().width >= 1 && limits.total_size().height >= 1);
});
