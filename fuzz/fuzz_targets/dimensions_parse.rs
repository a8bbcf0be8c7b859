#![no_main]
use libfuzzer_sys::fuzz_target;
use sizelimits::Dimensions;

fuzz_target!(|data: &[u8]| {
    if let Some(dims) = Dimensions::from_bytes(data) {
        assert_eq!(Dimensions::from_bytes(dims.to_string().as_bytes()), Some(dims));
    }
});
