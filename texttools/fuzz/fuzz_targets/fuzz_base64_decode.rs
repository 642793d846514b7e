#![no_main]

use libfuzzer_sys::fuzz_target;
use texttools::base64;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything the decoder accepts must be the canonical encoding of its output
        if let Some(decoded) = base64::decode(s).value() {
            assert_eq!(base64::encode(decoded).value(), Some(s));
        }
    }
});
