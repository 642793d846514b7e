#![no_main]

use libfuzzer_sys::fuzz_target;
use texttools::base64;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let encoded = base64::encode(&text);
    if let Some(encoded) = encoded.value() {
        assert_eq!(base64::decode(encoded).value(), Some(text.as_ref()));
    }
});
