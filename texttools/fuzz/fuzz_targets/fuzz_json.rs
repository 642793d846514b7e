#![no_main]

use libfuzzer_sys::fuzz_target;
use texttools::json;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(pretty) = json::validate(s).pretty_text() {
            assert_eq!(json::validate(pretty).pretty_text(), Some(pretty));
        }
    }
});
