#![no_main]

use libfuzzer_sys::fuzz_target;

use bmicalc_core::units::parse_magnitude;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Should not panic, and anything parsed must come from a numeric prefix
    let value = parse_magnitude(text);
    if !value.is_nan() {
        let first = text.trim_start().chars().next();
        assert!(matches!(first, Some('0'..='9' | '.' | '+' | '-' | 'I')));
    }
});
