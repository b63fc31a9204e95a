#![no_main]

use libfuzzer_sys::fuzz_target;

use fibfast_core::input::{parse_count, parse_index, parse_value};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Should not panic; anything accepted must agree with plain u64 parsing.
    if let Ok(k) = parse_index("k", text) {
        let plain = text.trim();
        let plain = plain.strip_prefix('+').unwrap_or(plain);
        assert_eq!(plain.parse::<u64>().ok(), Some(k));
    }
    let _ = parse_count(text);
    let _ = parse_value(Some(text));
});
