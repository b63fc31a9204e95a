#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;

use fibfast_core::{find, get, is};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use first 4 bytes as k, capped at 20000 for speed
    let k = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 20_000;

    let state = get(k);
    assert_eq!(state.index, k);

    // Value 1 sits at both index 1 and 2 and resolves to 1.
    let value = BigInt::from(state.number.clone());
    let found = find(&value).expect("F(k) must be found");
    assert_eq!(found.index, if k == 2 { 1 } else { k });

    // The value just above F(k) is never a Fibonacci number for k >= 4.
    if k >= 4 {
        assert_eq!(is(&(value + 1)), Ok(false));
    }
});
