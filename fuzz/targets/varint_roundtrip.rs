#![no_main]

use libfuzzer_sys::fuzz_target;
use zumic_quicklist::varint;

// Forward and reverse encode/decode must round-trip for every u64, and
// `width` must match the encoded length.
fuzz_target!(|value: u64| {
    let mut fwd = Vec::new();
    varint::append(&mut fwd, value);
    assert_eq!(fwd.len(), varint::width(value));
    assert_eq!(varint::read(&fwd), Some((value, fwd.len())));

    let mut rev = Vec::new();
    varint::append_reverse(&mut rev, value);
    assert_eq!(varint::read_reverse(&rev), Some((value, rev.len())));
});
