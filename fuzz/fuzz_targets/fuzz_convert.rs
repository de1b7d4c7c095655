//! Fuzz target: `convert`
//!
//! Drives arbitrary UTF-8 field text through the converter and asserts
//! that it never panics, only ever yields an empty label or a label
//! ending in the degree suffix, and gives the same answer twice.
//!
//! cargo fuzz run fuzz_convert

#![no_main]

use libfuzzer_sys::fuzz_target;
use tempconv::convert::convert;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    let out = convert(text);
    assert!(
        out.is_empty() || out.ends_with('°'),
        "unexpected label {out:?}"
    );
    assert_eq!(out, convert(text), "conversion must be deterministic");
});
