#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtag::{from_bytes, to_bytes, Compound, Value};

fuzz_target!(|v: Value| {
    let mut root = Compound::new_implicit();
    root.insert("", v);

    // Too long strings and too deep trees are refused, anything else must
    // come back intact.
    if let Ok(bs) = to_bytes(&root) {
        let decoded = from_bytes(&bs).unwrap();
        // Compared as bytes since NaN floats never compare equal.
        assert_eq!(to_bytes(&decoded).unwrap(), bs);
    }
});
