#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtag::load::load_root;

fuzz_target!(|data: &[u8]| {
    let _ = load_root(data);
});
