#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtag::de::from_bytes_with_opts;
use nbtag::{to_bytes, DecodeOpts};

fuzz_target!(|data: &[u8]| {
    let root = from_bytes_with_opts(data, DecodeOpts::new().max_seq_len(100));
    if let Ok(root) = root {
        let bs = to_bytes(&root).unwrap();
        let again = from_bytes_with_opts(&bs, DecodeOpts::new().max_seq_len(100)).unwrap();
        assert_eq!(to_bytes(&again).unwrap(), bs);
    }
});
