#![no_main]

use crcsum::{Crc32Digest, HexCase};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic; anything accepted must re-render to itself
    if let Ok(digest) = text.parse::<Crc32Digest>() {
        for case in [HexCase::Lower, HexCase::Upper] {
            let rendered = digest.to_hex(case);
            assert_eq!(rendered.len(), 8);
            assert_eq!(rendered.parse::<Crc32Digest>().ok(), Some(digest));
        }
    }
});
