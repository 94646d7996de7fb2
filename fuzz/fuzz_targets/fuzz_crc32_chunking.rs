#![no_main]

use arbitrary::Arbitrary;
use crcsum::{Crc32, DEFAULT_POLYNOMIAL, DEFAULT_SEED, crc32};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    polynomial: u32,
    seed: u32,
    splits: Vec<u16>,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Whole-buffer digest for the fuzzed parameters
    let mut whole = Crc32::with_params(input.polynomial, input.seed);
    let expected = whole.hash(&input.data);

    // Same bytes fed in arbitrary chunks must agree
    let mut chunked = Crc32::from_params(whole.params());
    let mut rest = &input.data[..];
    for split in input.splits {
        let at = usize::from(split) % (rest.len() + 1);
        let (head, tail) = rest.split_at(at);
        chunked.update(head);
        rest = tail;
    }
    chunked.update(rest);
    assert_eq!(chunked.finalize(), expected);

    // Reset returns to the seed
    chunked.reset();
    assert_eq!(chunked.finalize().value(), !input.seed);

    // The free function is the default engine
    let standard = Crc32::with_params(DEFAULT_POLYNOMIAL, DEFAULT_SEED).hash(&input.data);
    assert_eq!(standard.value(), crc32(&input.data));
});
