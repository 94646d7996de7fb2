//! Table-driven CRC-32 engine.
//!
//! Computes a 32-bit cyclic redundancy check using a reflected (LSB-first)
//! generator polynomial and a configurable seed. The defaults give the
//! standard CRC-32/ISO-HDLC checksum used by zlib, PNG and Ethernet.
//!
//! ## Usage
//!
//! ```
//! use crcsum::{crc32, Crc32};
//!
//! // One-shot calculation with the standard parameters
//! assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
//!
//! // Incremental calculation for streaming data
//! let mut engine = Crc32::new();
//! engine.update(b"12345");
//! engine.update(b"6789");
//! assert_eq!(engine.finalize().value(), 0xCBF4_3926);
//!
//! // Custom polynomial (CRC-32C, Castagnoli)
//! let mut engine = Crc32::with_polynomial(crcsum::CASTAGNOLI_POLYNOMIAL);
//! assert_eq!(engine.hash(b"123456789").value(), 0xE306_9283);
//! ```

use std::fmt;
use std::ops::Index;
use std::sync::{Arc, LazyLock};

use crate::digest::Crc32Digest;

/// IEEE 802.3 CRC-32 polynomial in reflected form (`0x04C11DB7` reversed).
pub const DEFAULT_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Initial register value for the standard CRC-32.
pub const DEFAULT_SEED: u32 = 0xFFFF_FFFF;

/// Castagnoli (CRC-32C) polynomial in reflected form.
pub const CASTAGNOLI_POLYNOMIAL: u32 = 0x82F6_3B78;

/// Number of entries in a lookup table, one per byte value.
pub const TABLE_SIZE: usize = 256;

/// Lookup table for the default polynomial, generated at compile time.
static STANDARD_TABLE: LookupTable = LookupTable::generate(DEFAULT_POLYNOMIAL);

static SHARED_STANDARD_TABLE: LazyLock<Arc<LookupTable>> =
    LazyLock::new(|| Arc::new(STANDARD_TABLE.clone()));

/// Precomputed per-byte CRC contributions for one polynomial.
///
/// Immutable after construction and a pure function of the polynomial, so a
/// single table can be shared between any number of engines and threads.
#[derive(Clone, PartialEq, Eq)]
pub struct LookupTable {
    polynomial: u32,
    entries: [u32; TABLE_SIZE],
}

impl LookupTable {
    /// Builds the table for `polynomial`.
    ///
    /// Each entry is the byte value after 8 reflected shift-and-XOR steps.
    pub const fn generate(polynomial: u32) -> Self {
        let mut entries = [0u32; TABLE_SIZE];
        let mut i = 0;
        while i < TABLE_SIZE {
            let mut k = i as u32;
            let mut bit = 0;
            while bit < 8 {
                if k & 1 == 1 {
                    k = (k >> 1) ^ polynomial;
                } else {
                    k >>= 1;
                }
                bit += 1;
            }
            entries[i] = k;
            i += 1;
        }
        Self {
            polynomial,
            entries,
        }
    }

    /// Returns the shared table for [`DEFAULT_POLYNOMIAL`].
    pub fn standard() -> Arc<Self> {
        Arc::clone(&SHARED_STANDARD_TABLE)
    }

    /// Returns a shareable table for `polynomial`.
    ///
    /// The default polynomial reuses the compile-time table; anything else is
    /// built on the spot.
    pub fn shared(polynomial: u32) -> Arc<Self> {
        if polynomial == DEFAULT_POLYNOMIAL {
            return Self::standard();
        }

        tracing::trace!(polynomial = polynomial, "building crc32 lookup table");
        Arc::new(Self::generate(polynomial))
    }

    /// The polynomial this table was built from.
    pub const fn polynomial(&self) -> u32 {
        self.polynomial
    }

    /// All 256 entries, indexed by byte value.
    pub const fn entries(&self) -> &[u32; TABLE_SIZE] {
        &self.entries
    }

    /// Folds one byte into `state`.
    #[inline]
    fn step(&self, state: u32, byte: u8) -> u32 {
        let index = ((state ^ u32::from(byte)) & 0xFF) as usize;
        (state >> 8) ^ self.entries[index]
    }

    #[inline]
    fn fold(&self, mut state: u32, data: &[u8]) -> u32 {
        for &byte in data {
            state = self.step(state, byte);
        }
        state
    }
}

impl Index<u8> for LookupTable {
    type Output = u32;

    fn index(&self, byte: u8) -> &u32 {
        &self.entries[usize::from(byte)]
    }
}

impl fmt::Debug for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupTable")
            .field("polynomial", &format_args!("{:#010x}", self.polynomial))
            .finish_non_exhaustive()
    }
}

/// Computes the standard CRC-32 of `data` in one shot.
///
/// Equivalent to `Crc32::new().hash(data).value()` without touching the
/// shared table handle.
pub fn crc32(data: &[u8]) -> u32 {
    !STANDARD_TABLE.fold(DEFAULT_SEED, data)
}

/// Construction parameters for a [`Crc32`] engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crc32Params {
    /// Reflected generator polynomial.
    pub polynomial: u32,
    /// Initial register value.
    pub seed: u32,
}

impl Crc32Params {
    /// CRC-32/ISO-HDLC.
    pub const STANDARD: Self = Self {
        polynomial: DEFAULT_POLYNOMIAL,
        seed: DEFAULT_SEED,
    };

    /// CRC-32C (Castagnoli).
    pub const CASTAGNOLI: Self = Self {
        polynomial: CASTAGNOLI_POLYNOMIAL,
        seed: DEFAULT_SEED,
    };

    pub const fn new(polynomial: u32, seed: u32) -> Self {
        Self { polynomial, seed }
    }
}

impl Default for Crc32Params {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Incremental CRC-32 engine.
///
/// Polynomial and seed are fixed at construction. The running state starts
/// at the seed, is advanced by [`update`](Self::update) and is only observable
/// through [`finalize`](Self::finalize). Cloning an engine shares its table
/// and copies its current state.
#[derive(Clone)]
pub struct Crc32 {
    table: Arc<LookupTable>,
    seed: u32,
    state: u32,
}

impl Crc32 {
    /// Creates an engine with [`DEFAULT_POLYNOMIAL`] and [`DEFAULT_SEED`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(LookupTable::standard(), DEFAULT_SEED)
    }

    /// Creates an engine for `polynomial` with [`DEFAULT_SEED`].
    #[must_use]
    pub fn with_polynomial(polynomial: u32) -> Self {
        Self::with_params(polynomial, DEFAULT_SEED)
    }

    /// Creates an engine for `polynomial` starting from `seed`.
    #[must_use]
    pub fn with_params(polynomial: u32, seed: u32) -> Self {
        Self::with_table(LookupTable::shared(polynomial), seed)
    }

    /// Creates an engine from a [`Crc32Params`] pair.
    #[must_use]
    pub fn from_params(params: Crc32Params) -> Self {
        Self::with_params(params.polynomial, params.seed)
    }

    /// Creates an engine over an existing table.
    #[must_use]
    pub fn with_table(table: Arc<LookupTable>, seed: u32) -> Self {
        Self {
            table,
            seed,
            state: seed,
        }
    }

    pub fn polynomial(&self) -> u32 {
        self.table.polynomial()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The polynomial and seed this engine was built with.
    pub fn params(&self) -> Crc32Params {
        Crc32Params::new(self.polynomial(), self.seed)
    }

    /// The lookup table used by this engine.
    pub fn table(&self) -> &Arc<LookupTable> {
        &self.table
    }

    /// Feeds `data` into the running state.
    ///
    /// Chunk boundaries do not matter: `update(a); update(b)` leaves the same
    /// state as `update(a ++ b)`.
    pub fn update(&mut self, data: &[u8]) {
        self.state = self.table.fold(self.state, data);
    }

    /// Returns the digest of everything fed since the last reset.
    ///
    /// The state is left untouched, so further updates continue the same
    /// computation.
    #[must_use]
    pub fn finalize(&self) -> Crc32Digest {
        Crc32Digest::from_value(!self.state)
    }

    /// Returns the state to the seed, keeping the table.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }

    /// Resets, feeds `data` and finalizes.
    pub fn hash(&mut self, data: &[u8]) -> Crc32Digest {
        self.reset();
        self.update(data);
        self.finalize()
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Crc32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crc32")
            .field("polynomial", &format_args!("{:#010x}", self.polynomial()))
            .field("seed", &format_args!("{:#010x}", self.seed))
            .finish_non_exhaustive()
    }
}

impl std::io::Write for Crc32 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    // Known test vectors from various sources (zlib, PNG)
    #[test_case(b"", 0x0000_0000; "empty")]
    #[test_case(b"123456789", 0xCBF4_3926; "check string")]
    #[test_case(b"a", 0xE8B7_BE43; "single character")]
    #[test_case(b"abc", 0x3524_41C2; "abc")]
    #[test_case(b"The quick brown fox jumps over the lazy dog", 0x414F_A339; "quick brown fox")]
    fn standard_vectors(data: &[u8], expected: u32) {
        assert_eq!(crc32(data), expected);
        assert_eq!(Crc32::new().hash(data).value(), expected);
    }

    #[test]
    fn check_value_is_big_endian() {
        let digest = Crc32::new().hash(b"123456789");
        assert_eq!(digest.to_bytes(), [0xCB, 0xF4, 0x39, 0x26]);
    }

    #[test]
    fn empty_input_yields_inverted_seed() {
        for seed in [DEFAULT_SEED, 0, 0x1234_5678, 0xDEAD_BEEF] {
            let mut engine = Crc32::with_params(DEFAULT_POLYNOMIAL, seed);
            assert_eq!(engine.hash(b"").value(), !seed);
        }
    }

    #[test]
    fn castagnoli_check_value() {
        let mut engine = Crc32::from_params(Crc32Params::CASTAGNOLI);
        assert_eq!(engine.hash(b"123456789").value(), 0xE306_9283);
    }

    #[test]
    fn single_argument_constructor_honors_polynomial() {
        let engine = Crc32::with_polynomial(CASTAGNOLI_POLYNOMIAL);
        assert_eq!(engine.polynomial(), CASTAGNOLI_POLYNOMIAL);
        assert_eq!(engine.seed(), DEFAULT_SEED);
    }

    #[test]
    fn params_round_trip_through_engine() {
        let params = Crc32Params::new(CASTAGNOLI_POLYNOMIAL, 0x1234_5678);
        let engine = Crc32::from_params(params);
        assert_eq!(engine.params(), params);
        assert_eq!(Crc32::new().params(), Crc32Params::STANDARD);

        let mut rebuilt = Crc32::from_params(engine.params());
        assert_eq!(rebuilt.hash(b"123456789"), engine.clone().hash(b"123456789"));
    }

    #[test]
    fn standard_table_entries() {
        let table = LookupTable::standard();
        assert_eq!(table[0], 0x0000_0000);
        assert_eq!(table[1], 0x7707_3096);
        assert_eq!(table[128], DEFAULT_POLYNOMIAL);
        assert_eq!(table[255], 0x2D02_EF8D);
    }

    #[test]
    fn table_is_pure_function_of_polynomial() {
        for polynomial in [DEFAULT_POLYNOMIAL, CASTAGNOLI_POLYNOMIAL, 0, 1, u32::MAX] {
            assert_eq!(
                LookupTable::generate(polynomial),
                LookupTable::generate(polynomial)
            );
        }
        assert_eq!(*LookupTable::standard(), STANDARD_TABLE);
        assert_eq!(*LookupTable::shared(DEFAULT_POLYNOMIAL), STANDARD_TABLE);
    }

    #[test]
    fn degenerate_zero_polynomial_is_accepted() {
        let table = LookupTable::generate(0);
        assert!(table.entries().iter().all(|&entry| entry == 0));

        // With an all-zero table the state just shifts right each byte.
        let mut engine = Crc32::with_params(0, DEFAULT_SEED);
        assert_eq!(engine.hash(&[0u8; 4]).value(), !0);
    }

    #[test]
    fn finalize_does_not_consume_state() {
        let mut engine = Crc32::new();
        engine.update(b"12345");
        let partial = engine.finalize();
        assert_eq!(partial, engine.finalize());

        engine.update(b"6789");
        assert_eq!(engine.finalize().value(), 0xCBF4_3926);
    }

    #[test]
    fn reset_reuses_table_for_independent_inputs() {
        let mut engine = Crc32::with_polynomial(CASTAGNOLI_POLYNOMIAL);
        let table = Arc::clone(engine.table());

        let first = engine.hash(b"first input");
        engine.update(b"leftover state");
        engine.reset();
        engine.update(b"first input");

        assert_eq!(engine.finalize(), first);
        assert!(Arc::ptr_eq(&table, engine.table()));
    }

    #[test]
    fn test_chunking_invariant() {
        let data = b"The quick brown fox jumps over the lazy dog";

        for split in 0..=data.len() {
            let mut engine = Crc32::new();
            engine.update(&data[..split]);
            engine.update(&data[split..]);
            assert_eq!(engine.finalize().value(), crc32(data));
        }
    }

    #[test]
    fn single_bit_flips_change_digest() {
        let data: Vec<u8> = (0..64u8).map(|i| i.wrapping_mul(37)).collect();
        let baseline = crc32(&data);

        for byte in (0..data.len()).step_by(7) {
            for bit in 0..8 {
                let mut flipped = data.clone();
                flipped[byte] ^= 1 << bit;
                assert_ne!(
                    crc32(&flipped),
                    baseline,
                    "flip of bit {bit} in byte {byte} went undetected"
                );
            }
        }
    }

    #[test]
    fn clones_share_table_and_fork_state() {
        let mut prototype = Crc32::with_polynomial(CASTAGNOLI_POLYNOMIAL);
        prototype.update(b"prefix ");

        let mut fork = prototype.clone();
        fork.update(b"suffix");
        prototype.update(b"suffix");

        assert_eq!(fork.finalize(), prototype.finalize());
        assert!(Arc::ptr_eq(fork.table(), prototype.table()));
    }

    #[test]
    fn shared_table_across_threads() {
        let table = LookupTable::shared(CASTAGNOLI_POLYNOMIAL);
        let inputs: Vec<Vec<u8>> = (0..8u8).map(|n| vec![n; 1024]).collect();

        let expected: Vec<_> = inputs
            .iter()
            .map(|input| Crc32::with_table(Arc::clone(&table), DEFAULT_SEED).hash(input))
            .collect();

        let actual: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| {
                    let table = Arc::clone(&table);
                    scope.spawn(move || Crc32::with_table(table, DEFAULT_SEED).hash(input))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("worker panicked"))
                .collect()
        });

        assert_eq!(actual, expected);
    }

    #[test]
    fn io_write_feeds_engine() {
        use std::io::Write;

        let mut engine = Crc32::new();
        engine.write_all(b"1234").expect("write");
        write!(engine, "{}", 56789).expect("write");
        engine.flush().expect("flush");

        assert_eq!(engine.finalize().value(), 0xCBF4_3926);
    }

    #[test]
    fn debug_hides_running_state() {
        let mut engine = Crc32::new();
        engine.update(b"secret-ish");
        let rendered = format!("{engine:?}");
        assert!(rendered.contains("0xedb88320"));
        assert!(!rendered.contains("state"));
    }

    proptest! {
        #[test]
        fn prop_chunking_invariant(
            data in proptest::collection::vec(any::<u8>(), 0..512),
            split in any::<prop::sample::Index>(),
            polynomial in any::<u32>(),
            seed in any::<u32>(),
        ) {
            let split = split.index(data.len() + 1);
            let mut chunked = Crc32::with_params(polynomial, seed);
            chunked.update(&data[..split]);
            chunked.update(&data[split..]);

            let mut whole = Crc32::with_params(polynomial, seed);
            prop_assert_eq!(chunked.finalize(), whole.hash(&data));
        }

        #[test]
        fn prop_fresh_engines_agree(
            data in proptest::collection::vec(any::<u8>(), 0..512),
            polynomial in any::<u32>(),
            seed in any::<u32>(),
        ) {
            let a = Crc32::with_params(polynomial, seed).hash(&data);
            let b = Crc32::with_params(polynomial, seed).hash(&data);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_oneshot_matches_engine(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(Crc32::new().hash(&data).value(), crc32(&data));
        }
    }
}
