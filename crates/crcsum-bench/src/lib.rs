//! # crcsum-bench: throughput benchmarks for crcsum
//!
//! ## Benchmarks
//!
//! - **crc32**: one-shot and incremental hashing, default and custom tables
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p crcsum-bench
//!
//! # Save baseline for comparison
//! cargo bench -p crcsum-bench --bench crc32 -- --save-baseline main
//!
//! # Compare against baseline
//! cargo bench -p crcsum-bench --bench crc32 -- --baseline main
//! ```

/// Input sizes exercised by the throughput groups, in bytes.
pub const SIZES: [usize; 5] = [64, 1024, 16 * 1024, 256 * 1024, 1024 * 1024];

/// Deterministic, non-constant payload of `size` bytes.
///
/// Constant inputs would let a table-driven loop hit the same cache line
/// every iteration.
pub fn payload(size: usize) -> Vec<u8> {
    let mut state: u32 = 0x9E37_79B9;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}
