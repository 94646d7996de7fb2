//! CRC-32 throughput benchmarks.
//!
//! Establishes baselines for the table-driven engine across input sizes and
//! compares the compile-time default table with runtime-built tables.

use std::hint::black_box;
use std::sync::Arc;

use crcsum::{CASTAGNOLI_POLYNOMIAL, Crc32, DEFAULT_SEED, LookupTable, crc32};
use crcsum_bench::{SIZES, payload};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

// ============================================================================
// One-shot
// ============================================================================

fn bench_crc32_oneshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc32_oneshot");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data = payload(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(crc32(black_box(data))));
        });
    }

    group.finish();
}

// ============================================================================
// Engine
// ============================================================================

fn bench_engine_polynomials(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc32_engine");

    for (name, polynomial) in [
        ("iso_hdlc", crcsum::DEFAULT_POLYNOMIAL),
        ("castagnoli", CASTAGNOLI_POLYNOMIAL),
    ] {
        for size in SIZES {
            group.throughput(Throughput::Bytes(size as u64));
            let data = payload(size);
            let mut engine = Crc32::with_polynomial(polynomial);

            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| black_box(engine.hash(black_box(data))));
            });
        }
    }

    group.finish();
}

fn bench_chunked_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc32_chunked");
    let data = payload(1024 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for chunk in [64, 4096, 65536] {
        let mut engine = Crc32::new();
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &data, |b, data| {
            b.iter(|| {
                engine.reset();
                for piece in data.chunks(chunk) {
                    engine.update(black_box(piece));
                }
                black_box(engine.finalize())
            });
        });
    }

    group.finish();
}

// ============================================================================
// Table construction
// ============================================================================

fn bench_table_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc32_table");

    group.bench_function("generate", |b| {
        b.iter(|| black_box(LookupTable::generate(black_box(CASTAGNOLI_POLYNOMIAL))));
    });

    let shared = LookupTable::shared(CASTAGNOLI_POLYNOMIAL);
    group.bench_function("engine_from_shared_table", |b| {
        b.iter(|| black_box(Crc32::with_table(Arc::clone(&shared), DEFAULT_SEED)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_crc32_oneshot,
    bench_engine_polynomials,
    bench_chunked_update,
    bench_table_construction,
);
criterion_main!(benches);
