//! Benchmarks for murmurcode.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use murmurcode::{BASE62, encode, hash128, hash32};

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");

    for size in [16, 256, 4 * 1024, 64 * 1024] {
        // Deterministic pseudo-random data
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(format!("x86_32_{size}b"), &data, |b, data| {
            b.iter(|| hash32(black_box(data), 0));
        });
        group.bench_with_input(format!("x64_128_{size}b"), &data, |b, data| {
            b.iter(|| hash128(black_box(data)));
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    group.bench_function("base62_u32", |b| {
        b.iter(|| encode(black_box(0xba6b_d213), &BASE62));
    });
    group.bench_function("base62_u64_max", |b| {
        b.iter(|| encode(black_box(u64::MAX), &BASE62));
    });
    group.bench_function("url_to_code", |b| {
        let url = "https://example.com/some/fairly/long/path?with=query&and=more";
        b.iter(|| encode(u64::from(hash32(black_box(url), 0)), &BASE62));
    });

    group.finish();
}

criterion_group!(benches, bench_hash, bench_encode);
criterion_main!(benches);
