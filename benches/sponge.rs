//! Throughput of the permutation-bound hashes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use keccak_sponge::{KangarooTwelve, Kmac256, Sha3_256, Shake128, TurboShake128};
use std::hint::black_box;

const SIZES: &[usize] = &[64, 1024, 16384, 65536];

fn generate_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("keccak_p1600");
    for rounds in [12, 24] {
        group.bench_function(BenchmarkId::from_parameter(rounds), |b| {
            let mut a = [0u64; 25];
            b.iter(|| keccak_sponge::keccak_p::keccak_p1600(black_box(&mut a), rounds))
        });
    }
    group.finish();
}

fn bench_hashes(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash");

    for &size in SIZES {
        let data = generate_data(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("sha3_256", size), &data, |b, data| {
            b.iter(|| Sha3_256::digest(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("shake128", size), &data, |b, data| {
            let mut out = [0u8; 32];
            b.iter(|| Shake128::digest_into(black_box(data), &mut out))
        });

        group.bench_with_input(BenchmarkId::new("kmac256", size), &data, |b, data| {
            b.iter(|| {
                let mut mac = Kmac256::new(b"key", b"", 64);
                mac.update(black_box(data));
                mac.sum_in()
            })
        });

        group.bench_with_input(BenchmarkId::new("turboshake128", size), &data, |b, data| {
            let mut out = [0u8; 32];
            b.iter(|| TurboShake128::digest_into(black_box(data), 0x1f, &mut out))
        });

        group.bench_with_input(BenchmarkId::new("kt128", size), &data, |b, data| {
            let mut out = [0u8; 32];
            b.iter(|| KangarooTwelve::digest_into(black_box(data), b"", &mut out))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_permutation, bench_hashes);
criterion_main!(benches);
