//! Big Integer Benchmarks
//!
//! Run with: `cargo bench --package kestrel-bigint`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kestrel_bigint::UnsignedBigInteger;

fn value_with_words(count: usize) -> UnsignedBigInteger {
    let words = (0..count as u32)
        .map(|i| i.wrapping_mul(0x9E37_79B9) | 1)
        .collect();
    UnsignedBigInteger::from_words(words)
}

fn bench_add_sub(c: &mut Criterion) {
    let mut group = c.benchmark_group("bigint_add_sub");

    for words in [4, 32, 256] {
        let a = value_with_words(words);
        let b = value_with_words(words / 2);

        group.bench_with_input(BenchmarkId::new("add", words), &words, |bench, _| {
            bench.iter(|| black_box(&a).add(black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("sub", words), &words, |bench, _| {
            bench.iter(|| black_box(&a).sub(black_box(&b)))
        });
    }

    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("bigint_multiply");

    for words in [1, 4, 16] {
        let a = value_with_words(words);
        let b = value_with_words(words);

        group.bench_with_input(BenchmarkId::from_parameter(words), &words, |bench, _| {
            bench.iter(|| black_box(&a).multiply(black_box(&b)))
        });
    }

    group.finish();
}

fn bench_shift_left(c: &mut Criterion) {
    let value = value_with_words(64);

    c.bench_function("bigint_shift_left_word_aligned", |b| {
        b.iter(|| black_box(&value).shift_left(black_box(128)))
    });
    c.bench_function("bigint_shift_left_unaligned", |b| {
        b.iter(|| black_box(&value).shift_left(black_box(131)))
    });
}

criterion_group!(benches, bench_add_sub, bench_multiply, bench_shift_left);
criterion_main!(benches);
