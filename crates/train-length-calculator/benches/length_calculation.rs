// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Length calculation benchmark
//!
//! Dark trains take a single pass; fully lit trains take one pass per wagon,
//! which is the quadratic worst case.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use train_length_calculator::LengthCalculator;
use train_length_core::RingTrain;

fn bench_length_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("length_calculation");

    for length in [16usize, 256, 4096] {
        group.throughput(Throughput::Elements(length as u64));

        group.bench_with_input(BenchmarkId::new("dark", length), &length, |b, &length| {
            b.iter(|| {
                let train = RingTrain::with_length(length).unwrap();
                black_box(LengthCalculator::new(train).length())
            });
        });

        if length <= 256 {
            group.bench_with_input(BenchmarkId::new("fully_lit", length), &length, |b, &length| {
                b.iter(|| {
                    let train = RingTrain::from_lamps(vec![true; length]).unwrap();
                    black_box(LengthCalculator::new(train).length())
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_length_calculation);
criterion_main!(benches);
