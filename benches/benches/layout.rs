// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use shelfside_layout::{Book, HeightScaling, LayoutConfig, LayoutMemo, compute_layout};

fn library(n: usize) -> Vec<Book> {
    (0..n)
        .map(|i| {
            let w = 105.0 + (i % 9) as f64 * 9.0;
            let h = 170.0 + (i % 6) as f64 * 15.0;
            Book::new(format!("isbn-{i:05}"), w, h, 12.0 + (i % 4) as f64 * 6.0)
        })
        .collect()
}

fn bench_compute_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/compute");

    // Layout is O(n); throughput should hold flat across sizes.
    for len in [512_usize, 2_048, 8_192, 32_768] {
        let books = library(len);
        group.throughput(Throughput::Elements(len as u64));

        for (name, config) in [
            ("proportional", LayoutConfig::default()),
            (
                "uniform",
                LayoutConfig {
                    height_scaling: HeightScaling::Uniform,
                    ..LayoutConfig::default()
                },
            ),
        ] {
            group.bench_with_input(BenchmarkId::new(name, len), &books, |b, books| {
                b.iter(|| black_box(compute_layout(books, 1_100.0, &config)));
            });
        }
    }
    group.finish();
}

fn bench_memo_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/memo_hit");

    // A cache hit should cost only the fingerprint pass over the inputs.
    for len in [2_048_usize, 32_768] {
        let books = library(len);
        let config = LayoutConfig::default();
        let mut memo = LayoutMemo::new();
        let _ = memo.layout(&books, 1_100.0, &config);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &books, |b, books| {
            b.iter(|| {
                let items = memo.layout(books, 1_100.0, &config);
                black_box(items.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_layout, bench_memo_hit);
criterion_main!(benches);
