// Copyright 2025 the Shelfside Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use shelfside_layout::{Book, LayoutConfig, LayoutItem, compute_layout};
use shelfside_virtual::{
    DEFAULT_CHUNK_SIZE, VisibilityParams, build_chunks, compute_visible_chunks,
};

fn laid_out(n: usize) -> Vec<LayoutItem> {
    let books: Vec<Book> = (0..n)
        .map(|i| Book::new(format!("b{i}"), 120.0 + (i % 5) as f64 * 10.0, 190.0, 15.0))
        .collect();
    compute_layout(&books, 1_000.0, &LayoutConfig::default())
}

fn bench_build_chunks(c: &mut Criterion) {
    let mut group = c.benchmark_group("virtual/build_chunks");

    for len in [2_048_usize, 32_768, 131_072] {
        let items = laid_out(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter(|| black_box(build_chunks(items, DEFAULT_CHUNK_SIZE)));
        });
    }
    group.finish();
}

fn bench_visibility_decision(c: &mut Criterion) {
    let mut group = c.benchmark_group("virtual/visible_chunks");

    // The decision is O(chunk_count), not O(item_count): the 131k-item shelf
    // should cost roughly 64x the 2k one, not 64x per item.
    for len in [2_048_usize, 32_768, 131_072] {
        let items = laid_out(len);
        let chunks = build_chunks(&items, DEFAULT_CHUNK_SIZE);
        let total = chunks.iter().fold(0.0_f64, |acc, c| acc.max(c.end_y));
        let params = VisibilityParams::default();

        group.throughput(Throughput::Elements(chunks.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &chunks, |b, chunks| {
            let mut offset = 0.0;
            b.iter(|| {
                // Walk the scroll range so the branch pattern varies.
                offset = (offset + 700.0) % total;
                black_box(compute_visible_chunks(chunks, offset, 700.0, &params, Some(0)));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_chunks, bench_visibility_decision);
criterion_main!(benches);
