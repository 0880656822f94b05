// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use boolex::query::setops::{intersect, union};
use boolex::DocId;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn posting_list(n: u32, step: u32) -> Vec<DocId> {
    (0..n).map(|i| DocId(i * step + 1)).collect()
}

fn bench_merge(c: &mut Criterion) {
    let a = posting_list(10_000, 2);
    let b = posting_list(10_000, 3);

    c.bench_function("intersect_10k", |bencher| {
        bencher.iter(|| intersect(black_box(&a), black_box(&b)))
    });

    c.bench_function("union_10k", |bencher| {
        bencher.iter(|| union(black_box(&a), black_box(&b)))
    });
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
