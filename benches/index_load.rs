// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use boolex::dict::TermDictionary;
use boolex::forward::ForwardIndex;
use boolex::{evaluate, DocId, LoadedIndex};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_sample_index(path: &std::path::Path) {
    let mut dict = TermDictionary::new();
    let mut forward = ForwardIndex::new();
    for doc in 1..=2_000u32 {
        forward.add(DocId(doc), &format!("https://example.com/{doc}"), 4);
        for term in ["alpha", "beta", "gamma", "delta"] {
            dict.add_term(term.as_bytes(), DocId(doc));
        }
    }
    boolex::binary::write_index(path, dict, &forward).unwrap();
}

fn bench_load_and_query(c: &mut Criterion) {
    let path = std::env::temp_dir().join("boolex_bench_index.bin");
    build_sample_index(&path);

    c.bench_function("load_2k_docs", |b| {
        b.iter(|| LoadedIndex::load(black_box(&path)).unwrap())
    });

    let index = LoadedIndex::load(&path).unwrap();
    c.bench_function("query_alpha_and_beta", |b| {
        b.iter(|| {
            evaluate(
                black_box("alpha && beta"),
                index.document_count() as u32,
                |w| index.lookup_term(w).map(|s| s.to_vec()).unwrap_or_default(),
            )
        })
    });

    let _ = std::fs::remove_file(&path);
}

criterion_group!(benches, bench_load_and_query);
criterion_main!(benches);
