//! Criterion benchmarks for contraction-fix.
//!
//! Covers single-text expansion and contraction, batch processing, preview,
//! and engine construction.

use contraction_fix::prelude::*;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Generate test sentences for benchmarking.
fn generate_test_texts(count: usize) -> Vec<String> {
    let words = vec![
        "I'm", "can't", "the", "it's", "they're", "going", "won't", "idk", "John's", "y'all",
        "we'll", "home", "today's", "btw", "house", "shouldn't", "gotta", "doin'", "and", "you're",
        "weather", "Sam's", "let's", "tbh",
    ];

    let mut texts = Vec::with_capacity(count);
    for i in 0..count {
        let length = 10 + (i % 30);
        let mut sentence = Vec::with_capacity(length);
        for j in 0..length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            sentence.push(words[word_idx]);
        }
        texts.push(sentence.join(" "));
    }

    texts
}

/// Fixer with memoization disabled so every iteration does the work.
fn uncached_fixer() -> ContractionFixer {
    ContractionFixer::new(FixerConfig::default().with_cache_size(0)).unwrap()
}

fn bench_fix(c: &mut Criterion) {
    let mut group = c.benchmark_group("fix");

    let fixer = uncached_fixer();
    let cached = ContractionFixer::new(FixerConfig::default()).unwrap();
    let texts = generate_test_texts(1000);

    group.bench_function("fix_single_text", |b| {
        b.iter(|| black_box(fixer.fix(black_box(&texts[0]))))
    });

    group.bench_function("fix_single_text_cached", |b| {
        b.iter(|| black_box(cached.fix(black_box(&texts[0]))))
    });

    group.bench_function("preview_single_text", |b| {
        b.iter(|| black_box(fixer.preview(black_box(&texts[1]), 10)))
    });

    group.throughput(Throughput::Elements(1000));
    group.bench_function("fix_sequential_1000", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(fixer.fix(black_box(text)));
            }
        })
    });

    group.bench_function("fix_batch_1000", |b| {
        b.iter(|| black_box(fixer.fix_batch(black_box(&texts[..]))))
    });

    group.finish();
}

fn bench_contract(c: &mut Criterion) {
    let mut group = c.benchmark_group("contract");

    let fixer = uncached_fixer();
    let expanded = fixer.fix_batch(&generate_test_texts(1000)[..]);

    group.bench_function("contract_single_text", |b| {
        b.iter(|| black_box(fixer.contract(black_box(&expanded[0]))))
    });

    group.throughput(Throughput::Elements(1000));
    group.bench_function("contract_batch_1000", |b| {
        b.iter(|| black_box(fixer.contract_batch(black_box(&expanded[..]))))
    });

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.sample_size(20);

    group.bench_function("load_bundled_vocabulary", |b| {
        b.iter(|| black_box(ContractionFixer::new(FixerConfig::default()).unwrap()))
    });

    // First call after a mutation pays for recompiling the automaton.
    group.bench_function("fix_after_mutation", |b| {
        b.iter_batched(
            || {
                let fixer = uncached_fixer();
                fixer.add_contraction("gonna", "going to");
                fixer
            },
            |fixer| black_box(fixer.fix("I'm gonna go")),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_fix, bench_contract, bench_construction);

criterion_main!(benches);
