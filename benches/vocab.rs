#![allow(unused)]
extern crate wordscope;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use wordscope::{Doc, Vocab, VocabConfig};

const SENTENCE: &str = "When Sebastian Thrun started working on self-driving cars at Google in 2007 \
                        few people outside of the company took him seriously";

/// Benchmark interning into a warm vocabulary (every word seen before)
fn bench_intern_warm(c: &mut Criterion) {
    let vocab = Vocab::default_shared();
    let words: Vec<&str> = SENTENCE.split(' ').collect();
    vocab.strings().intern_all(&words).unwrap();

    let mut group = c.benchmark_group("intern");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("warm", |b| {
        b.iter(|| black_box(vocab.strings().intern_all(black_box(&words)).unwrap()));
    });
    group.finish();
}

/// Benchmark document creation, sequential versus rayon batch interning
fn bench_doc_create(c: &mut Criterion) {
    let text = std::iter::repeat(SENTENCE)
        .take(200)
        .collect::<Vec<_>>()
        .join(" ");

    let mut group = c.benchmark_group("doc");
    group.throughput(Throughput::Bytes(text.len() as u64));

    let sequential = Vocab::new(VocabConfig::default().with_parallel_threshold(usize::MAX));
    group.bench_function("from_whitespace_sequential", |b| {
        b.iter(|| black_box(Doc::from_whitespace(&sequential, black_box(&text)).unwrap()));
    });

    let parallel = Vocab::new(VocabConfig::default().with_parallel_threshold(256));
    group.bench_function("from_whitespace_parallel", |b| {
        b.iter(|| black_box(Doc::from_whitespace(&parallel, black_box(&text)).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_intern_warm, bench_doc_create);
criterion_main!(benches);
