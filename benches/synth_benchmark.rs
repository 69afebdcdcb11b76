//! Benchmarks for instruction synthesis and encoding.

#![allow(missing_docs)] // Benchmark macros generate undocumented functions

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rvgen::Synthesizer;
use rvgen::isa::format;

fn bench_synthesize(c: &mut Criterion) {
    let mut synth = Synthesizer::new(42);

    c.bench_function("synthesize_1k", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                let _ = black_box(synth.synthesize());
            }
        });
    });
}

fn bench_encoders(c: &mut Criterion) {
    c.bench_function("encode_r", |b| {
        b.iter(|| {
            black_box(format::encode_r(
                black_box(0b010_0000),
                5,
                3,
                0b101,
                2,
                0b011_0011,
            ))
        });
    });

    c.bench_function("encode_j", |b| {
        b.iter(|| black_box(format::encode_j(black_box(-4096), 1, 0b110_1111)));
    });
}

criterion_group!(benches, bench_synthesize, bench_encoders);
criterion_main!(benches);
