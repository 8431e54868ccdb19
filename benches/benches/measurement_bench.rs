//! # Measurement Benchmarks
//!
//! Measures Born-rule sampling with and without the measurement cache.
//!
//! Run: `cargo bench --bench measurement_bench`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qgene_core::prelude::*;
use qgene_quantum::BreedingProcessor;

fn processor(cache_validity_time: f32) -> BreedingProcessor {
    let config = BreedingConfig {
        cache_validity_time,
        ..BreedingConfig::seeded(42)
    };
    let mut processor = BreedingProcessor::new(config).unwrap();
    processor.create_quantum_genome(&ClassicalGenome::founder(1, "Dragon", 0.0).with_trait("Size", 1.0, 0.1));
    processor
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");

    // Cache desativado: toda medição colapsa
    group.bench_function("collapse", |b| {
        let mut processor = processor(0.0);
        b.iter(|| black_box(processor.measure(1, "Size").unwrap()))
    });

    group.bench_function("cache_hit", |b| {
        let mut processor = processor(10.0);
        processor.measure(1, "Size").unwrap();
        b.iter(|| black_box(processor.measure(1, "Size").unwrap()))
    });

    group.bench_function("peek_expected", |b| {
        let processor = processor(0.0);
        b.iter(|| black_box(processor.peek_expected(1, "Size").unwrap()))
    });

    group.finish();
}

fn bench_amplitude_ops(c: &mut Criterion) {
    let states: Vec<QuantumState> = (0..8)
        .map(|i| QuantumState::new(1.0 + i as f32, 0.0, i as f32))
        .collect();

    c.bench_function("normalize_8_states", |b| {
        b.iter(|| {
            let mut s = states.clone();
            black_box(normalize(&mut s))
        })
    });

    c.bench_function("normalized_entropy_8_states", |b| {
        let mut s = states.clone();
        normalize(&mut s);
        b.iter(|| black_box(normalized_entropy(&s)))
    });
}

criterion_group!(benches, bench_measure, bench_amplitude_ops);
criterion_main!(benches);
