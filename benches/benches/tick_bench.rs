//! # Tick Benchmarks
//!
//! Measures decoherence and entanglement upkeep over a bred population.
//!
//! Run: `cargo bench --bench tick_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qgene_core::prelude::*;
use qgene_quantum::BreedingProcessor;

fn population(size: u32) -> BreedingProcessor {
    let mut processor = BreedingProcessor::new(BreedingConfig::seeded(42)).unwrap();
    for id in 1..=size {
        let classical = ClassicalGenome::founder(id, "Dragon", 0.0)
            .with_trait("Size", 1.0, 0.1)
            .with_trait("Speed", 5.0, 0.1);
        processor.create_quantum_genome(&classical);
    }
    for id in 1..size {
        processor.breed(id, id + 1).unwrap();
    }
    processor
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for size in [10u32, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut processor = population(size);
            b.iter(|| black_box(processor.tick(0.1)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
