//! # Breeding Benchmarks
//!
//! Measures offspring creation and trait interference.
//!
//! Run: `cargo bench --bench breeding_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qgene_core::prelude::*;
use qgene_quantum::BreedingProcessor;
use qgene_superposition::{SuperpositionFactory, interfere};

fn processor_with_founders(states: usize) -> BreedingProcessor {
    let config = BreedingConfig {
        max_superposition_states: states,
        ..BreedingConfig::seeded(42)
    };
    let mut processor = BreedingProcessor::new(config).unwrap();
    for id in 1..=2 {
        let classical = ClassicalGenome::founder(id, "Dragon", 0.0)
            .with_trait("Size", 1.0, 0.1)
            .with_trait("Speed", 5.0, 0.1)
            .with_trait("Strength", 3.0, 0.1)
            .with_trait("Intelligence", 0.5, 0.1);
        processor.create_quantum_genome(&classical);
    }
    processor
}

/// Benchmark breed() by number of states per trait
fn bench_breed(c: &mut Criterion) {
    let mut group = c.benchmark_group("breed");

    for states in [2usize, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(states), &states, |b, &states| {
            let mut processor = processor_with_founders(states);
            b.iter(|| black_box(processor.breed(1, 2).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark interference of two 8-state traits
fn bench_interfere(c: &mut Criterion) {
    let mut rng = SeededRandom::new(7);
    let factory = SuperpositionFactory::new(8);
    let a = factory.superpose_trait(&ClassicalTrait::new("Size", 1.0, 0.1), &mut rng, 0.0);
    let b = factory.superpose_trait(&ClassicalTrait::new("Size", 1.5, 0.1), &mut rng, 0.0);

    c.bench_function("interfere_8_states", |bench| {
        bench.iter(|| black_box(interfere(&a, &b, &mut rng, 0.0)))
    });
}

criterion_group!(benches, bench_breed, bench_interfere);
criterion_main!(benches);
