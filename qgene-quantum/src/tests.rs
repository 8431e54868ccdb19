//! Testes integrados para qgene-quantum

use crate::*;
use qgene_core::prelude::*;
use std::sync::{Arc, Mutex};

fn config(seed: u64) -> BreedingConfig {
    BreedingConfig::seeded(seed)
}

fn with_founders(config: BreedingConfig) -> BreedingProcessor {
    let mut processor = BreedingProcessor::new(config).unwrap();
    let a = ClassicalGenome::founder(1, "Dragon", 0.0)
        .with_trait("Size", 1.0, 0.1)
        .with_trait("Speed", 3.0, 0.1);
    let b = ClassicalGenome::founder(2, "Dragon", 0.0)
        .with_trait("Size", 1.5, 0.1)
        .with_trait("Strength", 0.5, 0.1);
    processor.create_quantum_genome(&a);
    processor.create_quantum_genome(&b);
    processor
}

fn assert_normalized(genome: &QuantumGenome) {
    for t in genome.traits.values() {
        assert!(
            (t.probability_sum() - 1.0).abs() < NORMALIZATION_EPSILON,
            "trait {} sums to {}",
            t.name,
            t.probability_sum()
        );
    }
}

#[test]
fn test_size_scenario_is_reproducible() {
    let run = |seed| {
        let mut processor = with_founders(config(seed));
        let child = processor.breed(1, 2).unwrap();

        let size = child.get_trait("Size").unwrap();
        assert_eq!(size.state_count(), 8);
        assert!((size.probability_sum() - 1.0).abs() < NORMALIZATION_EPSILON);

        processor.measure(child.id, "Size").unwrap()
    };

    let first = run(42);
    assert_eq!(first, run(42));
    assert!(first > 0.0 && first < 2.5, "size {first}");
}

#[test]
fn test_custom_rng_matches_seeded_config() {
    let mut seeded = with_founders(config(7));

    let mut custom =
        BreedingProcessor::with_rng(BreedingConfig::default(), Box::new(SeededRandom::new(7)))
            .unwrap();
    for genome in [
        ClassicalGenome::founder(1, "Dragon", 0.0)
            .with_trait("Size", 1.0, 0.1)
            .with_trait("Speed", 3.0, 0.1),
        ClassicalGenome::founder(2, "Dragon", 0.0)
            .with_trait("Size", 1.5, 0.1)
            .with_trait("Strength", 0.5, 0.1),
    ] {
        custom.create_quantum_genome(&genome);
    }

    let a = seeded.breed(1, 2).unwrap();
    let b = custom.breed(1, 2).unwrap();
    assert_eq!(a, b);
    assert_eq!(seeded.measure(a.id, "Size").unwrap(), custom.measure(b.id, "Size").unwrap());
}

#[test]
fn test_generation_is_monotonic() {
    let mut processor = with_founders(config(1));

    let c1 = processor.breed(1, 2).unwrap();
    let c2 = processor.breed(c1.id, 1).unwrap();
    let c3 = processor.breed(c2.id, c1.id).unwrap();

    assert_eq!(c1.generation, 1);
    assert_eq!(c2.generation, 2);
    assert_eq!(c3.generation, 3);
    assert!(c3.id > c2.id && c2.id > c1.id);
}

#[test]
fn test_offspring_is_normalized() {
    let mut processor = with_founders(config(3));
    for _ in 0..5 {
        let child = processor.breed(1, 2).unwrap();
        assert_eq!(child.traits.len(), 3);
        assert_normalized(&child);
    }
    for genome in processor.genomes() {
        assert_normalized(genome);
    }
}

#[test]
fn test_missing_parent_leaves_processor_unchanged() {
    let mut processor = with_founders(config(4));
    let count = processor.genome_count();

    let err = processor.breed(99, 1).unwrap_err();
    assert_eq!(err, BreedError::ParentNotFound(99));
    let err = processor.breed(1, 98).unwrap_err();
    assert_eq!(err, BreedError::ParentNotFound(98));

    assert_eq!(processor.genome_count(), count);
    assert!(processor.entanglements().is_empty());
    assert!(processor.drain_events().is_empty());
}

#[test]
fn test_measure_lookup_failures() {
    let mut processor = with_founders(config(5));

    assert!(matches!(
        processor.measure(77, "Size"),
        Err(QuantumError::Measure(e)) if e.is_not_found()
    ));
    assert!(matches!(
        processor.measure(1, "Wings"),
        Err(QuantumError::Measure(e)) if e.is_not_found()
    ));
}

#[test]
fn test_coherence_never_drops_below_floor() {
    let mut processor = with_founders(config(6));
    processor.breed(1, 2).unwrap();

    for _ in 0..200 {
        processor.tick(5.0);
        for genome in processor.genomes() {
            assert!(genome.coherence_level >= MIN_COHERENCE);
            assert_normalized(genome);
        }
    }

    for genome in processor.genomes() {
        assert!((genome.coherence_level - MIN_COHERENCE).abs() < 1e-6);
    }
    assert!((processor.now() - 1000.0).abs() < 1e-6);
}

#[test]
fn test_invalid_tick_is_ignored() {
    let mut processor = with_founders(config(8));
    processor.tick(2.0);

    assert_eq!(processor.tick(-1.0), TickSummary::default());
    assert_eq!(processor.tick(f32::NAN), TickSummary::default());
    assert_eq!(processor.now(), 2.0);
}

#[test]
fn test_full_strength_entanglement_expires_with_age() {
    let mut cfg = config(9);
    cfg.entanglement_strength = 1.0;
    let mut processor = with_founders(cfg);

    let child = processor.breed(1, 2).unwrap();
    // Size: dois vínculos; Speed e Strength: um cada
    assert_eq!(processor.entanglements().len(), 4);
    assert_eq!(processor.entanglements_of(child.id).len(), 4);
    assert!(child.get_trait("Size").unwrap().is_entangled());

    let formed: Vec<_> = processor
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GeneticEvent::EntanglementFormed { .. }))
        .collect();
    assert_eq!(formed.len(), 4);

    let summary = processor.tick(101.0);
    assert_eq!(summary.entanglements_pruned, 4);
    assert!(processor.entanglements().is_empty());
    for genome in processor.genomes() {
        for t in genome.traits.values() {
            assert!(t.entangled_with.is_empty());
        }
    }
}

#[test]
fn test_disabled_entanglement_forms_nothing() {
    let mut cfg = config(10);
    cfg.enable_entanglement = false;
    cfg.entanglement_strength = 1.0;
    let mut processor = with_founders(cfg);

    processor.breed(1, 2).unwrap();
    assert!(processor.entanglements().is_empty());
}

#[test]
fn test_listeners_receive_measurements() {
    let mut processor = with_founders(config(11));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    processor.subscribe(move |event| {
        if let GeneticEvent::MeasurementPerformed { genome_id, value, .. } = event {
            sink.lock().unwrap().push((*genome_id, *value));
        }
    });

    let value = processor.measure(1, "Size").unwrap();
    // Acerto de cache: sem novo evento
    assert_eq!(processor.measure(1, "Size").unwrap(), value);

    assert_eq!(seen.lock().unwrap().as_slice(), &[(1, value)]);
}

#[test]
fn test_cache_clear_forces_new_collapse() {
    let mut processor = with_founders(config(12));
    processor.measure(1, "Size").unwrap();
    assert_eq!(processor.generate_report().cached_measurements, 1);

    processor.clear_measurement_cache();
    assert_eq!(processor.generate_report().cached_measurements, 0);

    processor.measure(1, "Size").unwrap();
    let measured = processor
        .drain_events()
        .into_iter()
        .filter(|e| e.kind() == "measurement_performed")
        .count();
    assert_eq!(measured, 2);
}

#[test]
fn test_measure_all_and_peek() {
    let mut processor = with_founders(config(13));
    let before = processor.get_genome(1).cloned();

    let expected = processor.peek_expected(1, "Speed").unwrap();
    assert!((expected - 3.0).abs() < 1.0);
    assert_eq!(processor.get_genome(1).cloned(), before);

    let phenotype = processor.measure_all(1).unwrap();
    assert_eq!(phenotype.keys().collect::<Vec<_>>(), vec!["Size", "Speed"]);
}

#[test]
fn test_remove_genome_cleans_up() {
    let mut cfg = config(14);
    cfg.entanglement_strength = 1.0;
    let mut processor = with_founders(cfg);
    let child = processor.breed(1, 2).unwrap();
    processor.measure(child.id, "Size").unwrap();

    let removed = processor.remove_genome(child.id).unwrap();
    assert_eq!(removed.id, child.id);
    assert!(processor.get_genome(child.id).is_none());
    assert!(processor.entanglements().is_empty());
    assert_eq!(processor.generate_report().cached_measurements, 0);
    assert!(!processor.get_genome(1).unwrap().get_trait("Size").unwrap().is_entangled());
    assert!(processor.remove_genome(child.id).is_none());
}

#[test]
fn test_lineage_is_breadth_first_without_duplicates() {
    let mut processor = with_founders(config(15));
    let c3 = processor.breed(1, 2).unwrap();
    let c4 = processor.breed(c3.id, 1).unwrap();

    assert_eq!(processor.lineage(c4.id).unwrap(), vec![c3.id, 1, 2]);
    assert!(processor.lineage(1).unwrap().is_empty());
    assert!(processor.lineage(404).is_err());
}

#[test]
fn test_report_and_entropy() {
    let mut processor = with_founders(config(16));
    let empty = BreedingProcessor::new(config(16)).unwrap().generate_report();
    assert_eq!(empty, DiagnosticsReport::default());

    processor.breed(1, 2).unwrap();
    processor.tick(1.0);
    let report = processor.generate_report();

    assert_eq!(report.total_genomes, 3);
    assert_eq!(report.total_traits, 2 + 2 + 3);
    assert!(report.average_coherence > 0.0 && report.average_coherence <= 1.0);
    assert!((0.0..=1.0).contains(&report.average_superposition_complexity));
    assert_eq!(report.simulation_time, 1.0);

    let entropy = processor.trait_entropy(3, "Size").unwrap();
    assert!((0.0..=1.0).contains(&entropy));

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"total_genomes\":3"));
    assert!(report.to_string().contains("Genomes:"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let cfg = BreedingConfig {
        max_superposition_states: 0,
        ..BreedingConfig::default()
    };
    assert!(matches!(
        BreedingProcessor::new(cfg),
        Err(QuantumError::Core(CoreError::InvalidConfig(_)))
    ));
}

#[test]
fn test_apply_decoherence_through_processor() {
    let mut cfg = config(17);
    cfg.collapse_probability = 0.0;
    let mut processor = with_founders(cfg);
    processor.tick(100.0);

    let decay = processor.apply_decoherence(1, "Size").unwrap();
    assert!((decay - (-1.0f32).exp()).abs() < 1e-5);
    assert_normalized(processor.get_genome(1).unwrap());
    assert!(processor.apply_decoherence(1, "Wings").is_err());
}

#[test]
fn test_replaced_genome_drops_cached_measurement() {
    let mut processor = with_founders(config(18));
    let first = processor.measure(1, "Size").unwrap();
    assert!(first < 50.0);

    let replacement = ClassicalGenome::founder(1, "Dragon", 0.0).with_trait("Size", 100.0, 0.0);
    processor.create_quantum_genome(&replacement);

    let values: Vec<f32> = processor
        .get_genome(1)
        .unwrap()
        .get_trait("Size")
        .unwrap()
        .states
        .iter()
        .map(|s| s.value)
        .collect();
    let second = processor.measure(1, "Size").unwrap();

    assert!(values.contains(&second), "{second} not in {values:?}");
    assert_eq!(second, 100.0);
}

#[test]
fn test_replaced_genome_keeps_links_symmetric() {
    let mut cfg = config(19);
    cfg.entanglement_strength = 1.0;
    let mut processor = with_founders(cfg);
    let child = processor.breed(1, 2).unwrap();
    assert!(!processor.entanglements_of(1).is_empty());

    processor.create_quantum_genome(&ClassicalGenome::founder(1, "Dragon", 0.0).with_trait("Size", 1.0, 0.1));

    assert!(processor.entanglements_of(1).is_empty());
    let child_size = processor.get_genome(child.id).unwrap().get_trait("Size").unwrap();
    assert!(!child_size.entangled_with.contains(&1));
    assert!(child_size.entangled_with.contains(&2));

    for record in processor.entanglements() {
        let a = processor.get_genome(record.genome_a).unwrap();
        let b = processor.get_genome(record.genome_b).unwrap();
        assert!(a.get_trait(&record.trait_name).unwrap().entangled_with.contains(&b.id));
        assert!(b.get_trait(&record.trait_name).unwrap().entangled_with.contains(&a.id));
    }
}
