//! Fábrica de superposições: genoma clássico → genoma quântico

use qgene_core::prelude::*;
use std::f32::consts::TAU;

/// Converte genomas clássicos em genomas com N estados por traço
#[derive(Debug, Clone)]
pub struct SuperpositionFactory {
    /// N: estados por traço
    state_count: usize,
}

impl SuperpositionFactory {
    /// Cria fábrica para `state_count` estados por traço
    pub fn new(state_count: usize) -> Self {
        Self { state_count }
    }

    /// Estados gerados por traço
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// Espalha um valor clássico em N estados candidatos normalizados.
    ///
    /// `value = base + N(0, 2·mutation_rate)`, `amplitude = N(0, 1)`,
    /// `phase = U(0, 2π)`.
    pub fn superpose_trait(
        &self,
        classical: &ClassicalTrait,
        rng: &mut dyn RandomnessProvider,
        now: Timestamp,
    ) -> QuantumTrait {
        let sigma = if classical.mutation_rate.is_finite() {
            (classical.mutation_rate * 2.0).max(0.0)
        } else {
            0.0
        };

        let mut states: Vec<QuantumState> = (0..self.state_count)
            .map(|_| {
                let value = rng.gaussian(classical.value, sigma);
                let amplitude = rng.gaussian(0.0, 1.0);
                let phase = rng.range(0.0, TAU);
                QuantumState::new(amplitude, phase, value)
            })
            .collect();

        if !normalize(&mut states) {
            tracing::debug!(trait_name = %classical.name, "degenerate amplitudes left unnormalized");
        }

        QuantumTrait::new(classical.name.clone(), states, now)
    }

    /// Cria genoma quântico e o insere no registro
    pub fn create_quantum_genome(
        &self,
        store: &mut QuantumGenomeStore,
        rng: &mut dyn RandomnessProvider,
        classical: &ClassicalGenome,
    ) -> QuantumGenome {
        let mut genome = QuantumGenome::new(
            classical.id,
            classical.species.clone(),
            classical.birth_time,
        );
        genome.generation = classical.generation;
        genome.parent_a = classical.parent_a;
        genome.parent_b = classical.parent_b;

        for classical_trait in &classical.traits {
            if classical_trait.mutation_rate < 0.0 {
                tracing::warn!(
                    genome_id = classical.id,
                    trait_name = %classical_trait.name,
                    rate = classical_trait.mutation_rate,
                    "negative mutation rate treated as zero"
                );
            }
            let quantum_trait = self.superpose_trait(classical_trait, rng, classical.birth_time);
            genome.insert_trait(quantum_trait);
        }

        if store.insert(genome.clone()).is_some() {
            tracing::warn!(genome_id = genome.id, "genome id already present, replaced");
        }

        tracing::debug!(
            genome_id = genome.id,
            traits = genome.traits.len(),
            species = %genome.species,
            "quantum genome created"
        );

        genome
    }
}

impl GeneticComponent for SuperpositionFactory {
    fn name(&self) -> &str {
        "SuperpositionFactory"
    }
}
