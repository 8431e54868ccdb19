//! Agendador de decoerência: perda contínua de coerência e medições forçadas

use qgene_collapse::MeasurementEngine;
use qgene_core::prelude::*;

pub use qgene_collapse::{apply_decoherence, decay_factor};

/// Abaixo desta coerência o genoma passa a sofrer medições espontâneas
pub const LOW_COHERENCE_THRESHOLD: f32 = 0.3;

/// Resultado de um passo do agendador
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecoherenceStep {
    /// Genomas abaixo do limiar de coerência
    pub low_coherence_genomes: usize,
    /// Medições espontâneas concluídas
    pub forced_measurements: usize,
}

/// Aplica a passagem do tempo à coerência dos genomas
#[derive(Debug, Clone)]
pub struct DecoherenceScheduler {
    /// Perda de coerência por segundo
    decoherence_rate: f32,
    /// Chance por segundo de medir cada traço de um genoma pouco coerente
    collapse_probability: f32,
}

impl DecoherenceScheduler {
    pub fn new(decoherence_rate: f32, collapse_probability: f32) -> Self {
        Self {
            decoherence_rate,
            collapse_probability,
        }
    }

    pub fn from_config(config: &BreedingConfig) -> Self {
        Self::new(config.decoherence_rate, config.collapse_probability)
    }

    pub fn decoherence_rate(&self) -> f32 {
        self.decoherence_rate
    }

    /// Um passo de `delta_time` segundos.
    ///
    /// Primeiro reduz a coerência de todos os genomas, depois sorteia quais
    /// traços dos genomas pouco coerentes serão medidos, e só então mede.
    #[allow(clippy::too_many_arguments)]
    pub fn tick(
        &self,
        store: &mut QuantumGenomeStore,
        measurement: &mut MeasurementEngine,
        rng: &mut dyn RandomnessProvider,
        events: &mut EventBus,
        delta_time: f32,
        now: Timestamp,
    ) -> DecoherenceStep {
        let loss = self.decoherence_rate * delta_time;
        for genome in store.iter_mut() {
            genome.reduce_coherence(loss);
        }

        let chance = self.collapse_probability * delta_time;
        let mut step = DecoherenceStep::default();
        let mut forced = Vec::new();

        for genome in store.iter() {
            if genome.coherence_level >= LOW_COHERENCE_THRESHOLD {
                continue;
            }
            step.low_coherence_genomes += 1;
            for name in genome.trait_names() {
                if rng.chance(chance) {
                    forced.push((genome.id, name.to_string()));
                }
            }
        }

        for (genome_id, trait_name) in forced {
            match measurement.measure(store, rng, events, genome_id, &trait_name, now) {
                Ok(value) => {
                    step.forced_measurements += 1;
                    tracing::trace!(genome_id, trait_name = %trait_name, value, "spontaneous collapse");
                }
                Err(e) => {
                    tracing::warn!(genome_id, trait_name = %trait_name, error = %e, "spontaneous collapse failed");
                }
            }
        }

        step
    }

    /// Decoerência pontual de um traço pelo tempo desde o último colapso
    pub fn apply(
        &self,
        store: &mut QuantumGenomeStore,
        rng: &mut dyn RandomnessProvider,
        genome_id: GenomeId,
        trait_name: &str,
        now: Timestamp,
    ) -> CoreResult<f32> {
        let genome = store.genome_mut(genome_id)?;
        apply_decoherence(genome, trait_name, now, self.decoherence_rate, rng)
    }
}

impl GeneticComponent for DecoherenceScheduler {
    fn name(&self) -> &str {
        "DecoherenceScheduler"
    }
}
