//! Motor de medição (regra de Born + colapso parcial)

use crate::cache::MeasurementCache;
use crate::decoherence::apply_decoherence;
use crate::error::{MeasureError, MeasureResult};
use qgene_core::prelude::*;
use std::collections::BTreeMap;

/// Mede traços: amostra um valor, aplica decoerência e colapsa parcialmente.
#[derive(Debug, Clone)]
pub struct MeasurementEngine {
    cache: MeasurementCache,
    /// Probabilidade do estado medido após o colapso
    stability: f32,
    decoherence_rate: f32,
    /// Medições efetivas (sem contar acertos de cache)
    collapses: u64,
    cache_hits: u64,
}

impl MeasurementEngine {
    pub fn new(stability: f32, decoherence_rate: f32, cache_validity: f32) -> Self {
        Self {
            cache: MeasurementCache::new(cache_validity),
            stability,
            decoherence_rate,
            collapses: 0,
            cache_hits: 0,
        }
    }

    /// Cria a partir da configuração do processador
    pub fn from_config(config: &BreedingConfig) -> Self {
        Self::new(
            config.superposition_stability,
            config.decoherence_rate,
            config.cache_validity_time,
        )
    }

    /// Mede um traço.
    ///
    /// Falhas de lookup não alteram nenhum estado. Acerto de cache devolve o
    /// valor anterior sem efeitos colaterais.
    pub fn measure(
        &mut self,
        store: &mut QuantumGenomeStore,
        rng: &mut dyn RandomnessProvider,
        events: &mut EventBus,
        genome_id: GenomeId,
        trait_name: &str,
        now: Timestamp,
    ) -> MeasureResult<f32> {
        let genome = store.genome_mut(genome_id)?;
        let quantum_trait = genome.get_trait(trait_name)?;

        if let Some(value) = self.cache.lookup(genome_id, trait_name, genome.last_measurement, now) {
            self.cache_hits += 1;
            tracing::trace!(genome_id, trait_name, value, "measurement cache hit");
            return Ok(value);
        }

        let r = rng.next_f32();
        let index = sample_index(&quantum_trait.states, r).ok_or_else(|| MeasureError::EmptyTrait {
            genome_id,
            trait_name: trait_name.to_string(),
        })?;
        let value = quantum_trait.states[index].value;

        apply_decoherence(genome, trait_name, now, self.decoherence_rate, rng)?;
        collapse_to_state(genome.get_trait_mut(trait_name)?, index, self.stability, now);
        genome.last_measurement = now;

        debug_assert!(
            genome.get_trait(trait_name)?.is_normalized(1e-4),
            "collapse must keep probabilities normalized"
        );

        self.collapses += 1;
        self.cache.insert(genome_id, trait_name, value, now);
        events.emit(GeneticEvent::MeasurementPerformed {
            genome_id,
            trait_name: trait_name.to_string(),
            value,
        });
        tracing::debug!(genome_id, trait_name, value, index, "trait measured");

        Ok(value)
    }

    /// Mede todos os traços do genoma (ordem alfabética)
    pub fn measure_all(
        &mut self,
        store: &mut QuantumGenomeStore,
        rng: &mut dyn RandomnessProvider,
        events: &mut EventBus,
        genome_id: GenomeId,
        now: Timestamp,
    ) -> MeasureResult<BTreeMap<String, f32>> {
        let names: Vec<String> = store.genome(genome_id)?.traits.keys().cloned().collect();

        let mut phenotype = BTreeMap::new();
        for name in names {
            let value = self.measure(store, rng, events, genome_id, &name, now)?;
            phenotype.insert(name, value);
        }
        Ok(phenotype)
    }

    /// Valor esperado do traço, sem colapsar nem tocar o cache
    pub fn peek_expected(
        &self,
        store: &QuantumGenomeStore,
        genome_id: GenomeId,
        trait_name: &str,
    ) -> MeasureResult<f32> {
        let quantum_trait = store.trait_of(genome_id, trait_name)?;
        Ok(expected_value(&quantum_trait.states))
    }

    pub fn cache(&self) -> &MeasurementCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut MeasurementCache {
        &mut self.cache
    }

    /// Medições que colapsaram um traço
    pub fn collapses(&self) -> u64 {
        self.collapses
    }

    /// Medições servidas pelo cache
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }
}

impl GeneticComponent for MeasurementEngine {
    fn name(&self) -> &str {
        "MeasurementEngine"
    }
}
