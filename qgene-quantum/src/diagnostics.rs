//! Relatório de diagnóstico da população

use qgene_collapse::MeasurementCache;
use qgene_core::prelude::*;
use qgene_entanglement::EntanglementTracker;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Retrato agregado do processador
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsReport {
    pub total_genomes: usize,
    /// Média de `coherence_level` (0 com registro vazio)
    pub average_coherence: f32,
    pub active_entanglements: usize,
    /// Média da entropia normalizada de todos os traços de todos os genomas
    pub average_superposition_complexity: f32,
    pub total_traits: usize,
    pub cached_measurements: usize,
    pub simulation_time: Timestamp,
}

impl fmt::Display for DiagnosticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Genomes:                 {}", self.total_genomes)?;
        writeln!(f, "Traits:                  {}", self.total_traits)?;
        writeln!(f, "Average coherence:       {:.4}", self.average_coherence)?;
        writeln!(f, "Active entanglements:    {}", self.active_entanglements)?;
        writeln!(
            f,
            "Superposition complexity: {:.4}",
            self.average_superposition_complexity
        )?;
        writeln!(f, "Cached measurements:     {}", self.cached_measurements)?;
        write!(f, "Simulation time:         {:.2}s", self.simulation_time)
    }
}

/// Gera relatórios sem alterar nenhum estado
pub struct DiagnosticsReporter;

impl DiagnosticsReporter {
    pub fn generate(
        store: &QuantumGenomeStore,
        tracker: &EntanglementTracker,
        cache: &MeasurementCache,
        now: Timestamp,
    ) -> DiagnosticsReport {
        let total_genomes = store.len();

        let average_coherence = if total_genomes == 0 {
            0.0
        } else {
            store.iter().map(|g| g.coherence_level).sum::<f32>() / total_genomes as f32
        };

        let mut total_traits = 0usize;
        let mut entropy_sum = 0.0f32;
        for genome in store.iter() {
            for quantum_trait in genome.traits.values() {
                total_traits += 1;
                entropy_sum += normalized_entropy(&quantum_trait.states);
            }
        }
        let average_superposition_complexity = if total_traits == 0 {
            0.0
        } else {
            entropy_sum / total_traits as f32
        };

        DiagnosticsReport {
            total_genomes,
            average_coherence,
            active_entanglements: tracker.len(),
            average_superposition_complexity,
            total_traits,
            cached_measurements: cache.len(),
            simulation_time: now,
        }
    }

    /// Entropia normalizada de um traço
    pub fn trait_entropy(
        store: &QuantumGenomeStore,
        genome_id: GenomeId,
        trait_name: &str,
    ) -> CoreResult<f32> {
        Ok(normalized_entropy(&store.trait_of(genome_id, trait_name)?.states))
    }
}
