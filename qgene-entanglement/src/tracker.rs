//! Rastreador de emaranhamentos (arena plana + referências por ID)

use crate::error::{EntanglementError, EntanglementResult};
use crate::record::QuantumEntanglement;
use qgene_core::prelude::*;

/// Dono de todos os vínculos entre genomas.
///
/// Cada traço guarda apenas o ID do parceiro em `entangled_with`; o vínculo
/// lógico existe uma única vez, aqui.
#[derive(Debug, Clone)]
pub struct EntanglementTracker {
    records: Vec<QuantumEntanglement>,
    /// Decaimento da força por segundo
    decay_rate: f32,
    /// Idade máxima de um vínculo
    coherence_time: f32,
}

impl EntanglementTracker {
    /// Cria rastreador vazio
    pub fn new(decay_rate: f32, coherence_time: f32) -> Self {
        Self {
            records: Vec::new(),
            decay_rate,
            coherence_time,
        }
    }

    /// Cria vínculo e as referências de volta nos dois traços
    pub fn entangle(
        &mut self,
        store: &mut QuantumGenomeStore,
        genome_a: GenomeId,
        genome_b: GenomeId,
        trait_name: &str,
        strength: f32,
        now: Timestamp,
    ) -> EntanglementResult<&QuantumEntanglement> {
        if genome_a == genome_b {
            return Err(EntanglementError::SelfEntanglement(genome_a));
        }
        store.link(genome_a, genome_b, trait_name)?;

        self.records.push(QuantumEntanglement::new(
            genome_a, genome_b, trait_name, strength, now,
        ));
        tracing::debug!(genome_a, genome_b, trait_name, strength, "entanglement formed");

        Ok(&self.records[self.records.len() - 1])
    }

    /// Decai todos os vínculos e remove os expirados.
    ///
    /// Retorna quantos foram removidos.
    pub fn tick(&mut self, store: &mut QuantumGenomeStore, delta_time: f32, now: Timestamp) -> usize {
        for record in self.records.iter_mut() {
            record.decay(self.decay_rate, delta_time);
        }

        let expired: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_expired(now, self.coherence_time))
            .map(|(i, _)| i)
            .collect();

        if expired.is_empty() {
            return 0;
        }

        let removed = self.remove_indices(&expired);
        for record in &removed {
            self.release(store, record);
        }

        tracing::info!(
            pruned = removed.len(),
            remaining = self.records.len(),
            "entanglements pruned"
        );
        removed.len()
    }

    /// Remove todos os vínculos que envolvem um genoma
    pub fn forget_genome(&mut self, store: &mut QuantumGenomeStore, id: GenomeId) -> usize {
        let indices: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.involves(id))
            .map(|(i, _)| i)
            .collect();

        let removed = self.remove_indices(&indices);
        for record in &removed {
            self.release(store, record);
        }
        removed.len()
    }

    /// Índices em ordem crescente; preserva a ordem dos restantes
    fn remove_indices(&mut self, indices: &[usize]) -> Vec<QuantumEntanglement> {
        let mut removed = Vec::with_capacity(indices.len());
        for &i in indices.iter().rev() {
            removed.push(self.records.remove(i));
        }
        removed.reverse();
        removed
    }

    /// Desfaz referências, a menos que outro vínculo ainda ligue o mesmo par
    fn release(&self, store: &mut QuantumGenomeStore, record: &QuantumEntanglement) {
        let still_linked = self
            .records
            .iter()
            .any(|r| r.links(record.genome_a, record.genome_b, &record.trait_name));
        if !still_linked {
            store.unlink(record.genome_a, record.genome_b, &record.trait_name);
        }
    }

    /// Vínculos que envolvem o genoma
    pub fn entanglements_of(&self, id: GenomeId) -> Vec<&QuantumEntanglement> {
        self.records.iter().filter(|r| r.involves(id)).collect()
    }

    /// Existe vínculo ativo entre o par sobre o traço?
    pub fn is_linked(&self, a: GenomeId, b: GenomeId, trait_name: &str) -> bool {
        self.records.iter().any(|r| r.links(a, b, trait_name))
    }

    pub fn records(&self) -> &[QuantumEntanglement] {
        &self.records
    }

    /// Número de vínculos ativos
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Força média dos vínculos ativos (0 se vazio)
    pub fn average_strength(&self) -> f32 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.records.iter().map(|r| r.strength).sum::<f32>() / self.records.len() as f32
    }
}

impl GeneticComponent for EntanglementTracker {
    fn name(&self) -> &str {
        "EntanglementTracker"
    }
}
