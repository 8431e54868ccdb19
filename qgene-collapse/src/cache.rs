//! Cache de medições
//!
//! Não é estado autoritativo: pode ser descartado a qualquer momento.

use qgene_core::{GenomeId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Valor medido e o instante da medição
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CachedMeasurement {
    pub value: f32,
    pub timestamp: Timestamp,
}

/// Cache `(genome_id, trait) → (valor, instante)`
#[derive(Debug, Clone, Default)]
pub struct MeasurementCache {
    entries: HashMap<GenomeId, HashMap<String, CachedMeasurement>>,
    /// Validade em segundos (0 desativa)
    validity: f32,
}

impl MeasurementCache {
    /// Cria cache com validade em segundos
    pub fn new(validity: f32) -> Self {
        Self {
            entries: HashMap::new(),
            validity: validity.max(0.0),
        }
    }

    /// Cache ativo?
    pub fn is_enabled(&self) -> bool {
        self.validity > 0.0
    }

    pub fn validity(&self) -> f32 {
        self.validity
    }

    /// Valor em cache, se existir e `now - last_measurement < validade`
    pub fn lookup(
        &self,
        genome_id: GenomeId,
        trait_name: &str,
        last_measurement: Timestamp,
        now: Timestamp,
    ) -> Option<f32> {
        if now - last_measurement >= self.validity as f64 {
            return None;
        }
        self.entries
            .get(&genome_id)
            .and_then(|traits| traits.get(trait_name))
            .map(|entry| entry.value)
    }

    /// Entrada bruta (sem checar validade)
    pub fn get(&self, genome_id: GenomeId, trait_name: &str) -> Option<&CachedMeasurement> {
        self.entries.get(&genome_id).and_then(|traits| traits.get(trait_name))
    }

    /// Registra medição (ignorado com o cache desativado)
    pub fn insert(&mut self, genome_id: GenomeId, trait_name: &str, value: f32, now: Timestamp) {
        if !self.is_enabled() {
            return;
        }
        self.entries
            .entry(genome_id)
            .or_default()
            .insert(trait_name.to_string(), CachedMeasurement { value, timestamp: now });
    }

    /// Remove entradas mais velhas que a validade; retorna quantas saíram
    pub fn prune_expired(&mut self, now: Timestamp) -> usize {
        let validity = self.validity as f64;
        let mut removed = 0;

        for traits in self.entries.values_mut() {
            let before = traits.len();
            traits.retain(|_, entry| now - entry.timestamp < validity);
            removed += before - traits.len();
        }
        self.entries.retain(|_, traits| !traits.is_empty());

        removed
    }

    /// Descarta entradas de um genoma
    pub fn invalidate_genome(&mut self, genome_id: GenomeId) {
        self.entries.remove(&genome_id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Total de entradas
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
