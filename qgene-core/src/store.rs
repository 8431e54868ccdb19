//! Registro de genomas quânticos (`GenomeId → QuantumGenome`)

use crate::error::{CoreError, CoreResult};
use crate::genome::{QuantumGenome, QuantumTrait};
use crate::traits::GenomeId;
use std::collections::BTreeMap;

/// Dono de todo estado genético e de traços.
///
/// `BTreeMap` garante iteração determinística (e portanto consumo
/// determinístico do gerador aleatório).
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumGenomeStore {
    genomes: BTreeMap<GenomeId, QuantumGenome>,
    /// Próximo ID livre para descendentes
    next_id: GenomeId,
}

impl Default for QuantumGenomeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantumGenomeStore {
    /// Cria registro vazio
    pub fn new() -> Self {
        Self {
            genomes: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Reserva um ID ainda não usado
    pub fn allocate_id(&mut self) -> GenomeId {
        while self.genomes.contains_key(&self.next_id) {
            self.next_id = self.next_id.wrapping_add(1).max(1);
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    /// Insere genoma; devolve o anterior se o ID já existia
    pub fn insert(&mut self, genome: QuantumGenome) -> Option<QuantumGenome> {
        if genome.id >= self.next_id {
            self.next_id = genome.id.saturating_add(1);
        }
        self.genomes.insert(genome.id, genome)
    }

    /// Remove genoma (limpeza externa)
    pub fn remove(&mut self, id: GenomeId) -> Option<QuantumGenome> {
        self.genomes.remove(&id)
    }

    pub fn get(&self, id: GenomeId) -> Option<&QuantumGenome> {
        self.genomes.get(&id)
    }

    pub fn get_mut(&mut self, id: GenomeId) -> Option<&mut QuantumGenome> {
        self.genomes.get_mut(&id)
    }

    /// Busca genoma ou `GenomeNotFound`
    pub fn genome(&self, id: GenomeId) -> CoreResult<&QuantumGenome> {
        self.genomes.get(&id).ok_or(CoreError::GenomeNotFound(id))
    }

    /// Busca genoma mutável ou `GenomeNotFound`
    pub fn genome_mut(&mut self, id: GenomeId) -> CoreResult<&mut QuantumGenome> {
        self.genomes.get_mut(&id).ok_or(CoreError::GenomeNotFound(id))
    }

    /// Busca traço de um genoma
    pub fn trait_of(&self, id: GenomeId, trait_name: &str) -> CoreResult<&QuantumTrait> {
        self.genome(id)?.get_trait(trait_name)
    }

    /// Busca traço mutável de um genoma
    pub fn trait_of_mut(&mut self, id: GenomeId, trait_name: &str) -> CoreResult<&mut QuantumTrait> {
        self.genome_mut(id)?.get_trait_mut(trait_name)
    }

    pub fn contains(&self, id: GenomeId) -> bool {
        self.genomes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// IDs em ordem crescente
    pub fn ids(&self) -> Vec<GenomeId> {
        self.genomes.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuantumGenome> {
        self.genomes.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut QuantumGenome> {
        self.genomes.values_mut()
    }

    /// Liga dois genomas pelo traço (referências por ID nos dois lados).
    ///
    /// Falha sem alterar nada se algum genoma ou traço não existir.
    pub fn link(&mut self, a: GenomeId, b: GenomeId, trait_name: &str) -> CoreResult<()> {
        self.trait_of(a, trait_name)?;
        self.trait_of(b, trait_name)?;

        self.trait_of_mut(a, trait_name)?.entangled_with.insert(b);
        self.trait_of_mut(b, trait_name)?.entangled_with.insert(a);
        Ok(())
    }

    /// Desfaz a ligação nos dois lados (genomas ausentes são ignorados)
    pub fn unlink(&mut self, a: GenomeId, b: GenomeId, trait_name: &str) {
        if let Ok(t) = self.trait_of_mut(a, trait_name) {
            t.entangled_with.remove(&b);
        }
        if let Ok(t) = self.trait_of_mut(b, trait_name) {
            t.entangled_with.remove(&a);
        }
    }

    /// Remove todas as referências a `id` nos traços dos demais genomas
    pub fn purge_references(&mut self, id: GenomeId) {
        for genome in self.genomes.values_mut() {
            for t in genome.traits.values_mut() {
                t.entangled_with.remove(&id);
            }
        }
    }
}
