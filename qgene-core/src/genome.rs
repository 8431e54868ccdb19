//! Modelo de dados genético: estados, traços e genomas em superposição

use crate::error::{CoreError, CoreResult};
use crate::traits::{GenomeId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Piso de coerência (nunca chega a zero)
pub const MIN_COHERENCE: f32 = 0.1;

/// Teto de coerência
pub const MAX_COHERENCE: f32 = 1.0;

/// Um valor candidato dentro da superposição de um traço
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantumState {
    /// Amplitude de probabilidade (pode ser negativa; é elevada ao quadrado)
    pub amplitude: f32,
    /// Fase em radianos (usada apenas na interferência)
    pub phase: f32,
    /// Valor do traço representado por este estado
    pub value: f32,
    /// Derivada: `amplitude²`
    pub probability: f32,
}

impl QuantumState {
    /// Cria estado com probabilidade derivada da amplitude
    pub fn new(amplitude: f32, phase: f32, value: f32) -> Self {
        Self {
            amplitude,
            phase,
            value,
            probability: amplitude * amplitude,
        }
    }

    /// Recalcula `probability` a partir da amplitude
    #[inline]
    pub fn refresh_probability(&mut self) {
        self.probability = self.amplitude * self.amplitude;
    }
}

/// Traço genético nomeado em superposição
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumTrait {
    /// Nome do traço ("Size", "Speed", ...)
    pub name: String,
    /// Estados candidatos (tamanho fixo por processador)
    pub states: Vec<QuantumState>,
    /// Genomas emaranhados com este traço (referência por ID)
    pub entangled_with: BTreeSet<GenomeId>,
    /// Informativo, `1/N` por padrão
    pub measurement_probability: f32,
    /// Momento do último colapso
    pub last_collapse: Timestamp,
}

impl QuantumTrait {
    /// Cria traço a partir de estados já montados
    pub fn new(name: impl Into<String>, states: Vec<QuantumState>, now: Timestamp) -> Self {
        let measurement_probability = if states.is_empty() {
            0.0
        } else {
            1.0 / states.len() as f32
        };

        Self {
            name: name.into(),
            states,
            entangled_with: BTreeSet::new(),
            measurement_probability,
            last_collapse: now,
        }
    }

    /// Número de estados em superposição
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Amplitudes na ordem dos estados
    pub fn amplitudes(&self) -> Vec<f32> {
        self.states.iter().map(|s| s.amplitude).collect()
    }

    /// Probabilidades na ordem dos estados
    pub fn probabilities(&self) -> Vec<f32> {
        self.states.iter().map(|s| s.probability).collect()
    }

    /// Soma das probabilidades (deve ser 1 fora do caso degenerado)
    pub fn probability_sum(&self) -> f32 {
        self.states.iter().map(|s| s.probability).sum()
    }

    /// Verifica invariante de normalização dentro de `epsilon`
    pub fn is_normalized(&self, epsilon: f32) -> bool {
        (self.probability_sum() - 1.0).abs() < epsilon
    }

    /// Está emaranhado com algum genoma?
    pub fn is_entangled(&self) -> bool {
        !self.entangled_with.is_empty()
    }
}

/// Estado genético-quântico completo de uma criatura
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumGenome {
    pub id: GenomeId,
    pub generation: u32,
    /// `None` para fundadores
    pub parent_a: Option<GenomeId>,
    pub parent_b: Option<GenomeId>,
    pub species: String,
    pub birth_time: Timestamp,
    pub last_measurement: Timestamp,
    /// Coerência em `[0.1, 1.0]`
    pub coherence_level: f32,
    /// Um traço por nome (ordem determinística)
    pub traits: BTreeMap<String, QuantumTrait>,
}

impl QuantumGenome {
    /// Cria genoma vazio e totalmente coerente
    pub fn new(id: GenomeId, species: impl Into<String>, birth_time: Timestamp) -> Self {
        Self {
            id,
            generation: 0,
            parent_a: None,
            parent_b: None,
            species: species.into(),
            birth_time,
            last_measurement: birth_time,
            coherence_level: MAX_COHERENCE,
            traits: BTreeMap::new(),
        }
    }

    /// Genoma fundador (sem pais)?
    pub fn is_founder(&self) -> bool {
        self.parent_a.is_none() && self.parent_b.is_none()
    }

    /// Insere (ou substitui) traço
    pub fn insert_trait(&mut self, quantum_trait: QuantumTrait) {
        self.traits.insert(quantum_trait.name.clone(), quantum_trait);
    }

    /// Busca traço por nome
    pub fn get_trait(&self, name: &str) -> CoreResult<&QuantumTrait> {
        self.traits
            .get(name)
            .ok_or_else(|| CoreError::trait_not_found(self.id, name))
    }

    /// Busca traço mutável por nome
    pub fn get_trait_mut(&mut self, name: &str) -> CoreResult<&mut QuantumTrait> {
        let id = self.id;
        self.traits
            .get_mut(name)
            .ok_or_else(|| CoreError::trait_not_found(id, name))
    }

    /// Nomes dos traços em ordem
    pub fn trait_names(&self) -> impl Iterator<Item = &str> {
        self.traits.keys().map(String::as_str)
    }

    /// Define coerência respeitando `[MIN_COHERENCE, MAX_COHERENCE]`
    pub fn set_coherence(&mut self, coherence: f32) {
        self.coherence_level = if coherence.is_nan() {
            MIN_COHERENCE
        } else {
            coherence.clamp(MIN_COHERENCE, MAX_COHERENCE)
        };
    }

    /// Reduz coerência (respeitando o piso)
    pub fn reduce_coherence(&mut self, amount: f32) {
        self.set_coherence(self.coherence_level - amount);
    }
}

/// Traço clássico vindo do armazenamento externo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicalTrait {
    pub name: String,
    pub value: f32,
    pub mutation_rate: f32,
}

impl ClassicalTrait {
    pub fn new(name: impl Into<String>, value: f32, mutation_rate: f32) -> Self {
        Self {
            name: name.into(),
            value,
            mutation_rate,
        }
    }
}

/// Genoma clássico (entrada do colaborador externo)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassicalGenome {
    pub id: GenomeId,
    pub generation: u32,
    pub parent_a: Option<GenomeId>,
    pub parent_b: Option<GenomeId>,
    pub species: String,
    pub birth_time: Timestamp,
    pub traits: Vec<ClassicalTrait>,
}

impl ClassicalGenome {
    /// Genoma fundador sem traços
    pub fn founder(id: GenomeId, species: impl Into<String>, birth_time: Timestamp) -> Self {
        Self {
            id,
            generation: 0,
            parent_a: None,
            parent_b: None,
            species: species.into(),
            birth_time,
            traits: Vec::new(),
        }
    }

    /// Adiciona traço (builder)
    pub fn with_trait(mut self, name: impl Into<String>, value: f32, mutation_rate: f32) -> Self {
        self.traits.push(ClassicalTrait::new(name, value, mutation_rate));
        self
    }

    /// Define linhagem (builder)
    pub fn with_parents(mut self, generation: u32, parent_a: GenomeId, parent_b: GenomeId) -> Self {
        self.generation = generation;
        self.parent_a = Some(parent_a);
        self.parent_b = Some(parent_b);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_probability_is_amplitude_squared() {
        let state = QuantumState::new(-0.5, 1.0, 3.0);
        assert!((state.probability - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_trait_measurement_probability_default() {
        let states = vec![QuantumState::new(0.5, 0.0, 1.0); 4];
        let t = QuantumTrait::new("Size", states, 0.0);
        assert!((t.measurement_probability - 0.25).abs() < 1e-6);
        assert!(t.is_normalized(1e-5));
    }

    #[test]
    fn test_empty_trait_measurement_probability() {
        let t = QuantumTrait::new("Empty", Vec::new(), 0.0);
        assert_eq!(t.measurement_probability, 0.0);
        assert_eq!(t.state_count(), 0);
    }

    #[test]
    fn test_coherence_clamping() {
        let mut genome = QuantumGenome::new(1, "Dragon", 0.0);
        assert_eq!(genome.coherence_level, 1.0);

        genome.reduce_coherence(5.0);
        assert_eq!(genome.coherence_level, MIN_COHERENCE);

        genome.set_coherence(3.0);
        assert_eq!(genome.coherence_level, MAX_COHERENCE);

        genome.set_coherence(f32::NAN);
        assert_eq!(genome.coherence_level, MIN_COHERENCE);
    }

    #[test]
    fn test_get_trait_missing() {
        let genome = QuantumGenome::new(7, "Dragon", 0.0);
        let err = genome.get_trait("Wings").unwrap_err();
        assert_eq!(err, CoreError::trait_not_found(7, "Wings"));
    }

    #[test]
    fn test_classical_builder() {
        let genome = ClassicalGenome::founder(3, "Wolf", 1.5)
            .with_trait("Size", 1.0, 0.1)
            .with_trait("Speed", 2.0, 0.05)
            .with_parents(2, 1, 2);

        assert_eq!(genome.traits.len(), 2);
        assert_eq!(genome.generation, 2);
        assert_eq!(genome.parent_a, Some(1));
        assert_eq!(genome.parent_b, Some(2));
    }

    #[test]
    fn test_founder_flag() {
        let mut genome = QuantumGenome::new(1, "Wolf", 0.0);
        assert!(genome.is_founder());
        genome.parent_a = Some(9);
        assert!(!genome.is_founder());
    }
}
