//! # 🧬 QGENE-Core
//!
//! Núcleo do motor de reprodução genética com superposição de traços.
//!
//! > *"Um traço não é um valor; é uma distribuição de valores candidatos."*
//!
//! ## O Modelo
//!
//! 1. Todo traço é um **vetor fixo de N estados** candidatos
//! 2. Cada estado tem **amplitude, fase e valor**; `probability = amplitude²`
//! 3. A soma das probabilidades de um traço é **sempre 1** (salvo o caso degenerado)
//! 4. Medir um traço **colapsa parcialmente** sua distribuição
//!
//! ## Computational Complexity
//!
//! **Amplitude Operations — O(N):**
//! - normalize, collapse_to_state, born_select, normalized_entropy
//! - N = `max_superposition_states` (fixo, tipicamente 8)
//!
//! **Store Operations — O(log G):**
//! - Lookup/insert em `BTreeMap` com G genomas
//! - Iteração ordenada garante consumo determinístico do RNG
//!
//! ## Módulos
//!
//! - [`genome`]: QuantumState, QuantumTrait, QuantumGenome, ClassicalGenome
//! - [`amplitude`]: Normalização, colapso parcial, amostragem de Born, entropia
//! - [`store`]: QuantumGenomeStore — registro de genomas
//! - [`rng`]: RandomnessProvider — aleatoriedade semeável e injetável
//! - [`events`]: GeneticEvent e EventBus
//! - [`config`]: BreedingConfig
//! - [`traits`]: Tipos comuns e GeneticComponent
//!
//! ## Quick Start
//!
//! ```
//! use qgene_core::prelude::*;
//!
//! let mut states = vec![
//!     QuantumState::new(3.0, 0.0, 1.0),
//!     QuantumState::new(4.0, 0.0, 2.0),
//! ];
//! normalize(&mut states);
//!
//! let sum: f32 = states.iter().map(|s| s.probability).sum();
//! assert!((sum - 1.0).abs() < NORMALIZATION_EPSILON);
//! ```

pub mod amplitude;
pub mod config;
pub mod error;
pub mod events;
pub mod genome;
pub mod prelude;
pub mod rng;
pub mod store;
pub mod traits;

pub use amplitude::{
    NORMALIZATION_EPSILON, born_select, collapse_to_state, expected_value,
    max_probability_index, normalize, normalized_entropy, sample_index,
};
pub use config::BreedingConfig;
pub use error::{CoreError, CoreResult};
pub use events::{EventBus, GeneticEvent, ListenerId};
pub use genome::{
    ClassicalGenome, ClassicalTrait, MAX_COHERENCE, MIN_COHERENCE, QuantumGenome,
    QuantumState, QuantumTrait,
};
pub use rng::{RandomnessProvider, SeededRandom};
pub use store::QuantumGenomeStore;
pub use traits::{GeneticComponent, GenomeId, Timestamp};
