//! # Prelude — Re-exportações Convenientes
//!
//! ```
//! use qgene_core::prelude::*;
//! ```

// Dados
pub use crate::genome::{
    ClassicalGenome, ClassicalTrait, MAX_COHERENCE, MIN_COHERENCE, QuantumGenome,
    QuantumState, QuantumTrait,
};
pub use crate::store::QuantumGenomeStore;

// Primitivas
pub use crate::amplitude::{
    NORMALIZATION_EPSILON, collapse_to_state, expected_value, normalize, normalized_entropy,
    sample_index,
};

// Infraestrutura
pub use crate::config::BreedingConfig;
pub use crate::error::{CoreError, CoreResult};
pub use crate::events::{EventBus, GeneticEvent};
pub use crate::rng::{RandomnessProvider, SeededRandom};
pub use crate::traits::{GeneticComponent, GenomeId, Timestamp};
