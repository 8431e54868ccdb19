//! # 🔀 qgene-superposition — Trait Superposition
//!
//! Converte genomas clássicos em genomas quânticos e combina superposições.
//!
//! ## Computational Complexity
//!
//! **Creation — O(T × N):**
//! - T = traços do genoma clássico
//! - N = estados por traço
//! - Três sorteios por estado (valor, amplitude, fase)
//!
//! **Interference / Mutation — O(N):**
//! - Combinação índice a índice, seguida de normalização
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         SuperpositionFactory                    │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  ClassicalGenome → QuantumGenome          │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Combinação de traços:                    │  │
//! │  │  - Interference (dois pais)               │  │
//! │  │  - Mutation (um pai)                      │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qgene_core::prelude::*;
//! use qgene_superposition::SuperpositionFactory;
//!
//! let mut store = QuantumGenomeStore::new();
//! let mut rng = SeededRandom::new(42);
//! let factory = SuperpositionFactory::new(8);
//!
//! let classical = ClassicalGenome::founder(1, "Dragon", 0.0).with_trait("Size", 1.0, 0.1);
//! let genome = factory.create_quantum_genome(&mut store, &mut rng, &classical);
//!
//! assert_eq!(genome.get_trait("Size").unwrap().state_count(), 8);
//! ```

pub mod factory;
pub mod interference;
pub mod mutation;

pub use factory::SuperpositionFactory;
pub use interference::{INTERFERENCE_PHASE_JITTER, INTERFERENCE_WEIGHT, interfere};
pub use mutation::{
    MUTATION_AMPLITUDE_SIGMA, MUTATION_PHASE_JITTER, MUTATION_VALUE_SIGMA, mutate_trait,
};
