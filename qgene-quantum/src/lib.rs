//! # ⚛️ qgene-quantum — Quantum Breeding Processor
//!
//! Reprodução com herança por interferência, emaranhamento entre gerações,
//! medição pela regra de Born e decoerência guiada pelo relógio do host.
//!
//! ## Computational Complexity
//!
//! **Breed — O(T × N):**
//! - T = união dos traços dos pais
//! - N = estados por traço
//! - Mais O(log G) por vínculo criado
//!
//! **Measure — O(N):**
//! - Amostragem de Born, decoerência e colapso parcial
//! - O(1) em acerto de cache
//!
//! **Tick — O(G × T + E):**
//! - G = genomas, E = vínculos ativos
//! - Medições forçadas só em genomas com coerência < 0.3
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          BreedingProcessor                      │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  QuantumGenomeStore + RandomnessProvider  │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  SuperpositionFactory / InheritanceEngine │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  MeasurementEngine (cache)                │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  EntanglementTracker / Decoherence        │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qgene_core::prelude::*;
//! use qgene_quantum::BreedingProcessor;
//!
//! let mut processor = BreedingProcessor::new(BreedingConfig::seeded(42)).unwrap();
//!
//! let a = ClassicalGenome::founder(1, "Dragon", 0.0).with_trait("Size", 1.0, 0.1);
//! let b = ClassicalGenome::founder(2, "Dragon", 0.0).with_trait("Size", 1.5, 0.1);
//! processor.create_quantum_genome(&a);
//! processor.create_quantum_genome(&b);
//!
//! let child = processor.breed(1, 2).unwrap();
//! assert_eq!(child.generation, 1);
//!
//! let size = processor.measure(child.id, "Size").unwrap();
//! assert!(size.is_finite());
//!
//! processor.tick(1.0);
//! println!("{}", processor.generate_report());
//! ```

pub mod decoherence;
pub mod diagnostics;
pub mod error;
pub mod inheritance;
pub mod processor;

pub use decoherence::{
    DecoherenceScheduler, DecoherenceStep, LOW_COHERENCE_THRESHOLD, apply_decoherence,
    decay_factor,
};
pub use diagnostics::{DiagnosticsReport, DiagnosticsReporter};
pub use error::{BreedError, BreedResult, QuantumError, QuantumResult};
pub use inheritance::{
    INHERITED_COHERENCE_FACTOR, InheritanceEngine, SUPERPOSITION_ENTROPY_THRESHOLD,
};
pub use processor::{BreedingProcessor, TickSummary};

#[cfg(test)]
mod tests;
