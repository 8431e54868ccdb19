//! # 🔗 qgene-entanglement — Trait Entanglement
//!
//! Vínculos decadentes entre genomas (tipicamente descendente ↔ pai) sobre
//! um traço específico.
//!
//! ## Computational Complexity
//!
//! **Tick — O(E):**
//! - E = vínculos ativos
//! - Decaimento linear + coleta de índices expirados antes da remoção
//!
//! **Cleanup — O(E) por vínculo removido:**
//! - Verifica se outro vínculo ainda liga o mesmo par antes de desfazer
//!   as referências de volta
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         EntanglementTracker                     │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Arena: Vec<QuantumEntanglement>          │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Back-refs: trait.entangled_with (IDs)    │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Decay + Pruning                          │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use qgene_entanglement::EntanglementTracker;
//!
//! let mut tracker = EntanglementTracker::new(0.005, 100.0);
//! tracker.entangle(&mut store, child, parent, "Size", 0.3, now)?;
//! tracker.tick(&mut store, 1.0, now + 1.0);
//! ```

pub mod error;
pub mod record;
pub mod tracker;

pub use error::{EntanglementError, EntanglementResult};
pub use record::{MIN_ENTANGLEMENT_STRENGTH, QuantumEntanglement};
pub use tracker::EntanglementTracker;
