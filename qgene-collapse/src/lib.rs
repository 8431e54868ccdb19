//! # 💫 qgene-collapse — Measurement & Collapse
//!
//! Medição de traços pela regra de Born, colapso parcial e decoerência
//! induzida pela medição.
//!
//! ## Computational Complexity
//!
//! **Measurement — O(N):**
//! - Soma acumulada até atingir o sorteio `r`
//! - Fallback determinístico para o estado mais provável (arredondamento)
//! - Decoerência + colapso: O(N)
//!
//! **Cache — O(1):**
//! - `HashMap<GenomeId, HashMap<String, _>>`, lookup por `&str` sem alocação
//! - Poda: O(C) com C entradas
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         MeasurementEngine                       │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Measurement Cache (validade em s)        │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Born Sampling → Decoherence → Collapse   │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  MeasurementPerformed event               │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```ignore
//! use qgene_collapse::MeasurementEngine;
//!
//! let mut engine = MeasurementEngine::from_config(&config);
//! let size = engine.measure(&mut store, &mut rng, &mut events, id, "Size", now)?;
//! ```

pub mod cache;
pub mod decoherence;
pub mod engine;
pub mod error;

pub use cache::{CachedMeasurement, MeasurementCache};
pub use decoherence::{apply_decoherence, decay_factor};
pub use engine::MeasurementEngine;
pub use error::{MeasureError, MeasureResult};
