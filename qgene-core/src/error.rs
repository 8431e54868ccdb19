//! Tipos de erro para qgene-core

use crate::traits::GenomeId;
use thiserror::Error;

/// Resultado customizado para operações do núcleo
pub type CoreResult<T> = Result<T, CoreError>;

/// Erros que podem ocorrer no núcleo genético
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Genome not found: {0}")]
    GenomeNotFound(GenomeId),

    #[error("Trait '{trait_name}' not found in genome {genome_id}")]
    TraitNotFound { genome_id: GenomeId, trait_name: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl CoreError {
    /// Atalho para `TraitNotFound`
    pub fn trait_not_found(genome_id: GenomeId, trait_name: impl Into<String>) -> Self {
        Self::TraitNotFound {
            genome_id,
            trait_name: trait_name.into(),
        }
    }
}
