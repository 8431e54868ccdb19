//! Tipos de erro para qgene-collapse

use qgene_core::{CoreError, GenomeId};
use thiserror::Error;

/// Resultado customizado para medições
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Erros que podem ocorrer em uma medição
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Trait '{trait_name}' of genome {genome_id} has no states to measure")]
    EmptyTrait { genome_id: GenomeId, trait_name: String },
}

impl MeasureError {
    /// Falha de lookup (genoma ou traço ausente)?
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Core(CoreError::GenomeNotFound(_)) | Self::Core(CoreError::TraitNotFound { .. })
        )
    }
}
