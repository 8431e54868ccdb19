//! Tipos de erro para qgene-entanglement

use qgene_core::{CoreError, GenomeId};
use thiserror::Error;

/// Resultado customizado para operações de entanglement
pub type EntanglementResult<T> = Result<T, EntanglementError>;

/// Erros que podem ocorrer em operações de entanglement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntanglementError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Genome {0} cannot be entangled with itself")]
    SelfEntanglement(GenomeId),
}
