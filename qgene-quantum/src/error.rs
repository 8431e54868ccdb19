//! Tipos de erro para qgene-quantum

use qgene_collapse::MeasureError;
use qgene_core::{CoreError, GenomeId};
use qgene_entanglement::EntanglementError;
use thiserror::Error;

/// Resultado customizado para reprodução
pub type BreedResult<T> = Result<T, BreedError>;

/// Erros de reprodução
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreedError {
    #[error("Parent genome not found: {0}")]
    ParentNotFound(GenomeId),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Entanglement error: {0}")]
    Entanglement(#[from] EntanglementError),
}

/// Resultado customizado para operações do processador
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros que podem ocorrer no processador de reprodução
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Breed error: {0}")]
    Breed(#[from] BreedError),

    #[error("Measure error: {0}")]
    Measure(#[from] MeasureError),

    #[error("Entanglement error: {0}")]
    Entanglement(#[from] EntanglementError),
}
