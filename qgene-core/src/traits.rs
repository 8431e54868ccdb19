//! # 🎯 Traits — Abstrações Fundamentais do QGENE
//!
//! Tipos comuns compartilhados por todos os crates do motor de reprodução.
//!
//! ## Princípio de Design
//!
//! > *"Trait no core, implementação no módulo."*

use std::fmt::Debug;

/// Identificador único de genoma
pub type GenomeId = u32;

/// Tempo de simulação em segundos (acumulado a partir dos `delta_time` do host)
pub type Timestamp = f64;

/// Componente do motor genético.
///
/// Todo processador (fábrica, medição, emaranhamento, decoerência) expõe
/// nome e versão para logs e diagnóstico.
///
/// # Exemplo
///
/// ```
/// use qgene_core::traits::GeneticComponent;
///
/// #[derive(Debug)]
/// struct Incubator;
///
/// impl GeneticComponent for Incubator {
///     fn name(&self) -> &str { "incubator" }
/// }
/// ```
pub trait GeneticComponent: Send + Debug {
    /// Nome único do componente (para logs e debug)
    fn name(&self) -> &str;

    /// Versão do componente (para compatibilidade)
    fn version(&self) -> &str {
        "2026.1.16"
    }

    /// Componente está pronto para uso?
    fn is_ready(&self) -> bool {
        true
    }
}
