//! Configuração do processador de reprodução quântica
//!
//! Todos os valores são fixados na construção do processador. Arquivos TOML
//! parciais são aceitos: campos ausentes ficam com o padrão.
//!
//! ```toml
//! coherence_time = 100.0
//! decoherence_rate = 0.01
//! enable_entanglement = true
//! max_superposition_states = 8
//! seed = 42
//! ```

use crate::error::{CoreError, CoreResult};
use crate::events::DEFAULT_EVENT_LOG_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuração do motor de reprodução
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedingConfig {
    /// Tempo máximo de vida de um emaranhamento (s)
    pub coherence_time: f32,
    /// Perda de coerência por segundo
    pub decoherence_rate: f32,
    /// Permite formar emaranhamentos na reprodução
    pub enable_entanglement: bool,
    /// N: estados por traço
    pub max_superposition_states: usize,
    /// Probabilidade que o estado medido recebe no colapso
    pub superposition_stability: f32,
    /// Chance por segundo de medição forçada em genomas pouco coerentes
    pub collapse_probability: f32,
    /// Chance de emaranhar por traço (e força inicial do vínculo)
    pub entanglement_strength: f32,
    /// Decaimento da força por segundo
    pub entanglement_decay_rate: f32,
    /// Validade do cache de medições (s); 0 desativa
    pub cache_validity_time: f32,
    /// Seed do gerador; `None` usa entropia do sistema
    pub seed: Option<u64>,
    /// Capacidade do log de eventos
    pub event_log_capacity: usize,
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            coherence_time: 100.0,
            decoherence_rate: 0.01,
            enable_entanglement: true,
            max_superposition_states: 8,
            superposition_stability: 0.85,
            collapse_probability: 0.1,
            entanglement_strength: 0.3,
            entanglement_decay_rate: 0.005,
            cache_validity_time: 10.0,
            seed: None,
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
        }
    }
}

impl BreedingConfig {
    /// Configuração padrão com seed fixa
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Valida intervalos
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_superposition_states == 0 {
            return Err(CoreError::InvalidConfig(
                "max_superposition_states must be at least 1".into(),
            ));
        }
        if !(self.superposition_stability > 0.0 && self.superposition_stability <= 1.0) {
            return Err(CoreError::InvalidConfig(format!(
                "superposition_stability must be in (0, 1], got {}",
                self.superposition_stability
            )));
        }
        if !(0.0..=1.0).contains(&self.entanglement_strength) {
            return Err(CoreError::InvalidConfig(format!(
                "entanglement_strength must be in [0, 1], got {}",
                self.entanglement_strength
            )));
        }

        let non_negative = [
            ("coherence_time", self.coherence_time),
            ("decoherence_rate", self.decoherence_rate),
            ("collapse_probability", self.collapse_probability),
            ("entanglement_decay_rate", self.entanglement_decay_rate),
            ("cache_validity_time", self.cache_validity_time),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be a non-negative finite number, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Lê configuração de uma string TOML
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Lê configuração de um arquivo TOML
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Serializa para TOML
    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string_pretty(self).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}
