//! Registro de emaranhamento entre dois genomas

use qgene_core::{GenomeId, Timestamp};
use serde::{Deserialize, Serialize};

/// Força abaixo da qual o vínculo é descartado
pub const MIN_ENTANGLEMENT_STRENGTH: f32 = 0.1;

/// Vínculo decadente entre dois genomas sobre um traço
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumEntanglement {
    pub genome_a: GenomeId,
    pub genome_b: GenomeId,
    pub trait_name: String,
    /// Força em `[0, 1]`
    pub strength: f32,
    pub created_at: Timestamp,
}

impl QuantumEntanglement {
    /// Cria vínculo (força limitada a `[0, 1]`)
    pub fn new(
        genome_a: GenomeId,
        genome_b: GenomeId,
        trait_name: impl Into<String>,
        strength: f32,
        created_at: Timestamp,
    ) -> Self {
        Self {
            genome_a,
            genome_b,
            trait_name: trait_name.into(),
            strength: strength.clamp(0.0, 1.0),
            created_at,
        }
    }

    /// Idade do vínculo
    pub fn age(&self, now: Timestamp) -> Timestamp {
        now - self.created_at
    }

    /// Aplica decaimento `strength *= (1 - rate·dt)`
    pub fn decay(&mut self, rate: f32, delta_time: f32) {
        let factor = (1.0 - rate * delta_time).clamp(0.0, 1.0);
        self.strength = (self.strength * factor).clamp(0.0, 1.0);
    }

    /// Fraco demais ou velho demais?
    pub fn is_expired(&self, now: Timestamp, coherence_time: f32) -> bool {
        self.strength < MIN_ENTANGLEMENT_STRENGTH || self.age(now) > coherence_time as f64
    }

    /// Envolve o genoma?
    pub fn involves(&self, id: GenomeId) -> bool {
        self.genome_a == id || self.genome_b == id
    }

    /// Mesmo par (em qualquer ordem) e mesmo traço?
    pub fn links(&self, a: GenomeId, b: GenomeId, trait_name: &str) -> bool {
        self.trait_name == trait_name
            && ((self.genome_a == a && self.genome_b == b)
                || (self.genome_a == b && self.genome_b == a))
    }

    /// O outro lado do vínculo
    pub fn partner_of(&self, id: GenomeId) -> Option<GenomeId> {
        if self.genome_a == id {
            Some(self.genome_b)
        } else if self.genome_b == id {
            Some(self.genome_a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_clamped() {
        assert_eq!(QuantumEntanglement::new(1, 2, "Size", 3.0, 0.0).strength, 1.0);
        assert_eq!(QuantumEntanglement::new(1, 2, "Size", -1.0, 0.0).strength, 0.0);
    }

    #[test]
    fn test_decay() {
        let mut e = QuantumEntanglement::new(1, 2, "Size", 0.3, 0.0);
        e.decay(0.1, 1.0);
        assert!((e.strength - 0.27).abs() < 1e-6);

        // dt enorme não deixa a força negativa
        e.decay(0.1, 100.0);
        assert_eq!(e.strength, 0.0);
    }

    #[test]
    fn test_expiry() {
        let e = QuantumEntanglement::new(1, 2, "Size", 0.3, 10.0);
        assert!(!e.is_expired(50.0, 100.0));
        assert!(e.is_expired(111.0, 100.0));

        let weak = QuantumEntanglement::new(1, 2, "Size", 0.05, 0.0);
        assert!(weak.is_expired(0.0, 100.0));
    }

    #[test]
    fn test_links_is_symmetric() {
        let e = QuantumEntanglement::new(1, 2, "Size", 0.3, 0.0);
        assert!(e.links(1, 2, "Size"));
        assert!(e.links(2, 1, "Size"));
        assert!(!e.links(1, 2, "Speed"));
        assert!(!e.links(1, 3, "Size"));
    }

    #[test]
    fn test_partner_of() {
        let e = QuantumEntanglement::new(1, 2, "Size", 0.3, 0.0);
        assert_eq!(e.partner_of(1), Some(2));
        assert_eq!(e.partner_of(2), Some(1));
        assert_eq!(e.partner_of(3), None);
    }
}
