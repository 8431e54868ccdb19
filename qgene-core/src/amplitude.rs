//! Primitivas de amplitude: normalização, colapso parcial, amostragem de Born
//! e entropia de superposição.
//!
//! ## Computational Complexity
//!
//! Todas as operações são O(N), com N = `max_superposition_states` (fixo por
//! processador, tipicamente 8).

use crate::genome::{QuantumState, QuantumTrait};
use crate::traits::Timestamp;

/// Tolerância usada pelas verificações de normalização
pub const NORMALIZATION_EPSILON: f32 = 1e-5;

/// Normaliza amplitudes para que `Σ probability == 1`.
///
/// Retorna `false` no caso degenerado (todas as amplitudes nulas), em que os
/// estados ficam intactos.
pub fn normalize(states: &mut [QuantumState]) -> bool {
    let total: f32 = states.iter().map(|s| s.amplitude * s.amplitude).sum();

    if !total.is_finite() || total <= 0.0 {
        return false;
    }

    let scale = 1.0 / total.sqrt();
    for state in states.iter_mut() {
        state.amplitude *= scale;
        state.refresh_probability();
    }
    true
}

/// Colapso parcial: o estado escolhido recebe probabilidade `stability` e o
/// restante `1 - stability` é dividido igualmente entre os demais.
///
/// O sinal de cada amplitude é preservado. Com um único estado ele recebe
/// probabilidade 1. Índice fora do intervalo não altera nada.
pub fn collapse_to_state(
    quantum_trait: &mut QuantumTrait,
    index: usize,
    stability: f32,
    now: Timestamp,
) -> bool {
    let n = quantum_trait.states.len();
    if index >= n {
        return false;
    }

    let stability = stability.clamp(0.0, 1.0);
    let (chosen, others) = if n == 1 {
        (1.0, 0.0)
    } else {
        (stability, (1.0 - stability) / (n - 1) as f32)
    };

    for (i, state) in quantum_trait.states.iter_mut().enumerate() {
        let p: f32 = if i == index { chosen } else { others };
        let sign = if state.amplitude < 0.0 { -1.0 } else { 1.0 };
        state.amplitude = sign * p.sqrt();
        state.refresh_probability();
    }

    quantum_trait.last_collapse = now;
    true
}

/// Primeiro índice cuja probabilidade acumulada atinge `r`
pub fn born_select(states: &[QuantumState], r: f32) -> Option<usize> {
    let mut cumulative = 0.0;
    for (i, state) in states.iter().enumerate() {
        cumulative += state.probability;
        if cumulative >= r {
            return Some(i);
        }
    }
    None
}

/// Índice do estado mais provável (primeiro em caso de empate)
pub fn max_probability_index(states: &[QuantumState]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, state) in states.iter().enumerate() {
        match best {
            Some((_, p)) if state.probability <= p => {}
            _ => best = Some((i, state.probability)),
        }
    }
    best.map(|(i, _)| i)
}

/// Amostragem de Born com fallback determinístico.
///
/// Se o acúmulo nunca alcança `r` (arredondamento), cai no estado mais provável.
pub fn sample_index(states: &[QuantumState], r: f32) -> Option<usize> {
    born_select(states, r).or_else(|| {
        tracing::trace!(r, "born sampling fell through, using max-probability state");
        max_probability_index(states)
    })
}

/// Entropia de Shannon (base 2) das probabilidades, dividida por `log2(N)`.
///
/// Fica em `[0, 1]`; retorna 0 para N ≤ 1 ou probabilidades todas nulas.
pub fn normalized_entropy(states: &[QuantumState]) -> f32 {
    let n = states.len();
    if n <= 1 {
        return 0.0;
    }

    let total: f32 = states.iter().map(|s| s.probability).sum();
    if total.is_nan() || total <= 0.0 {
        return 0.0;
    }

    let entropy: f32 = states
        .iter()
        .map(|s| s.probability / total)
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.log2())
        .sum();

    (entropy / (n as f32).log2()).clamp(0.0, 1.0)
}

/// Valor esperado `Σ p·v` (sem colapsar)
pub fn expected_value(states: &[QuantumState]) -> f32 {
    let total: f32 = states.iter().map(|s| s.probability).sum();
    if total.is_nan() || total <= 0.0 {
        if states.is_empty() {
            return 0.0;
        }
        return states.iter().map(|s| s.value).sum::<f32>() / states.len() as f32;
    }
    states.iter().map(|s| s.probability * s.value).sum::<f32>() / total
}
