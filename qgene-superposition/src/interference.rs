//! Interferência entre os traços de dois pais

use qgene_core::prelude::*;

/// Meia-largura do jitter de fase na interferência
pub const INTERFERENCE_PHASE_JITTER: f32 = 0.1;

/// Peso do termo construtivo/destrutivo `cos(Δφ)` no valor
pub const INTERFERENCE_WEIGHT: f32 = 0.1;

/// Combina dois traços índice a índice:
///
/// - `amplitude = sqrt(a² + b²)`
/// - `phase = (φa + φb)/2 + U(-0.1, 0.1)`
/// - `value = (va + vb)/2 + cos(φb - φa)·0.1`
///
/// Se os vetores tiverem tamanhos diferentes, os índices excedentes são
/// copiados do traço mais longo. O resultado é normalizado.
pub fn interfere(
    a: &QuantumTrait,
    b: &QuantumTrait,
    rng: &mut dyn RandomnessProvider,
    now: Timestamp,
) -> QuantumTrait {
    let n = a.states.len().max(b.states.len());

    let mut states: Vec<QuantumState> = (0..n)
        .map(|i| match (a.states.get(i), b.states.get(i)) {
            (Some(sa), Some(sb)) => {
                let amplitude = (sa.amplitude * sa.amplitude + sb.amplitude * sb.amplitude).sqrt();
                let phase = (sa.phase + sb.phase) / 2.0
                    + rng.range(-INTERFERENCE_PHASE_JITTER, INTERFERENCE_PHASE_JITTER);
                let value = (sa.value + sb.value) / 2.0
                    + (sb.phase - sa.phase).cos() * INTERFERENCE_WEIGHT;
                QuantumState::new(amplitude, phase, value)
            }
            (Some(only), None) | (None, Some(only)) => {
                QuantumState::new(only.amplitude, only.phase, only.value)
            }
            (None, None) => QuantumState::new(0.0, 0.0, 0.0),
        })
        .collect();

    normalize(&mut states);
    QuantumTrait::new(a.name.clone(), states, now)
}
