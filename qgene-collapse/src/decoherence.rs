//! Decoerência aplicada a um traço após medição

use qgene_core::prelude::*;
use std::f32::consts::PI;

/// Fator de decaimento `exp(-(now - last_collapse)·rate)`
pub fn decay_factor(elapsed: Timestamp, rate: f32) -> f32 {
    (-(elapsed.max(0.0)) * rate as f64).exp() as f32
}

/// Aplica decoerência ao genoma e a um de seus traços.
///
/// - `coherence *= decay` (respeitando o piso)
/// - `amplitude *= decay`, `phase += U(-π, π)·(1 - decay)` em cada estado
/// - renormaliza
///
/// Se o decaimento zerar todas as amplitudes, elas voltam ao valor anterior
/// à escala (a escala uniforme não muda probabilidades).
pub fn apply_decoherence(
    genome: &mut QuantumGenome,
    trait_name: &str,
    now: Timestamp,
    decoherence_rate: f32,
    rng: &mut dyn RandomnessProvider,
) -> CoreResult<f32> {
    let quantum_trait = genome.get_trait_mut(trait_name)?;
    let decay = decay_factor(now - quantum_trait.last_collapse, decoherence_rate);

    let original: Vec<f32> = quantum_trait.amplitudes();
    for state in quantum_trait.states.iter_mut() {
        state.amplitude *= decay;
        state.phase += rng.range(-PI, PI) * (1.0 - decay);
    }

    if !normalize(&mut quantum_trait.states) {
        for (state, amplitude) in quantum_trait.states.iter_mut().zip(original) {
            state.amplitude = amplitude;
        }
        normalize(&mut quantum_trait.states);
    }

    genome.set_coherence(genome.coherence_level * decay);
    Ok(decay)
}
