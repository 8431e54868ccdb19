//! Cópia mutada de um traço (herdado de um único pai)

use qgene_core::prelude::*;

/// Desvio da perturbação gaussiana na amplitude
pub const MUTATION_AMPLITUDE_SIGMA: f32 = 0.02;

/// Desvio da perturbação gaussiana no valor
pub const MUTATION_VALUE_SIGMA: f32 = 0.05;

/// Meia-largura do jitter uniforme de fase
pub const MUTATION_PHASE_JITTER: f32 = 0.2;

/// Copia o traço com pequenas perturbações independentes por estado.
///
/// O resultado não herda `entangled_with` e tem `last_collapse = now`.
pub fn mutate_trait(
    source: &QuantumTrait,
    rng: &mut dyn RandomnessProvider,
    now: Timestamp,
) -> QuantumTrait {
    let mut states: Vec<QuantumState> = source
        .states
        .iter()
        .map(|s| {
            let amplitude = s.amplitude + rng.gaussian(0.0, MUTATION_AMPLITUDE_SIGMA);
            let value = s.value + rng.gaussian(0.0, MUTATION_VALUE_SIGMA);
            let phase = s.phase + rng.range(-MUTATION_PHASE_JITTER, MUTATION_PHASE_JITTER);
            QuantumState::new(amplitude, phase, value)
        })
        .collect();

    normalize(&mut states);
    QuantumTrait::new(source.name.clone(), states, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_trait(n: usize) -> QuantumTrait {
        let mut states: Vec<QuantumState> =
            (0..n).map(|i| QuantumState::new(1.0, 0.0, i as f32)).collect();
        normalize(&mut states);
        QuantumTrait::new("Size", states, 0.0)
    }

    #[test]
    fn test_mutation_stays_close() {
        let source = uniform_trait(8);
        let mut rng = SeededRandom::new(10);
        let child = mutate_trait(&source, &mut rng, 5.0);

        assert_eq!(child.state_count(), 8);
        assert!(child.is_normalized(NORMALIZATION_EPSILON));
        for (a, b) in source.states.iter().zip(child.states.iter()) {
            assert!((a.value - b.value).abs() < 0.5);
            assert!((a.phase - b.phase).abs() <= MUTATION_PHASE_JITTER);
        }
        assert_eq!(child.last_collapse, 5.0);
    }

    #[test]
    fn test_mutation_drops_entanglement_refs() {
        let mut source = uniform_trait(4);
        source.entangled_with.insert(99);

        let mut rng = SeededRandom::new(11);
        let child = mutate_trait(&source, &mut rng, 0.0);
        assert!(!child.is_entangled());
    }
}
