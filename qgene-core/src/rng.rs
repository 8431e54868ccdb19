//! Fonte de aleatoriedade semeável
//!
//! Todo sorteio do motor passa por um [`RandomnessProvider`] injetado, nunca por
//! um gerador global. Mesma seed + mesma sequência de chamadas = mesmos resultados.

use rand::distributions::Standard;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use std::fmt::Debug;

/// Estratégia de aleatoriedade usada por todos os componentes.
pub trait RandomnessProvider: Send + Debug {
    /// Float uniforme em `[0, 1)`
    fn next_f32(&mut self) -> f32;

    /// Inteiro uniforme de 32 bits
    fn next_u32(&mut self) -> u32;

    /// Amostra gaussiana `N(mean, std_dev)`.
    ///
    /// Desvio padrão não positivo (ou não finito) devolve `mean` sem sortear.
    fn gaussian(&mut self, mean: f32, std_dev: f32) -> f32;

    /// Float uniforme em `[low, high)`
    fn range(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.next_f32()
    }

    /// `true` com probabilidade `p`
    fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }
}

/// Gerador ChaCha8 semeado (reprodutível entre plataformas)
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    /// Cria gerador com seed fixa
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Cria gerador com seed vinda da entropia do sistema
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed usada na construção
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomnessProvider for SeededRandom {
    fn next_f32(&mut self) -> f32 {
        self.rng.sample(Standard)
    }

    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn gaussian(&mut self, mean: f32, std_dev: f32) -> f32 {
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return mean;
        }
        let z: f32 = self.rng.sample(StandardNormal);
        mean + std_dev * z
    }
}
