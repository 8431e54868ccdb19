//! Simulação de várias gerações dirigida pela linha de comando

use anyhow::{Context, Result, bail};
use qgene_core::prelude::*;
use qgene_quantum::{BreedingProcessor, DiagnosticsReport};
use serde::Serialize;
use std::collections::BTreeMap;

/// Traços canônicos dos fundadores: (nome, faixa do valor base)
pub const FOUNDER_TRAITS: [(&str, f32, f32); 4] = [
    ("Size", 0.5, 2.0),
    ("Speed", 1.0, 10.0),
    ("Strength", 1.0, 10.0),
    ("Intelligence", 0.0, 1.0),
];

/// Taxa de mutação dos fundadores
pub const FOUNDER_MUTATION_RATE: f32 = 0.1;

/// Parâmetros da simulação
#[derive(Debug, Clone)]
pub struct SimulationPlan {
    pub founders: usize,
    pub generations: usize,
    /// Ticks entre gerações
    pub ticks: usize,
    pub dt: f32,
}

/// Fenótipo medido de um genoma da última geração
#[derive(Debug, Clone, Serialize)]
pub struct Phenotype {
    pub genome_id: GenomeId,
    pub generation: u32,
    pub traits: BTreeMap<String, f32>,
}

/// Resultado da simulação
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutcome {
    pub seed: Option<u64>,
    pub offspring: usize,
    pub events: usize,
    pub last_generation: Vec<Phenotype>,
    pub report: DiagnosticsReport,
}

/// Executa a simulação.
///
/// Os pares de cada geração são sorteados por um gerador próprio, derivado
/// da seed do processador, para não alterar a sequência do motor.
pub fn run(config: BreedingConfig, plan: &SimulationPlan) -> Result<SimulationOutcome> {
    if plan.founders < 2 {
        bail!("at least two founders are needed, got {}", plan.founders);
    }

    let seed = config.seed;
    let mut pairing = match seed {
        Some(s) => SeededRandom::new(s.wrapping_add(1)),
        None => SeededRandom::from_entropy(),
    };
    let mut processor = BreedingProcessor::new(config).context("invalid breeding configuration")?;

    let mut population = Vec::with_capacity(plan.founders);
    for i in 0..plan.founders {
        let id = i as GenomeId + 1;
        let mut classical = ClassicalGenome::founder(id, "Dragon", 0.0);
        for (name, low, high) in FOUNDER_TRAITS {
            classical = classical.with_trait(name, pairing.range(low, high), FOUNDER_MUTATION_RATE);
        }
        population.push(processor.create_quantum_genome(&classical).id);
    }

    let mut offspring = 0usize;
    let mut events = 0usize;
    let mut last_generation = Vec::new();

    for generation in 0..plan.generations {
        let mut next = Vec::with_capacity(population.len());
        last_generation.clear();

        for _ in 0..population.len() {
            let (a, b) = pick_pair(&mut pairing, &population);
            let child = processor
                .breed(a, b)
                .with_context(|| format!("breeding {a} x {b}"))?;
            let traits = processor
                .measure_all(child.id)
                .with_context(|| format!("measuring genome {}", child.id))?;

            last_generation.push(Phenotype {
                genome_id: child.id,
                generation: child.generation,
                traits,
            });
            next.push(child.id);
            offspring += 1;
        }

        for _ in 0..plan.ticks {
            processor.tick(plan.dt);
        }
        events += processor.drain_events().len();

        tracing::info!(
            generation = generation + 1,
            population = next.len(),
            genomes = processor.genome_count(),
            entanglements = processor.entanglements().len(),
            "generation complete"
        );
        population = next;
    }

    Ok(SimulationOutcome {
        seed,
        offspring,
        events,
        last_generation,
        report: processor.generate_report(),
    })
}

/// Sorteia dois membros distintos da população (len ≥ 2)
fn pick_pair(rng: &mut SeededRandom, population: &[GenomeId]) -> (GenomeId, GenomeId) {
    let len = population.len() as u32;
    let i = rng.next_u32() % len;
    let offset = 1 + rng.next_u32() % (len - 1);
    let j = (i + offset) % len;
    (population[i as usize], population[j as usize])
}
