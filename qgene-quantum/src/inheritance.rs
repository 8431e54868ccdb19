//! Reprodução: combinação de traços dos pais em um descendente

use crate::error::{BreedError, BreedResult};
use qgene_core::prelude::*;
use qgene_entanglement::EntanglementTracker;
use qgene_superposition::{interfere, mutate_trait};
use std::collections::BTreeSet;

/// Entropia normalizada acima da qual o traço é anunciado como superposto
pub const SUPERPOSITION_ENTROPY_THRESHOLD: f32 = 0.7;

/// Fração da menor coerência dos pais herdada pelo descendente
pub const INHERITED_COHERENCE_FACTOR: f32 = 0.9;

/// Motor de herança
#[derive(Debug, Clone)]
pub struct InheritanceEngine {
    enable_entanglement: bool,
    /// Chance de emaranhar por traço e força inicial do vínculo
    entanglement_strength: f32,
}

impl InheritanceEngine {
    pub fn new(enable_entanglement: bool, entanglement_strength: f32) -> Self {
        Self {
            enable_entanglement,
            entanglement_strength,
        }
    }

    pub fn from_config(config: &BreedingConfig) -> Self {
        Self::new(config.enable_entanglement, config.entanglement_strength)
    }

    /// Gera um descendente de `parent_a` × `parent_b` e o insere no registro.
    ///
    /// Se algum pai não existir, nada é alterado e nenhum número aleatório é
    /// consumido.
    #[allow(clippy::too_many_arguments)]
    pub fn breed(
        &self,
        store: &mut QuantumGenomeStore,
        tracker: &mut EntanglementTracker,
        rng: &mut dyn RandomnessProvider,
        events: &mut EventBus,
        parent_a: GenomeId,
        parent_b: GenomeId,
        now: Timestamp,
    ) -> BreedResult<QuantumGenome> {
        for id in [parent_a, parent_b] {
            if !store.contains(id) {
                return Err(BreedError::ParentNotFound(id));
            }
        }

        let offspring_id = store.allocate_id();
        let mut pending_links = Vec::new();

        let offspring = {
            let a = store.genome(parent_a)?;
            let b = store.genome(parent_b)?;

            let mut offspring = QuantumGenome::new(offspring_id, a.species.clone(), now);
            offspring.generation = a.generation.max(b.generation).saturating_add(1);
            offspring.parent_a = Some(parent_a);
            offspring.parent_b = Some(parent_b);
            offspring.set_coherence(
                a.coherence_level.min(b.coherence_level) * INHERITED_COHERENCE_FACTOR,
            );

            if a.species != b.species {
                tracing::debug!(
                    offspring_id,
                    species_a = %a.species,
                    species_b = %b.species,
                    "hybrid offspring takes species of first parent"
                );
            }

            let names: BTreeSet<&String> = a.traits.keys().chain(b.traits.keys()).collect();
            for name in names {
                let inherited = match (a.traits.get(name), b.traits.get(name)) {
                    (Some(ta), Some(tb)) => interfere(ta, tb, rng, now),
                    (Some(only), None) | (None, Some(only)) => mutate_trait(only, rng, now),
                    (None, None) => continue,
                };

                let entropy = normalized_entropy(&inherited.states);
                if entropy > SUPERPOSITION_ENTROPY_THRESHOLD {
                    events.emit(GeneticEvent::SuperpositionDetected {
                        genome_id: offspring_id,
                        trait_name: name.clone(),
                        amplitudes: inherited.amplitudes(),
                        entropy,
                    });
                }

                if self.enable_entanglement && rng.chance(self.entanglement_strength) {
                    pending_links.push(name.clone());
                }

                offspring.insert_trait(inherited);
            }

            offspring
        };

        store.insert(offspring);

        for trait_name in &pending_links {
            for parent in [parent_a, parent_b] {
                // Só vincula com o pai que possui o traço
                if store.trait_of(parent, trait_name).is_err() {
                    continue;
                }
                let record = tracker.entangle(
                    store,
                    offspring_id,
                    parent,
                    trait_name,
                    self.entanglement_strength,
                    now,
                )?;
                events.emit(GeneticEvent::EntanglementFormed {
                    genome_a: record.genome_a,
                    genome_b: record.genome_b,
                    trait_name: record.trait_name.clone(),
                    strength: record.strength,
                });
            }
        }

        let offspring = store.genome(offspring_id)?.clone();
        tracing::debug!(
            offspring_id,
            parent_a,
            parent_b,
            generation = offspring.generation,
            traits = offspring.traits.len(),
            entangled_traits = pending_links.len(),
            "offspring bred"
        );

        Ok(offspring)
    }
}

impl GeneticComponent for InheritanceEngine {
    fn name(&self) -> &str {
        "InheritanceEngine"
    }
}
