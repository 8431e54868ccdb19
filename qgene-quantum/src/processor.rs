//! Processador de reprodução quântica (fachada sobre todos os motores)

use crate::decoherence::{DecoherenceScheduler, DecoherenceStep};
use crate::diagnostics::{DiagnosticsReport, DiagnosticsReporter};
use crate::error::{BreedError, QuantumResult};
use crate::inheritance::InheritanceEngine;
use qgene_collapse::MeasurementEngine;
use qgene_core::events::ListenerId;
use qgene_core::prelude::*;
use qgene_entanglement::{EntanglementTracker, QuantumEntanglement};
use qgene_superposition::SuperpositionFactory;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Resumo de um `tick`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickSummary {
    pub decoherence: DecoherenceStep,
    pub entanglements_pruned: usize,
    pub cache_entries_pruned: usize,
}

/// Processador de reprodução quântica.
///
/// Dono do registro, do gerador aleatório e do relógio de simulação. Não
/// existe instância global: o host cria, guarda e passa o processador.
#[derive(Debug)]
pub struct BreedingProcessor {
    config: BreedingConfig,
    rng: Box<dyn RandomnessProvider>,
    store: QuantumGenomeStore,
    factory: SuperpositionFactory,
    inheritance: InheritanceEngine,
    measurement: MeasurementEngine,
    tracker: EntanglementTracker,
    scheduler: DecoherenceScheduler,
    events: EventBus,
    /// Tempo acumulado de simulação
    now: Timestamp,
}

impl BreedingProcessor {
    /// Cria processador; usa `config.seed` ou entropia do sistema
    pub fn new(config: BreedingConfig) -> QuantumResult<Self> {
        let rng = match config.seed {
            Some(seed) => SeededRandom::new(seed),
            None => SeededRandom::from_entropy(),
        };
        Self::with_rng(config, Box::new(rng))
    }

    /// Cria processador com gerador customizado
    pub fn with_rng(config: BreedingConfig, rng: Box<dyn RandomnessProvider>) -> QuantumResult<Self> {
        config.validate()?;

        tracing::debug!(
            states = config.max_superposition_states,
            entanglement = config.enable_entanglement,
            seed = ?config.seed,
            "breeding processor created"
        );

        Ok(Self {
            rng,
            store: QuantumGenomeStore::new(),
            factory: SuperpositionFactory::new(config.max_superposition_states),
            inheritance: InheritanceEngine::from_config(&config),
            measurement: MeasurementEngine::from_config(&config),
            tracker: EntanglementTracker::new(config.entanglement_decay_rate, config.coherence_time),
            scheduler: DecoherenceScheduler::from_config(&config),
            events: EventBus::new(config.event_log_capacity),
            now: 0.0,
            config,
        })
    }

    /// Converte um genoma clássico e o registra.
    ///
    /// Um ID já registrado é substituído: vínculos e medições em cache do
    /// genoma antigo são descartados antes.
    pub fn create_quantum_genome(&mut self, classical: &ClassicalGenome) -> QuantumGenome {
        if self.store.contains(classical.id) {
            self.release_genome(classical.id);
        }
        self.factory
            .create_quantum_genome(&mut self.store, self.rng.as_mut(), classical)
    }

    /// Gera descendente de dois genomas registrados
    pub fn breed(&mut self, parent_a: GenomeId, parent_b: GenomeId) -> Result<QuantumGenome, BreedError> {
        self.inheritance.breed(
            &mut self.store,
            &mut self.tracker,
            self.rng.as_mut(),
            &mut self.events,
            parent_a,
            parent_b,
            self.now,
        )
    }

    /// Mede um traço (regra de Born + colapso parcial)
    pub fn measure(&mut self, genome_id: GenomeId, trait_name: &str) -> QuantumResult<f32> {
        Ok(self.measurement.measure(
            &mut self.store,
            self.rng.as_mut(),
            &mut self.events,
            genome_id,
            trait_name,
            self.now,
        )?)
    }

    /// Mede todos os traços do genoma
    pub fn measure_all(&mut self, genome_id: GenomeId) -> QuantumResult<BTreeMap<String, f32>> {
        Ok(self.measurement.measure_all(
            &mut self.store,
            self.rng.as_mut(),
            &mut self.events,
            genome_id,
            self.now,
        )?)
    }

    /// Valor esperado sem colapsar
    pub fn peek_expected(&self, genome_id: GenomeId, trait_name: &str) -> QuantumResult<f32> {
        Ok(self.measurement.peek_expected(&self.store, genome_id, trait_name)?)
    }

    /// Decoerência pontual pelo tempo desde o último colapso do traço
    pub fn apply_decoherence(&mut self, genome_id: GenomeId, trait_name: &str) -> QuantumResult<f32> {
        Ok(self
            .scheduler
            .apply(&mut self.store, self.rng.as_mut(), genome_id, trait_name, self.now)?)
    }

    /// Avança o relógio e aplica decoerência, decaimento de vínculos e
    /// expiração do cache.
    ///
    /// `delta_time` negativo ou não finito é ignorado.
    pub fn tick(&mut self, delta_time: f32) -> TickSummary {
        if !delta_time.is_finite() || delta_time < 0.0 {
            tracing::warn!(delta_time, "ignoring invalid tick");
            return TickSummary::default();
        }

        self.now += delta_time as Timestamp;

        let decoherence = self.scheduler.tick(
            &mut self.store,
            &mut self.measurement,
            self.rng.as_mut(),
            &mut self.events,
            delta_time,
            self.now,
        );
        let entanglements_pruned = self.tracker.tick(&mut self.store, delta_time, self.now);
        let cache_entries_pruned = self.measurement.cache_mut().prune_expired(self.now);

        TickSummary {
            decoherence,
            entanglements_pruned,
            cache_entries_pruned,
        }
    }

    pub fn generate_report(&self) -> DiagnosticsReport {
        DiagnosticsReporter::generate(&self.store, &self.tracker, self.measurement.cache(), self.now)
    }

    /// Entropia normalizada de um traço
    pub fn trait_entropy(&self, genome_id: GenomeId, trait_name: &str) -> QuantumResult<f32> {
        Ok(DiagnosticsReporter::trait_entropy(&self.store, genome_id, trait_name)?)
    }

    pub fn get_genome(&self, genome_id: GenomeId) -> Option<&QuantumGenome> {
        self.store.get(genome_id)
    }

    pub fn genome_count(&self) -> usize {
        self.store.len()
    }

    pub fn genomes(&self) -> impl Iterator<Item = &QuantumGenome> {
        self.store.iter()
    }

    /// Remove genoma junto com seus vínculos e medições em cache
    pub fn remove_genome(&mut self, genome_id: GenomeId) -> Option<QuantumGenome> {
        let removed = self.store.remove(genome_id)?;
        let links = self.release_genome(genome_id);

        tracing::debug!(genome_id, links, "genome removed");
        Some(removed)
    }

    /// Desfaz vínculos, referências e cache de um ID; retorna vínculos removidos
    fn release_genome(&mut self, genome_id: GenomeId) -> usize {
        let links = self.tracker.forget_genome(&mut self.store, genome_id);
        self.store.purge_references(genome_id);
        self.measurement.cache_mut().invalidate_genome(genome_id);
        links
    }

    /// Ancestrais em largura (pais, avós, ...), sem repetição.
    ///
    /// Pais que não estão no registro aparecem, mas não são expandidos.
    pub fn lineage(&self, genome_id: GenomeId) -> QuantumResult<Vec<GenomeId>> {
        let root = self.store.genome(genome_id)?;

        let mut seen = BTreeSet::from([genome_id]);
        let mut ancestors = Vec::new();
        let mut queue: VecDeque<&QuantumGenome> = VecDeque::from([root]);

        while let Some(genome) = queue.pop_front() {
            for parent in [genome.parent_a, genome.parent_b].into_iter().flatten() {
                if !seen.insert(parent) {
                    continue;
                }
                ancestors.push(parent);
                if let Some(parent_genome) = self.store.get(parent) {
                    queue.push_back(parent_genome);
                }
            }
        }

        Ok(ancestors)
    }

    pub fn entanglements(&self) -> &[QuantumEntanglement] {
        self.tracker.records()
    }

    pub fn entanglements_of(&self, genome_id: GenomeId) -> Vec<&QuantumEntanglement> {
        self.tracker.entanglements_of(genome_id)
    }

    pub fn clear_measurement_cache(&mut self) {
        self.measurement.cache_mut().clear();
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn config(&self) -> &BreedingConfig {
        &self.config
    }

    /// Registra callback para todos os eventos
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&GeneticEvent) + Send + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Esvazia o log de eventos
    pub fn drain_events(&mut self) -> Vec<GeneticEvent> {
        self.events.drain()
    }
}

impl GeneticComponent for BreedingProcessor {
    fn name(&self) -> &str {
        "BreedingProcessor"
    }

    fn is_ready(&self) -> bool {
        self.config.validate().is_ok()
    }
}
