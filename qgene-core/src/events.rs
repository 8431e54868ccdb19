//! Eventos do motor genético e barramento de callbacks
//!
//! O barramento entrega cada evento aos callbacks registrados e também guarda
//! um log limitado para hosts que preferem consultar a registrar callbacks.

use crate::traits::GenomeId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Eventos emitidos pelo motor (apenas diagnóstico, nunca alteram estado)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeneticEvent {
    /// Traço de descendente com entropia normalizada acima do limiar
    SuperpositionDetected {
        genome_id: GenomeId,
        trait_name: String,
        amplitudes: Vec<f32>,
        entropy: f32,
    },
    /// Novo emaranhamento entre dois genomas
    EntanglementFormed {
        genome_a: GenomeId,
        genome_b: GenomeId,
        trait_name: String,
        strength: f32,
    },
    /// Medição de Born concluída
    MeasurementPerformed {
        genome_id: GenomeId,
        trait_name: String,
        value: f32,
    },
}

impl GeneticEvent {
    /// Nome curto do tipo de evento
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SuperpositionDetected { .. } => "superposition_detected",
            Self::EntanglementFormed { .. } => "entanglement_formed",
            Self::MeasurementPerformed { .. } => "measurement_performed",
        }
    }
}

/// ID de callback registrado
pub type ListenerId = u64;

type Listener = Box<dyn FnMut(&GeneticEvent) + Send>;

/// Capacidade padrão do log de eventos
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 1024;

/// Barramento de eventos com callbacks e log limitado
pub struct EventBus {
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: ListenerId,
    /// Log (VecDeque para O(1) pop_front)
    log: VecDeque<GeneticEvent>,
    capacity: usize,
    emitted: u64,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .field("logged", &self.log.len())
            .field("capacity", &self.capacity)
            .field("emitted", &self.emitted)
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_LOG_CAPACITY)
    }
}

impl EventBus {
    /// Cria barramento com log de até `capacity` eventos (0 desativa o log)
    pub fn new(capacity: usize) -> Self {
        Self {
            listeners: Vec::new(),
            next_listener: 1,
            log: VecDeque::new(),
            capacity,
            emitted: 0,
        }
    }

    /// Registra callback
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&GeneticEvent) + Send + 'static,
    {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove callback
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Entrega evento aos callbacks e registra no log
    pub fn emit(&mut self, event: GeneticEvent) {
        self.emitted += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }

        if self.capacity == 0 {
            return;
        }
        self.log.push_back(event);
        while self.log.len() > self.capacity {
            self.log.pop_front();
        }
    }

    /// Retira todos os eventos do log
    pub fn drain(&mut self) -> Vec<GeneticEvent> {
        self.log.drain(..).collect()
    }

    /// Eventos ainda no log (mais antigo primeiro)
    pub fn recent(&self) -> impl Iterator<Item = &GeneticEvent> {
        self.log.iter()
    }

    /// Total de eventos emitidos desde a criação
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
