//! Estado reconstruido de una ejecución (`RunState`).
//!
//! El repositorio aplica un replay lineal: consume los eventos de un `run_id`
//! en orden y marca cada paso de la secuencia. Tras un fallo en el paso `k`,
//! el estado muestra `0..k` como `Succeeded` (con sus direcciones), `k` como
//! `Failed` y el resto como `Pending`.
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::SequencingError;
use crate::event::{RunEvent, RunEventKind};
use crate::model::Address;
use crate::sequence::Sequence;
use crate::step::StepStatus;

#[derive(Debug, Clone)]
pub struct RunState {
    pub run_id: Uuid,
    pub steps: Vec<StepSlot>,
    /// Índice del primer paso `Pending` (o `steps.len()`).
    pub cursor: usize,
    pub completed: bool,
    pub run_fingerprint: Option<String>,
}

/// Estado de un paso en la ejecución.
#[derive(Debug, Clone)]
pub struct StepSlot {
    pub label: String,
    pub status: StepStatus,
    pub address: Option<Address>, // sólo pasos Deploy exitosos
    pub error: Option<SequencingError>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunState {
    /// Paso fallido, si lo hubo.
    pub fn failed_step(&self) -> Option<usize> {
        self.steps.iter().position(|s| s.status == StepStatus::Failed)
    }

    /// Direcciones desplegadas por paso, en orden.
    pub fn deployed_addresses(&self) -> Vec<(usize, Address)> {
        self.steps
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.address.map(|a| (i, a)))
            .collect()
    }
}

/// Trait para reconstruir (`replay`) el estado de una ejecución a partir de eventos.
pub trait RunRepository {
    fn load(&self, run_id: Uuid, events: &[RunEvent], sequence: &Sequence) -> RunState;
}

#[derive(Debug, Default)]
pub struct InMemoryRunRepository;

impl InMemoryRunRepository {
    pub fn new() -> Self {
        Self
    }
}

impl RunRepository for InMemoryRunRepository {
    fn load(&self, run_id: Uuid, events: &[RunEvent], sequence: &Sequence) -> RunState {
        let mut steps: Vec<StepSlot> = sequence.steps()
                                               .iter()
                                               .map(|s| StepSlot { label: s.label(),
                                                                   status: StepStatus::Pending,
                                                                   address: None,
                                                                   error: None,
                                                                   started_at: None,
                                                                   finished_at: None })
                                               .collect();
        let mut completed = false;
        let mut run_fingerprint = None;
        for ev in events {
            match &ev.kind {
                RunEventKind::SequenceStarted { .. } => {}
                RunEventKind::StepStarted { step_index, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Running;
                        slot.started_at = Some(ev.ts);
                    }
                }
                RunEventKind::ArtifactDeployed { step_index, address, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Succeeded;
                        slot.address = Some(*address);
                        slot.finished_at = Some(ev.ts);
                    }
                }
                RunEventKind::MethodInvoked { step_index, .. } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Succeeded;
                        slot.finished_at = Some(ev.ts);
                    }
                }
                RunEventKind::StepFailed { step_index, error } => {
                    if let Some(slot) = steps.get_mut(*step_index) {
                        slot.status = StepStatus::Failed;
                        slot.error = Some(error.clone());
                        slot.finished_at = Some(ev.ts);
                    }
                }
                RunEventKind::SequenceCompleted { run_fingerprint: fp } => {
                    completed = true;
                    run_fingerprint = Some(fp.clone());
                }
            }
        }
        let cursor = steps.iter()
                          .position(|s| matches!(s.status, StepStatus::Pending))
                          .unwrap_or(steps.len());
        RunState { run_id,
                   steps,
                   cursor,
                   completed,
                   run_fingerprint }
    }
}
