//! Tipos de evento de una ejecución y estructura `RunEvent`.
//!
//! Rol en el flujo:
//! - Cada `Sequencer::run` emite eventos a un `EventStore` append-only bajo
//!   un `run_id` nuevo.
//! - Estos eventos permiten reconstruir el estado de cada paso (ver
//!   `repo`) y saber qué direcciones quedaron desplegadas tras un fallo.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SequencingError;
use crate::model::Address;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Primer evento de un `run_id`. Sólo se emite si la validación estática
    /// pasó.
    SequenceStarted { definition_hash: String, step_count: usize },
    /// Un paso comenzó. No implica éxito.
    StepStarted { step_index: usize, label: String },
    /// Un `Deploy` terminó correctamente.
    ArtifactDeployed { step_index: usize, artifact: String, address: Address },
    /// Un `Invoke` terminó correctamente.
    MethodInvoked { step_index: usize, target: Address, method: String },
    /// Un paso falló. La ejecución no continúa (stop-on-failure).
    StepFailed { step_index: usize, error: SequencingError },
    /// Cierre con fingerprint de la ejecución.
    SequenceCompleted { run_fingerprint: String },
}

impl RunEventKind {
    pub fn step_index(&self) -> Option<usize> {
        match self {
            Self::StepStarted { step_index, .. }
            | Self::ArtifactDeployed { step_index, .. }
            | Self::MethodInvoked { step_index, .. }
            | Self::StepFailed { step_index, .. } => Some(*step_index),
            Self::SequenceStarted { .. } | Self::SequenceCompleted { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64, // asignado por el EventStore (orden append)
    pub run_id: Uuid,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en fingerprint)
}
