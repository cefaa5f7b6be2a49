use chrono::Utc;
use indexmap::IndexMap;
use uuid::Uuid;

use super::{RunEvent, RunEventKind};

/// Almacenamiento de eventos append-only, particionado por ejecución.
pub trait EventStore {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&mut self, run_id: Uuid, kind: RunEventKind) -> RunEvent;
    /// Lista eventos de una ejecución (orden ascendente por seq).
    fn list(&self, run_id: Uuid) -> Vec<RunEvent>;
    /// Ejecuciones registradas, en el orden en que empezaron.
    fn runs(&self) -> Vec<Uuid>;
}

/// Store en memoria. Las ejecuciones conservan su orden de inicio, así un
/// re-run sobre el mismo entorno queda a continuación del anterior.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    runs: IndexMap<Uuid, Vec<RunEvent>>,
}

impl InMemoryEventStore {
    /// Última ejecución que llegó a `SequenceCompleted`.
    pub fn last_completed_run(&self) -> Option<Uuid> {
        self.runs
            .iter()
            .rev()
            .find(|(_, events)| events.iter().any(|e| matches!(e.kind, RunEventKind::SequenceCompleted { .. })))
            .map(|(id, _)| *id)
    }
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, run_id: Uuid, kind: RunEventKind) -> RunEvent {
        let events = self.runs.entry(run_id).or_default();
        let ev = RunEvent { seq: events.len() as u64,
                            run_id,
                            kind,
                            ts: Utc::now() };
        events.push(ev.clone());
        ev
    }

    fn list(&self, run_id: Uuid) -> Vec<RunEvent> {
        self.runs.get(&run_id).cloned().unwrap_or_default()
    }

    fn runs(&self) -> Vec<Uuid> {
        self.runs.keys().copied().collect()
    }
}
