//! Core Sequencer implementation

use log::{debug, error, info, warn};
use serde_json::json;
use uuid::Uuid;

use super::registry::DeployedRegistry;
use crate::environment::TargetEnvironment;
use crate::errors::SequencingError;
use crate::event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
use crate::hashing::hash_value;
use crate::model::{Artifact, DeployedInstance, StepRef};
use crate::repo::{InMemoryRunRepository, RunRepository, RunState};
use crate::sequence::Sequence;
use crate::step::{Invocation, Step, StepRunResult};

/// Sequencer de despliegues.
///
/// Ejecuta los pasos de una `Sequence` estrictamente en orden contra un
/// `TargetEnvironment`, resolviendo las referencias a direcciones de pasos
/// previos antes de cada llamada. Cada paso se intenta una sola vez; el primer
/// fallo detiene la ejecución y nada se deshace.
#[derive(Debug)]
pub struct Sequencer<T, E = InMemoryEventStore, R = InMemoryRunRepository>
    where T: TargetEnvironment,
          E: EventStore,
          R: RunRepository
{
    environment: T,
    event_store: E,
    repository: R,
    last_run_id: Option<Uuid>,
}

impl<T: TargetEnvironment> Sequencer<T> {
    /// Crea un sequencer con stores en memoria.
    pub fn new(environment: T) -> Self {
        Self::new_with_stores(environment, InMemoryEventStore::default(), InMemoryRunRepository::new())
    }
}

impl<T, E, R> Sequencer<T, E, R>
    where T: TargetEnvironment,
          E: EventStore,
          R: RunRepository
{
    pub fn new_with_stores(environment: T, event_store: E, repository: R) -> Self {
        Self { environment,
               event_store,
               repository,
               last_run_id: None }
    }

    pub fn environment(&self) -> &T {
        &self.environment
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Devuelve el entorno, consumiendo el sequencer.
    pub fn into_environment(self) -> T {
        self.environment
    }

    /// `run_id` de la última ejecución que pasó la validación.
    pub fn last_run_id(&self) -> Option<Uuid> {
        self.last_run_id
    }

    /// Validación estática sin tocar el entorno.
    pub fn validate(&self, sequence: &Sequence) -> Result<(), SequencingError> {
        sequence.validate()
    }

    /// Ejecuta la secuencia completa.
    ///
    /// Devuelve las instancias desplegadas en orden de paso. Con una
    /// secuencia inválida falla antes de ejecutar nada; con un fallo en el
    /// paso `k`, los pasos `0..k` ya tuvieron efecto y `k+1..` no se ejecutan.
    pub fn run(&mut self, sequence: &Sequence) -> Result<Vec<DeployedInstance>, SequencingError> {
        if let Err(e) = sequence.validate() {
            warn!("run:rejected definition_hash={} err={e}", sequence.definition_hash());
            return Err(e);
        }

        let run_id = Uuid::new_v4();
        self.last_run_id = Some(run_id);
        info!("run:start run_id={run_id} steps={} definition_hash={}",
              sequence.len(),
              sequence.definition_hash());
        self.event_store.append_kind(run_id,
                                     RunEventKind::SequenceStarted { definition_hash: sequence.definition_hash().to_string(),
                                                                     step_count: sequence.len() });

        let mut registry = DeployedRegistry::with_steps(sequence.len());
        for (index, step) in sequence.steps().iter().enumerate() {
            self.event_store.append_kind(run_id,
                                         RunEventKind::StepStarted { step_index: index,
                                                                     label: step.label() });
            debug!("step:start run_id={run_id} index={index} {}", step.label());

            match self.execute_step(index, step, &registry) {
                Ok(StepRunResult::Deployed(instance)) => {
                    self.event_store.append_kind(run_id,
                                                 RunEventKind::ArtifactDeployed { step_index: index,
                                                                                  artifact: instance.artifact.clone(),
                                                                                  address: instance.address });
                    debug!("step:done run_id={run_id} index={index} address={}", instance.address);
                    registry.record(instance);
                }
                Ok(StepRunResult::Invoked { target, method }) => {
                    self.event_store.append_kind(run_id,
                                                 RunEventKind::MethodInvoked { step_index: index,
                                                                               target,
                                                                               method });
                    debug!("step:done run_id={run_id} index={index} target={target}");
                }
                Err(e) => {
                    error!("step:failed run_id={run_id} index={index} err={e}");
                    self.event_store.append_kind(run_id,
                                                 RunEventKind::StepFailed { step_index: index,
                                                                            error: e.clone() });
                    return Err(e);
                }
            }
        }

        let run_fingerprint = self.calculate_run_fingerprint(sequence, &registry);
        self.event_store
            .append_kind(run_id, RunEventKind::SequenceCompleted { run_fingerprint });
        info!("run:done run_id={run_id} deployed={}", registry.addresses().len());
        Ok(registry.into_instances())
    }

    fn execute_step(&mut self,
                    index: usize,
                    step: &Step,
                    registry: &DeployedRegistry)
                    -> Result<StepRunResult, SequencingError> {
        match step {
            Step::Deploy(artifact) => self.execute_deploy(index, artifact, registry),
            Step::Invoke(invocation) => self.execute_invoke(index, invocation, registry),
        }
    }

    fn execute_deploy(&mut self,
                      index: usize,
                      artifact: &Artifact,
                      registry: &DeployedRegistry)
                      -> Result<StepRunResult, SequencingError> {
        let args = registry.resolve_args(&artifact.constructor_args)
                           .map_err(|r| unresolved(index, r))?;
        let address = self.environment
                          .deploy(artifact, &args)
                          .map_err(|cause| SequencingError::DeploymentFailure { step_index: index,
                                                                                artifact: artifact.name.clone(),
                                                                                cause })?;
        Ok(StepRunResult::Deployed(DeployedInstance { step_index: index,
                                                      artifact: artifact.name.clone(),
                                                      address }))
    }

    fn execute_invoke(&mut self,
                      index: usize,
                      invocation: &Invocation,
                      registry: &DeployedRegistry)
                      -> Result<StepRunResult, SequencingError> {
        let target = registry.address_of(invocation.target)
                             .ok_or_else(|| unresolved(index, invocation.target))?;
        let args = registry.resolve_args(&invocation.args)
                           .map_err(|r| unresolved(index, r))?;
        self.environment
            .invoke(&target, &invocation.method, &args)
            .map_err(|cause| SequencingError::InvocationFailure { step_index: index,
                                                                  method: invocation.method.clone(),
                                                                  cause })?;
        Ok(StepRunResult::Invoked { target,
                                    method: invocation.method.clone() })
    }

    fn calculate_run_fingerprint(&self, sequence: &Sequence, registry: &DeployedRegistry) -> String {
        hash_value(&json!({
            "engine_version": crate::constants::ENGINE_VERSION,
            "definition_hash": sequence.definition_hash(),
            "deployed": registry.addresses(),
        }))
    }

    /// Eventos de una ejecución.
    pub fn events_for(&self, run_id: Uuid) -> Vec<RunEvent> {
        self.event_store.list(run_id)
    }

    /// Eventos de la última ejecución.
    pub fn events(&self) -> Option<Vec<RunEvent>> {
        self.last_run_id.map(|id| self.event_store.list(id))
    }

    /// Variante compacta de eventos de la última ejecución.
    pub fn event_variants(&self) -> Option<Vec<&'static str>> {
        self.events().map(|events| {
                         events.iter()
                               .map(|e| match e.kind {
                                   RunEventKind::SequenceStarted { .. } => "I",
                                   RunEventKind::StepStarted { .. } => "S",
                                   RunEventKind::ArtifactDeployed { .. } => "D",
                                   RunEventKind::MethodInvoked { .. } => "V",
                                   RunEventKind::StepFailed { .. } => "X",
                                   RunEventKind::SequenceCompleted { .. } => "C",
                               })
                               .collect()
                     })
    }

    /// Reconstruye el estado por paso de una ejecución.
    pub fn run_state(&self, run_id: Uuid, sequence: &Sequence) -> RunState {
        let events = self.event_store.list(run_id);
        self.repository.load(run_id, &events, sequence)
    }

    /// Fingerprint de la última ejecución, si completó.
    pub fn run_fingerprint(&self) -> Option<String> {
        let evs = self.events()?;
        evs.iter().rev().find_map(|e| match &e.kind {
                            RunEventKind::SequenceCompleted { run_fingerprint } => Some(run_fingerprint.clone()),
                            _ => None,
                        })
    }
}

// Sólo alcanzable si la validación estática se saltó algún caso.
fn unresolved(step_index: usize, r: StepRef) -> SequencingError {
    SequencingError::UnresolvedReference { step_index,
                                           reference: r.index }
}
