//! Registro de instancias de una ejecución.
//!
//! Lista append-only indexada por orden de paso. Pertenece a una única
//! llamada a `Sequencer::run`; no hay estado global.

use crate::model::{Address, Arg, DeployedInstance, StepRef, Value};

#[derive(Debug)]
pub(crate) struct DeployedRegistry {
    /// Dirección por índice de paso (`None` para `Invoke` o pasos no ejecutados).
    slots: Vec<Option<Address>>,
    instances: Vec<DeployedInstance>,
}

impl DeployedRegistry {
    pub(crate) fn with_steps(step_count: usize) -> Self {
        Self { slots: vec![None; step_count],
               instances: Vec::new() }
    }

    pub(crate) fn record(&mut self, instance: DeployedInstance) {
        if let Some(slot) = self.slots.get_mut(instance.step_index) {
            *slot = Some(instance.address);
        }
        self.instances.push(instance);
    }

    pub(crate) fn address_of(&self, r: StepRef) -> Option<Address> {
        self.slots.get(r.index).copied().flatten()
    }

    pub(crate) fn resolve_args(&self, args: &[Arg]) -> Result<Vec<Value>, StepRef> {
        let lookup = |r: StepRef| self.address_of(r);
        args.iter().map(|a| a.resolve(&lookup)).collect()
    }

    pub(crate) fn addresses(&self) -> Vec<String> {
        self.instances.iter().map(|i| i.address.to_hex()).collect()
    }

    pub(crate) fn into_instances(self) -> Vec<DeployedInstance> {
        self.instances
    }
}
