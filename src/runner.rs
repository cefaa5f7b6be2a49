//! Ejecución en seco sobre el entorno en memoria.
use deploy_core::{DeployedInstance, Sequence, Sequencer, SequencingError};
use log::info;

use crate::config::DeployConfig;

/// Ejecuta `sequence` contra un entorno en memoria con la cuenta
/// desplegadora de `config`. Útil para revisar direcciones y orden antes de
/// usar un entorno real.
pub fn dry_run(config: &DeployConfig, sequence: &Sequence) -> Result<Vec<DeployedInstance>, SequencingError> {
    info!("dry_run:start network={} deployer={} steps={}",
          config.network,
          config.deployer,
          sequence.len());
    let mut sequencer = Sequencer::new(config.in_memory_environment());
    let instances = sequencer.run(sequence)?;
    for i in &instances {
        info!("dry_run:deployed step={} artifact={} address={}", i.step_index, i.artifact, i.address);
    }
    Ok(instances)
}
