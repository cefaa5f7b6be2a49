use crate::model::{Address, DeployedInstance};

/// Resultado de ejecutar un paso con éxito.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepRunResult {
    Deployed(DeployedInstance),
    Invoked { target: Address, method: String },
}
