//! Errores del sequencer.
//!
//! Taxonomía:
//! - `InvalidSequence` y `UnresolvedReference` son estáticos: se detectan en
//!   la pasada de validación, antes de tocar el entorno.
//! - `DeploymentFailure` e `InvocationFailure` ocurren en tiempo de ejecución
//!   y son fatales para la secuencia (stop-on-failure). La causa del entorno
//!   se conserva tal cual.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallo reportado por el entorno destino. Se propaga sin reinterpretar.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum EnvironmentError {
    #[error("rejected by target environment: {0}")] Rejected(String),
    #[error("out of gas: {0}")] OutOfGas(String),
    #[error("artifact mismatch: {0}")] ArtifactMismatch(String),
    #[error("target environment unavailable: {0}")] Unavailable(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum SequencingError {
    #[error("invalid sequence at step {step_index}: {reason}")]
    InvalidSequence { step_index: usize, reason: String },
    #[error("step {step_index} references step {reference}, which is not a deploy step")]
    UnresolvedReference { step_index: usize, reference: usize },
    #[error("deployment of '{artifact}' failed at step {step_index}: {cause}")]
    DeploymentFailure { step_index: usize, artifact: String, cause: EnvironmentError },
    #[error("invocation of '{method}' failed at step {step_index}: {cause}")]
    InvocationFailure { step_index: usize, method: String, cause: EnvironmentError },
}

impl SequencingError {
    /// Índice del paso que originó el error.
    pub fn step_index(&self) -> usize {
        match self {
            Self::InvalidSequence { step_index, .. }
            | Self::UnresolvedReference { step_index, .. }
            | Self::DeploymentFailure { step_index, .. }
            | Self::InvocationFailure { step_index, .. } => *step_index,
        }
    }

    /// `true` si el error se detectó antes de ejecutar cualquier paso.
    pub fn is_static(&self) -> bool {
        matches!(self, Self::InvalidSequence { .. } | Self::UnresolvedReference { .. })
    }

    /// Causa del entorno para errores de ejecución.
    pub fn cause(&self) -> Option<&EnvironmentError> {
        match self {
            Self::DeploymentFailure { cause, .. } | Self::InvocationFailure { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_error_keeps_cause_verbatim() {
        let err = SequencingError::DeploymentFailure { step_index: 0,
                                                       artifact: "SampleToken".into(),
                                                       cause: EnvironmentError::OutOfGas("needed 300000".into()) };
        assert_eq!(err.to_string(), "deployment of 'SampleToken' failed at step 0: out of gas: needed 300000");
        assert_eq!(err.cause(), Some(&EnvironmentError::OutOfGas("needed 300000".into())));
        assert!(!err.is_static());
    }

    #[test]
    fn static_errors_report_step_index() {
        let err = SequencingError::UnresolvedReference { step_index: 3, reference: 1 };
        assert_eq!(err.step_index(), 3);
        assert!(err.is_static());
        assert!(err.cause().is_none());
    }
}
