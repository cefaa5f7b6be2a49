//! Pasada estática de validación.
//!
//! Para cada paso `k`, toda referencia `i` (en argumentos de constructor, en
//! argumentos de llamada o como target de un `Invoke`) debe cumplir:
//! - `i < k`; si no, `InvalidSequence` (referencia a sí mismo, hacia delante o
//!   a un paso inexistente);
//! - el paso `i` es un `Deploy`; si no, `UnresolvedReference`.

use crate::errors::SequencingError;
use crate::model::StepRef;
use crate::step::Step;

pub fn validate(steps: &[Step]) -> Result<(), SequencingError> {
    for (k, step) in steps.iter().enumerate() {
        match step {
            Step::Deploy(artifact) => {
                if artifact.name.trim().is_empty() {
                    return Err(invalid(k, "artifact name must not be empty"));
                }
            }
            Step::Invoke(invocation) => {
                if invocation.method.trim().is_empty() {
                    return Err(invalid(k, "method name must not be empty"));
                }
                check_reference(steps, k, invocation.target)?;
            }
        }
        for arg in step.args() {
            for r in arg.references() {
                check_reference(steps, k, r)?;
            }
        }
    }
    Ok(())
}

fn check_reference(steps: &[Step], k: usize, r: StepRef) -> Result<(), SequencingError> {
    if r.index >= k {
        let reason = if r.index == k {
            "step references itself".to_string()
        } else if r.index >= steps.len() {
            format!("reference {r} points past the end of the sequence ({} steps)", steps.len())
        } else {
            format!("reference {r} points to a later step")
        };
        return Err(invalid(k, reason));
    }
    if !steps[r.index].is_deploy() {
        return Err(SequencingError::UnresolvedReference { step_index: k,
                                                          reference: r.index });
    }
    Ok(())
}

fn invalid(step_index: usize, reason: impl Into<String>) -> SequencingError {
    SequencingError::InvalidSequence { step_index,
                                       reason: reason.into() }
}
