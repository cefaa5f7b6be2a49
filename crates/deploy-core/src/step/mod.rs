//! Definiciones relacionadas a Steps.
//!
//! Un Step es `Deploy(artifact)` o `Invoke(target, method, args)`. Los pasos
//! no se ejecutan solos: el `Sequencer` resuelve sus referencias y delega en
//! el `TargetEnvironment`.

pub mod definition;
mod run_result;
mod status;

pub use definition::{Invocation, Step};
pub use run_result::StepRunResult;
pub use status::StepStatus;
