//! deploy-core: sequencer lineal de despliegues.
//!
//! Una `Sequence` es una lista ordenada de pasos `Deploy`/`Invoke`. El
//! `Sequencer` la valida, la ejecuta en orden contra un `TargetEnvironment`
//! y devuelve las instancias desplegadas, propagando las direcciones de pasos
//! previos a los argumentos de los siguientes.
pub mod constants;
pub mod engine;
pub mod environment;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod model;
pub mod repo;
pub mod sequence;
pub mod step;

pub use engine::Sequencer;
pub use environment::{InMemoryEnvironment, TargetEnvironment};
pub use errors::{EnvironmentError, SequencingError};
pub use event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
pub use model::{Address, AddressError, Arg, Artifact, Bytes, BytesError, DeployedInstance, StepRef, Value};
pub use repo::{InMemoryRunRepository, RunRepository, RunState};
pub use sequence::{Sequence, SequenceBuilder};
pub use step::{Invocation, Step, StepStatus};
