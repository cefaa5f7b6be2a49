//! Engine module: Sequencer implementation
//!
//! Ejecuta secuencias de despliegue paso a paso, propagando direcciones entre
//! pasos y registrando cada transición en el `EventStore`.

pub mod core;
mod registry;

pub use core::Sequencer;

pub use crate::event::{EventStore, InMemoryEventStore, RunEvent, RunEventKind};
pub use crate::repo::{InMemoryRunRepository, RunRepository, RunState};
