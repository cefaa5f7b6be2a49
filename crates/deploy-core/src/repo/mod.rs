pub mod types;
pub use types::{InMemoryRunRepository, RunRepository, RunState, StepSlot};
