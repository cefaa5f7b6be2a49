//! Secuencia ordenada de pasos: definición, builder y validación estática.

mod builder;
mod definition;
mod validate;

pub use builder::SequenceBuilder;
pub use definition::Sequence;
pub use validate::validate;
