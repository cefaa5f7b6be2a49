//! Definición inmutable de una secuencia de despliegue.
//!
//! El `definition_hash` se calcula una vez al construir la secuencia (blake3
//! sobre el JSON canónico de los pasos) y viaja en los eventos de cada
//! ejecución para identificar qué se ejecutó.
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{validate, SequenceBuilder};
use crate::errors::SequencingError;
use crate::hashing::hash_value;
use crate::step::Step;

#[derive(Serialize, Deserialize)]
struct RawSequence {
    steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSequence", into = "RawSequence")]
pub struct Sequence {
    steps: Vec<Step>,
    definition_hash: String,
}

impl Sequence {
    pub fn new(steps: Vec<Step>) -> Self {
        let definition_hash = hash_value(&json!({ "steps": steps }));
        Self { steps, definition_hash }
    }

    pub fn builder() -> SequenceBuilder {
        SequenceBuilder::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn definition_hash(&self) -> &str {
        &self.definition_hash
    }

    /// Número de pasos `Deploy` (= número de instancias de una ejecución exitosa).
    pub fn deploy_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_deploy()).count()
    }

    /// Pasada estática de validación. No tiene efectos secundarios.
    pub fn validate(&self) -> Result<(), SequencingError> {
        validate(&self.steps)
    }
}

impl From<RawSequence> for Sequence {
    fn from(raw: RawSequence) -> Self {
        Sequence::new(raw.steps)
    }
}

impl From<Sequence> for RawSequence {
    fn from(seq: Sequence) -> Self {
        RawSequence { steps: seq.steps }
    }
}
