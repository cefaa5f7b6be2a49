//! Artifact desplegable e instancia desplegada.
//!
//! Un `Artifact` es opaco para el sequencer: nombre simbólico, bytecode
//! compilado (suministrado externamente) y argumentos de constructor. El
//! sequencer sólo resuelve las referencias de esos argumentos; no interpreta
//! el bytecode.
use serde::{Deserialize, Serialize};

use super::{Address, Arg, Bytes};
use crate::hashing::hash_bytes;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub bytecode: Bytes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructor_args: Vec<Arg>,
}

impl Artifact {
    pub fn new(name: impl Into<String>, bytecode: impl Into<Bytes>) -> Self {
        Self { name: name.into(),
               bytecode: bytecode.into(),
               constructor_args: Vec::new() }
    }

    pub fn with_constructor_args(mut self, args: Vec<Arg>) -> Self {
        self.constructor_args = args;
        self
    }

    /// Hash hex del bytecode; identifica el artifact en logs y registros.
    pub fn bytecode_hash(&self) -> String {
        hash_bytes(self.bytecode.as_slice()).to_hex().to_string()
    }
}

/// Resultado de un paso `Deploy` exitoso. Inmutable una vez creado.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeployedInstance {
    pub step_index: usize,
    pub artifact: String,
    pub address: Address,
}
