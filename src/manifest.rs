//! Carga de secuencias desde manifests JSON.
//!
//! Formato:
//!
//! ```json
//! { "steps": [
//!     { "action": "deploy", "name": "SampleToken", "bytecode": "0x6080" },
//!     { "action": "deploy", "name": "TokenVote1202", "bytecode": "0x6080" },
//!     { "action": "invoke", "target": {"ref": 1}, "method": "init",
//!       "args": [ {"ref": 0}, [ {"type": "uint", "value": 1} ] ] }
//! ] }
//! ```
//!
//! Los literales de dirección se validan al deserializar y la secuencia se
//! valida antes de devolverse.
use std::fs;
use std::path::Path;

use deploy_core::Sequence;
use log::debug;

use crate::errors::ManifestError;

pub fn from_json_str(raw: &str) -> Result<Sequence, ManifestError> {
    let sequence: Sequence = serde_json::from_str(raw)?;
    sequence.validate()?;
    debug!("manifest:loaded steps={} definition_hash={}",
           sequence.len(),
           sequence.definition_hash());
    Ok(sequence)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Sequence, ManifestError> {
    let raw = fs::read_to_string(path.as_ref())?;
    from_json_str(&raw)
}

pub fn to_json_string(sequence: &Sequence) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(sequence)?)
}
