//! Modelos neutrales (Address, Bytes, Value/Arg, Artifact, DeployedInstance).

pub mod address;
pub mod artifact;
pub mod bytes;
pub mod value;

pub use address::{Address, AddressError};
pub use artifact::{Artifact, DeployedInstance};
pub use bytes::{Bytes, BytesError};
pub use value::{Arg, StepRef, Value};

/// Quita el prefijo `0x`/`0X` si existe.
pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}
