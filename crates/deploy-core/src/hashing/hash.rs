//! Hash helpers (blake3, salida hex de 64 caracteres).

use blake3::Hasher;
use serde_json::Value;

use super::to_canonical_json;

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    hash_bytes(input.as_bytes()).to_hex().to_string()
}

/// Hashea un `Value` sobre su forma canónica.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}

/// Hash crudo (32 bytes), usado para derivar direcciones.
pub fn hash_bytes(input: &[u8]) -> blake3::Hash {
    let mut h = Hasher::new();
    h.update(input);
    h.finalize()
}
