use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::strip_hex_prefix;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum BytesError {
    #[error("bytes are not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Blob opaco (bytecode o argumento `bytes`). Se serializa como hex con `0x`.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bytes(Vec<u8>);

impl Bytes {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn from_hex(s: &str) -> Result<Self, BytesError> {
        Ok(Self(hex::decode(strip_hex_prefix(s.trim()))?))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes({} bytes)", self.0.len())
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl TryFrom<String> for Bytes {
    type Error = BytesError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Bytes> for String {
    fn from(value: Bytes) -> Self {
        value.to_string()
    }
}

impl From<&[u8]> for Bytes {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_form_accepts_prefix_and_mixed_case() {
        let b = Bytes::from_hex("0x6080aB").unwrap();
        assert_eq!(b.as_slice(), &[0x60, 0x80, 0xab]);
        assert_eq!(b.to_string(), "0x6080ab");
        assert_eq!(Bytes::from_hex("").unwrap(), Bytes::default());
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert_eq!(Bytes::from_hex("0xabc").unwrap_err(), BytesError::InvalidHex(hex::FromHexError::OddLength));
        assert!(matches!(Bytes::from_hex("0xéé").unwrap_err(),
                         BytesError::InvalidHex(hex::FromHexError::InvalidHexCharacter { index: 0, .. })));
        assert!(serde_json::from_str::<Bytes>("\"0xzz\"").is_err());
    }
}
