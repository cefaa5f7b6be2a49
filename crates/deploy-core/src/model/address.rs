//! Dirección de red de 20 bytes.
//!
//! Los literales de dirección nunca se aceptan sin validar: exactamente 40
//! dígitos hex, con prefijo `0x` opcional. Un literal más largo o más corto se
//! rechaza en lugar de truncarse o rellenarse.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::strip_hex_prefix;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum AddressError {
    #[error("address must have {expected} hex digits, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("address is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; Address::LEN]);

impl Address {
    pub const LEN: usize = 20;
    pub const ZERO: Address = Address([0u8; Address::LEN]);

    pub const fn from_bytes(bytes: [u8; Address::LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; Address::LEN] {
        &self.0
    }

    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let digits = strip_hex_prefix(s.trim());
        if digits.len() != Self::LEN * 2 {
            return Err(AddressError::InvalidLength { expected: Self::LEN * 2,
                                                     found: digits.len() });
        }
        let mut bytes = [0u8; Address::LEN];
        hex::decode_to_slice(digits, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Forma canónica: `0x` + 40 dígitos en minúscula.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = AddressError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.to_hex()
    }
}
