//! Constantes del sequencer.
//!
//! `ENGINE_VERSION` participa en el fingerprint de cada ejecución: un cambio
//! de versión invalida los fingerprints previos aunque la secuencia y las
//! direcciones desplegadas sean idénticas.

use crate::model::Address;

/// Versión lógica del sequencer. Mantener estable mientras no haya cambios
/// incompatibles en la forma de resolver o registrar pasos.
pub const ENGINE_VERSION: &str = "D1.0";

/// Cuenta desplegadora usada por el entorno en memoria cuando no se indica
/// otra.
pub const DEFAULT_DEPLOYER: Address =
    Address::from_bytes([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xde]);
