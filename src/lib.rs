//! deployflow
//!
//! Capa externa sobre `deploy-core`:
//! - `config`: variables de entorno (.env) para la red, manifest y cuenta.
//! - `manifest`: carga/serialización de secuencias en JSON.
//! - `scenarios`: la secuencia de votación con token.
//! - `runner`: ejecución en seco sobre el entorno en memoria.

pub mod config;
pub mod errors;
pub mod manifest;
pub mod runner;
pub mod scenarios;

pub use config::DeployConfig;
pub use deploy_core;
pub use errors::{ConfigError, ManifestError};
