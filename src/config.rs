//! Configuración de despliegue.
//! Carga variables de entorno (.env una sola vez) y expone `DeployConfig`.
//!
//! Variables:
//! - `DEPLOY_NETWORK`: nombre lógico de la red (por defecto `development`).
//! - `DEPLOY_MANIFEST_PATH`: manifest JSON con la secuencia (opcional).
//! - `DEPLOY_DEPLOYER_ADDRESS`: cuenta desplegadora (opcional, validada).
use std::env;
use std::path::PathBuf;

use deploy_core::constants::DEFAULT_DEPLOYER;
use deploy_core::{Address, InMemoryEnvironment};
use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::errors::ConfigError;

pub const DEFAULT_NETWORK: &str = "development";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub network: String,
    pub manifest_path: Option<PathBuf>,
    pub deployer: Address,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self { network: DEFAULT_NETWORK.to_string(),
               manifest_path: None,
               deployer: DEFAULT_DEPLOYER }
    }
}

impl DeployConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let network = match lookup("DEPLOY_NETWORK") {
            Some(v) if v.trim().is_empty() => return Err(ConfigError::Empty("DEPLOY_NETWORK".into())),
            Some(v) => v.trim().to_string(),
            None => DEFAULT_NETWORK.to_string(),
        };
        let manifest_path = lookup("DEPLOY_MANIFEST_PATH").filter(|v| !v.trim().is_empty())
                                                          .map(PathBuf::from);
        let deployer = match lookup("DEPLOY_DEPLOYER_ADDRESS") {
            Some(v) => Address::parse(&v).map_err(|e| ConfigError::InvalidValue { key: "DEPLOY_DEPLOYER_ADDRESS".into(),
                                                                                   reason: e.to_string() })?,
            None => DEFAULT_DEPLOYER,
        };
        Ok(Self { network,
                  manifest_path,
                  deployer })
    }

    /// Entorno en memoria con la cuenta desplegadora configurada.
    pub fn in_memory_environment(&self) -> InMemoryEnvironment {
        InMemoryEnvironment::with_deployer(self.deployer)
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = DeployConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, DeployConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let cfg = DeployConfig::from_lookup(lookup_from(&[("DEPLOY_NETWORK", "ropsten"),
                                                           ("DEPLOY_MANIFEST_PATH", "deploy/vote.json"),
                                                           ("DEPLOY_DEPLOYER_ADDRESS",
                                                            "0x168fbF3566166A088ca6D392F00087197DccBD02")])).unwrap();
        assert_eq!(cfg.network, "ropsten");
        assert_eq!(cfg.manifest_path, Some(PathBuf::from("deploy/vote.json")));
        assert_eq!(cfg.deployer.to_string(), "0x168fbf3566166a088ca6d392f00087197dccbd02");
        assert_eq!(cfg.in_memory_environment().deployer(), cfg.deployer);
    }

    #[test]
    fn rejects_malformed_deployer() {
        let err = DeployConfig::from_lookup(lookup_from(&[("DEPLOY_DEPLOYER_ADDRESS", "0x1234")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "DEPLOY_DEPLOYER_ADDRESS"));
    }

    #[test]
    fn rejects_blank_network() {
        let err = DeployConfig::from_lookup(lookup_from(&[("DEPLOY_NETWORK", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty("DEPLOY_NETWORK".into()));
    }
}
