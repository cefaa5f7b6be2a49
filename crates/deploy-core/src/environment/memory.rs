//! Entorno en memoria determinista (tests y dry-runs).
//!
//! - Las direcciones se derivan de `blake3(deployer || nonce)`: la misma
//!   secuencia sobre un entorno nuevo produce siempre las mismas direcciones.
//! - `contracts` es el registro de efectos (instancias desplegadas y llamadas
//!   aceptadas); `calls` registra cada intento, incluso los fallidos.
//! - Se pueden inyectar fallos por nombre de artifact o de método.
use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, warn};

use super::TargetEnvironment;
use crate::constants::DEFAULT_DEPLOYER;
use crate::errors::EnvironmentError;
use crate::hashing::hash_bytes;
use crate::model::{Address, Artifact, Value};

/// Intento registrado contra el entorno.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentCall {
    Deploy { artifact: String, constructor_args: Vec<Value> },
    Invoke { address: Address, method: String, args: Vec<Value> },
}

/// Contrato presente en el entorno tras un despliegue exitoso.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    pub name: String,
    pub bytecode_hash: String,
    pub constructor_args: Vec<Value>,
    /// Llamadas aceptadas, en orden.
    pub invocations: Vec<(String, Vec<Value>)>,
}

#[derive(Debug)]
pub struct InMemoryEnvironment {
    deployer: Address,
    nonce: u64,
    contracts: IndexMap<Address, DeployedContract>,
    calls: Vec<EnvironmentCall>,
    deploy_failures: HashMap<String, EnvironmentError>,
    invoke_failures: HashMap<String, EnvironmentError>,
}

impl Default for InMemoryEnvironment {
    fn default() -> Self {
        Self::with_deployer(DEFAULT_DEPLOYER)
    }
}

impl InMemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deployer(deployer: Address) -> Self {
        Self { deployer,
               nonce: 0,
               contracts: IndexMap::new(),
               calls: Vec::new(),
               deploy_failures: HashMap::new(),
               invoke_failures: HashMap::new() }
    }

    /// Hace fallar todo despliegue del artifact `name`.
    pub fn fail_deploy(mut self, name: impl Into<String>, error: EnvironmentError) -> Self {
        self.deploy_failures.insert(name.into(), error);
        self
    }

    /// Hace fallar toda invocación de `method`.
    pub fn fail_invoke(mut self, method: impl Into<String>, error: EnvironmentError) -> Self {
        self.invoke_failures.insert(method.into(), error);
        self
    }

    pub fn deployer(&self) -> Address {
        self.deployer
    }

    /// Contratos desplegados, en orden de despliegue.
    pub fn contracts(&self) -> &IndexMap<Address, DeployedContract> {
        &self.contracts
    }

    pub fn contract(&self, address: &Address) -> Option<&DeployedContract> {
        self.contracts.get(address)
    }

    pub fn calls(&self) -> &[EnvironmentCall] {
        &self.calls
    }

    /// Dirección que recibirá el próximo despliegue exitoso.
    pub fn next_address(&self) -> Address {
        let mut seed = Vec::with_capacity(Address::LEN + 8);
        seed.extend_from_slice(self.deployer.as_bytes());
        seed.extend_from_slice(&self.nonce.to_be_bytes());
        let digest = hash_bytes(&seed);
        let mut bytes = [0u8; Address::LEN];
        bytes.copy_from_slice(&digest.as_bytes()[..Address::LEN]);
        Address::from_bytes(bytes)
    }
}

impl TargetEnvironment for InMemoryEnvironment {
    fn deploy(&mut self, artifact: &Artifact, constructor_args: &[Value]) -> Result<Address, EnvironmentError> {
        self.calls.push(EnvironmentCall::Deploy { artifact: artifact.name.clone(),
                                                  constructor_args: constructor_args.to_vec() });
        if let Some(err) = self.deploy_failures.get(&artifact.name) {
            warn!("memory:deploy rejected artifact={} err={err}", artifact.name);
            return Err(err.clone());
        }
        if artifact.bytecode.is_empty() {
            return Err(EnvironmentError::ArtifactMismatch(format!("artifact '{}' has empty bytecode", artifact.name)));
        }
        let address = self.next_address();
        self.nonce += 1;
        self.contracts.insert(address,
                              DeployedContract { name: artifact.name.clone(),
                                                 bytecode_hash: artifact.bytecode_hash(),
                                                 constructor_args: constructor_args.to_vec(),
                                                 invocations: Vec::new() });
        debug!("memory:deploy artifact={} address={address} nonce={}", artifact.name, self.nonce);
        Ok(address)
    }

    fn invoke(&mut self, address: &Address, method: &str, args: &[Value]) -> Result<(), EnvironmentError> {
        self.calls.push(EnvironmentCall::Invoke { address: *address,
                                                  method: method.to_string(),
                                                  args: args.to_vec() });
        if let Some(err) = self.invoke_failures.get(method) {
            warn!("memory:invoke rejected method={method} address={address} err={err}");
            return Err(err.clone());
        }
        let contract = self.contracts
                           .get_mut(address)
                           .ok_or_else(|| EnvironmentError::Rejected(format!("no contract at {address}")))?;
        contract.invocations.push((method.to_string(), args.to_vec()));
        debug!("memory:invoke method={method} address={address}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_deterministic_per_deployer_and_nonce() {
        let mut a = InMemoryEnvironment::new();
        let mut b = InMemoryEnvironment::new();
        let art = Artifact::new("A", vec![0x60, 0x80]);
        let a0 = a.deploy(&art, &[]).unwrap();
        let a1 = a.deploy(&art, &[]).unwrap();
        assert_ne!(a0, a1);
        assert_eq!(b.deploy(&art, &[]).unwrap(), a0);

        let mut other = InMemoryEnvironment::with_deployer(Address::from_bytes([1; 20]));
        assert_ne!(other.deploy(&art, &[]).unwrap(), a0);
    }

    #[test]
    fn invoke_on_unknown_address_is_rejected() {
        let mut env = InMemoryEnvironment::new();
        let err = env.invoke(&Address::ZERO, "init", &[]).unwrap_err();
        assert!(matches!(err, EnvironmentError::Rejected(_)));
        assert_eq!(env.calls().len(), 1);
    }

    #[test]
    fn empty_bytecode_is_an_artifact_mismatch() {
        let mut env = InMemoryEnvironment::new();
        let err = env.deploy(&Artifact::new("Empty", Vec::new()), &[]).unwrap_err();
        assert!(matches!(err, EnvironmentError::ArtifactMismatch(_)));
        assert!(env.contracts().is_empty());
    }

    #[test]
    fn injected_failures_leave_no_side_effects() {
        let mut env = InMemoryEnvironment::new().fail_deploy("A", EnvironmentError::OutOfGas("limit".into()));
        let err = env.deploy(&Artifact::new("A", vec![0x60]), &[]).unwrap_err();
        assert_eq!(err, EnvironmentError::OutOfGas("limit".into()));
        assert!(env.contracts().is_empty());
        assert_eq!(env.calls().len(), 1);
    }
}
