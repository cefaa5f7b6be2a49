//! Colaborador externo: el entorno donde se despliega.
//!
//! El sequencer trata al entorno como una capacidad opaca. Cada llamada es
//! síncrona: si el entorno necesita esperar confirmación, bloquea hasta
//! tenerla y devuelve éxito o fallo.

mod memory;

pub use memory::{DeployedContract, EnvironmentCall, InMemoryEnvironment};

use crate::errors::EnvironmentError;
use crate::model::{Address, Artifact, Value};

pub trait TargetEnvironment {
    /// Despliega `artifact` con sus argumentos de constructor ya resueltos y
    /// devuelve la dirección asignada.
    fn deploy(&mut self, artifact: &Artifact, constructor_args: &[Value]) -> Result<Address, EnvironmentError>;

    /// Invoca `method` sobre la instancia en `address`.
    fn invoke(&mut self, address: &Address, method: &str, args: &[Value]) -> Result<(), EnvironmentError>;
}

impl<T: TargetEnvironment + ?Sized> TargetEnvironment for &mut T {
    fn deploy(&mut self, artifact: &Artifact, constructor_args: &[Value]) -> Result<Address, EnvironmentError> {
        (**self).deploy(artifact, constructor_args)
    }

    fn invoke(&mut self, address: &Address, method: &str, args: &[Value]) -> Result<(), EnvironmentError> {
        (**self).invoke(address, method, args)
    }
}

impl<T: TargetEnvironment + ?Sized> TargetEnvironment for Box<T> {
    fn deploy(&mut self, artifact: &Artifact, constructor_args: &[Value]) -> Result<Address, EnvironmentError> {
        (**self).deploy(artifact, constructor_args)
    }

    fn invoke(&mut self, address: &Address, method: &str, args: &[Value]) -> Result<(), EnvironmentError> {
        (**self).invoke(address, method, args)
    }
}
