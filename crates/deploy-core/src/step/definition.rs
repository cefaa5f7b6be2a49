use serde::{Deserialize, Serialize};

use crate::model::{Arg, Artifact, StepRef};

/// Llamada a un método de una instancia desplegada en un paso previo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub target: StepRef,
    pub method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Arg>,
}

/// Unidad de trabajo de una secuencia.
///
/// En JSON: `{"action": "deploy", "name": ..., "bytecode": ...}` o
/// `{"action": "invoke", "target": {"ref": n}, "method": ..., "args": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Deploy(Artifact),
    Invoke(Invocation),
}

impl Step {
    pub fn deploy(artifact: Artifact) -> Self {
        Step::Deploy(artifact)
    }

    pub fn invoke(target: impl Into<StepRef>, method: impl Into<String>, args: Vec<Arg>) -> Self {
        Step::Invoke(Invocation { target: target.into(),
                                  method: method.into(),
                                  args })
    }

    pub fn is_deploy(&self) -> bool {
        matches!(self, Step::Deploy(_))
    }

    /// Etiqueta corta para logs y eventos: `deploy SampleToken`, `invoke init@#2`.
    pub fn label(&self) -> String {
        match self {
            Step::Deploy(a) => format!("deploy {}", a.name),
            Step::Invoke(i) => format!("invoke {}@{}", i.method, i.target),
        }
    }

    /// Argumentos (de constructor o de llamada) sin resolver.
    pub fn args(&self) -> &[Arg] {
        match self {
            Step::Deploy(a) => &a.constructor_args,
            Step::Invoke(i) => &i.args,
        }
    }
}
