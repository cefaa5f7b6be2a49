//! Builder de `Sequence`.
//!
//! Acumula pasos en orden y devuelve el `StepRef` de cada paso añadido para
//! que los pasos siguientes puedan referenciarlo:
//!
//! ```
//! use deploy_core::{Arg, Artifact, Sequence};
//!
//! let mut b = Sequence::builder();
//! let token = b.push_deploy(Artifact::new("SampleToken", vec![0x60, 0x80]));
//! let vote = b.push_deploy(Artifact::new("TokenVote1202", vec![0x60, 0x80]));
//! let seq = b.invoke(vote, "init", vec![Arg::Reference(token)]).build();
//! assert_eq!(seq.len(), 3);
//! ```

use crate::model::{Arg, Artifact, StepRef};
use crate::step::Step;

use super::Sequence;

#[derive(Debug, Default)]
pub struct SequenceBuilder {
    steps: Vec<Step>,
}

impl SequenceBuilder {
    /// Referencia que recibirá el próximo paso añadido.
    pub fn next_ref(&self) -> StepRef {
        StepRef::new(self.steps.len())
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn deploy(self, artifact: Artifact) -> Self {
        self.step(Step::deploy(artifact))
    }

    pub fn invoke(self, target: impl Into<StepRef>, method: impl Into<String>, args: Vec<Arg>) -> Self {
        self.step(Step::invoke(target, method, args))
    }

    /// Variante no consumidora de `deploy` que devuelve la referencia del paso.
    pub fn push_deploy(&mut self, artifact: Artifact) -> StepRef {
        let r = self.next_ref();
        self.steps.push(Step::deploy(artifact));
        r
    }

    /// Variante no consumidora de `invoke`.
    pub fn push_invoke(&mut self, target: impl Into<StepRef>, method: impl Into<String>, args: Vec<Arg>) -> StepRef {
        let r = self.next_ref();
        self.steps.push(Step::invoke(target, method, args));
        r
    }

    /// Construye la secuencia. No valida: la validación es parte de `run`
    /// (o explícita vía `Sequence::validate`).
    pub fn build(self) -> Sequence {
        Sequence::new(self.steps)
    }
}
