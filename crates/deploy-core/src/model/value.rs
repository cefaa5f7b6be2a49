//! Argumentos de pasos.
//!
//! - `Value`: valor ya resuelto, el único que ve el entorno destino.
//! - `Arg`: valor tal como se escribe en la secuencia; puede contener
//!   `Reference` a un paso previo, también anidado dentro de listas.
//! - `StepRef`: índice de un paso de la secuencia. En JSON: `{"ref": n}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Address, Bytes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepRef {
    #[serde(rename = "ref")]
    pub index: usize,
}

impl StepRef {
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl fmt::Display for StepRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

impl From<usize> for StepRef {
    fn from(index: usize) -> Self {
        Self { index }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Bool(bool),
    Uint(u64),
    Str(String),
    Bytes(Bytes),
    Address(Address),
    List(Vec<Value>),
}

impl Value {
    pub fn list<I, V>(items: I) -> Self
        where I: IntoIterator<Item = V>,
              V: Into<Value>
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Value::Address(a) => Some(a),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Address> for Value {
    fn from(v: Address) -> Self {
        Value::Address(v)
    }
}

impl From<Bytes> for Value {
    fn from(v: Bytes) -> Self {
        Value::Bytes(v)
    }
}

/// Argumento sin resolver.
///
/// `untagged`: una referencia es `{"ref": n}`, una lista es un array JSON y un
/// literal es un `Value` etiquetado (`{"type": ..., "value": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    Reference(StepRef),
    List(Vec<Arg>),
    Literal(Value),
}

impl Arg {
    pub fn reference(index: usize) -> Self {
        Arg::Reference(StepRef::new(index))
    }

    pub fn literal(v: impl Into<Value>) -> Self {
        Arg::Literal(v.into())
    }

    pub fn list<I, A>(items: I) -> Self
        where I: IntoIterator<Item = A>,
              A: Into<Arg>
    {
        Arg::List(items.into_iter().map(Into::into).collect())
    }

    /// Todas las referencias contenidas, en orden de aparición.
    pub fn references(&self) -> Vec<StepRef> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references(&self, out: &mut Vec<StepRef>) {
        match self {
            Arg::Reference(r) => out.push(*r),
            Arg::List(items) => items.iter().for_each(|a| a.collect_references(out)),
            Arg::Literal(_) => {}
        }
    }

    /// Sustituye cada referencia usando `lookup`. Devuelve la primera
    /// referencia que `lookup` no sabe resolver.
    pub fn resolve<F>(&self, lookup: &F) -> Result<Value, StepRef>
        where F: Fn(StepRef) -> Option<Address>
    {
        match self {
            Arg::Reference(r) => lookup(*r).map(Value::Address).ok_or(*r),
            Arg::List(items) => items.iter()
                                     .map(|a| a.resolve(lookup))
                                     .collect::<Result<Vec<_>, _>>()
                                     .map(Value::List),
            Arg::Literal(v) => Ok(v.clone()),
        }
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Literal(v)
    }
}

impl From<StepRef> for Arg {
    fn from(r: StepRef) -> Self {
        Arg::Reference(r)
    }
}

impl From<u64> for Arg {
    fn from(v: u64) -> Self {
        Arg::Literal(Value::Uint(v))
    }
}

impl From<Address> for Arg {
    fn from(v: Address) -> Self {
        Arg::Literal(Value::Address(v))
    }
}
