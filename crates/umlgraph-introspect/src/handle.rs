use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to a construct owned by an introspection backend.
///
/// The core never looks inside a handle; it only passes it back to the
/// backend that produced it and compares handles for identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawHandle(String);

impl RawHandle {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RawHandle {
    fn from(value: &str) -> Self {
        RawHandle::new(value)
    }
}

impl From<String> for RawHandle {
    fn from(value: String) -> Self {
        RawHandle(value)
    }
}

/// Structural kind of a raw construct, as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawKind {
    /// Class, struct, protocol
    Class,
    /// Function or method
    Callable,
    /// Parameterized type: a generic alias, union or type variable
    Parametric,
    /// Module, package or namespace
    Module,
    /// Name that has to be resolved against a domain first
    Forward,
    /// The absence of a value
    NoneType,
    /// The unconstrained type
    Any,
    /// Anything the backend cannot classify
    Unknown,
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawKind::Class => write!(f, "class"),
            RawKind::Callable => write!(f, "callable"),
            RawKind::Parametric => write!(f, "parametric"),
            RawKind::Module => write!(f, "module"),
            RawKind::Forward => write!(f, "forward"),
            RawKind::NoneType => write!(f, "none"),
            RawKind::Any => write!(f, "any"),
            RawKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// A handle together with the name it is bound to in its container
/// (attribute name, parameter name, module member name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedHandle {
    pub name: String,
    pub handle: RawHandle,
}

impl NamedHandle {
    pub fn new(name: impl Into<String>, handle: impl Into<RawHandle>) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
        }
    }
}
