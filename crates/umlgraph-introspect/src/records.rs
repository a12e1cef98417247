use crate::handle::{NamedHandle, RawHandle};
use serde::{Deserialize, Serialize};

/// What a backend reports about a class-like construct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Is this an interface/protocol definition?
    pub is_interface: bool,

    /// Base types in declaration order
    pub bases: Vec<RawHandle>,

    /// Annotated attributes in declaration order
    pub attributes: Vec<NamedHandle>,

    /// Callable members, as the class exposes them
    pub methods: Vec<NamedHandle>,
}

/// What a backend reports about a callable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallableInfo {
    /// Bound to an instance/class (a method) rather than free
    pub is_bound: bool,

    /// Annotated parameters in declaration order
    pub params: Vec<NamedHandle>,

    /// Return annotation, if any
    pub returns: Option<RawHandle>,
}

/// What a backend reports about a parameterized type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParametricInfo {
    /// The container is a builtin (list, dict, Union...) rather than user-defined
    pub is_builtin: bool,

    /// Type arguments in order
    pub args: Vec<RawHandle>,
}

/// What a backend reports about a module-like scope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleInfo {
    /// Module name, which is also its fully-qualified name
    pub name: String,

    /// Members in the order the module exposes them
    pub members: Vec<NamedHandle>,
}
