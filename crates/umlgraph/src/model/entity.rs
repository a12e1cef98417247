//! The typed node model: classes, methods and generic types.

use super::reference::Reference;
use super::wrapper::{Hint, Member, MemberTable, Param};
use super::types::Visibility;
use serde::Serialize;
use umlgraph_introspect::RawHandle;

/// Namespace part of an fqn: everything before the last `.`
pub fn domain_of(fqn: &str) -> &str {
    fqn.rsplit_once('.').map(|(domain, _)| domain).unwrap_or("")
}

/// Last dotted segment of an fqn
pub fn short_name(fqn: &str) -> &str {
    fqn.rsplit('.').next().unwrap_or(fqn)
}

/// Fields every entity carries
#[derive(Debug, Clone, Serialize)]
pub struct EntityBase {
    raw: RawHandle,
    fqn: String,
    domain: String,
    empty: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    unresolved: bool,
    docstring: Option<String>,
}

impl EntityBase {
    /// Base for `fqn`, backed by the backend handle `raw`
    pub fn new(raw: RawHandle, fqn: impl Into<String>) -> Self {
        let fqn = fqn.into();
        Self {
            raw,
            domain: domain_of(&fqn).to_string(),
            fqn,
            empty: false,
            unresolved: false,
            docstring: None,
        }
    }

    /// Attach documentation text
    pub fn with_docstring(mut self, docstring: Option<String>) -> Self {
        self.docstring = docstring;
        self
    }

    /// Mark as a stub: identity only, no nested members
    pub fn stub(mut self) -> Self {
        self.empty = true;
        self
    }

    /// Mark as a stub for a handle the backend could not name or resolve;
    /// its fqn is the raw handle key
    pub fn unresolved(mut self) -> Self {
        self.unresolved = true;
        self.stub()
    }
}

/// Variant payload of an entity
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum EntityKind {
    /// Class or interface
    Class(ClassEntity),
    /// Free function or bound method
    Method(MethodEntity),
    /// Parameterized type
    Generic(GenericEntity),
}

/// A node of the diagram
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    kind: EntityKind,
}

impl Entity {
    /// Create a class entity
    pub fn class(base: EntityBase, class: ClassEntity) -> Self {
        Self {
            base,
            kind: EntityKind::Class(class),
        }
    }

    /// Create a method entity
    pub fn method(base: EntityBase, method: MethodEntity) -> Self {
        Self {
            base,
            kind: EntityKind::Method(method),
        }
    }

    /// Create a generic entity
    pub fn generic(base: EntityBase, generic: GenericEntity) -> Self {
        Self {
            base,
            kind: EntityKind::Generic(generic),
        }
    }

    /// Backend handle this entity was extracted from
    pub fn raw(&self) -> &RawHandle {
        &self.base.raw
    }

    /// Fully-qualified name
    pub fn fqn(&self) -> &str {
        &self.base.fqn
    }

    /// Containing namespace
    pub fn domain(&self) -> &str {
        &self.base.domain
    }

    /// Last segment of the fqn
    pub fn short_name(&self) -> &str {
        short_name(&self.base.fqn)
    }

    /// Whether this is a depth or scope stub
    pub fn is_empty(&self) -> bool {
        self.base.empty
    }

    /// Whether this stands in for a handle that could not be resolved
    pub fn is_unresolved(&self) -> bool {
        self.base.unresolved
    }

    /// Documentation text
    pub fn docstring(&self) -> Option<&str> {
        self.base.docstring.as_deref()
    }

    /// Variant payload
    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Class payload, if this is a class
    pub fn as_class(&self) -> Option<&ClassEntity> {
        match &self.kind {
            EntityKind::Class(class) => Some(class),
            _ => None,
        }
    }

    /// Method payload, if this is a method
    pub fn as_method(&self) -> Option<&MethodEntity> {
        match &self.kind {
            EntityKind::Method(method) => Some(method),
            _ => None,
        }
    }

    /// Generic payload, if this is a generic
    pub fn as_generic(&self) -> Option<&GenericEntity> {
        match &self.kind {
            EntityKind::Generic(generic) => Some(generic),
            _ => None,
        }
    }
}

/// Class payload
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassEntity {
    is_interface: bool,
    ancestors: Vec<Reference>,
    attributes: MemberTable,
    methods: MemberTable,
}

impl ClassEntity {
    /// Create an empty class payload
    pub fn new(is_interface: bool) -> Self {
        Self {
            is_interface,
            ..Default::default()
        }
    }

    /// Append a base class
    pub fn push_ancestor(&mut self, ancestor: Reference) {
        self.ancestors.push(ancestor);
    }

    /// Add an attribute to its visibility group
    pub fn push_attribute(&mut self, member: Member) {
        self.attributes.push(member);
    }

    /// Add a method to its visibility group
    pub fn push_method(&mut self, member: Member) {
        self.methods.push(member);
    }

    /// Whether the class is an interface
    pub fn is_interface(&self) -> bool {
        self.is_interface
    }

    /// Base classes in declaration order
    pub fn ancestors(&self) -> &[Reference] {
        &self.ancestors
    }

    /// Attributes by visibility
    pub fn attributes(&self) -> &MemberTable {
        &self.attributes
    }

    /// Methods by visibility
    pub fn methods(&self) -> &MemberTable {
        &self.methods
    }

    /// Public attributes
    pub fn public_attributes(&self) -> &[Member] {
        self.attributes.get(Visibility::Public)
    }

    /// Protected attributes
    pub fn protected_attributes(&self) -> &[Member] {
        self.attributes.get(Visibility::Protected)
    }

    /// Private attributes
    pub fn private_attributes(&self) -> &[Member] {
        self.attributes.get(Visibility::Private)
    }

    /// Public methods
    pub fn public_methods(&self) -> &[Member] {
        self.methods.get(Visibility::Public)
    }

    /// Protected methods
    pub fn protected_methods(&self) -> &[Member] {
        self.methods.get(Visibility::Protected)
    }

    /// Private methods
    pub fn private_methods(&self) -> &[Member] {
        self.methods.get(Visibility::Private)
    }
}

/// Method payload
#[derive(Debug, Clone, Serialize)]
pub struct MethodEntity {
    is_bound: bool,
    params: Vec<Param>,
    returns: Param,
}

impl MethodEntity {
    /// Create a signature for the method `owner` with an untyped return
    pub fn new(owner: &str, is_bound: bool) -> Self {
        Self {
            is_bound,
            params: Vec::new(),
            returns: Param::new(owner, "return", Hint::Untyped),
        }
    }

    /// Append a parameter
    pub fn push_param(&mut self, param: Param) {
        self.params.push(param);
    }

    /// Replace the return param
    pub fn set_returns(&mut self, returns: Param) {
        self.returns = returns;
    }

    /// Whether the method is bound to an instance
    pub fn is_bound(&self) -> bool {
        self.is_bound
    }

    /// Parameters in declaration order
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Return param
    pub fn returns(&self) -> &Param {
        &self.returns
    }

    /// Params followed by the return
    pub fn signature(&self) -> impl Iterator<Item = &Param> {
        self.params.iter().chain(std::iter::once(&self.returns))
    }
}

/// Parameterized type payload
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenericEntity {
    is_builtin: bool,
    args: Vec<Param>,
}

impl GenericEntity {
    /// Create a generic with no arguments
    pub fn new(is_builtin: bool) -> Self {
        Self {
            is_builtin,
            args: Vec::new(),
        }
    }

    /// Append a type argument
    pub fn push_arg(&mut self, arg: Param) {
        self.args.push(arg);
    }

    /// Whether this is a runtime container such as `list`
    pub fn is_builtin(&self) -> bool {
        self.is_builtin
    }

    /// Type arguments in order
    pub fn args(&self) -> &[Param] {
        &self.args
    }
}
