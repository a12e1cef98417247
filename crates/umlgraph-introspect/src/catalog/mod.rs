//! In-memory catalog of raw constructs.
//!
//! A [`Catalog`] maps handle keys to tagged [`CatalogEntry`] records. It is
//! plain serde data, so a catalog can be produced by any out-of-process
//! inspector and loaded from JSON, or assembled in code with the builder
//! methods below.

mod backend;

pub use backend::CatalogBackend;

use crate::errors::{IntrospectError, IntrospectResult};
use crate::handle::{NamedHandle, RawHandle, RawKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One raw construct described by a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    /// A module or package
    Module {
        name: String,
        #[serde(default)]
        members: Vec<NamedHandle>,
    },
    /// A class, struct or protocol
    Class {
        module: String,
        qualname: String,
        #[serde(default)]
        is_interface: bool,
        #[serde(default)]
        bases: Vec<RawHandle>,
        #[serde(default)]
        attributes: Vec<NamedHandle>,
        #[serde(default)]
        methods: Vec<NamedHandle>,
        #[serde(default)]
        doc: Option<String>,
    },
    /// A free function or a method
    Callable {
        module: String,
        qualname: String,
        #[serde(default)]
        params: Vec<NamedHandle>,
        #[serde(default)]
        returns: Option<RawHandle>,
        #[serde(default)]
        doc: Option<String>,
    },
    /// A parameterized type
    Parametric {
        module: String,
        name: String,
        #[serde(default)]
        args: Vec<RawHandle>,
        #[serde(default)]
        doc: Option<String>,
    },
    /// A name that still has to be resolved against a module
    Forward { name: String },
    /// The absence of a value
    NoneType,
    /// The unconstrained type
    Any,
}

impl CatalogEntry {
    pub fn module(name: impl Into<String>) -> Self {
        CatalogEntry::Module {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn class(module: impl Into<String>, qualname: impl Into<String>) -> Self {
        CatalogEntry::Class {
            module: module.into(),
            qualname: qualname.into(),
            is_interface: false,
            bases: Vec::new(),
            attributes: Vec::new(),
            methods: Vec::new(),
            doc: None,
        }
    }

    pub fn callable(module: impl Into<String>, qualname: impl Into<String>) -> Self {
        CatalogEntry::Callable {
            module: module.into(),
            qualname: qualname.into(),
            params: Vec::new(),
            returns: None,
            doc: None,
        }
    }

    pub fn parametric(module: impl Into<String>, name: impl Into<String>) -> Self {
        CatalogEntry::Parametric {
            module: module.into(),
            name: name.into(),
            args: Vec::new(),
            doc: None,
        }
    }

    pub fn forward(name: impl Into<String>) -> Self {
        CatalogEntry::Forward { name: name.into() }
    }

    /// Mark a class as an interface. No effect on other kinds.
    pub fn interface(mut self) -> Self {
        if let CatalogEntry::Class { is_interface, .. } = &mut self {
            *is_interface = true;
        }
        self
    }

    /// Set the bases of a class. No effect on other kinds.
    pub fn with_bases<I, H>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<RawHandle>,
    {
        if let CatalogEntry::Class { bases, .. } = &mut self {
            *bases = handles.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Append an annotated attribute to a class. No effect on other kinds.
    pub fn with_attribute(mut self, name: impl Into<String>, handle: impl Into<RawHandle>) -> Self {
        if let CatalogEntry::Class { attributes, .. } = &mut self {
            attributes.push(NamedHandle::new(name, handle));
        }
        self
    }

    /// Append a method to a class. No effect on other kinds.
    pub fn with_method(mut self, name: impl Into<String>, handle: impl Into<RawHandle>) -> Self {
        if let CatalogEntry::Class { methods, .. } = &mut self {
            methods.push(NamedHandle::new(name, handle));
        }
        self
    }

    /// Append a parameter to a callable. No effect on other kinds.
    pub fn with_param(mut self, name: impl Into<String>, handle: impl Into<RawHandle>) -> Self {
        if let CatalogEntry::Callable { params, .. } = &mut self {
            params.push(NamedHandle::new(name, handle));
        }
        self
    }

    /// Set the return annotation of a callable. No effect on other kinds.
    pub fn with_returns(mut self, handle: impl Into<RawHandle>) -> Self {
        if let CatalogEntry::Callable { returns, .. } = &mut self {
            *returns = Some(handle.into());
        }
        self
    }

    /// Set the type arguments of a parametric type. No effect on other kinds.
    pub fn with_args<I, H>(mut self, handles: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<RawHandle>,
    {
        if let CatalogEntry::Parametric { args, .. } = &mut self {
            *args = handles.into_iter().map(Into::into).collect();
        }
        self
    }

    /// Append a member to a module. No effect on other kinds.
    pub fn with_member(mut self, name: impl Into<String>, handle: impl Into<RawHandle>) -> Self {
        if let CatalogEntry::Module { members, .. } = &mut self {
            members.push(NamedHandle::new(name, handle));
        }
        self
    }

    /// Attach documentation. No effect on modules, forwards, none and any.
    pub fn with_doc(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            CatalogEntry::Class { doc, .. }
            | CatalogEntry::Callable { doc, .. }
            | CatalogEntry::Parametric { doc, .. } => *doc = Some(text.into()),
            _ => {}
        }
        self
    }

    /// The kind this entry reports
    pub fn raw_kind(&self) -> RawKind {
        match self {
            CatalogEntry::Module { .. } => RawKind::Module,
            CatalogEntry::Class { .. } => RawKind::Class,
            CatalogEntry::Callable { .. } => RawKind::Callable,
            CatalogEntry::Parametric { .. } => RawKind::Parametric,
            CatalogEntry::Forward { .. } => RawKind::Forward,
            CatalogEntry::NoneType => RawKind::NoneType,
            CatalogEntry::Any => RawKind::Any,
        }
    }
}

/// Handle key → entry map, serializable as a single JSON document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog seeded with the common builtin types.
    ///
    /// Handles are the bare names: `int`, `float`, `bool`, `str`, `bytes`,
    /// `object`, `list`, `dict`, `set`, `tuple`, `None` and `Any`.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for name in [
            "int", "float", "bool", "str", "bytes", "object", "list", "dict", "set", "tuple",
        ] {
            catalog.insert(name, CatalogEntry::class("builtins", name));
        }
        catalog.insert("None", CatalogEntry::NoneType);
        catalog.insert("Any", CatalogEntry::Any);
        catalog
    }

    /// Insert or replace an entry
    pub fn insert(&mut self, key: impl Into<String>, entry: CatalogEntry) -> &mut Self {
        self.entries.insert(key.into(), entry);
        self
    }

    /// Builder form of [`Catalog::insert`]
    pub fn with(mut self, key: impl Into<String>, entry: CatalogEntry) -> Self {
        self.insert(key, entry);
        self
    }

    pub fn get(&self, handle: &RawHandle) -> Option<&CatalogEntry> {
        self.entries.get(handle.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (RawHandle, &CatalogEntry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (RawHandle::new(key.clone()), entry))
    }

    /// Parse a catalog from JSON text
    pub fn from_json(text: &str) -> IntrospectResult<Self> {
        serde_json::from_str(text).map_err(|source| IntrospectError::Catalog {
            message: "Failed to parse catalog".to_string(),
            source,
        })
    }

    /// Read and parse a JSON catalog file
    pub fn from_path(path: impl AsRef<Path>) -> IntrospectResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| IntrospectError::Io(path.to_path_buf(), e))?;
        Self::from_json(&text)
    }

    /// Serialize the catalog as pretty JSON
    pub fn to_json(&self) -> IntrospectResult<String> {
        serde_json::to_string_pretty(self).map_err(|source| IntrospectError::Catalog {
            message: "Failed to serialize catalog".to_string(),
            source,
        })
    }
}
