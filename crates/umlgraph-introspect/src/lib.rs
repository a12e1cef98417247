//! umlgraph introspection API
//!
//! The seam between the umlgraph core and whatever inspects live code.
//!
//! This crate defines:
//!
//! - **IntrospectionBackend trait**: the questions the core asks about a raw construct
//! - **Handles**: opaque [`RawHandle`] values owned by the backend, plus their [`RawKind`]
//! - **Records**: what a backend reports for classes, callables, parametric types and modules
//! - **Catalog backend**: an in-memory backend described by a serde [`Catalog`]
//! - **Error handling**: [`IntrospectError`]
//!
//! # Example
//!
//! ```rust
//! use umlgraph_introspect::{
//!     Catalog, CatalogBackend, CatalogEntry, IntrospectionBackend, RawHandle, RawKind,
//! };
//!
//! let catalog = Catalog::with_builtins()
//!     .with("shapes.Shape", CatalogEntry::class("shapes", "Shape").interface())
//!     .with(
//!         "shapes.Circle",
//!         CatalogEntry::class("shapes", "Circle")
//!             .with_bases(["shapes.Shape"])
//!             .with_attribute("radius", "float"),
//!     );
//! let backend = CatalogBackend::new(catalog);
//!
//! let circle = RawHandle::new("shapes.Circle");
//! assert_eq!(backend.kind(&circle), RawKind::Class);
//! assert_eq!(backend.fqn(&circle).unwrap(), "shapes.Circle");
//! ```

pub mod builtins;
pub mod catalog;
pub mod errors;
pub mod handle;
pub mod records;
pub mod traits;

pub use builtins::{is_builtin_module, is_builtin_name};
pub use catalog::{Catalog, CatalogBackend, CatalogEntry};
pub use errors::{IntrospectError, IntrospectResult};
pub use handle::{NamedHandle, RawHandle, RawKind};
pub use records::{CallableInfo, ClassInfo, ModuleInfo, ParametricInfo};
pub use traits::IntrospectionBackend;

#[cfg(test)]
mod tests;
