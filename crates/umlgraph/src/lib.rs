//! # umlgraph
//!
//! Turns structural facts about code into a deduplicated graph of classes,
//! methods and generic types, derives the relations between them, and
//! renders the result as a PlantUML class diagram.
//!
//! ## Architecture
//!
//! ```text
//! IntrospectionBackend (umlgraph-introspect)
//!     ↓
//! Extractor (depth and scope policy)
//!     ↓
//! Space (one entity per fqn, references for cycles)
//!     ↓
//! gen_relations / gen_docstring
//!     ↓
//! Export (PlantUML, JSON)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use umlgraph::{helpers, DiagramOptions};
//! use umlgraph_introspect::{Catalog, CatalogBackend, CatalogEntry, RawHandle};
//!
//! let backend = CatalogBackend::new(
//!     Catalog::with_builtins()
//!         .with(
//!             "shapes",
//!             CatalogEntry::module("shapes")
//!                 .with_member("Shape", "shapes.Shape")
//!                 .with_member("Circle", "shapes.Circle"),
//!         )
//!         .with("shapes.Shape", CatalogEntry::class("shapes", "Shape").interface())
//!         .with(
//!             "shapes.Circle",
//!             CatalogEntry::class("shapes", "Circle")
//!                 .with_bases(["shapes.Shape"])
//!                 .with_attribute("radius", "float"),
//!         ),
//! );
//!
//! let space = helpers::inspect(&backend, &RawHandle::new("shapes"), &DiagramOptions::default())?;
//! let diagram = helpers::render(&space);
//! assert!(diagram.contains("shapes.Circle ..|> shapes.Shape"));
//! # Ok::<(), umlgraph::UmlError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod helpers;
pub mod model;
pub mod space;

// Re-export main types
pub use config::{DiagramOptions, ExtractorConfig, SpaceConfig};
pub use error::{Result, UmlError};
pub use export::{export_json, export_json_filtered, export_puml};
pub use extractor::{Extracted, Extractor};
pub use model::{
    ClassEntity, Docstring, Entity, EntityBase, EntityKind, GenericEntity, Hint, Member,
    MemberTable, MethodEntity, Param, Reference, Relation, RelationKind, SpaceId, Visibility,
};
pub use space::Space;
