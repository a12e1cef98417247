//! Small value types shared by the model, the space and the exporters.

use serde::{Deserialize, Serialize};

/// Access level of a class member.
///
/// Ordered public, protected, private; that is also the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// No leading underscore
    Public,
    /// One leading underscore
    Protected,
    /// Two leading underscores
    Private,
}

impl Visibility {
    /// All modes in rendering order
    pub const ALL: [Visibility; 3] =
        [Visibility::Public, Visibility::Protected, Visibility::Private];

    /// Infer the mode from a member name by naming convention.
    ///
    /// Only the part after the last `::` is considered, so both bare names
    /// and member fqns work.
    pub fn infer(name: &str) -> Self {
        let short = name.rsplit("::").next().unwrap_or(name);
        if short.starts_with("__") {
            Visibility::Private
        } else if short.starts_with('_') {
            Visibility::Protected
        } else {
            Visibility::Public
        }
    }

    /// Diagram marker for this mode
    pub fn marker(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Protected => '#',
            Visibility::Private => '-',
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// Structural relation between two entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Generic type argument that is user-defined
    Association,
    /// Member typed by an independently defined entity
    Aggregation,
    /// Member typed by an inner type of its container
    Composition,
    /// Plain base class
    Inheritance,
    /// Interface base class
    Implementation,
    /// Signature or builtin type argument usage
    Dependency,
    /// Anything else structurally connected
    Link,
}

impl RelationKind {
    /// PlantUML arrow drawn from source to target
    pub fn arrow(self) -> &'static str {
        match self {
            RelationKind::Association => "--",
            RelationKind::Aggregation => "o-->",
            RelationKind::Composition => "*-->",
            RelationKind::Inheritance => "--|>",
            RelationKind::Implementation => "..|>",
            RelationKind::Dependency => "-->",
            RelationKind::Link => "..",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationKind::Association => write!(f, "association"),
            RelationKind::Aggregation => write!(f, "aggregation"),
            RelationKind::Composition => write!(f, "composition"),
            RelationKind::Inheritance => write!(f, "inheritance"),
            RelationKind::Implementation => write!(f, "implementation"),
            RelationKind::Dependency => write!(f, "dependency"),
            RelationKind::Link => write!(f, "link"),
        }
    }
}

/// A derived relation between two fqns.
///
/// Relations are never stored in a space; they are recomputed from the
/// finished graph on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    /// Fqn the arrow starts at
    pub source: String,
    /// Fqn the arrow points to
    pub target: String,
    /// Relation kind
    pub kind: RelationKind,
}

impl Relation {
    /// Create a new relation
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: RelationKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }
}

/// Documentation note attached to an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Docstring {
    /// Note alias used in the diagram (`N0`, `N1`, ...)
    pub alias: String,
    /// Fqn of the documented entity
    pub source: String,
    /// Documentation text
    pub text: String,
}
