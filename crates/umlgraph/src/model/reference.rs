//! Lazy handles to registered entities.

use super::entity::Entity;
use crate::space::Space;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Identity of a [`Space`]; references only resolve against their own space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpaceId(Uuid);

impl SpaceId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Placeholder for an entity registered under `fqn`.
///
/// A reference is handed out before its target is populated, which is what
/// lets mutually referencing entities be extracted without looping. It never
/// owns the entity; [`Reference::resolve`] looks it up each time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    fqn: String,
    space: SpaceId,
}

impl Reference {
    pub(crate) fn new(fqn: impl Into<String>, space: SpaceId) -> Self {
        Self {
            fqn: fqn.into(),
            space,
        }
    }

    /// Fully-qualified name of the target
    pub fn fqn(&self) -> &str {
        &self.fqn
    }

    /// Space this reference was issued by
    pub fn space_id(&self) -> SpaceId {
        self.space
    }

    /// Look up the current entity behind this reference.
    ///
    /// Returns `None` while the target is only registered, or when `space`
    /// is not the space that issued the reference.
    pub fn resolve<'s>(&self, space: &'s Space) -> Option<&'s Entity> {
        space.resolve(self)
    }
}

// Serialized as the bare fqn; the space id is meaningless outside the run.
impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.fqn)
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fqn)
    }
}
