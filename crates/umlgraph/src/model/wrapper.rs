//! Parameter and member wrappers around type hints.

use super::entity::Entity;
use super::reference::Reference;
use super::types::Visibility;
use serde::Serialize;
use std::collections::BTreeMap;

/// What a parameter, return or member is typed as
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Hint {
    /// A registered entity
    Reference(Reference),
    /// An entity owned by this hint alone (builtins, bound methods, stubs)
    Inline(Box<Entity>),
    /// No annotation
    Untyped,
}

impl Hint {
    /// Wrap an entity owned by the hint
    pub fn inline(entity: Entity) -> Self {
        Hint::Inline(Box::new(entity))
    }

    /// The reference, if the hint points at a registered entity
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Hint::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// The owned entity, if the hint is inline
    pub fn as_inline(&self) -> Option<&Entity> {
        match self {
            Hint::Inline(entity) => Some(entity),
            _ => None,
        }
    }

    /// Whether no type is known
    pub fn is_untyped(&self) -> bool {
        matches!(self, Hint::Untyped)
    }
}

/// A named, typed slot of a method or generic.
///
/// Its fqn is `<owner fqn>::<name>`.
#[derive(Debug, Clone, Serialize)]
pub struct Param {
    fqn: String,
    hint: Hint,
}

impl Param {
    /// Create a param `name` of the entity `owner`
    pub fn new(owner: &str, name: &str, hint: Hint) -> Self {
        Self {
            fqn: format!("{owner}::{name}"),
            hint,
        }
    }

    /// Member-qualified name
    pub fn fqn(&self) -> &str {
        &self.fqn
    }

    /// Bare name after `::`
    pub fn name(&self) -> &str {
        self.fqn.rsplit("::").next().unwrap_or(&self.fqn)
    }

    /// Type hint
    pub fn hint(&self) -> &Hint {
        &self.hint
    }
}

/// A class attribute or method with a visibility fixed at creation
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    #[serde(flatten)]
    param: Param,
    visibility: Visibility,
}

impl Member {
    /// Create member `name` of class `owner`; visibility follows the name
    pub fn new(owner: &str, name: &str, hint: Hint) -> Self {
        Self {
            param: Param::new(owner, name, hint),
            visibility: Visibility::infer(name),
        }
    }

    /// Member-qualified name
    pub fn fqn(&self) -> &str {
        self.param.fqn()
    }

    /// Bare member name
    pub fn name(&self) -> &str {
        self.param.name()
    }

    /// Type hint
    pub fn hint(&self) -> &Hint {
        self.param.hint()
    }

    /// Access level
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// Members grouped by visibility, each group in insertion order
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct MemberTable(BTreeMap<Visibility, Vec<Member>>);

impl MemberTable {
    /// Add a member to its visibility group
    pub fn push(&mut self, member: Member) {
        self.0.entry(member.visibility()).or_default().push(member);
    }

    /// Members of one visibility
    pub fn get(&self, visibility: Visibility) -> &[Member] {
        self.0.get(&visibility).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All members, public first, private last
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.0.values().flatten()
    }

    /// Total member count
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Whether there are no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
