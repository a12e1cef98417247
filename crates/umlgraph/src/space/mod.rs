//! The registry of one diagram run.
//!
//! A [`Space`] holds at most one entity per fqn. Every fqn is registered
//! before its entity is extracted, so a traversal that comes back to it
//! receives the existing [`Reference`] instead of recursing.

mod docs;
mod relations;

use crate::config::SpaceConfig;
use crate::error::{Result, UmlError};
use crate::model::{ClassEntity, Entity, GenericEntity, MethodEntity, Reference, SpaceId};
use indexmap::IndexMap;
use log::{debug, trace};
use std::collections::HashMap;
use umlgraph_introspect::RawHandle;

/// Registry of entities keyed by fqn.
///
/// `refs` keeps registration order, which is the output order of every
/// exporter. `objs` holds the populated entities.
#[derive(Debug)]
pub struct Space {
    id: SpaceId,
    config: SpaceConfig,
    refs: IndexMap<String, Reference>,
    objs: IndexMap<String, Entity>,
    // Which backend handle claimed each fqn
    owners: HashMap<String, RawHandle>,
}

impl Space {
    /// Create an empty space.
    pub fn new(config: SpaceConfig) -> Self {
        let id = SpaceId::new();
        debug!("Creating space '{}' ({id})", config.name);
        Self {
            id,
            config,
            refs: IndexMap::new(),
            objs: IndexMap::new(),
            owners: HashMap::new(),
        }
    }

    /// Create an empty space with default settings.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(SpaceConfig::new(name))
    }

    /// Identity used to validate references
    pub fn id(&self) -> SpaceId {
        self.id
    }

    /// Diagram name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Limit the space was built with
    pub fn limit_fqn(&self) -> &str {
        &self.config.limit_fqn
    }

    /// Whether docstring notes are emitted
    pub fn include_docs(&self) -> bool {
        self.config.include_docs
    }

    /// Register `fqn` and return its reference.
    ///
    /// Idempotent: a second call returns an equal reference and keeps the
    /// first registration position.
    pub fn register(&mut self, fqn: &str) -> Reference {
        if let Some(existing) = self.refs.get(fqn) {
            return existing.clone();
        }
        trace!("Registering {fqn}");
        let reference = Reference::new(fqn, self.id);
        self.refs.insert(fqn.to_string(), reference.clone());
        reference
    }

    /// Register `fqn` on behalf of the backend handle `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`UmlError::RegistryConflict`] if a different handle already
    /// claimed the same fqn.
    pub fn claim(&mut self, fqn: &str, raw: &RawHandle) -> Result<Reference> {
        match self.owners.get(fqn) {
            Some(existing) if existing != raw => {
                return Err(UmlError::RegistryConflict {
                    fqn: fqn.to_string(),
                    existing: existing.clone(),
                    incoming: raw.clone(),
                });
            }
            Some(_) => {}
            None => {
                self.owners.insert(fqn.to_string(), raw.clone());
            }
        }
        Ok(self.register(fqn))
    }

    /// Store a populated entity under its fqn, replacing any previous one.
    pub fn add_item(&mut self, entity: Entity) -> Reference {
        let reference = self.register(entity.fqn());
        self.owners
            .entry(entity.fqn().to_string())
            .or_insert_with(|| entity.raw().clone());
        trace!("Populating {} (empty={})", entity.fqn(), entity.is_empty());
        self.objs.insert(entity.fqn().to_string(), entity);
        reference
    }

    /// Whether `fqn` is registered
    pub fn contains(&self, fqn: &str) -> bool {
        self.refs.contains_key(fqn)
    }

    /// Whether `fqn` has a populated entity
    pub fn is_populated(&self, fqn: &str) -> bool {
        self.objs.contains_key(fqn)
    }

    /// The reference registered under `fqn`
    pub fn reference(&self, fqn: &str) -> Option<&Reference> {
        self.refs.get(fqn)
    }

    /// The entity populated under `fqn`
    pub fn get(&self, fqn: &str) -> Option<&Entity> {
        self.objs.get(fqn)
    }

    /// Resolve a reference issued by this space
    pub fn resolve(&self, reference: &Reference) -> Option<&Entity> {
        if reference.space_id() != self.id {
            debug!("Reference {reference} belongs to another space");
            return None;
        }
        self.objs.get(reference.fqn())
    }

    /// Populated entities in registration order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.refs.keys().filter_map(|fqn| self.objs.get(fqn))
    }

    /// Registered references in registration order
    pub fn references(&self) -> impl Iterator<Item = &Reference> {
        self.refs.values()
    }

    /// Registered fqns that were never populated
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.refs
            .keys()
            .filter(|fqn| !self.objs.contains_key(*fqn))
            .map(String::as_str)
    }

    /// Populated classes
    pub fn classes(&self) -> impl Iterator<Item = (&Entity, &ClassEntity)> {
        self.entities()
            .filter_map(|entity| entity.as_class().map(|class| (entity, class)))
    }

    /// Populated methods
    pub fn methods(&self) -> impl Iterator<Item = (&Entity, &MethodEntity)> {
        self.entities()
            .filter_map(|entity| entity.as_method().map(|method| (entity, method)))
    }

    /// Populated generics
    pub fn generics(&self) -> impl Iterator<Item = (&Entity, &GenericEntity)> {
        self.entities()
            .filter_map(|entity| entity.as_generic().map(|generic| (entity, generic)))
    }

    /// Number of populated entities
    pub fn len(&self) -> usize {
        self.objs.len()
    }

    /// Whether nothing was populated
    pub fn is_empty(&self) -> bool {
        self.objs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassEntity, EntityBase};

    fn class(fqn: &str) -> Entity {
        Entity::class(EntityBase::new(RawHandle::new(fqn), fqn), ClassEntity::new(false))
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut space = Space::named("pkg");
        let first = space.register("pkg.A");
        let second = space.register("pkg.A");
        assert_eq!(first, second);
        assert_eq!(space.references().count(), 1);
        assert!(space.contains("pkg.A"));
        assert!(!space.is_populated("pkg.A"));
    }

    #[test]
    fn test_reference_sees_later_population() {
        let mut space = Space::named("pkg");
        let reference = space.register("pkg.A");
        assert!(reference.resolve(&space).is_none());

        space.add_item(class("pkg.A"));
        let entity = reference.resolve(&space).unwrap();
        assert_eq!(entity.fqn(), "pkg.A");
    }

    #[test]
    fn test_foreign_reference_does_not_resolve() {
        let mut first = Space::named("one");
        let mut second = Space::named("two");
        let reference = first.add_item(class("pkg.A"));
        second.add_item(class("pkg.A"));
        assert!(reference.resolve(&first).is_some());
        assert!(reference.resolve(&second).is_none());
    }

    #[test]
    fn test_registration_order_is_output_order() {
        let mut space = Space::named("pkg");
        space.register("pkg.B");
        space.register("pkg.A");
        space.add_item(class("pkg.A"));
        space.add_item(class("pkg.B"));
        let order: Vec<&str> = space.entities().map(Entity::fqn).collect();
        assert_eq!(order, vec!["pkg.B", "pkg.A"]);
    }

    #[test]
    fn test_claim_conflict() {
        let mut space = Space::named("pkg");
        space.claim("pkg.A", &RawHandle::new("first")).unwrap();
        assert!(space.claim("pkg.A", &RawHandle::new("first")).is_ok());
        let err = space.claim("pkg.A", &RawHandle::new("second")).unwrap_err();
        assert!(matches!(err, UmlError::RegistryConflict { .. }));
    }

    #[test]
    fn test_pending_lists_unpopulated() {
        let mut space = Space::named("pkg");
        space.register("pkg.A");
        space.add_item(class("pkg.B"));
        assert_eq!(space.pending().collect::<Vec<_>>(), vec!["pkg.A"]);
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn test_add_item_replaces() {
        let mut space = Space::named("pkg");
        space.add_item(class("pkg.A"));
        space.add_item(Entity::class(
            EntityBase::new(RawHandle::new("pkg.A"), "pkg.A"),
            ClassEntity::new(true),
        ));
        assert_eq!(space.len(), 1);
        assert!(space.get("pkg.A").unwrap().as_class().unwrap().is_interface());
    }
}
