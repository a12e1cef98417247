//! JSON export of a whole space.
//!
//! The document carries the space identity, the populated entities in
//! registration order, the derived relations and the docstring notes.

use crate::error::{Result, UmlError};
use crate::model::Entity;
use crate::space::Space;
use serde_json::{json, Value};
use std::collections::HashSet;

/// Export the space as a pretty-printed JSON document
pub fn export_json(space: &Space) -> Result<String> {
    export_json_filtered(space, |_| true)
}

/// Export the entities accepted by `filter`.
///
/// Relations are kept only when both ends were exported; note links are
/// kept when their entity was.
pub fn export_json_filtered(space: &Space, filter: impl Fn(&Entity) -> bool) -> Result<String> {
    let mut entities = Vec::new();
    let mut exported: HashSet<&str> = HashSet::new();

    for entity in space.entities().filter(|entity| filter(*entity)) {
        entities.push(to_value(entity)?);
        exported.insert(entity.fqn());
    }

    let notes: Vec<_> = space
        .gen_docstring()
        .into_iter()
        .filter(|note| exported.contains(note.source.as_str()))
        .collect();
    let aliases: HashSet<&str> = notes.iter().map(|note| note.alias.as_str()).collect();

    let relations: Vec<_> = space
        .gen_relations()
        .into_iter()
        .filter(|relation| {
            let source = relation.source.as_str();
            (exported.contains(source) || aliases.contains(source))
                && exported.contains(relation.target.as_str())
        })
        .collect();

    let document = json!({
        "name": space.name(),
        "limit_fqn": space.limit_fqn(),
        "include_docs": space.include_docs(),
        "entities": entities,
        "relations": to_value(&relations)?,
        "docstrings": to_value(&notes)?,
    });

    serde_json::to_string_pretty(&document)
        .map_err(|e| UmlError::serialization("Failed to encode space", Some(e)))
}

fn to_value<T: serde::Serialize + ?Sized>(value: &T) -> Result<Value> {
    serde_json::to_value(value)
        .map_err(|e| UmlError::serialization("Failed to encode entity", Some(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassEntity, EntityBase, Hint, Member};
    use umlgraph_introspect::RawHandle;

    fn class(fqn: &str, class: ClassEntity) -> Entity {
        Entity::class(EntityBase::new(RawHandle::new(fqn), fqn), class)
    }

    fn sample() -> Space {
        let mut space = Space::named("pkg");
        let part = space.add_item(class("pkg.Part", ClassEntity::new(false)));
        let mut whole = ClassEntity::new(false);
        whole.push_attribute(Member::new("pkg.Whole", "part", Hint::Reference(part)));
        space.add_item(class("pkg.Whole", whole));
        space
    }

    #[test]
    fn test_export_json_document() {
        let text = export_json(&sample()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["name"], "pkg");
        assert_eq!(value["entities"].as_array().unwrap().len(), 2);
        assert_eq!(value["entities"][0]["fqn"], "pkg.Part");
        assert_eq!(value["entities"][0]["entity"], "class");
        assert_eq!(value["entities"][1]["attributes"]["public"][0]["hint"]["kind"], "reference");
        assert_eq!(value["entities"][1]["attributes"]["public"][0]["hint"]["target"], "pkg.Part");
        assert_eq!(value["relations"][0]["kind"], "aggregation");
    }

    #[test]
    fn test_export_json_filtered_drops_dangling_relations() {
        let text = export_json_filtered(&sample(), |entity| entity.fqn() == "pkg.Whole").unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["entities"].as_array().unwrap().len(), 1);
        assert!(value["relations"].as_array().unwrap().is_empty());
    }
}
