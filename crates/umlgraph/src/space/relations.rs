//! Relation derivation over a finished space.

use super::Space;
use crate::model::{
    ClassEntity, Entity, EntityKind, GenericEntity, Hint, MethodEntity, Relation, RelationKind,
};
use log::{debug, trace};
use std::collections::HashSet;

/// Relations in first-seen order, without duplicates
#[derive(Default)]
struct RelationSet {
    seen: HashSet<Relation>,
    ordered: Vec<Relation>,
}

impl RelationSet {
    fn push(&mut self, source: &str, target: &str, kind: RelationKind) {
        let relation = Relation::new(source, target, kind);
        if self.seen.insert(relation.clone()) {
            trace!("Relation {source} {} {target}", kind.arrow());
            self.ordered.push(relation);
        }
    }
}

/// Whether `target` is declared inside `container`
fn is_nested(container: &str, target: &str) -> bool {
    target
        .strip_prefix(container)
        .is_some_and(|rest| rest.starts_with('.'))
}

impl Space {
    /// Derive the relations of the finished graph.
    ///
    /// Read-only and idempotent: calling it twice yields equal vectors.
    /// Relations are deduplicated by `(source, target, kind)`.
    pub fn gen_relations(&self) -> Vec<Relation> {
        let mut set = RelationSet::default();

        for entity in self.entities() {
            match entity.kind() {
                EntityKind::Class(class) => self.class_relations(entity.fqn(), class, &mut set),
                EntityKind::Method(method) => {
                    self.signature_relations(entity.fqn(), method, &mut set)
                }
                EntityKind::Generic(generic) => {
                    self.generic_relations(entity.fqn(), generic, &mut set)
                }
            }
        }

        for note in self.gen_docstring() {
            set.push(&note.alias, &note.source, RelationKind::Link);
        }

        debug!("Derived {} relations in space '{}'", set.ordered.len(), self.name());
        set.ordered
    }

    fn class_relations(&self, fqn: &str, class: &ClassEntity, set: &mut RelationSet) {
        for ancestor in class.ancestors() {
            let Some(target) = self.resolve(ancestor) else {
                debug!("Skipping unresolved ancestor {ancestor} of {fqn}");
                continue;
            };
            let kind = match target.as_class() {
                Some(base) if base.is_interface() => RelationKind::Implementation,
                Some(_) => RelationKind::Inheritance,
                None => RelationKind::Link,
            };
            set.push(fqn, ancestor.fqn(), kind);
        }

        for member in class.attributes().iter().chain(class.methods().iter()) {
            self.member_relations(fqn, member.hint(), set);
        }
    }

    fn member_relations(&self, container: &str, hint: &Hint, set: &mut RelationSet) {
        match hint {
            Hint::Reference(reference) => {
                if self.resolve(reference).is_none() {
                    return;
                }
                let kind = if is_nested(container, reference.fqn()) {
                    RelationKind::Composition
                } else {
                    RelationKind::Aggregation
                };
                set.push(container, reference.fqn(), kind);
            }
            Hint::Inline(entity) => match entity.kind() {
                EntityKind::Generic(generic) => {
                    for arg in generic.args() {
                        self.member_relations(container, arg.hint(), set);
                    }
                }
                EntityKind::Method(method) => self.signature_relations(container, method, set),
                EntityKind::Class(_) => {}
            },
            Hint::Untyped => {}
        }
    }

    fn signature_relations(&self, source: &str, method: &MethodEntity, set: &mut RelationSet) {
        let mut targets = Vec::new();
        for param in method.signature() {
            self.reachable(param.hint(), &mut targets);
        }
        for target in targets {
            set.push(source, target, RelationKind::Dependency);
        }
    }

    fn generic_relations(&self, fqn: &str, generic: &GenericEntity, set: &mut RelationSet) {
        for arg in generic.args() {
            self.argument_relations(fqn, arg.hint(), set);
        }
    }

    fn argument_relations(&self, fqn: &str, hint: &Hint, set: &mut RelationSet) {
        match hint {
            Hint::Reference(reference) => {
                if self.resolve(reference).is_some() {
                    set.push(fqn, reference.fqn(), RelationKind::Association);
                }
            }
            Hint::Inline(entity) if entity.is_unresolved() => {
                debug!("Skipping unresolved argument {} of {fqn}", entity.fqn());
            }
            Hint::Inline(entity) => {
                set.push(fqn, entity.fqn(), RelationKind::Dependency);
                if let Some(container) = entity.as_generic() {
                    for arg in container.args() {
                        self.argument_relations(fqn, arg.hint(), set);
                    }
                }
            }
            Hint::Untyped => {}
        }
    }

    /// Collect the registered entities a hint reaches, looking through
    /// inline containers and signatures
    fn reachable<'a>(&'a self, hint: &'a Hint, out: &mut Vec<&'a str>) {
        match hint {
            Hint::Reference(reference) => {
                if self.resolve(reference).is_some() {
                    out.push(reference.fqn());
                }
            }
            Hint::Inline(entity) => self.reachable_inline(entity, out),
            Hint::Untyped => {}
        }
    }

    fn reachable_inline<'a>(&'a self, entity: &'a Entity, out: &mut Vec<&'a str>) {
        match entity.kind() {
            EntityKind::Generic(generic) => {
                for arg in generic.args() {
                    self.reachable(arg.hint(), out);
                }
            }
            EntityKind::Method(method) => {
                for param in method.signature() {
                    self.reachable(param.hint(), out);
                }
            }
            EntityKind::Class(_) => {}
        }
    }
}
