//! Entity model: typed nodes, lazy references and the wrappers that connect them.

mod entity;
mod reference;
mod types;
mod wrapper;

pub use entity::{
    domain_of, short_name, ClassEntity, Entity, EntityBase, EntityKind, GenericEntity,
    MethodEntity,
};
pub use reference::{Reference, SpaceId};
pub use types::{Docstring, Relation, RelationKind, Visibility};
pub use wrapper::{Hint, Member, MemberTable, Param};
