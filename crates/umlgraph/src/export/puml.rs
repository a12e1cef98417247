//! PlantUML class-diagram export.
//!
//! Output is a pure function of the space: entity blocks in registration
//! order, then docstring notes, then relations. Rendering twice yields the
//! same bytes.

use crate::model::{Entity, EntityKind, Hint, MethodEntity};
use crate::space::Space;

/// Render `space` as PlantUML text
pub fn export_puml(space: &Space) -> String {
    let mut output = String::new();

    if space.name().is_empty() {
        output.push_str("@startuml\n");
    } else {
        output.push_str(&format!("@startuml {}\n", space.name()));
    }

    for entity in space.entities() {
        render_entity(space, entity, &mut output);
    }

    for note in space.gen_docstring() {
        output.push_str(&format!(
            "note \"{}\" as {}\n",
            escape_note(&note.text),
            note.alias
        ));
    }

    for relation in space.gen_relations() {
        output.push_str(&format!(
            "{} {} {}\n",
            relation.source,
            relation.kind.arrow(),
            relation.target
        ));
    }

    output.push_str("@enduml\n");
    output
}

fn render_entity(space: &Space, entity: &Entity, output: &mut String) {
    let fqn = entity.fqn();
    match entity.kind() {
        EntityKind::Class(class) => {
            let keyword = if class.is_interface() { "interface" } else { "class" };
            output.push_str(&format!("{keyword} {fqn} {{\n"));
            if !entity.is_empty() {
                for member in class.attributes().iter().chain(class.methods().iter()) {
                    output.push_str(&format!(
                        "\t{} {}\n",
                        member.visibility().marker(),
                        member_text(space, member.name(), member.hint())
                    ));
                }
            }
        }
        EntityKind::Method(method) => {
            output.push_str(&format!("class {fqn} << Method >> {{\n"));
            if !entity.is_empty() {
                for param in method.params() {
                    output.push_str(&format!(
                        "\t{}: {}\n",
                        type_text(space, param.hint()),
                        param.name()
                    ));
                }
                output.push_str(&format!(
                    "\t{}: return\n",
                    type_text(space, method.returns().hint())
                ));
            }
        }
        EntityKind::Generic(generic) => {
            output.push_str(&format!("class {fqn} << {} >> {{\n", entity.short_name()));
            if !entity.is_empty() {
                for arg in generic.args() {
                    output.push_str(&format!("\t{}\n", type_text(space, arg.hint())));
                }
            }
        }
    }
    output.push_str("}\n");
}

/// Method-typed members show their signature, everything else `type: name`
fn member_text(space: &Space, name: &str, hint: &Hint) -> String {
    let method = match hint {
        Hint::Inline(entity) => entity.as_method(),
        Hint::Reference(reference) => space.resolve(reference).and_then(Entity::as_method),
        Hint::Untyped => None,
    };
    match method {
        Some(method) => signature_text(space, name, method),
        None => format!("{}: {name}", type_text(space, hint)),
    }
}

fn signature_text(space: &Space, name: &str, method: &MethodEntity) -> String {
    let params = method
        .params()
        .iter()
        .map(|param| format!("{}: {}", param.name(), type_text(space, param.hint())))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{name}({params}): {}",
        type_text(space, method.returns().hint())
    )
}

/// Short type text for a hint.
///
/// Registered entities render by short name only, which keeps cyclic
/// generics finite. Inline containers expand their arguments.
fn type_text(space: &Space, hint: &Hint) -> String {
    match hint {
        Hint::Untyped => "void".to_string(),
        Hint::Reference(reference) => match space.resolve(reference) {
            Some(entity) => entity.short_name().to_string(),
            None => reference.fqn().to_string(),
        },
        Hint::Inline(entity) => match entity.kind() {
            EntityKind::Generic(generic) if !generic.args().is_empty() => {
                let args = generic
                    .args()
                    .iter()
                    .map(|arg| type_text(space, arg.hint()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}[{args}]", entity.short_name())
            }
            EntityKind::Method(method) => signature_text(space, entity.short_name(), method),
            _ => entity.short_name().to_string(),
        },
    }
}

/// Escape special characters for note text; line breaks of any style
/// become `\n`
fn escape_note(s: &str) -> String {
    s.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassEntity, EntityBase, GenericEntity, Member, Param};
    use umlgraph_introspect::RawHandle;

    fn base(fqn: &str) -> EntityBase {
        EntityBase::new(RawHandle::new(fqn), fqn)
    }

    fn builtin(fqn: &str) -> Hint {
        Hint::inline(Entity::class(base(fqn).stub(), ClassEntity::new(false)))
    }

    #[test]
    fn test_escape_note() {
        assert_eq!(escape_note("plain"), "plain");
        assert_eq!(escape_note("two\nlines"), "two\\nlines");
        assert_eq!(escape_note("two\r\nlines\rend"), "two\\nlines\\nend");
        assert_eq!(escape_note("say \"hi\""), "say \\\"hi\\\"");
    }

    #[test]
    fn test_empty_space() {
        let space = Space::named("pkg");
        assert_eq!(export_puml(&space), "@startuml pkg\n@enduml\n");
    }

    #[test]
    fn test_type_text() {
        let mut space = Space::named("pkg");
        let pending = space.register("pkg.Later");
        assert_eq!(type_text(&space, &Hint::Untyped), "void");
        assert_eq!(type_text(&space, &builtin("builtins.int")), "int");
        assert_eq!(type_text(&space, &Hint::Reference(pending)), "pkg.Later");

        let mut dict = GenericEntity::new(true);
        dict.push_arg(Param::new("builtins.dict", "0", builtin("builtins.str")));
        dict.push_arg(Param::new("builtins.dict", "1", builtin("builtins.int")));
        let hint = Hint::inline(Entity::generic(base("builtins.dict"), dict));
        assert_eq!(type_text(&space, &hint), "dict[str, int]");
    }

    #[test]
    fn test_class_block_members() {
        let mut space = Space::named("pkg");
        let mut run = MethodEntity::new("pkg.A.run", true);
        run.push_param(Param::new("pkg.A.run", "times", builtin("builtins.int")));

        let mut class = ClassEntity::new(false);
        class.push_attribute(Member::new("pkg.A", "__secret", builtin("builtins.str")));
        class.push_attribute(Member::new("pkg.A", "size", builtin("builtins.int")));
        class.push_method(Member::new(
            "pkg.A",
            "run",
            Hint::inline(Entity::method(base("pkg.A.run"), run)),
        ));
        space.add_item(Entity::class(base("pkg.A"), class));

        let expected = "@startuml pkg\n\
                        class pkg.A {\n\
                        \t+ int: size\n\
                        \t- str: __secret\n\
                        \t+ run(times: int): void\n\
                        }\n\
                        @enduml\n";
        assert_eq!(export_puml(&space), expected);
    }
}
