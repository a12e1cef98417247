//! Tests for introspection API types and the catalog backend

use crate::*;
use std::io::Write;

#[test]
fn test_catalog_with_builtins() {
    let catalog = Catalog::with_builtins();

    assert_eq!(catalog.len(), 12);
    assert_eq!(
        catalog.get(&RawHandle::new("int")),
        Some(&CatalogEntry::class("builtins", "int"))
    );
    assert_eq!(catalog.get(&RawHandle::new("None")), Some(&CatalogEntry::NoneType));
}

#[test]
fn test_class_entry_builder() {
    let entry = CatalogEntry::class("shapes", "Circle")
        .with_bases(["shapes.Shape"])
        .with_attribute("radius", "float")
        .with_method("area", "shapes.Circle.area")
        .with_doc("A round shape");

    match entry {
        CatalogEntry::Class {
            module,
            qualname,
            is_interface,
            bases,
            attributes,
            methods,
            doc,
        } => {
            assert_eq!(module, "shapes");
            assert_eq!(qualname, "Circle");
            assert!(!is_interface);
            assert_eq!(bases, vec![RawHandle::new("shapes.Shape")]);
            assert_eq!(attributes, vec![NamedHandle::new("radius", "float")]);
            assert_eq!(methods[0].name, "area");
            assert_eq!(doc.as_deref(), Some("A round shape"));
        }
        other => panic!("expected a class entry, got {other:?}"),
    }
}

#[test]
fn test_builder_ignores_other_kinds() {
    let entry = CatalogEntry::module("pkg").interface().with_param("x", "int");
    assert_eq!(entry, CatalogEntry::module("pkg"));
}

#[test]
fn test_catalog_json_round_trip() {
    let catalog = Catalog::with_builtins()
        .with("pkg", CatalogEntry::module("pkg").with_member("f", "pkg.f"))
        .with(
            "pkg.f",
            CatalogEntry::callable("pkg", "f")
                .with_param("x", "int")
                .with_returns("str"),
        );

    let json = catalog.to_json().unwrap();
    let parsed = Catalog::from_json(&json).unwrap();
    assert_eq!(parsed, catalog);
}

#[test]
fn test_catalog_from_handwritten_json() {
    let json = r#"{
        "entries": {
            "pkg.T": { "kind": "parametric", "module": "pkg", "name": "T", "args": ["pkg.Base"] },
            "pkg.Base": { "kind": "class", "module": "pkg", "qualname": "Base", "is_interface": true }
        }
    }"#;
    let backend = CatalogBackend::new(Catalog::from_json(json).unwrap());

    assert_eq!(backend.kind(&"pkg.T".into()), RawKind::Parametric);
    let info = backend.parametric_info(&"pkg.T".into()).unwrap();
    assert!(!info.is_builtin);
    assert_eq!(info.args, vec![RawHandle::new("pkg.Base")]);
    assert!(backend.class_info(&"pkg.Base".into()).unwrap().is_interface);
}

#[test]
fn test_catalog_from_bad_json() {
    let err = Catalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, IntrospectError::Catalog { .. }));
}

#[test]
fn test_catalog_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let catalog = Catalog::with_builtins();
    file.write_all(catalog.to_json().unwrap().as_bytes()).unwrap();

    let loaded = Catalog::from_path(file.path()).unwrap();
    assert_eq!(loaded, catalog);

    let missing = Catalog::from_path(file.path().with_extension("missing"));
    assert!(matches!(missing, Err(IntrospectError::Io(_, _))));
}

#[test]
fn test_builtin_detection() {
    let backend = CatalogBackend::new(
        Catalog::with_builtins()
            .with("list[int]", CatalogEntry::parametric("builtins", "list").with_args(["int"]))
            .with("pkg.Shape", CatalogEntry::class("pkg", "Shape")),
    );

    assert!(backend.is_builtin(&"int".into()));
    assert!(backend.is_builtin(&"None".into()));
    assert!(backend.is_builtin(&"list[int]".into()));
    assert!(!backend.is_builtin(&"pkg.Shape".into()));
    assert!(!backend.is_builtin(&"unknown".into()));
    assert!(backend.parametric_info(&"list[int]".into()).unwrap().is_builtin);
}

#[test]
fn test_raw_kind_display() {
    assert_eq!(RawKind::Class.to_string(), "class");
    assert_eq!(RawKind::NoneType.to_string(), "none");
    assert_eq!(RawKind::Unknown.to_string(), "unknown");
}
