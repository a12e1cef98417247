//! Catalog fixtures shared by the integration tests.

#![allow(dead_code)]

use umlgraph_introspect::{Catalog, CatalogBackend, CatalogEntry};

/// `Shape` interface implemented by `Circle`
pub fn shapes_catalog() -> Catalog {
    Catalog::with_builtins()
        .with(
            "shapes",
            CatalogEntry::module("shapes")
                .with_member("Shape", "shapes.Shape")
                .with_member("Circle", "shapes.Circle"),
        )
        .with(
            "shapes.Shape",
            CatalogEntry::class("shapes", "Shape")
                .interface()
                .with_method("area", "shapes.Shape.area")
                .with_doc("Anything with an area"),
        )
        .with(
            "shapes.Shape.area",
            CatalogEntry::callable("shapes", "Shape.area").with_returns("float"),
        )
        .with(
            "shapes.Circle",
            CatalogEntry::class("shapes", "Circle")
                .with_bases(["shapes.Shape"])
                .with_attribute("radius", "float")
                .with_method("area", "shapes.Circle.area")
                .with_method("__init__", "shapes.Circle.__init__"),
        )
        .with(
            "shapes.Circle.area",
            CatalogEntry::callable("shapes", "Circle.area").with_returns("float"),
        )
        .with(
            "shapes.Circle.__init__",
            CatalogEntry::callable("shapes", "Circle.__init__").with_param("radius", "float"),
        )
}

pub fn shapes() -> CatalogBackend {
    CatalogBackend::new(shapes_catalog())
}

/// `A` and `B` inherit from each other
pub fn cyclic() -> CatalogBackend {
    CatalogBackend::new(
        Catalog::with_builtins()
            .with(
                "cyc",
                CatalogEntry::module("cyc")
                    .with_member("A", "cyc.A")
                    .with_member("B", "cyc.B"),
            )
            .with("cyc.A", CatalogEntry::class("cyc", "A").with_bases(["cyc.B"]))
            .with("cyc.B", CatalogEntry::class("cyc", "B").with_bases(["cyc.A"])),
    )
}

/// `C` holds a `D` which holds an `E`; only `C` is a module member
pub fn chain() -> CatalogBackend {
    CatalogBackend::new(
        Catalog::with_builtins()
            .with("deep", CatalogEntry::module("deep").with_member("C", "deep.C"))
            .with("deep.C", CatalogEntry::class("deep", "C").with_attribute("d", "deep.D"))
            .with("deep.D", CatalogEntry::class("deep", "D").with_attribute("e", "deep.E"))
            .with("deep.E", CatalogEntry::class("deep", "E").with_attribute("n", "int")),
    )
}

/// `pkg.sub.X` derives from `pkg.Base`, which sits outside `pkg.sub`
pub fn scoped() -> CatalogBackend {
    CatalogBackend::new(
        Catalog::with_builtins()
            .with(
                "pkg",
                CatalogEntry::module("pkg")
                    .with_member("Base", "pkg.Base")
                    .with_member("sub", "pkg.sub"),
            )
            .with("pkg.sub", CatalogEntry::module("pkg.sub").with_member("X", "pkg.sub.X"))
            .with(
                "pkg.Base",
                CatalogEntry::class("pkg", "Base").with_attribute("id", "int"),
            )
            .with(
                "pkg.sub.X",
                CatalogEntry::class("pkg.sub", "X")
                    .with_bases(["pkg.Base"])
                    .with_attribute("label", "str"),
            ),
    )
}

/// Users, a generic pair, a factory function and an inner type
pub fn model() -> CatalogBackend {
    CatalogBackend::new(
        Catalog::with_builtins()
            .with(
                "app",
                CatalogEntry::module("app")
                    .with_member("User", "app.User")
                    .with_member("Pair", "app.Pair")
                    .with_member("make_user", "app.make_user")
                    .with_member("Account", "app.Account")
                    .with_member("__version__", "str")
                    .with_member("Any", "Any"),
            )
            .with(
                "app.User",
                CatalogEntry::class("app", "User")
                    .with_attribute("name", "str")
                    .with_attribute("_email", "str")
                    .with_attribute("__password", "str"),
            )
            .with(
                "app.Pair",
                CatalogEntry::parametric("app", "Pair").with_args(["app.User", "int"]),
            )
            .with(
                "app.make_user",
                CatalogEntry::callable("app", "make_user")
                    .with_param("name", "str")
                    .with_returns("app.User"),
            )
            .with(
                "app.Account",
                CatalogEntry::class("app", "Account")
                    .with_attribute("owner", "app.User")
                    .with_attribute("backup", "app.User")
                    .with_attribute("settings", "app.Account.Settings")
                    .with_attribute("history", "app.list_users"),
            )
            .with(
                "app.Account.Settings",
                CatalogEntry::class("app", "Account.Settings").with_attribute("theme", "str"),
            )
            .with(
                "app.list_users",
                CatalogEntry::parametric("builtins", "list").with_args(["app.User"]),
            ),
    )
}

/// `C` holds a `D`; both are module members, listed in the given order
pub fn ordered(members: [&str; 2]) -> CatalogBackend {
    let module = members.iter().fold(CatalogEntry::module("ord"), |module, name| {
        module.with_member(*name, format!("ord.{name}"))
    });
    CatalogBackend::new(
        Catalog::with_builtins()
            .with("ord", module)
            .with("ord.C", CatalogEntry::class("ord", "C").with_attribute("d", "ord.D"))
            .with("ord.D", CatalogEntry::class("ord", "D").with_attribute("n", "int")),
    )
}

/// A user generic over an unresolvable name, a class deriving from it and
/// a class whose bound method uses both
pub fn generics() -> CatalogBackend {
    CatalogBackend::new(
        Catalog::with_builtins()
            .with(
                "g",
                CatalogEntry::module("g")
                    .with_member("Box", "g.Box")
                    .with_member("Child", "g.Child")
                    .with_member("Holder", "g.Holder"),
            )
            .with(
                "g.Box",
                CatalogEntry::parametric("g", "Box").with_args(["g.fwd.Missing", "int"]),
            )
            .with("g.fwd.Missing", CatalogEntry::forward("Missing"))
            .with("g.Child", CatalogEntry::class("g", "Child").with_bases(["g.Box"]))
            .with(
                "g.Holder",
                CatalogEntry::class("g", "Holder").with_method("swap", "g.Holder.swap"),
            )
            .with(
                "g.Holder.swap",
                CatalogEntry::callable("g", "Holder.swap")
                    .with_param("other", "g.Child")
                    .with_returns("g.Box"),
            ),
    )
}
