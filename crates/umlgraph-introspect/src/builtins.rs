//! Heuristic for telling builtin constructs apart from user code.
//!
//! A construct counts as builtin when it lives in one of the runtime's own
//! modules or carries one of the well-known primitive names. Constructs that
//! slip through (re-exported primitives under another module) are treated as
//! user code.

/// Modules whose members are always builtin
pub const BUILTIN_MODULES: &[&str] = &["builtins", "typing", "types"];

/// Names that are builtin wherever they appear
pub const BUILTIN_NAMES: &[&str] = &[
    "int",
    "float",
    "bool",
    "complex",
    "tuple",
    "range",
    "bytes",
    "bytearray",
    "memoryview",
    "dict",
    "list",
    "set",
    "str",
    "any",
    "ANY",
    "NoneType",
];

/// Is `module` (or one of its sub-modules) a builtin module?
pub fn is_builtin_module(module: &str) -> bool {
    BUILTIN_MODULES.iter().any(|builtin| {
        module == *builtin
            || module
                .strip_prefix(builtin)
                .is_some_and(|rest| rest.starts_with('.'))
    })
}

/// Is `name` one of the well-known primitive names?
pub fn is_builtin_name(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}
