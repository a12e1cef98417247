use crate::errors::IntrospectResult;
use crate::handle::{RawHandle, RawKind};
use crate::records::{CallableInfo, ClassInfo, ModuleInfo, ParametricInfo};

/// The questions the umlgraph core asks about raw constructs.
///
/// Implementations answer for handles they produced themselves. Every call
/// must be free of side effects and idempotent: the core asks the same
/// question several times during one traversal and never retries a failure.
///
/// # Example
/// ```rust
/// use umlgraph_introspect::{Catalog, CatalogBackend, IntrospectionBackend, RawHandle, RawKind};
///
/// let backend = CatalogBackend::new(Catalog::with_builtins());
/// assert_eq!(backend.kind(&RawHandle::new("int")), RawKind::Class);
/// assert!(backend.is_builtin(&RawHandle::new("int")));
/// assert_eq!(backend.kind(&RawHandle::new("missing")), RawKind::Unknown);
/// ```
pub trait IntrospectionBackend {
    /// Structural kind of the construct; `Unknown` for handles the backend
    /// cannot classify or does not know
    fn kind(&self, raw: &RawHandle) -> RawKind;

    /// Fully-qualified name of the construct
    ///
    /// # Errors
    /// Returns an error when the handle is unknown or names a forward
    /// reference that has not been resolved.
    fn fqn(&self, raw: &RawHandle) -> IntrospectResult<String>;

    /// Module the construct is defined in, if it has one
    fn module(&self, raw: &RawHandle) -> Option<String>;

    /// Documentation text attached to the construct
    fn docstring(&self, raw: &RawHandle) -> Option<String>;

    /// Whether the construct belongs to the runtime rather than user code
    fn is_builtin(&self, raw: &RawHandle) -> bool;

    /// Interface flag, bases and members of a class-like construct
    fn class_info(&self, raw: &RawHandle) -> IntrospectResult<ClassInfo>;

    /// Bound flag, parameters and return of a callable
    fn callable_info(&self, raw: &RawHandle) -> IntrospectResult<CallableInfo>;

    /// Builtin flag and type arguments of a parameterized type
    fn parametric_info(&self, raw: &RawHandle) -> IntrospectResult<ParametricInfo>;

    /// Name and members of a module-like scope
    fn module_info(&self, raw: &RawHandle) -> IntrospectResult<ModuleInfo>;

    /// Name a forward reference points at, if `raw` is one
    fn forward_name(&self, raw: &RawHandle) -> Option<String>;

    /// Resolve a forward-referenced `name` as seen from module `domain`
    fn resolve_forward(&self, name: &str, domain: &str) -> Option<RawHandle>;
}
