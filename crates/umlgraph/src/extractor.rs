//! Recursive traversal from backend handles into a [`Space`].
//!
//! The extractor asks an [`IntrospectionBackend`] about one construct at a
//! time and decides, per candidate, whether to populate it, stub it or keep
//! it inline:
//!
//! 1. the fqn comes from the backend; if that fails the candidate degrades
//!    to an inline stub
//! 2. an fqn that is already registered returns its existing [`Reference`],
//!    unless a top-level request finds it as a stub left by a nested visit
//! 3. candidates beyond `max_depth`, outside the scope prefix, or reached
//!    with `next_layer == false` are registered as empty stubs
//! 4. everything else is registered first, then populated one level deeper
//!
//! Builtin classes, `None`/`Any`, builtin containers and bound methods are
//! never registered; they travel inline inside the hint that uses them.

use crate::config::ExtractorConfig;
use crate::error::{Result, UmlError};
use crate::model::{
    short_name, ClassEntity, Entity, EntityBase, GenericEntity, Hint, Member, MethodEntity, Param,
    Reference,
};
use crate::space::Space;
use log::{debug, info, trace, warn};
use umlgraph_introspect::{
    CallableInfo, ClassInfo, IntrospectionBackend, NamedHandle, ParametricInfo, RawHandle, RawKind,
};

/// Outcome of extracting one handle
#[derive(Debug, Clone)]
pub enum Extracted {
    /// The candidate is registered in the space
    Reference(Reference),
    /// The candidate is owned by whoever asked for it
    Inline(Entity),
    /// Top-level entities of an inspected package
    Package(Vec<Reference>),
}

impl Extracted {
    /// Turn the outcome into a member or parameter hint.
    ///
    /// A package is not a type, so it becomes [`Hint::Untyped`].
    pub fn into_hint(self) -> Hint {
        match self {
            Extracted::Reference(reference) => Hint::Reference(reference),
            Extracted::Inline(entity) => Hint::inline(entity),
            Extracted::Package(_) => Hint::Untyped,
        }
    }

    /// The reference, if the candidate was registered
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Extracted::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Registered entities the outcome stands for
    pub fn into_references(self) -> Vec<Reference> {
        match self {
            Extracted::Reference(reference) => vec![reference],
            Extracted::Inline(_) => Vec::new(),
            Extracted::Package(references) => references,
        }
    }
}

fn is_dunder(name: &str) -> bool {
    name.len() > 4 && name.starts_with("__") && name.ends_with("__")
}

/// Undo name mangling: `_Shape__secret` declared in `Shape` is `__secret`
fn demangle<'n>(class: &str, name: &'n str) -> &'n str {
    let class = class.trim_start_matches('_');
    name.strip_prefix('_')
        .and_then(|rest| rest.strip_prefix(class))
        .filter(|rest| rest.starts_with("__"))
        .unwrap_or(name)
}

/// Depth-first traversal driver.
///
/// One extractor serves one run. It keeps the current depth, the package
/// layer and the working domain used to resolve forward references.
pub struct Extractor<'b, B: IntrospectionBackend + ?Sized> {
    backend: &'b B,
    config: ExtractorConfig,
    working_domain: String,
    depth: usize,
    layer: usize,
    // Inline handles being populated right now
    inline_stack: Vec<RawHandle>,
}

impl<'b, B: IntrospectionBackend + ?Sized> Extractor<'b, B> {
    /// Create an extractor over `backend`.
    ///
    /// # Errors
    ///
    /// Returns [`UmlError::InvalidConfig`] if `config` does not validate.
    pub fn new(backend: &'b B, config: ExtractorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            backend,
            working_domain: config.domain.clone(),
            config,
            depth: 0,
            layer: 0,
            inline_stack: Vec::new(),
        })
    }

    /// Traversal policy in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract `raw` of the given `kind` into `space`.
    ///
    /// With `next_layer == false` a registered candidate is only stubbed.
    ///
    /// # Errors
    ///
    /// Returns [`UmlError::RegistryConflict`] when `raw` names an fqn that a
    /// different handle already claimed, and [`UmlError::Unresolvable`] when
    /// a module cannot be inspected. Everything else degrades to a stub.
    pub fn extract(
        &mut self,
        raw: &RawHandle,
        kind: RawKind,
        space: &mut Space,
        next_layer: bool,
    ) -> Result<Extracted> {
        trace!("Extracting {raw} ({kind}) at depth {}", self.depth);
        match kind {
            RawKind::Class => self.inspect_class(raw, space, next_layer),
            RawKind::Callable => self.inspect_method(raw, space, next_layer),
            RawKind::Parametric => self.inspect_generic(raw, space, next_layer),
            RawKind::Module => self.inspect_package(raw, space).map(Extracted::Package),
            RawKind::Forward => self.inspect_forward(raw, space, next_layer),
            RawKind::NoneType | RawKind::Any => Ok(Extracted::Inline(self.builtin_stub(raw))),
            RawKind::Unknown => {
                warn!("Unsupported construct {raw}; using a stub");
                Ok(Extracted::Inline(self.degraded(raw)))
            }
        }
    }

    /// Extract every diagram entity of a package and its sub-packages.
    ///
    /// Members are visited in backend order. Dunder names and builtins are
    /// skipped, so are members from outside the domain unless
    /// `include_extern` is set, and members outside `limit_fqn`. Each
    /// top-level member starts at depth 0.
    ///
    /// # Errors
    ///
    /// Returns [`UmlError::Unresolvable`] if `package` is not a module the
    /// backend can describe. Failures of single members are logged and
    /// skipped.
    pub fn inspect_package(
        &mut self,
        package: &RawHandle,
        space: &mut Space,
    ) -> Result<Vec<Reference>> {
        let module = self
            .backend
            .module_info(package)
            .map_err(|err| UmlError::Unresolvable {
                raw: package.clone(),
                message: err.to_string(),
            })?;
        info!(
            "Inspecting package {} ({} members, layer {})",
            module.name,
            module.members.len(),
            self.layer
        );

        let saved = std::mem::replace(&mut self.working_domain, module.name.clone());
        let mut references: Vec<Reference> = Vec::new();
        for member in &module.members {
            for reference in self.package_member(&module.name, member, space) {
                if !references.contains(&reference) {
                    references.push(reference);
                }
            }
        }
        self.working_domain = saved;

        debug!("Package {} yielded {} entities", module.name, references.len());
        Ok(references)
    }

    fn package_member(
        &mut self,
        package: &str,
        member: &NamedHandle,
        space: &mut Space,
    ) -> Vec<Reference> {
        let NamedHandle { name, handle } = member;
        if is_dunder(name) || self.backend.is_builtin(handle) {
            trace!("Skipping {package}.{name}");
            return Vec::new();
        }

        let kind = self.backend.kind(handle);
        if !self.config.include_extern {
            let module = self.backend.module(handle).unwrap_or_default();
            if !self.config.in_domain(&module) {
                debug!("Skipping external member {package}.{name} from '{module}'");
                return Vec::new();
            }
        }

        let fqn = match kind {
            RawKind::Module => format!("{package}.{name}"),
            _ => self
                .backend
                .fqn(handle)
                .unwrap_or_else(|_| format!("{package}.{name}")),
        };
        if !self.within_limit(&fqn, kind == RawKind::Module) {
            trace!("Skipping {fqn}: outside limit '{}'", self.config.limit_fqn);
            return Vec::new();
        }

        match kind {
            RawKind::Class | RawKind::Callable | RawKind::Parametric => {
                match self.extract(handle, kind, space, true) {
                    Ok(extracted) => extracted.into_references(),
                    Err(err) => {
                        warn!("Skipping member {fqn}: {err}");
                        Vec::new()
                    }
                }
            }
            RawKind::Module => {
                if self.layer >= self.config.max_depth {
                    debug!("Not descending into {fqn}: layer limit reached");
                    return Vec::new();
                }
                self.layer += 1;
                let found = self.inspect_package(handle, space);
                self.layer -= 1;
                found.unwrap_or_else(|err| {
                    warn!("Skipping sub-package {fqn}: {err}");
                    Vec::new()
                })
            }
            _ => {
                trace!("Member {fqn} ({kind}) is not a diagram entity");
                Vec::new()
            }
        }
    }

    /// A module may lie above the limit and still lead into it
    fn within_limit(&self, fqn: &str, is_module: bool) -> bool {
        let limit = &self.config.limit_fqn;
        limit.is_empty()
            || fqn.starts_with(limit.as_str())
            || (is_module && limit.starts_with(&format!("{fqn}.")))
    }

    fn inspect_class(
        &mut self,
        raw: &RawHandle,
        space: &mut Space,
        next_layer: bool,
    ) -> Result<Extracted> {
        if self.backend.is_builtin(raw) {
            return Ok(Extracted::Inline(self.builtin_stub(raw)));
        }
        let Some(fqn) = self.name_of(raw) else {
            return Ok(Extracted::Inline(self.degraded(raw)));
        };
        if let Some(existing) = self.registered(&fqn, raw, space, next_layer)? {
            return Ok(Extracted::Reference(existing));
        }
        space.claim(&fqn, raw)?;

        let base = self.base(raw, &fqn);
        let info = match self.backend.class_info(raw) {
            Ok(info) => info,
            Err(err) => {
                warn!("No class record for {fqn}: {err}");
                let stub = Entity::class(base.stub(), ClassEntity::new(false));
                return Ok(Extracted::Reference(space.add_item(stub)));
            }
        };

        let entity = if self.should_populate(&fqn, next_layer) {
            let class = self.descend(raw, |this| this.populate_class(&fqn, &info, space));
            Entity::class(base, class)
        } else {
            Entity::class(base.stub(), ClassEntity::new(info.is_interface))
        };
        Ok(Extracted::Reference(space.add_item(entity)))
    }

    fn populate_class(&mut self, fqn: &str, info: &ClassInfo, space: &mut Space) -> ClassEntity {
        let mut class = ClassEntity::new(info.is_interface);

        for base in &info.bases {
            if self.backend.is_builtin(base) {
                trace!("Skipping builtin base {base} of {fqn}");
                continue;
            }
            if let Some(ancestor) = self.ancestor(fqn, base, space) {
                class.push_ancestor(ancestor);
            }
        }

        for attribute in &info.attributes {
            if let Some(hint) = self.nested_hint(&attribute.handle, space) {
                class.push_attribute(Member::new(fqn, &attribute.name, hint));
            }
        }

        let short = short_name(fqn);
        for method in &info.methods {
            if is_dunder(&method.name) {
                continue;
            }
            let name = demangle(short, &method.name);
            if let Some(hint) = self.nested_hint(&method.handle, space) {
                class.push_method(Member::new(fqn, name, hint));
            }
        }

        class
    }

    fn ancestor(&mut self, fqn: &str, base: &RawHandle, space: &mut Space) -> Option<Reference> {
        let kind = self.backend.kind(base);
        if !matches!(kind, RawKind::Class | RawKind::Parametric | RawKind::Forward) {
            warn!("Malformed base {base} ({kind}) of {fqn}; omitted");
            return None;
        }
        match self.extract(base, kind, space, true) {
            Ok(Extracted::Reference(reference)) => Some(reference),
            Ok(_) => {
                warn!("Base {base} of {fqn} did not resolve to an entity; omitted");
                None
            }
            Err(err) => {
                warn!("Skipping base {base} of {fqn}: {err}");
                None
            }
        }
    }

    fn inspect_method(
        &mut self,
        raw: &RawHandle,
        space: &mut Space,
        next_layer: bool,
    ) -> Result<Extracted> {
        let Some(fqn) = self.name_of(raw) else {
            return Ok(Extracted::Inline(self.degraded(raw)));
        };
        let info = match self.backend.callable_info(raw) {
            Ok(info) => info,
            Err(err) => {
                warn!("No callable record for {fqn}: {err}");
                return Ok(Extracted::Inline(self.degraded(raw)));
            }
        };

        if info.is_bound || self.backend.is_builtin(raw) {
            let method = self.inline_method(raw, &fqn, &info, space, next_layer);
            return Ok(Extracted::Inline(method));
        }

        if let Some(existing) = self.registered(&fqn, raw, space, next_layer)? {
            return Ok(Extracted::Reference(existing));
        }
        space.claim(&fqn, raw)?;

        let base = self.base(raw, &fqn);
        let entity = if self.should_populate(&fqn, next_layer) {
            let method = self.descend(raw, |this| this.populate_method(&fqn, &info, space));
            Entity::method(base, method)
        } else {
            Entity::method(base.stub(), MethodEntity::new(&fqn, false))
        };
        Ok(Extracted::Reference(space.add_item(entity)))
    }

    /// Bound methods belong to their class: no extra level, same domain
    fn inline_method(
        &mut self,
        raw: &RawHandle,
        fqn: &str,
        info: &CallableInfo,
        space: &mut Space,
        next_layer: bool,
    ) -> Entity {
        let base = self.base(raw, fqn);
        if !next_layer || self.backend.is_builtin(raw) || !self.enter_inline(raw) {
            return Entity::method(base.stub(), MethodEntity::new(fqn, info.is_bound));
        }
        let method = self.populate_method(fqn, info, space);
        self.leave_inline();
        Entity::method(base, method)
    }

    fn populate_method(
        &mut self,
        fqn: &str,
        info: &CallableInfo,
        space: &mut Space,
    ) -> MethodEntity {
        let mut method = MethodEntity::new(fqn, info.is_bound);
        for param in &info.params {
            if let Some(hint) = self.nested_hint(&param.handle, space) {
                method.push_param(Param::new(fqn, &param.name, hint));
            }
        }
        if let Some(returns) = &info.returns {
            if let Some(hint) = self.nested_hint(returns, space) {
                method.set_returns(Param::new(fqn, "return", hint));
            }
        }
        method
    }

    fn inspect_generic(
        &mut self,
        raw: &RawHandle,
        space: &mut Space,
        next_layer: bool,
    ) -> Result<Extracted> {
        let Some(fqn) = self.name_of(raw) else {
            return Ok(Extracted::Inline(self.degraded(raw)));
        };
        let info = match self.backend.parametric_info(raw) {
            Ok(info) => info,
            Err(err) => {
                warn!("No parametric record for {fqn}: {err}");
                return Ok(Extracted::Inline(self.degraded(raw)));
            }
        };

        if info.is_builtin || self.backend.is_builtin(raw) {
            let generic = self.inline_generic(raw, &fqn, &info, space, next_layer);
            return Ok(Extracted::Inline(generic));
        }

        if let Some(existing) = self.registered(&fqn, raw, space, next_layer)? {
            return Ok(Extracted::Reference(existing));
        }
        space.claim(&fqn, raw)?;

        let base = self.base(raw, &fqn);
        let entity = if self.should_populate(&fqn, next_layer) {
            let generic =
                self.descend(raw, |this| this.populate_generic(&fqn, &info, space, false));
            Entity::generic(base, generic)
        } else {
            Entity::generic(base.stub(), GenericEntity::new(false))
        };
        Ok(Extracted::Reference(space.add_item(entity)))
    }

    /// Builtin containers are transparent: their arguments sit at the
    /// container's own depth and resolve in the caller's domain
    fn inline_generic(
        &mut self,
        raw: &RawHandle,
        fqn: &str,
        info: &ParametricInfo,
        space: &mut Space,
        next_layer: bool,
    ) -> Entity {
        let base = self.base(raw, fqn);
        if !next_layer || !self.enter_inline(raw) {
            return Entity::generic(base.stub(), GenericEntity::new(true));
        }
        let generic = self.populate_generic(fqn, info, space, true);
        self.leave_inline();
        Entity::generic(base, generic)
    }

    fn populate_generic(
        &mut self,
        fqn: &str,
        info: &ParametricInfo,
        space: &mut Space,
        is_builtin: bool,
    ) -> GenericEntity {
        let mut generic = GenericEntity::new(is_builtin);
        for (index, arg) in info.args.iter().enumerate() {
            if let Some(hint) = self.nested_hint(arg, space) {
                generic.push_arg(Param::new(fqn, &index.to_string(), hint));
            }
        }
        generic
    }

    fn inspect_forward(
        &mut self,
        raw: &RawHandle,
        space: &mut Space,
        next_layer: bool,
    ) -> Result<Extracted> {
        let Some(name) = self.backend.forward_name(raw) else {
            warn!("Forward reference {raw} has no target name");
            return Ok(Extracted::Inline(self.degraded(raw)));
        };
        let Some(target) = self.backend.resolve_forward(&name, &self.working_domain) else {
            warn!("Unresolved forward reference '{name}' in {}", self.working_domain);
            return Ok(Extracted::Inline(self.degraded(raw)));
        };

        let kind = self.backend.kind(&target);
        if kind == RawKind::Module || !self.enter_inline(raw) {
            debug!("Forward reference '{name}' cannot be followed; using a stub");
            return Ok(Extracted::Inline(self.degraded(raw)));
        }
        debug!("Forward reference '{name}' resolved to {target}");
        let extracted = self.extract(&target, kind, space, next_layer);
        self.leave_inline();
        extracted
    }

    /// Extract a nested candidate; conflicts skip the candidate
    fn nested_hint(&mut self, raw: &RawHandle, space: &mut Space) -> Option<Hint> {
        let kind = self.backend.kind(raw);
        if kind == RawKind::Module {
            debug!("Module {raw} used as a type; using a stub");
            return Some(Hint::inline(self.degraded(raw)));
        }
        match self.extract(raw, kind, space, true) {
            Ok(extracted) => Some(extracted.into_hint()),
            Err(err) => {
                warn!("Skipping nested {raw}: {err}");
                None
            }
        }
    }

    /// Existing reference for an fqn that is already registered.
    ///
    /// A top-level request for an entity that an earlier nested visit left
    /// as a stub gets `None`, so the caller populates it in place.
    fn registered(
        &self,
        fqn: &str,
        raw: &RawHandle,
        space: &mut Space,
        next_layer: bool,
    ) -> Result<Option<Reference>> {
        if !space.contains(fqn) {
            return Ok(None);
        }
        let existing = space.claim(fqn, raw)?;
        let stubbed = space.get(fqn).is_some_and(Entity::is_empty);
        if stubbed && self.is_top_level() && self.should_populate(fqn, next_layer) {
            debug!("Populating stub {fqn} as a top-level entity");
            return Ok(None);
        }
        trace!("{fqn} already registered");
        Ok(Some(existing))
    }

    fn is_top_level(&self) -> bool {
        self.depth == 0 && self.inline_stack.is_empty()
    }

    fn should_populate(&self, fqn: &str, next_layer: bool) -> bool {
        if !next_layer {
            trace!("Stubbing {fqn}: next layer disabled");
            return false;
        }
        if self.depth >= self.config.max_depth {
            debug!("Stubbing {fqn}: depth {} reached", self.depth);
            return false;
        }
        if !self.config.include_extern && !self.config.in_scope(fqn) {
            debug!("Stubbing {fqn}: outside '{}'", self.config.scope_prefix());
            return false;
        }
        true
    }

    /// Run `step` one level deeper, with the working domain moved to the
    /// module of `raw`
    fn descend<T>(&mut self, raw: &RawHandle, step: impl FnOnce(&mut Self) -> T) -> T {
        let module = self
            .backend
            .module(raw)
            .unwrap_or_else(|| self.working_domain.clone());
        let saved = std::mem::replace(&mut self.working_domain, module);
        self.depth += 1;
        let out = step(self);
        self.depth -= 1;
        self.working_domain = saved;
        out
    }

    fn enter_inline(&mut self, raw: &RawHandle) -> bool {
        if self.inline_stack.contains(raw) {
            debug!("Cycle through inline construct {raw}");
            return false;
        }
        self.inline_stack.push(raw.clone());
        true
    }

    fn leave_inline(&mut self) {
        self.inline_stack.pop();
    }

    fn name_of(&self, raw: &RawHandle) -> Option<String> {
        match self.backend.fqn(raw) {
            Ok(fqn) => Some(fqn),
            Err(err) => {
                warn!("Cannot name {raw}: {err}");
                None
            }
        }
    }

    fn base(&self, raw: &RawHandle, fqn: &str) -> EntityBase {
        EntityBase::new(raw.clone(), fqn).with_docstring(self.backend.docstring(raw))
    }

    fn builtin_stub(&self, raw: &RawHandle) -> Entity {
        let fqn = self.backend.fqn(raw).unwrap_or_else(|_| raw.to_string());
        Entity::class(self.base(raw, &fqn).stub(), ClassEntity::new(false))
    }

    fn degraded(&self, raw: &RawHandle) -> Entity {
        let base = EntityBase::new(raw.clone(), raw.as_str()).unresolved();
        Entity::class(base, ClassEntity::new(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityKind;
    use umlgraph_introspect::{Catalog, CatalogBackend, CatalogEntry};

    fn backend() -> CatalogBackend {
        CatalogBackend::new(
            Catalog::with_builtins()
                .with(
                    "pkg",
                    CatalogEntry::module("pkg")
                        .with_member("Node", "pkg.Node")
                        .with_member("build", "pkg.build"),
                )
                .with(
                    "pkg.Node",
                    CatalogEntry::class("pkg", "Node")
                        .with_attribute("value", "int")
                        .with_attribute("_next", "fwd.Node")
                        .with_method("__init__", "pkg.Node.__init__")
                        .with_method("_Node__walk", "pkg.Node._Node__walk"),
                )
                .with("fwd.Node", CatalogEntry::forward("Node"))
                .with(
                    "pkg.Node.__init__",
                    CatalogEntry::callable("pkg", "Node.__init__"),
                )
                .with(
                    "pkg.Node._Node__walk",
                    CatalogEntry::callable("pkg", "Node._Node__walk").with_returns("None"),
                )
                .with(
                    "pkg.build",
                    CatalogEntry::callable("pkg", "build")
                        .with_param("value", "int")
                        .with_returns("pkg.Node"),
                ),
        )
    }

    #[test]
    fn test_dunder_and_demangle() {
        assert!(is_dunder("__init__"));
        assert!(!is_dunder("__x"));
        assert!(!is_dunder("____"));
        assert_eq!(demangle("Node", "_Node__walk"), "__walk");
        assert_eq!(demangle("_Hidden", "_Hidden__x"), "__x");
        assert_eq!(demangle("Node", "_walk"), "_walk");
        assert_eq!(demangle("Node", "_Other__walk"), "_Other__walk");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let backend = backend();
        let config = ExtractorConfig::new("pkg").with_limit_fqn("other");
        assert!(Extractor::new(&backend, config).is_err());
    }

    #[test]
    fn test_package_members_in_order() {
        let backend = backend();
        let mut space = Space::named("pkg");
        let mut extractor = Extractor::new(&backend, ExtractorConfig::new("pkg")).unwrap();
        let refs = extractor
            .inspect_package(&RawHandle::new("pkg"), &mut space)
            .unwrap();

        let names: Vec<&str> = refs.iter().map(Reference::fqn).collect();
        assert_eq!(names, vec!["pkg.Node", "pkg.build"]);
        assert_eq!(space.len(), 2);
    }

    #[test]
    fn test_self_reference_through_forward() {
        let backend = backend();
        let mut space = Space::named("pkg");
        let mut extractor = Extractor::new(&backend, ExtractorConfig::new("pkg")).unwrap();
        extractor
            .extract(&RawHandle::new("pkg.Node"), RawKind::Class, &mut space, true)
            .unwrap();

        let node = space.get("pkg.Node").unwrap().as_class().unwrap();
        let next = &node.protected_attributes()[0];
        assert_eq!(next.name(), "_next");
        assert_eq!(next.hint().as_reference().unwrap().fqn(), "pkg.Node");

        let methods: Vec<&str> = node.methods().iter().map(Member::name).collect();
        assert_eq!(methods, vec!["__walk"]);
        assert_eq!(node.private_methods().len(), 1);
    }

    #[test]
    fn test_builtins_stay_inline() {
        let backend = backend();
        let mut space = Space::named("pkg");
        let mut extractor = Extractor::new(&backend, ExtractorConfig::new("pkg")).unwrap();
        let extracted = extractor
            .extract(&RawHandle::new("int"), RawKind::Class, &mut space, true)
            .unwrap();
        match extracted {
            Extracted::Inline(entity) => {
                assert_eq!(entity.fqn(), "builtins.int");
                assert!(entity.is_empty());
            }
            other => panic!("expected inline, got {other:?}"),
        }
        assert!(space.is_empty());
    }

    #[test]
    fn test_free_function_registered_with_signature() {
        let backend = backend();
        let mut space = Space::named("pkg");
        let mut extractor = Extractor::new(&backend, ExtractorConfig::new("pkg")).unwrap();
        extractor
            .extract(&RawHandle::new("pkg.build"), RawKind::Callable, &mut space, true)
            .unwrap();

        let build = space.get("pkg.build").unwrap();
        let EntityKind::Method(method) = build.kind() else {
            panic!("expected a method");
        };
        assert!(!method.is_bound());
        assert_eq!(method.params()[0].name(), "value");
        assert_eq!(method.returns().hint().as_reference().unwrap().fqn(), "pkg.Node");
        assert!(space.is_populated("pkg.Node"));
    }

    #[test]
    fn test_unknown_handle_degrades() {
        let backend = backend();
        let mut space = Space::named("pkg");
        let mut extractor = Extractor::new(&backend, ExtractorConfig::new("pkg")).unwrap();
        let extracted = extractor
            .extract(&RawHandle::new("nowhere"), RawKind::Unknown, &mut space, true)
            .unwrap();
        assert!(matches!(extracted, Extracted::Inline(ref e) if e.is_empty() && e.is_unresolved()));
        assert!(space.is_empty());
    }

    #[test]
    fn test_next_layer_false_stubs() {
        let backend = backend();
        let mut space = Space::named("pkg");
        let mut extractor = Extractor::new(&backend, ExtractorConfig::new("pkg")).unwrap();
        extractor
            .extract(&RawHandle::new("pkg.Node"), RawKind::Class, &mut space, false)
            .unwrap();
        assert!(space.get("pkg.Node").unwrap().is_empty());
        assert_eq!(space.len(), 1);
    }
}
