use super::{Catalog, CatalogEntry};
use crate::builtins::{is_builtin_module, is_builtin_name};
use crate::errors::{IntrospectError, IntrospectResult};
use crate::handle::{RawHandle, RawKind};
use crate::records::{CallableInfo, ClassInfo, ModuleInfo, ParametricInfo};
use crate::traits::IntrospectionBackend;
use log::trace;

/// [`IntrospectionBackend`] answering from an in-memory [`Catalog`]
#[derive(Debug, Clone, Default)]
pub struct CatalogBackend {
    catalog: Catalog,
}

impl CatalogBackend {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn entry(&self, raw: &RawHandle) -> IntrospectResult<&CatalogEntry> {
        self.catalog
            .get(raw)
            .ok_or_else(|| IntrospectError::UnknownHandle(raw.to_string()))
    }

    fn entry_fqn(raw: &RawHandle, entry: &CatalogEntry) -> IntrospectResult<String> {
        match entry {
            CatalogEntry::Module { name, .. } => Ok(name.clone()),
            CatalogEntry::Class {
                module, qualname, ..
            }
            | CatalogEntry::Callable {
                module, qualname, ..
            } => Ok(format!("{module}.{qualname}")),
            CatalogEntry::Parametric { module, name, .. } => Ok(format!("{module}.{name}")),
            CatalogEntry::NoneType => Ok("builtins.None".to_string()),
            CatalogEntry::Any => Ok("builtins.any".to_string()),
            CatalogEntry::Forward { name } => Err(IntrospectError::Malformed(
                raw.to_string(),
                format!("forward reference '{name}' has no fully-qualified name"),
            )),
        }
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

impl IntrospectionBackend for CatalogBackend {
    fn kind(&self, raw: &RawHandle) -> RawKind {
        self.catalog
            .get(raw)
            .map(CatalogEntry::raw_kind)
            .unwrap_or(RawKind::Unknown)
    }

    fn fqn(&self, raw: &RawHandle) -> IntrospectResult<String> {
        let entry = self.entry(raw)?;
        Self::entry_fqn(raw, entry)
    }

    fn module(&self, raw: &RawHandle) -> Option<String> {
        match self.catalog.get(raw)? {
            CatalogEntry::Module { name, .. } => Some(name.clone()),
            CatalogEntry::Class { module, .. }
            | CatalogEntry::Callable { module, .. }
            | CatalogEntry::Parametric { module, .. } => Some(module.clone()),
            CatalogEntry::NoneType | CatalogEntry::Any => Some("builtins".to_string()),
            CatalogEntry::Forward { .. } => None,
        }
    }

    fn docstring(&self, raw: &RawHandle) -> Option<String> {
        match self.catalog.get(raw)? {
            CatalogEntry::Class { doc, .. }
            | CatalogEntry::Callable { doc, .. }
            | CatalogEntry::Parametric { doc, .. } => doc.clone(),
            _ => None,
        }
    }

    fn is_builtin(&self, raw: &RawHandle) -> bool {
        match self.catalog.get(raw) {
            Some(CatalogEntry::Module { name, .. }) => is_builtin_module(name),
            Some(CatalogEntry::Class {
                module, qualname, ..
            })
            | Some(CatalogEntry::Callable {
                module, qualname, ..
            }) => is_builtin_module(module) || is_builtin_name(last_segment(qualname)),
            Some(CatalogEntry::Parametric { module, name, .. }) => {
                is_builtin_module(module) || is_builtin_name(name)
            }
            Some(CatalogEntry::NoneType) | Some(CatalogEntry::Any) => true,
            Some(CatalogEntry::Forward { .. }) | None => false,
        }
    }

    fn class_info(&self, raw: &RawHandle) -> IntrospectResult<ClassInfo> {
        match self.entry(raw)? {
            CatalogEntry::Class {
                is_interface,
                bases,
                attributes,
                methods,
                ..
            } => Ok(ClassInfo {
                is_interface: *is_interface,
                bases: bases.clone(),
                attributes: attributes.clone(),
                methods: methods.clone(),
            }),
            other => Err(IntrospectError::wrong_kind(
                raw.as_str(),
                RawKind::Class,
                other.raw_kind(),
            )),
        }
    }

    fn callable_info(&self, raw: &RawHandle) -> IntrospectResult<CallableInfo> {
        match self.entry(raw)? {
            CatalogEntry::Callable {
                qualname,
                params,
                returns,
                ..
            } => Ok(CallableInfo {
                is_bound: qualname.contains('.'),
                params: params.clone(),
                returns: returns.clone(),
            }),
            other => Err(IntrospectError::wrong_kind(
                raw.as_str(),
                RawKind::Callable,
                other.raw_kind(),
            )),
        }
    }

    fn parametric_info(&self, raw: &RawHandle) -> IntrospectResult<ParametricInfo> {
        match self.entry(raw)? {
            CatalogEntry::Parametric {
                module, name, args, ..
            } => Ok(ParametricInfo {
                is_builtin: is_builtin_module(module) || is_builtin_name(name),
                args: args.clone(),
            }),
            other => Err(IntrospectError::wrong_kind(
                raw.as_str(),
                RawKind::Parametric,
                other.raw_kind(),
            )),
        }
    }

    fn module_info(&self, raw: &RawHandle) -> IntrospectResult<ModuleInfo> {
        match self.entry(raw)? {
            CatalogEntry::Module { name, members } => Ok(ModuleInfo {
                name: name.clone(),
                members: members.clone(),
            }),
            other => Err(IntrospectError::wrong_kind(
                raw.as_str(),
                RawKind::Module,
                other.raw_kind(),
            )),
        }
    }

    fn forward_name(&self, raw: &RawHandle) -> Option<String> {
        match self.catalog.get(raw)? {
            CatalogEntry::Forward { name } => Some(name.clone()),
            _ => None,
        }
    }

    fn resolve_forward(&self, name: &str, domain: &str) -> Option<RawHandle> {
        // A member of the domain module wins over a bare fqn match
        let from_module = self.catalog.iter().find_map(|(_, entry)| match entry {
            CatalogEntry::Module {
                name: module,
                members,
            } if module == domain => members
                .iter()
                .find(|member| member.name == name)
                .map(|member| member.handle.clone()),
            _ => None,
        });
        if from_module.is_some() {
            return from_module;
        }

        let wanted = format!("{domain}.{name}");
        let resolved = self.catalog.iter().find_map(|(handle, entry)| {
            match Self::entry_fqn(&handle, entry) {
                Ok(fqn) if fqn == wanted => Some(handle),
                _ => None,
            }
        });
        trace!("Forward reference {name} in {domain} resolved to {resolved:?}");
        resolved
    }
}
