//! Convenience entry points for a whole diagram run.
//!
//! These wire an [`Extractor`] to a fresh [`Space`] and hand the result to
//! the PlantUML exporter, so callers do not have to.

use crate::config::DiagramOptions;
use crate::error::{Result, UmlError};
use crate::export::export_puml;
use crate::extractor::Extractor;
use crate::space::Space;
use log::info;
use std::path::Path;
use umlgraph_introspect::{Catalog, CatalogBackend, IntrospectionBackend, RawHandle, RawKind};

/// Inspect a package and return the populated space.
///
/// The package name becomes the domain and the diagram name.
///
/// # Errors
///
/// Returns [`UmlError::UnsupportedConstruct`] if `package` is not a module,
/// [`UmlError::InvalidConfig`] if the limit lies outside the package, and
/// any top-level registry conflict.
pub fn inspect<B: IntrospectionBackend + ?Sized>(
    backend: &B,
    package: &RawHandle,
    options: &DiagramOptions,
) -> Result<Space> {
    let kind = backend.kind(package);
    if kind != RawKind::Module {
        return Err(UmlError::UnsupportedConstruct {
            raw: package.clone(),
            expected: RawKind::Module.to_string(),
            actual: kind.to_string(),
        });
    }

    let module = backend.module_info(package)?;
    let mut extractor = Extractor::new(backend, options.extractor_config(&module.name))?;
    let mut space = Space::new(options.space_config(&module.name));
    let roots = extractor.inspect_package(package, &mut space)?;

    info!(
        "Space '{}' holds {} entities from {} top-level members",
        space.name(),
        space.len(),
        roots.len()
    );
    Ok(space)
}

/// Render a space as PlantUML text
pub fn render(space: &Space) -> String {
    export_puml(space)
}

/// Inspect a package and render it in one step
///
/// # Errors
///
/// Same as [`inspect`].
pub fn plantuml<B: IntrospectionBackend + ?Sized>(
    backend: &B,
    package: &RawHandle,
    options: &DiagramOptions,
) -> Result<String> {
    inspect(backend, package, options).map(|space| render(&space))
}

/// Write the rendered diagram of `space` to `path`.
///
/// # Errors
///
/// Returns [`UmlError::OutputExists`] if the file exists and `replace` is
/// false, or [`UmlError::Io`] if writing fails.
pub fn write_to_file(space: &Space, path: impl AsRef<Path>, replace: bool) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !replace {
        return Err(UmlError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    std::fs::write(path, render(space)).map_err(|source| UmlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote diagram '{}' to {}", space.name(), path.display());
    Ok(())
}

/// Load a JSON catalog from disk and wrap it as a backend.
///
/// # Errors
///
/// Returns [`UmlError::Introspection`] if the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<CatalogBackend> {
    let catalog = Catalog::from_path(path)?;
    Ok(CatalogBackend::new(catalog))
}
