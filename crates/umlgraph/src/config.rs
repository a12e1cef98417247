//! Configuration for extraction, space construction and diagram runs.

use crate::error::{Result, UmlError};
use serde::{Deserialize, Serialize};

/// Default bound on nested extraction depth
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Cut a limit at its first `::` so member-level limits select their owner
fn normalize_limit(limit: &str) -> String {
    match limit.split_once("::") {
        Some((owner, _)) => owner.to_string(),
        None => limit.to_string(),
    }
}

/// Traversal policy for the extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Root namespace of the inspected package
    pub domain: String,

    /// Only entities under this fqn are populated (empty = whole domain)
    pub limit_fqn: String,

    /// Candidates at or beyond this depth become stubs
    pub max_depth: usize,

    /// Populate entities defined outside the scope prefix
    pub include_extern: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            limit_fqn: String::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            include_extern: false,
        }
    }
}

impl ExtractorConfig {
    /// Create a config rooted at `domain`
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Default::default()
        }
    }

    /// Restrict population to `limit`; anything after `::` is dropped
    pub fn with_limit_fqn(mut self, limit: &str) -> Self {
        self.limit_fqn = normalize_limit(limit);
        self
    }

    /// Set maximum nested depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Populate entities outside the scope prefix too
    pub fn with_extern(mut self, include_extern: bool) -> Self {
        self.include_extern = include_extern;
        self
    }

    /// Check that the limit lies inside the domain.
    ///
    /// # Errors
    ///
    /// Returns [`UmlError::InvalidConfig`] when `limit_fqn` does not start
    /// with `domain`.
    pub fn validate(&self) -> Result<()> {
        if !self.limit_fqn.is_empty() && !self.limit_fqn.starts_with(&self.domain) {
            return Err(UmlError::invalid_config(format!(
                "limit_fqn '{}' is outside domain '{}'",
                self.limit_fqn, self.domain
            )));
        }
        Ok(())
    }

    /// Prefix an fqn must carry to be populated: the limit, else the domain
    pub fn scope_prefix(&self) -> &str {
        if self.limit_fqn.is_empty() {
            &self.domain
        } else {
            &self.limit_fqn
        }
    }

    /// Whether `fqn` falls under the scope prefix
    pub fn in_scope(&self, fqn: &str) -> bool {
        fqn.starts_with(self.scope_prefix())
    }

    /// Whether a module path belongs to the domain
    pub fn in_domain(&self, module: &str) -> bool {
        module.starts_with(&self.domain)
    }
}

/// Identity and rendering switches of a [`Space`](crate::Space)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceConfig {
    /// Diagram name
    pub name: String,

    /// Limit the space was built with, kept for export
    pub limit_fqn: String,

    /// Emit docstring notes and their links
    pub include_docs: bool,
}

impl SpaceConfig {
    /// Create a config for a space called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Record the limit used for extraction
    pub fn with_limit_fqn(mut self, limit: &str) -> Self {
        self.limit_fqn = normalize_limit(limit);
        self
    }

    /// Enable docstring notes
    pub fn with_docs(mut self, include_docs: bool) -> Self {
        self.include_docs = include_docs;
        self
    }
}

/// Options for a whole inspect-and-render run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramOptions {
    /// Restrict the diagram to entities under this fqn
    pub limit_fqn: String,

    /// Populate entities defined outside the package
    pub include_extern: bool,

    /// Emit docstring notes
    pub include_docs: bool,

    /// Nested extraction depth
    pub max_depth: usize,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            limit_fqn: String::new(),
            include_extern: false,
            include_docs: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DiagramOptions {
    /// Top-level entities only, every nested type as a stub
    pub fn overview() -> Self {
        Self {
            max_depth: 1,
            ..Default::default()
        }
    }

    /// Restrict the diagram to `limit`
    pub fn with_limit_fqn(mut self, limit: &str) -> Self {
        self.limit_fqn = normalize_limit(limit);
        self
    }

    /// Populate external entities
    pub fn with_extern(mut self, include_extern: bool) -> Self {
        self.include_extern = include_extern;
        self
    }

    /// Emit docstring notes
    pub fn with_docs(mut self, include_docs: bool) -> Self {
        self.include_docs = include_docs;
        self
    }

    /// Set maximum nested depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Extractor policy for a package rooted at `domain`
    pub fn extractor_config(&self, domain: &str) -> ExtractorConfig {
        ExtractorConfig::new(domain)
            .with_limit_fqn(&self.limit_fqn)
            .with_max_depth(self.max_depth)
            .with_extern(self.include_extern)
    }

    /// Space identity for a diagram called `name`
    pub fn space_config(&self, name: &str) -> SpaceConfig {
        SpaceConfig::new(name)
            .with_limit_fqn(&self.limit_fqn)
            .with_docs(self.include_docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.max_depth, 3);
        assert!(!config.include_extern);
        assert!(config.limit_fqn.is_empty());
    }

    #[test]
    fn test_limit_cut_at_member_separator() {
        let config = ExtractorConfig::new("pkg").with_limit_fqn("pkg.sub.Shape::area");
        assert_eq!(config.limit_fqn, "pkg.sub.Shape");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_limit_outside_domain_is_rejected() {
        let config = ExtractorConfig::new("pkg").with_limit_fqn("other.Thing");
        assert!(matches!(
            config.validate(),
            Err(UmlError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_scope_prefix_falls_back_to_domain() {
        let config = ExtractorConfig::new("pkg");
        assert_eq!(config.scope_prefix(), "pkg");
        assert!(config.in_scope("pkg.mod.A"));
        assert!(!config.in_scope("ext.B"));

        let limited = config.with_limit_fqn("pkg.sub");
        assert_eq!(limited.scope_prefix(), "pkg.sub");
        assert!(!limited.in_scope("pkg.mod.A"));
    }

    #[test]
    fn test_diagram_options_split() {
        let options = DiagramOptions::default()
            .with_limit_fqn("pkg.sub::x")
            .with_docs(true)
            .with_max_depth(5);
        let extractor = options.extractor_config("pkg");
        assert_eq!(extractor.domain, "pkg");
        assert_eq!(extractor.limit_fqn, "pkg.sub");
        assert_eq!(extractor.max_depth, 5);

        let space = options.space_config("pkg");
        assert_eq!(space.name, "pkg");
        assert!(space.include_docs);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = ExtractorConfig::new("pkg").with_extern(true);
        let json = serde_json::to_string(&config).unwrap();
        let back: ExtractorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
