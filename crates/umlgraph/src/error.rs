//! Error types for umlgraph operations.
//!
//! Most problems met during extraction degrade into stub entities and a log
//! line. Only the conditions below abort an operation.

use std::path::PathBuf;
use thiserror::Error;
use umlgraph_introspect::{IntrospectError, RawHandle};

/// Result type alias for umlgraph operations.
pub type Result<T> = std::result::Result<T, UmlError>;

/// Error type for extraction, registration and export.
#[derive(Error, Debug)]
pub enum UmlError {
    /// The introspection backend failed outside of a degradable context
    #[error("Introspection error: {0}")]
    Introspection(#[from] IntrospectError),

    /// A root construct could not be inspected at all
    #[error("Cannot resolve {raw}: {message}")]
    Unresolvable {
        /// Handle of the construct
        raw: RawHandle,
        /// What the backend reported
        message: String,
    },

    /// A construct of a kind that cannot start a diagram
    #[error("Unsupported construct {raw}: expected {expected}, got {actual}")]
    UnsupportedConstruct {
        /// Handle of the construct
        raw: RawHandle,
        /// Kind the operation needs
        expected: String,
        /// Kind the backend reported
        actual: String,
    },

    /// Two different raw constructs claim the same fqn
    #[error("Registry conflict on '{fqn}': claimed by {existing}, rejected {incoming}")]
    RegistryConflict {
        /// Contested fully-qualified name
        fqn: String,
        /// Handle that registered the fqn first
        existing: RawHandle,
        /// Handle that was rejected
        incoming: RawHandle,
    },

    /// Configuration values that contradict each other
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },

    /// Refused to overwrite an existing diagram file
    #[error("Output file already exists: {path}")]
    OutputExists {
        /// Path of the existing file
        path: PathBuf,
    },

    /// File I/O failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl UmlError {
    /// Create a configuration error from a message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
