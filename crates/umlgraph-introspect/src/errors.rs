use std::path::PathBuf;
use thiserror::Error;

/// Errors a backend reports when it cannot answer a question about a handle
#[derive(Error, Debug)]
pub enum IntrospectError {
    /// The handle does not name anything the backend knows
    #[error("Unknown handle: {0}")]
    UnknownHandle(String),

    /// The handle names a construct of another kind than the one asked about
    #[error("Handle {handle} is a {actual}, expected {expected}")]
    WrongKind {
        handle: String,
        expected: String,
        actual: String,
    },

    /// The backend record exists but cannot be interpreted
    #[error("Malformed record for {0}: {1}")]
    Malformed(String, String),

    /// Failed to read a catalog file
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// Catalog (de)serialization failed
    #[error("Catalog error: {message}")]
    Catalog {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl IntrospectError {
    /// Build a `WrongKind` error from displayable kinds
    pub fn wrong_kind(
        handle: impl Into<String>,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        IntrospectError::WrongKind {
            handle: handle.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Result type for backend operations
pub type IntrospectResult<T> = Result<T, IntrospectError>;
