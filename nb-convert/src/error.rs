//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while producing notebook output.
///
/// Tree traversal itself is total: unsupported constructs degrade to empty
/// results plus a diagnostic. Errors only arise at the edges, when looking up
/// a backend by name or serializing the finished notebook.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Backend not found in registry
    BackendNotFound(String),
    /// Error during notebook serialization
    SerializationError(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::BackendNotFound(name) => write!(f, "Backend '{name}' not found"),
            ConvertError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
