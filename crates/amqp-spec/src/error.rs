//! Error types for protocol model loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for spec operations
pub type SpecResult<T> = Result<T, SpecError>;

/// Error type for spec operations
#[derive(Error, Debug)]
pub enum SpecError {
    /// Spec file could not be read
    #[error("failed to read spec {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spec source is not valid JSON or does not match the spec layout
    #[error("invalid spec JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Domain name with no resolution to a primitive
    #[error("no primitive type for domain '{domain}'")]
    UnknownDomain { domain: String },

    /// Domain aliases loop back on themselves
    #[error("domain '{domain}' resolves cyclically")]
    CyclicDomain { domain: String },

    /// Two classes share a protocol id
    #[error("duplicate class id {id}")]
    DuplicateClassId { id: u16 },

    /// Two methods of one class share a protocol id
    #[error("duplicate method id {id} in class '{class}'")]
    DuplicateMethodId { class: String, id: u16 },

    /// Structurally invalid spec
    #[error("invalid spec: {0}")]
    Invalid(String),
}

impl SpecError {
    /// Create an invalid-spec error from a message
    pub fn invalid(message: impl Into<String>) -> Self {
        SpecError::Invalid(message.into())
    }
}
