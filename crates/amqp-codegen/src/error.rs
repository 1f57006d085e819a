//! Error types for code generation

use amqp_spec::SpecError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for generator operations
///
/// Every variant aborts the run. No partial artifact is produced.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The protocol model is invalid or a domain does not resolve
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// A spec default has no literal form for its resolved Java type
    #[error("JSON provided default value {value} for suspicious type {java_type}")]
    BogusDefaultValue { value: String, java_type: String },

    /// Generator configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Generator configuration file could not be read
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for CodegenError {
    fn from(err: toml::de::Error) -> Self {
        CodegenError::Config(err.to_string())
    }
}
