//! Error types for wire encoding and decoding

use amqp_spec::{Primitive, SpecError};
use thiserror::Error;

/// Result type alias for wire operations
pub type WireResult<T> = Result<T, WireError>;

/// Error type for wire operations
#[derive(Error, Debug)]
pub enum WireError {
    /// A frame names a class or method the spec does not declare.
    ///
    /// Content headers report method id `-1`.
    #[error("unknown class or method id: class {class_id}, method {method_id}")]
    UnknownClassOrMethodId { class_id: u16, method_id: i32 },

    /// A value does not match the resolved type of its argument or field
    #[error("type mismatch for '{member}': expected {expected}, found {found}")]
    TypeMismatch {
        member: String,
        expected: Primitive,
        found: String,
    },

    /// Wrong number of values for a method or properties class
    #[error("{target} takes {expected} values, found {found}")]
    ArityMismatch {
        target: String,
        expected: usize,
        found: usize,
    },

    /// Short strings carry a one-octet length
    #[error("short string of {len} bytes exceeds 255")]
    ShortstrTooLong { len: usize },

    #[error("unknown field table tag {tag:#04x}")]
    InvalidFieldTag { tag: u8 },

    #[error("short string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl WireError {
    pub(crate) fn type_mismatch(
        member: impl Into<String>,
        expected: Primitive,
        found: impl Into<String>,
    ) -> Self {
        WireError::TypeMismatch {
            member: member.into(),
            expected,
            found: found.into(),
        }
    }
}
