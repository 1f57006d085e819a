//! amqp-wire - Reference codec for AMQP method and content-header frames
//!
//! This crate encodes and decodes frame payloads directly from a
//! [`ProtocolSpec`](amqp_spec::ProtocolSpec), following the same wire rules
//! the generated Java bindings implement:
//! - [`MethodArgumentWriter`] / [`MethodArgumentReader`] for method arguments,
//!   with consecutive bits packed into octets
//! - [`ContentHeaderPropertyWriter`] / [`ContentHeaderPropertyReader`] for
//!   the presence-flag block of content headers
//! - [`Method`], [`Properties`] and [`ContentHeader`] as spec-driven values
//! - [`Codec`] for decode-by-id of whole payloads
//! - [`WireError`] for error handling

mod argument;
mod codec;
mod encoding;
mod error;
mod method;
mod property;
mod value;

pub use argument::{MethodArgumentReader, MethodArgumentWriter};
pub use codec::{Codec, ContentHeader};
pub use error::{WireError, WireResult};
pub use method::{Method, Properties};
pub use property::{ContentHeaderPropertyReader, ContentHeaderPropertyWriter};
pub use value::{FieldTable, FieldValue, Value};

/// Method id reported when a content header names an unknown class.
pub const NO_METHOD_ID: i32 = -1;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Codec, ContentHeader, FieldTable, FieldValue, Method, Properties, Value, WireError,
        WireResult,
    };
}
