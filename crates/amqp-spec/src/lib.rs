//! amqp-spec - Protocol model for AMQP code generation
//!
//! This crate provides the immutable protocol model consumed by the generators:
//! - [`ProtocolSpec`] with its [`Constant`]s, [`Domain`]s and [`ClassDef`]s
//! - [`Primitive`], the closed set of wire types every domain resolves to
//! - [`loader`] for reading the AMQP JSON specification format
//! - [`SpecError`] for error handling

pub mod loader;
mod error;
mod model;
mod primitive;

pub use error::{SpecError, SpecResult};
pub use model::{
    ArgumentDef, ClassDef, Constant, DefaultValue, Domain, FieldDef, MethodDef, ProtocolSpec,
};
pub use primitive::Primitive;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ArgumentDef, ClassDef, Constant, DefaultValue, Domain, FieldDef, MethodDef, Primitive,
        ProtocolSpec, SpecError, SpecResult,
    };
}
