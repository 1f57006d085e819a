//! The closed set of AMQP wire types.
//!
//! Every domain in a protocol spec resolves, possibly through several aliases,
//! to exactly one of these. Generators match on [`Primitive`] exhaustively so a
//! new wire type cannot be added without every mapping being updated.

use std::fmt;

/// A primitive AMQP wire type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Primitive {
    /// Unsigned 8-bit integer.
    Octet,
    /// Text up to 255 bytes with an 8-bit length prefix.
    Shortstr,
    /// Byte string with a 32-bit length prefix.
    Longstr,
    /// Unsigned 16-bit integer.
    Short,
    /// Unsigned 32-bit integer.
    Long,
    /// Unsigned 64-bit integer.
    Longlong,
    /// Single flag, packed with adjacent bits on the wire.
    Bit,
    /// Field table (string-keyed map of tagged values).
    Table,
    /// 64-bit POSIX timestamp in seconds.
    Timestamp,
}

impl Primitive {
    /// All primitives in declaration order.
    pub const ALL: [Primitive; 9] = [
        Primitive::Octet,
        Primitive::Shortstr,
        Primitive::Longstr,
        Primitive::Short,
        Primitive::Long,
        Primitive::Longlong,
        Primitive::Bit,
        Primitive::Table,
        Primitive::Timestamp,
    ];

    /// Look up a primitive by its spec name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "octet" => Some(Primitive::Octet),
            "shortstr" => Some(Primitive::Shortstr),
            "longstr" => Some(Primitive::Longstr),
            "short" => Some(Primitive::Short),
            "long" => Some(Primitive::Long),
            "longlong" => Some(Primitive::Longlong),
            "bit" => Some(Primitive::Bit),
            "table" => Some(Primitive::Table),
            "timestamp" => Some(Primitive::Timestamp),
            _ => None,
        }
    }

    /// The spec name of this primitive.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Octet => "octet",
            Primitive::Shortstr => "shortstr",
            Primitive::Longstr => "longstr",
            Primitive::Short => "short",
            Primitive::Long => "long",
            Primitive::Longlong => "longlong",
            Primitive::Bit => "bit",
            Primitive::Table => "table",
            Primitive::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "primitive/primitive_tests.rs"]
mod primitive_tests;
