//! Java type mappings for AMQP primitives.
//!
//! Every primitive has two Java forms: the unboxed form used for method
//! arguments, and a boxed form used for content-header properties, where
//! `null` must mean "unset" independently of `false` or `0`.
//!
//! | Primitive | Field (argument) | Property | Reader/writer suffix |
//! |-----------|------------------|----------|----------------------|
//! | `octet` | `int` | `Integer` | `Octet` |
//! | `shortstr` | `String` | `String` | `Shortstr` |
//! | `longstr` | `LongString` | `LongString` | `Longstr` |
//! | `short` | `int` | `Integer` | `Short` |
//! | `long` | `int` | `Integer` | `Long` |
//! | `longlong` | `long` | `Long` | `Longlong` |
//! | `bit` | `boolean` | `Boolean` | `Bit` |
//! | `table` | `Map<String,Object>` | `Map<String,Object>` | `Table` |
//! | `timestamp` | `Date` | `Date` | `Timestamp` |

use crate::error::CodegenResult;
use crate::naming::{java_class_name, java_field_name, java_getter_name};
use amqp_spec::{Primitive, ProtocolSpec};

/// Java type name for field tables.
pub const MAP_TYPE: &str = "Map<String,Object>";

/// Represents a Java type with both primitive and boxed forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JavaType {
    /// The primitive type name (e.g., "int") or reference type name.
    pub primitive: &'static str,
    /// The boxed/nullable type name (e.g., "Integer").
    pub boxed: &'static str,
    /// Whether this type is a Java primitive.
    pub is_primitive: bool,
}

impl JavaType {
    const fn reference(name: &'static str) -> Self {
        Self {
            primitive: name,
            boxed: name,
            is_primitive: false,
        }
    }

    const fn primitive(primitive: &'static str, boxed: &'static str) -> Self {
        Self {
            primitive,
            boxed,
            is_primitive: true,
        }
    }

    /// Get the Java type string, boxed when the value may be absent.
    pub fn java_type(&self, optional: bool) -> &'static str {
        if optional && self.is_primitive {
            self.boxed
        } else {
            self.primitive
        }
    }
}

/// Map a primitive to its Java type.
pub fn map_primitive(primitive: Primitive) -> JavaType {
    match primitive {
        Primitive::Octet | Primitive::Short | Primitive::Long => {
            JavaType::primitive("int", "Integer")
        }
        Primitive::Longlong => JavaType::primitive("long", "Long"),
        Primitive::Bit => JavaType::primitive("boolean", "Boolean"),
        Primitive::Shortstr => JavaType::reference("String"),
        Primitive::Longstr => JavaType::reference("LongString"),
        Primitive::Table => JavaType::reference(MAP_TYPE),
        Primitive::Timestamp => JavaType::reference("Date"),
    }
}

/// Java type of a method argument slot.
pub fn java_field_type(primitive: Primitive) -> &'static str {
    map_primitive(primitive).java_type(false)
}

/// Java type of a content-header property slot.
pub fn java_property_type(primitive: Primitive) -> &'static str {
    map_primitive(primitive).java_type(true)
}

/// Whether the full-argument constructor rejects `null` for this primitive.
///
/// Applies to the whole text and timestamp families regardless of how the
/// protocol uses the particular argument. Tables are exempt: their builder
/// default is `null` and the writer encodes `null` as an empty table.
pub fn requires_null_check(primitive: Primitive) -> bool {
    match primitive {
        Primitive::Shortstr | Primitive::Longstr | Primitive::Timestamp => true,
        Primitive::Octet
        | Primitive::Short
        | Primitive::Long
        | Primitive::Longlong
        | Primitive::Bit
        | Primitive::Table => false,
    }
}

/// Suffix of the typed reader/writer calls, e.g. `Shortstr` in `readShortstr()`.
pub fn wire_accessor_suffix(primitive: Primitive) -> String {
    java_class_name(primitive.name())
}

/// An argument or property resolved against the spec, with its Java names.
#[derive(Debug, Clone, PartialEq)]
pub struct JavaMember<'a> {
    /// Name as written in the spec, used in debug strings.
    pub spec_name: &'a str,
    pub primitive: Primitive,
    /// Storage and builder-setter name.
    pub field_name: String,
    /// Accessor name declared on the public contract.
    pub getter_name: String,
}

impl<'a> JavaMember<'a> {
    /// Resolve a spec member's domain and derive its Java names.
    pub fn resolve(spec: &ProtocolSpec, name: &'a str, domain: &str) -> CodegenResult<Self> {
        Ok(Self {
            spec_name: name,
            primitive: spec.resolve_domain(domain)?,
            field_name: java_field_name(name),
            getter_name: java_getter_name(name),
        })
    }

    pub fn field_type(&self) -> &'static str {
        java_field_type(self.primitive)
    }

    pub fn property_type(&self) -> &'static str {
        java_property_type(self.primitive)
    }

    pub fn wire_suffix(&self) -> String {
        wire_accessor_suffix(self.primitive)
    }
}
