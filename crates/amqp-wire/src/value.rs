//! Runtime values for method arguments, header properties and field tables.

use amqp_spec::{DefaultValue, Primitive};
use std::collections::BTreeMap;

use crate::error::{WireError, WireResult};

/// A field table: shortstr keys to tagged values, encoded in key order.
pub type FieldTable = BTreeMap<String, FieldValue>;

/// A tagged value stored in a field table or field array.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// `S`: 32-bit length-prefixed bytes.
    LongString(Vec<u8>),
    /// `I`: signed 32-bit integer.
    Int(i32),
    /// `l`: signed 64-bit integer.
    LongLong(i64),
    /// `b`: signed 8-bit integer.
    Byte(i8),
    /// `s`: signed 16-bit integer.
    Short(i16),
    /// `t`: one octet, non-zero is true.
    Bool(bool),
    /// `d`: IEEE 754 double.
    Double(f64),
    /// `T`: 64-bit POSIX timestamp.
    Timestamp(u64),
    /// `F`: nested table.
    Table(FieldTable),
    /// `A`: 32-bit length-prefixed sequence of tagged values.
    Array(Vec<FieldValue>),
    /// `V`: no value.
    Void,
}

impl FieldValue {
    /// The one-octet type tag written before the value.
    pub fn tag(&self) -> u8 {
        match self {
            FieldValue::LongString(_) => b'S',
            FieldValue::Int(_) => b'I',
            FieldValue::LongLong(_) => b'l',
            FieldValue::Byte(_) => b'b',
            FieldValue::Short(_) => b's',
            FieldValue::Bool(_) => b't',
            FieldValue::Double(_) => b'd',
            FieldValue::Timestamp(_) => b'T',
            FieldValue::Table(_) => b'F',
            FieldValue::Array(_) => b'A',
            FieldValue::Void => b'V',
        }
    }

    /// Convert a JSON literal from a table default.
    ///
    /// Strings become long strings, integers become `l`, and JSON `null`
    /// becomes [`FieldValue::Void`].
    pub fn from_json(value: &serde_json::Value) -> FieldValue {
        match value {
            serde_json::Value::Null => FieldValue::Void,
            serde_json::Value::Bool(b) => FieldValue::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::LongLong(i),
                None => FieldValue::Double(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => FieldValue::LongString(s.clone().into_bytes()),
            serde_json::Value::Array(items) => {
                FieldValue::Array(items.iter().map(FieldValue::from_json).collect())
            }
            serde_json::Value::Object(entries) => FieldValue::Table(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), FieldValue::from_json(v)))
                    .collect(),
            ),
        }
    }
}

/// A method argument or header property value, one variant per primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Octet(u8),
    Short(u16),
    Long(u32),
    Longlong(u64),
    Bit(bool),
    Shortstr(String),
    Longstr(Vec<u8>),
    Table(FieldTable),
    Timestamp(u64),
}

impl Value {
    /// The primitive this value encodes as.
    pub fn primitive(&self) -> Primitive {
        match self {
            Value::Octet(_) => Primitive::Octet,
            Value::Short(_) => Primitive::Short,
            Value::Long(_) => Primitive::Long,
            Value::Longlong(_) => Primitive::Longlong,
            Value::Bit(_) => Primitive::Bit,
            Value::Shortstr(_) => Primitive::Shortstr,
            Value::Longstr(_) => Primitive::Longstr,
            Value::Table(_) => Primitive::Table,
            Value::Timestamp(_) => Primitive::Timestamp,
        }
    }

    /// The value an unset builder slot holds for this primitive.
    ///
    /// Tables are empty, matching how `null` tables are written.
    pub fn zero(primitive: Primitive) -> Value {
        match primitive {
            Primitive::Octet => Value::Octet(0),
            Primitive::Short => Value::Short(0),
            Primitive::Long => Value::Long(0),
            Primitive::Longlong => Value::Longlong(0),
            Primitive::Bit => Value::Bit(false),
            Primitive::Shortstr => Value::Shortstr(String::new()),
            Primitive::Longstr => Value::Longstr(Vec::new()),
            Primitive::Table => Value::Table(FieldTable::new()),
            Primitive::Timestamp => Value::Timestamp(0),
        }
    }

    /// Convert a spec default to a value of the member's resolved type.
    pub fn from_default(member: &str, primitive: Primitive, default: &DefaultValue) -> WireResult<Value> {
        let mismatch = || WireError::type_mismatch(member, primitive, default.to_string());

        match (primitive, default) {
            (Primitive::Octet, DefaultValue::Integer(n)) => {
                u8::try_from(*n).map(Value::Octet).map_err(|_| mismatch())
            }
            (Primitive::Short, DefaultValue::Integer(n)) => {
                u16::try_from(*n).map(Value::Short).map_err(|_| mismatch())
            }
            (Primitive::Long, DefaultValue::Integer(n)) => {
                u32::try_from(*n).map(Value::Long).map_err(|_| mismatch())
            }
            (Primitive::Longlong, DefaultValue::Integer(n)) => {
                u64::try_from(*n).map(Value::Longlong).map_err(|_| mismatch())
            }
            (Primitive::Bit, DefaultValue::Bool(b)) => Ok(Value::Bit(*b)),
            (Primitive::Shortstr, DefaultValue::Text(s)) => Ok(Value::Shortstr(s.clone())),
            (Primitive::Longstr, DefaultValue::Text(s)) => Ok(Value::Longstr(s.clone().into_bytes())),
            (Primitive::Table, DefaultValue::Table(entries)) => Ok(Value::Table(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), FieldValue::from_json(v)))
                    .collect(),
            )),
            _ => Err(mismatch()),
        }
    }
}
