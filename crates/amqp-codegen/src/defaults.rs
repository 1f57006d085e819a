//! Rendering spec defaults as Java literals.

use crate::error::{CodegenError, CodegenResult};
use crate::java_types::java_field_type;
use amqp_spec::{DefaultValue, Primitive};

/// Render a spec default as a literal for the argument's Java field type.
///
/// Tables have no literal form; their slot starts as `null` whatever the spec
/// declares. Any other mismatch between the literal and the resolved type is
/// a [`CodegenError::BogusDefaultValue`].
pub fn render_default(primitive: Primitive, value: &DefaultValue) -> CodegenResult<String> {
    match (primitive, value) {
        (Primitive::Octet | Primitive::Short | Primitive::Long, DefaultValue::Integer(n)) => {
            Ok(n.to_string())
        }
        (Primitive::Longlong, DefaultValue::Integer(n)) => Ok(format!("{n}L")),
        (Primitive::Bit, DefaultValue::Bool(b)) => Ok(b.to_string()),
        (Primitive::Shortstr, DefaultValue::Text(s)) => Ok(java_string_literal(s)),
        (Primitive::Longstr, DefaultValue::Text(s)) => Ok(long_string_literal(s)),
        (Primitive::Table, _) => Ok("null".to_string()),
        (primitive, value) => Err(CodegenError::BogusDefaultValue {
            value: value.to_string(),
            java_type: java_field_type(primitive).to_string(),
        }),
    }
}

/// Wrap a plain text expression in the fixed-text-buffer construction.
pub fn long_string_expression(expr: &str) -> String {
    format!("LongStringHelper.asLongString({expr})")
}

fn long_string_literal(s: &str) -> String {
    long_string_expression(&java_string_literal(s))
}

/// Quote and escape text as a Java string literal.
pub fn java_string_literal(s: &str) -> String {
    let mut literal = String::with_capacity(s.len() + 2);
    literal.push('"');
    for c in s.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\u{:04x}", c as u32)),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
