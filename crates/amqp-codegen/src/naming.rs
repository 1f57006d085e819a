//! Naming convention utilities for Java code generation.
//!
//! Spec identifiers are kebab-case (`routing-key`, `get-ok`). Every
//! non-alphanumeric character is dropped and capitalizes the character that
//! follows it.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `get-ok` | [`java_class_name`] | `GetOk` |
//! | `routing-key` | [`java_field_name`] | `routingKey` |
//! | `routing-key` | [`java_getter_name`] | `getRoutingKey` |
//! | `frame-min-size` | [`java_constant_name`] | `FRAME_MIN_SIZE` |

/// Normalize a spec identifier, capitalizing after each separator.
///
/// `upper` controls whether the first character is capitalized. Characters
/// that are not preceded by a separator keep their case.
///
/// # Examples
///
/// ```
/// use amqp_codegen::naming::java_name;
///
/// assert_eq!(java_name(true, "recover-async"), "RecoverAsync");
/// assert_eq!(java_name(false, "no-local"), "noLocal");
/// ```
pub fn java_name(upper: bool, name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = upper;

    for c in name.chars() {
        if !c.is_alphanumeric() {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Java type name for a spec class or method.
pub fn java_class_name(name: &str) -> String {
    java_name(true, name)
}

/// Java field (and builder setter) name for an argument or property.
pub fn java_field_name(name: &str) -> String {
    java_name(false, name)
}

/// Java accessor name for an argument: `get` prefix, then normalized.
pub fn java_getter_name(name: &str) -> String {
    java_name(false, &format!("get-{name}"))
}

/// Java constant name: upper-cased, with dashes and spaces as underscores.
pub fn java_constant_name(name: &str) -> String {
    name.to_uppercase().replace(['-', ' '], "_")
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
