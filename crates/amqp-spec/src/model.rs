//! Protocol specification model.
//!
//! The model is built once by the [`loader`](crate::loader) and then only read.
//! All lists keep spec-declared order; generators rely on that order for wire
//! compatibility, not just readability.

use crate::error::{SpecError, SpecResult};
use crate::primitive::Primitive;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// A complete protocol specification.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolSpec {
    /// Protocol name (e.g., "AMQP").
    pub name: String,

    /// Major protocol version.
    pub major: u8,

    /// Minor protocol version.
    pub minor: u8,

    /// Protocol revision.
    pub revision: u8,

    /// Default IANA port.
    pub port: u16,

    /// Constants in declaration order.
    pub constants: Vec<Constant>,

    /// Domain aliases in declaration order.
    pub domains: Vec<Domain>,

    /// Classes in declaration order.
    pub classes: Vec<ClassDef>,
}

/// A named integer constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub name: String,
    pub value: i64,
    /// Originating group tag, e.g. "soft-error".
    pub class: Option<String>,
}

/// A named alias for a primitive or another domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub name: String,
    pub target: String,
}

/// A protocol class: a group of methods sharing a class id.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    pub name: String,

    /// Protocol-assigned id, unique within the spec.
    pub id: u16,

    /// Methods in declaration order.
    pub methods: Vec<MethodDef>,

    /// Content-header property fields in declaration order.
    pub fields: Vec<FieldDef>,

    /// Whether the class declares content-header properties.
    pub has_content_properties: bool,
}

/// A protocol method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDef {
    pub name: String,

    /// Protocol-assigned id, unique within the owning class.
    pub id: u16,

    /// Arguments in declaration order.
    pub arguments: Vec<ArgumentDef>,

    /// Whether a content header and body follow this method.
    pub has_content: bool,

    /// Whether the peer answers with a reply method.
    pub synchronous: bool,
}

/// A method argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDef {
    pub name: String,
    pub domain: String,
    pub default_value: Option<DefaultValue>,
}

/// A content-header property field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: String,
    pub domain: String,
}

/// A literal default as it appears in the spec.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Integer(i64),
    Bool(bool),
    Text(String),
    Table(BTreeMap<String, serde_json::Value>),
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Integer(value) => write!(f, "{value}"),
            DefaultValue::Bool(value) => write!(f, "{value}"),
            DefaultValue::Text(value) => write!(f, "{value:?}"),
            DefaultValue::Table(entries) => {
                let json = serde_json::Value::Object(entries.clone().into_iter().collect());
                write!(f, "{json}")
            }
        }
    }
}

impl ProtocolSpec {
    /// Find a domain alias by name.
    pub fn domain(&self, name: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.name == name)
    }

    /// Resolve a domain name to its primitive wire type.
    ///
    /// Aliases are followed transitively. A primitive name that is not
    /// re-aliased resolves to itself.
    pub fn resolve_domain(&self, name: &str) -> SpecResult<Primitive> {
        let mut current = name;
        let mut seen = HashSet::new();

        loop {
            match self.domain(current) {
                Some(domain) if domain.target != current => {
                    if !seen.insert(current) {
                        return Err(SpecError::CyclicDomain {
                            domain: name.to_string(),
                        });
                    }
                    current = &domain.target;
                }
                _ => {
                    return Primitive::from_name(current).ok_or_else(|| SpecError::UnknownDomain {
                        domain: current.to_string(),
                    });
                }
            }
        }
    }

    /// Find a class by protocol id.
    pub fn class(&self, id: u16) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.id == id)
    }

    /// Find a class by spec name.
    pub fn class_by_name(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Find a method by (class id, method id).
    pub fn method(&self, class_id: u16, method_id: u16) -> Option<(&ClassDef, &MethodDef)> {
        let class = self.class(class_id)?;
        class.method(method_id).map(|m| (class, m))
    }

    /// Every method in the spec, classes then methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = (&ClassDef, &MethodDef)> {
        self.classes
            .iter()
            .flat_map(|c| c.methods.iter().map(move |m| (c, m)))
    }

    /// Total number of methods across all classes.
    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.methods.len()).sum()
    }

    /// Check the structural invariants generators depend on.
    ///
    /// Every argument and field domain must resolve, class ids must be
    /// unique, and method ids must be unique within their class.
    pub fn validate(&self) -> SpecResult<()> {
        let mut class_ids = HashSet::new();

        for class in &self.classes {
            if class.name.is_empty() {
                return Err(SpecError::invalid(format!(
                    "class {} has an empty name",
                    class.id
                )));
            }
            if !class_ids.insert(class.id) {
                return Err(SpecError::DuplicateClassId { id: class.id });
            }

            let mut method_ids = HashSet::new();
            for method in &class.methods {
                if method.name.is_empty() {
                    return Err(SpecError::invalid(format!(
                        "method {} of class '{}' has an empty name",
                        method.id, class.name
                    )));
                }
                if !method_ids.insert(method.id) {
                    return Err(SpecError::DuplicateMethodId {
                        class: class.name.clone(),
                        id: method.id,
                    });
                }
                for argument in &method.arguments {
                    self.resolve_domain(&argument.domain)?;
                }
            }

            for field in &class.fields {
                self.resolve_domain(&field.domain)?;
            }
        }

        Ok(())
    }
}

impl ClassDef {
    /// Find a method of this class by protocol id.
    pub fn method(&self, id: u16) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.id == id)
    }

    /// Find a method of this class by spec name.
    pub fn method_by_name(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.name == name)
    }
}
