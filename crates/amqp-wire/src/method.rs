//! Spec-driven method and properties values.

use amqp_spec::{ClassDef, MethodDef, Primitive, ProtocolSpec};

use crate::argument::{MethodArgumentReader, MethodArgumentWriter};
use crate::error::{WireError, WireResult};
use crate::property::{ContentHeaderPropertyReader, ContentHeaderPropertyWriter};
use crate::value::Value;
use crate::NO_METHOD_ID;

/// A decoded or to-be-encoded method: ids plus one value per argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub class_id: u16,
    pub method_id: u16,
    /// Argument values in declaration order.
    pub arguments: Vec<Value>,
}

impl Method {
    pub fn new(class_id: u16, method_id: u16, arguments: Vec<Value>) -> Self {
        Self {
            class_id,
            method_id,
            arguments,
        }
    }

    /// Build a method with every argument at its builder default.
    ///
    /// Arguments without a declared default start at the primitive's zero.
    pub fn with_defaults(spec: &ProtocolSpec, class_id: u16, method_id: u16) -> WireResult<Self> {
        let (_, def) = lookup(spec, class_id, method_id)?;

        let arguments = def
            .arguments
            .iter()
            .map(|a| {
                let primitive = spec.resolve_domain(&a.domain)?;
                match &a.default_value {
                    Some(default) => Value::from_default(&a.name, primitive, default),
                    None => Ok(Value::zero(primitive)),
                }
            })
            .collect::<WireResult<Vec<_>>>()?;

        Ok(Self::new(class_id, method_id, arguments))
    }

    /// Replace one argument by its spec name, checking its type.
    pub fn set(&mut self, spec: &ProtocolSpec, name: &str, value: Value) -> WireResult<()> {
        let (class, def) = lookup(spec, self.class_id, self.method_id)?;
        let index = def
            .arguments
            .iter()
            .position(|a| a.name == name)
            .ok_or_else(|| {
                WireError::Spec(amqp_spec::SpecError::invalid(format!(
                    "method '{}' has no argument '{}'",
                    def.name, name
                )))
            })?;

        let expected = spec.resolve_domain(&def.arguments[index].domain)?;
        check_type(name, expected, &value)?;

        let found = self.arguments.len();
        let slot = self
            .arguments
            .get_mut(index)
            .ok_or_else(|| WireError::ArityMismatch {
                target: format!("{}.{}", class.name, def.name),
                expected: def.arguments.len(),
                found,
            })?;
        *slot = value;
        Ok(())
    }

    /// Look up one argument by its spec name.
    pub fn argument(&self, spec: &ProtocolSpec, name: &str) -> Option<&Value> {
        let (_, def) = spec.method(self.class_id, self.method_id)?;
        let index = def.arguments.iter().position(|a| a.name == name)?;
        self.arguments.get(index)
    }

    /// `class.method` as written in the spec, e.g. `basic.publish`.
    pub fn protocol_method_name(&self, spec: &ProtocolSpec) -> Option<String> {
        spec.method(self.class_id, self.method_id)
            .map(|(class, method)| format!("{}.{}", class.name, method.name))
    }

    /// Whether a content header and body follow this method.
    pub fn has_content(&self, spec: &ProtocolSpec) -> bool {
        spec.method(self.class_id, self.method_id)
            .is_some_and(|(_, m)| m.has_content)
    }

    /// Encode the arguments, checking arity and every value's type.
    pub fn write_arguments_to(&self, spec: &ProtocolSpec, writer: &mut MethodArgumentWriter) -> WireResult<()> {
        let (class, def) = lookup(spec, self.class_id, self.method_id)?;

        if self.arguments.len() != def.arguments.len() {
            return Err(WireError::ArityMismatch {
                target: format!("{}.{}", class.name, def.name),
                expected: def.arguments.len(),
                found: self.arguments.len(),
            });
        }

        for (arg, value) in def.arguments.iter().zip(&self.arguments) {
            check_type(&arg.name, spec.resolve_domain(&arg.domain)?, value)?;
            writer.write_value(value)?;
        }
        Ok(())
    }

    /// Decode the arguments of a known method.
    pub fn read_arguments_from(
        spec: &ProtocolSpec,
        class_id: u16,
        method_id: u16,
        reader: &mut MethodArgumentReader<'_>,
    ) -> WireResult<Self> {
        let (_, def) = lookup(spec, class_id, method_id)?;

        let arguments = def
            .arguments
            .iter()
            .map(|a| reader.read_value(spec.resolve_domain(&a.domain)?))
            .collect::<WireResult<Vec<_>>>()?;

        Ok(Self::new(class_id, method_id, arguments))
    }
}

/// Content-header properties: one optional value per declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct Properties {
    pub class_id: u16,
    /// Field values in declaration order; `None` is absent.
    pub values: Vec<Option<Value>>,
}

impl Properties {
    /// Empty properties for a class declaring header fields.
    pub fn new(spec: &ProtocolSpec, class_id: u16) -> WireResult<Self> {
        let class = properties_class(spec, class_id)?;
        Ok(Self {
            class_id,
            values: vec![None; class.fields.len()],
        })
    }

    /// Set or clear one field by its spec name, checking its type.
    pub fn set(&mut self, spec: &ProtocolSpec, name: &str, value: Option<Value>) -> WireResult<()> {
        let class = properties_class(spec, self.class_id)?;
        let index = class
            .fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| {
                WireError::Spec(amqp_spec::SpecError::invalid(format!(
                    "class '{}' has no property '{}'",
                    class.name, name
                )))
            })?;

        if let Some(value) = &value {
            check_type(name, spec.resolve_domain(&class.fields[index].domain)?, value)?;
        }
        let found = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or_else(|| WireError::ArityMismatch {
                target: format!("{} properties", class.name),
                expected: class.fields.len(),
                found,
            })?;
        *slot = value;
        Ok(())
    }

    /// Look up one field by its spec name.
    pub fn get(&self, spec: &ProtocolSpec, name: &str) -> Option<&Value> {
        let class = spec.class(self.class_id)?;
        let index = class.fields.iter().position(|f| f.name == name)?;
        self.values.get(index)?.as_ref()
    }

    /// Encode the presence block, then the present values.
    pub fn write_properties_to(
        &self,
        spec: &ProtocolSpec,
        writer: &mut ContentHeaderPropertyWriter,
    ) -> WireResult<()> {
        let class = properties_class(spec, self.class_id)?;

        if self.values.len() != class.fields.len() {
            return Err(WireError::ArityMismatch {
                target: format!("{} properties", class.name),
                expected: class.fields.len(),
                found: self.values.len(),
            });
        }

        for value in &self.values {
            writer.write_presence(value.is_some());
        }
        writer.finish_presence();

        for (field, value) in class.fields.iter().zip(&self.values) {
            if let Some(value) = value {
                check_type(&field.name, spec.resolve_domain(&field.domain)?, value)?;
                writer.write_value(value)?;
            }
        }
        Ok(())
    }

    /// Decode the presence block, then the present values.
    pub fn read_properties_from(
        spec: &ProtocolSpec,
        class_id: u16,
        reader: &mut ContentHeaderPropertyReader<'_>,
    ) -> WireResult<Self> {
        let class = properties_class(spec, class_id)?;

        let presence = class
            .fields
            .iter()
            .map(|_| reader.read_presence())
            .collect::<WireResult<Vec<_>>>()?;
        reader.finish_presence()?;

        let values = class
            .fields
            .iter()
            .zip(presence)
            .map(|(field, present)| {
                if present {
                    reader.read_value(spec.resolve_domain(&field.domain)?).map(Some)
                } else {
                    Ok(None)
                }
            })
            .collect::<WireResult<Vec<_>>>()?;

        Ok(Self { class_id, values })
    }
}

fn lookup(spec: &ProtocolSpec, class_id: u16, method_id: u16) -> WireResult<(&ClassDef, &MethodDef)> {
    spec.method(class_id, method_id)
        .ok_or(WireError::UnknownClassOrMethodId {
            class_id,
            method_id: i32::from(method_id),
        })
}

/// A class that can carry content headers: it declares at least one field.
pub(crate) fn properties_class(spec: &ProtocolSpec, class_id: u16) -> WireResult<&ClassDef> {
    spec.class(class_id)
        .filter(|c| c.has_content_properties && !c.fields.is_empty())
        .ok_or(WireError::UnknownClassOrMethodId {
            class_id,
            method_id: NO_METHOD_ID,
        })
}

fn check_type(member: &str, expected: Primitive, value: &Value) -> WireResult<()> {
    if value.primitive() == expected {
        Ok(())
    } else {
        Err(WireError::type_mismatch(member, expected, value.primitive().name()))
    }
}

#[cfg(test)]
#[path = "method/method_tests.rs"]
mod method_tests;
