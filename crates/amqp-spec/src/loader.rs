//! Loading protocol specs from the AMQP JSON format.
//!
//! The JSON layout is the one published alongside AMQP 0-8 / 0-9-1:
//!
//! ```json
//! {
//!     "name": "AMQP", "major-version": 0, "minor-version": 9, "revision": 1, "port": 5672,
//!     "domains": [["queue-name", "shortstr"]],
//!     "constants": [{"name": "NOT-FOUND", "value": 404, "class": "soft-error"}],
//!     "classes": [{
//!         "id": 60, "name": "basic",
//!         "methods": [{"id": 40, "name": "publish", "content": true, "arguments": [
//!             {"type": "short", "name": "ticket", "default-value": 0}
//!         ]}],
//!         "properties": [{"type": "shortstr", "name": "content-type"}]
//!     }]
//! }
//! ```
//!
//! Extension documents use the same layout with every field optional; they
//! are merged onto a base spec with [`merge`].

use crate::error::{SpecError, SpecResult};
use crate::model::{
    ArgumentDef, ClassDef, Constant, DefaultValue, Domain, FieldDef, MethodDef, ProtocolSpec,
};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawSpec {
    #[serde(default)]
    name: String,
    #[serde(rename = "major-version", default)]
    major: u8,
    #[serde(rename = "minor-version", default)]
    minor: u8,
    #[serde(default)]
    revision: u8,
    #[serde(default)]
    port: u16,
    #[serde(default)]
    domains: Vec<(String, String)>,
    #[serde(default)]
    constants: Vec<RawConstant>,
    #[serde(default)]
    classes: Vec<RawClass>,
}

#[derive(Debug, Deserialize)]
struct RawConstant {
    name: String,
    value: i64,
    #[serde(default)]
    class: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawClass {
    id: u16,
    name: String,
    #[serde(default)]
    methods: Vec<RawMethod>,
    #[serde(default)]
    properties: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawMethod {
    id: u16,
    name: String,
    #[serde(default)]
    arguments: Vec<RawField>,
    #[serde(default)]
    content: bool,
    #[serde(default)]
    synchronous: bool,
}

/// Argument or property entry: names its domain via `type` or `domain`.
#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type", default)]
    ty: Option<String>,
    #[serde(default)]
    domain: Option<String>,
    #[serde(rename = "default-value", default)]
    default_value: Option<serde_json::Value>,
}

impl RawField {
    fn domain(&self) -> SpecResult<String> {
        self.domain
            .clone()
            .or_else(|| self.ty.clone())
            .ok_or_else(|| SpecError::invalid(format!("'{}' names no type or domain", self.name)))
    }

    fn into_argument(self) -> SpecResult<ArgumentDef> {
        let domain = self.domain()?;
        let default_value = self
            .default_value
            .map(|value| parse_default(&self.name, value))
            .transpose()?;

        Ok(ArgumentDef {
            name: self.name,
            domain,
            default_value,
        })
    }

    fn into_field(self) -> SpecResult<FieldDef> {
        let domain = self.domain()?;

        Ok(FieldDef {
            name: self.name,
            domain,
        })
    }
}

fn parse_default(argument: &str, value: serde_json::Value) -> SpecResult<DefaultValue> {
    use serde_json::Value;

    match value {
        Value::Bool(b) => Ok(DefaultValue::Bool(b)),
        Value::String(s) => Ok(DefaultValue::Text(s)),
        Value::Object(map) => Ok(DefaultValue::Table(map.into_iter().collect())),
        Value::Number(n) => n.as_i64().map(DefaultValue::Integer).ok_or_else(|| {
            SpecError::invalid(format!(
                "default for '{argument}' is not an integer literal: {n}"
            ))
        }),
        other => Err(SpecError::invalid(format!(
            "unsupported default for '{argument}': {other}"
        ))),
    }
}

impl RawClass {
    fn into_class(self) -> SpecResult<ClassDef> {
        let methods = self
            .methods
            .into_iter()
            .map(RawMethod::into_method)
            .collect::<SpecResult<Vec<_>>>()?;
        let fields = self
            .properties
            .into_iter()
            .map(RawField::into_field)
            .collect::<SpecResult<Vec<_>>>()?;

        Ok(ClassDef {
            name: self.name,
            id: self.id,
            methods,
            has_content_properties: !fields.is_empty(),
            fields,
        })
    }
}

impl RawMethod {
    fn into_method(self) -> SpecResult<MethodDef> {
        let arguments = self
            .arguments
            .into_iter()
            .map(RawField::into_argument)
            .collect::<SpecResult<Vec<_>>>()?;

        Ok(MethodDef {
            name: self.name,
            id: self.id,
            arguments,
            has_content: self.content,
            synchronous: self.synchronous,
        })
    }
}

impl RawSpec {
    fn into_spec(self) -> SpecResult<ProtocolSpec> {
        let classes = self
            .classes
            .into_iter()
            .map(RawClass::into_class)
            .collect::<SpecResult<Vec<_>>>()?;

        Ok(ProtocolSpec {
            name: self.name,
            major: self.major,
            minor: self.minor,
            revision: self.revision,
            port: self.port,
            constants: self
                .constants
                .into_iter()
                .map(|c| Constant {
                    name: c.name,
                    value: c.value,
                    class: c.class,
                })
                .collect(),
            domains: self
                .domains
                .into_iter()
                .map(|(name, target)| Domain { name, target })
                .collect(),
            classes,
        })
    }
}

/// Parse a spec document without validating it.
///
/// Use this for extension documents, which may refer to domains declared
/// only by the base spec.
pub fn parse_json_str(source: &str) -> SpecResult<ProtocolSpec> {
    let raw: RawSpec = serde_json::from_str(source)?;
    raw.into_spec()
}

/// Parse and validate a spec document.
pub fn from_json_str(source: &str) -> SpecResult<ProtocolSpec> {
    let spec = parse_json_str(source)?;
    spec.validate()?;
    Ok(spec)
}

/// Parse and validate a spec document from bytes.
pub fn from_json_slice(bytes: &[u8]) -> SpecResult<ProtocolSpec> {
    let raw: RawSpec = serde_json::from_slice(bytes)?;
    let spec = raw.into_spec()?;
    spec.validate()?;
    Ok(spec)
}

/// Load and validate a spec file.
pub fn from_file(path: impl AsRef<Path>) -> SpecResult<ProtocolSpec> {
    from_files(&[path])
}

/// Load a base spec followed by extensions, merged in order, then validate.
pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> SpecResult<ProtocolSpec> {
    let (first, rest) = paths
        .split_first()
        .ok_or_else(|| SpecError::invalid("no spec files given"))?;

    let mut spec = parse_file(first.as_ref())?;
    for path in rest {
        let extension = parse_file(path.as_ref())?;
        tracing::debug!("Merging extension {:?}", path.as_ref());
        merge(&mut spec, extension);
    }

    spec.validate()?;
    tracing::debug!(
        "Loaded {} {}-{}-{}: {} classes, {} methods",
        spec.name,
        spec.major,
        spec.minor,
        spec.revision,
        spec.classes.len(),
        spec.method_count()
    );

    Ok(spec)
}

fn parse_file(path: &Path) -> SpecResult<ProtocolSpec> {
    let content = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_json_str(&content)
}

/// Merge an extension spec onto a base spec.
///
/// Constants and domains are appended. A class whose id already exists gets
/// the extension's methods and fields appended; other classes are appended
/// whole. Duplicate method ids are left for [`ProtocolSpec::validate`] to
/// reject.
pub fn merge(base: &mut ProtocolSpec, extension: ProtocolSpec) {
    base.constants.extend(extension.constants);
    base.domains.extend(extension.domains);

    for class in extension.classes {
        match base.classes.iter_mut().find(|c| c.id == class.id) {
            Some(existing) => {
                existing.methods.extend(class.methods);
                existing.fields.extend(class.fields);
                existing.has_content_properties = !existing.fields.is_empty();
            }
            None => base.classes.push(class),
        }
    }
}
