//! Generator configuration

use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings that shape the generated Java artifacts
///
/// Every field has a default matching the RabbitMQ Java client layout, so an
/// empty TOML document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Package of the public-contract artifact
    #[serde(default = "default_api_package")]
    pub api_package: String,

    /// Package of the implementation artifact and its runtime support types
    #[serde(default = "default_impl_package")]
    pub impl_package: String,

    /// Name of the public-contract interface
    #[serde(default = "default_api_name")]
    pub api_name: String,

    /// Name of the implementation class
    #[serde(default = "default_impl_name")]
    pub impl_name: String,

    /// Emit the "autogenerated" banner at the top of each artifact
    #[serde(default = "default_header_comment")]
    pub header_comment: bool,

    /// Buffer type taken by `appendArgumentDebugStringTo`; must match the
    /// runtime's `Method` and `AMQ<Class>Properties` base classes
    #[serde(default = "default_debug_buffer_type")]
    pub debug_buffer_type: String,
}

fn default_api_package() -> String {
    "com.rabbitmq.client".to_string()
}

fn default_impl_package() -> String {
    "com.rabbitmq.client.impl".to_string()
}

fn default_api_name() -> String {
    "AMQP".to_string()
}

fn default_impl_name() -> String {
    "AMQImpl".to_string()
}

fn default_header_comment() -> bool {
    true
}

fn default_debug_buffer_type() -> String {
    "StringBuffer".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_package: default_api_package(),
            impl_package: default_impl_package(),
            api_name: default_api_name(),
            impl_name: default_impl_name(),
            header_comment: default_header_comment(),
            debug_buffer_type: default_debug_buffer_type(),
        }
    }
}

impl GeneratorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate configuration from TOML
    pub fn from_toml_str(content: &str) -> CodegenResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Check that packages and type names are valid Java identifiers
    pub fn validate(&self) -> CodegenResult<()> {
        for (key, package) in [
            ("api_package", &self.api_package),
            ("impl_package", &self.impl_package),
        ] {
            if !package.split('.').all(is_java_identifier) {
                return Err(CodegenError::Config(format!(
                    "{key} is not a valid Java package: '{package}'"
                )));
            }
        }

        for (key, name) in [
            ("api_name", &self.api_name),
            ("impl_name", &self.impl_name),
            ("debug_buffer_type", &self.debug_buffer_type),
        ] {
            if !is_java_identifier(name) {
                return Err(CodegenError::Config(format!(
                    "{key} is not a valid Java identifier: '{name}'"
                )));
            }
        }

        Ok(())
    }

    /// Fully qualified name of the public-contract interface
    pub fn api_qualified_name(&self) -> String {
        format!("{}.{}", self.api_package, self.api_name)
    }

    /// Fully qualified name of the implementation class
    pub fn impl_qualified_name(&self) -> String {
        format!("{}.{}", self.impl_package, self.impl_name)
    }
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}
