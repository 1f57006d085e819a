//! Java binding generation from an AMQP protocol specification.
//!
//! The generator turns a [`ProtocolSpec`] into two Java source artifacts:
//!
//! - **API** ([`Artifact::Api`]): the public `AMQP` interface with one
//!   contract and fluent builder per method, protocol constants, and one
//!   properties class per class declaring content-header fields.
//! - **Impl** ([`Artifact::Impl`]): the `AMQImpl` class with concrete method
//!   types carrying wire encode/decode, visitor dispatch, and the
//!   decode-by-id tables for incoming frames.
//!
//! # Architecture
//!
//! ```text
//! spec JSON
//!     ↓
//!  [amqp_spec::loader]
//!     ↓
//!  ProtocolSpec
//!     ↓
//!  ├─→ [api + properties] → AMQP.java
//!  └─→ [implementation]   → AMQImpl.java
//! ```
//!
//! Each emitter is a pure function of the spec and one class, method or field,
//! appending to a single output buffer in spec-declared order. Any error
//! aborts the artifact; nothing partial is returned.
//!
//! # Usage
//!
//! ```rust,no_run
//! use amqp_codegen::{Artifact, GeneratorConfig, generate};
//!
//! let spec = amqp_spec::loader::from_file("specs/amqp0-9-1.json")?;
//! let java = generate(Artifact::Api, &spec, &GeneratorConfig::default())?;
//! println!("{java}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod config;
pub mod defaults;
pub mod implementation;
pub mod java_types;
pub mod naming;
pub mod properties;
mod error;

pub use config::GeneratorConfig;
pub use error::{CodegenError, CodegenResult};

use amqp_spec::ProtocolSpec;
use std::fmt;

/// One of the two independently selectable generated artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Public contracts, builders and properties classes.
    Api,
    /// Concrete method types, visitors and decode tables.
    Impl,
}

impl Artifact {
    /// Java source file name for this artifact.
    pub fn file_name(self, config: &GeneratorConfig) -> String {
        match self {
            Artifact::Api => format!("{}.java", config.api_name),
            Artifact::Impl => format!("{}.java", config.impl_name),
        }
    }

    /// Java package this artifact is declared in.
    pub fn package(self, config: &GeneratorConfig) -> &str {
        match self {
            Artifact::Api => &config.api_package,
            Artifact::Impl => &config.impl_package,
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Api => f.write_str("api"),
            Artifact::Impl => f.write_str("impl"),
        }
    }
}

/// Generate one artifact as Java source text.
pub fn generate(
    artifact: Artifact,
    spec: &ProtocolSpec,
    config: &GeneratorConfig,
) -> CodegenResult<String> {
    spec.validate()?;
    config.validate()?;

    let mut code = String::new();
    if config.header_comment {
        emit_file_header(&mut code);
    }

    match artifact {
        Artifact::Api => api::emit_api(spec, config, &mut code)?,
        Artifact::Impl => implementation::emit_impl(spec, config, &mut code)?,
    }

    tracing::info!(
        "Generated {} artifact: {} classes, {} methods, {} properties types",
        artifact,
        spec.classes.len(),
        spec.method_count(),
        spec.classes.iter().filter(|c| c.has_content_properties).count()
    );

    Ok(code)
}

/// Generate the public-contract artifact.
pub fn generate_api(spec: &ProtocolSpec, config: &GeneratorConfig) -> CodegenResult<String> {
    generate(Artifact::Api, spec, config)
}

/// Generate the implementation artifact.
pub fn generate_impl(spec: &ProtocolSpec, config: &GeneratorConfig) -> CodegenResult<String> {
    generate(Artifact::Impl, spec, config)
}

fn emit_file_header(code: &mut String) {
    code.push_str("//   NOTE: This -*- java -*- source code is autogenerated from the AMQP\n");
    code.push_str("//         specification!\n");
    code.push_str("//\n");
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
