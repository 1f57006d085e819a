//! Public-contract artifact generation.
//!
//! Emits the `AMQP` interface: protocol version constants, spec constants,
//! one nested contract per method with a fluent `Builder`, and the
//! content-header properties classes.

use crate::config::GeneratorConfig;
use crate::defaults::{long_string_expression, render_default};
use crate::error::CodegenResult;
use crate::java_types::JavaMember;
use crate::naming::{java_class_name, java_constant_name};
use crate::properties::emit_properties_class;
use amqp_spec::{ArgumentDef, ClassDef, MethodDef, Primitive, ProtocolSpec};

/// Emit the complete public-contract artifact into `out`.
pub fn emit_api(spec: &ProtocolSpec, config: &GeneratorConfig, out: &mut String) -> CodegenResult<()> {
    emit_preamble(config, out);

    out.push_str(&format!("\npublic interface {} {{\n", config.api_name));

    emit_protocol_class(spec, out);
    emit_constants(spec, out);

    for class in &spec.classes {
        emit_class_interfaces(spec, class, config, out)?;
    }

    for class in spec.classes.iter().filter(|c| c.has_content_properties) {
        emit_properties_class(spec, class, config, out)?;
    }

    out.push_str("}\n");

    Ok(())
}

fn emit_preamble(config: &GeneratorConfig, out: &mut String) {
    out.push_str(&format!("package {};\n\n", config.api_package));

    out.push_str("import java.io.IOException;\n");
    out.push_str("import java.util.Collections;\n");
    out.push_str("import java.util.HashMap;\n");
    out.push_str("import java.util.Map;\n");
    out.push_str("import java.util.Date;\n\n");

    for support in [
        "ContentHeaderPropertyWriter",
        "ContentHeaderPropertyReader",
        "LongString",
        "LongStringHelper",
    ] {
        out.push_str(&format!("import {}.{};\n", config.impl_package, support));
    }
}

fn emit_protocol_class(spec: &ProtocolSpec, out: &mut String) {
    out.push_str("\n    public static class PROTOCOL {\n");
    out.push_str(&format!("        public static final int MAJOR = {};\n", spec.major));
    out.push_str(&format!("        public static final int MINOR = {};\n", spec.minor));
    out.push_str(&format!("        public static final int REVISION = {};\n", spec.revision));
    out.push_str(&format!("        public static final int PORT = {};\n", spec.port));
    out.push_str("    }\n");
}

fn emit_constants(spec: &ProtocolSpec, out: &mut String) {
    out.push('\n');
    for constant in &spec.constants {
        let name = java_constant_name(&constant.name);
        // Values outside the Java int range keep their width.
        if i32::try_from(constant.value).is_ok() {
            out.push_str(&format!("    public static final int {} = {};\n", name, constant.value));
        } else {
            out.push_str(&format!("    public static final long {} = {}L;\n", name, constant.value));
        }
    }
}

fn emit_class_interfaces(
    spec: &ProtocolSpec,
    class: &ClassDef,
    config: &GeneratorConfig,
    out: &mut String,
) -> CodegenResult<()> {
    tracing::debug!("Emitting contracts for class {}", class.name);

    out.push_str(&format!("\n    public static class {} {{\n", java_class_name(&class.name)));

    for method in &class.methods {
        let arguments = method
            .arguments
            .iter()
            .map(|a| JavaMember::resolve(spec, &a.name, &a.domain))
            .collect::<CodegenResult<Vec<_>>>()?;

        out.push_str(&format!(
            "        public interface {} extends Method {{\n",
            java_class_name(&method.name)
        ));
        for argument in &arguments {
            out.push_str(&format!(
                "            {} {}();\n",
                argument.field_type(),
                argument.getter_name
            ));
        }

        emit_builder(class, method, &arguments, config, out)?;

        out.push_str("        }\n");
    }

    out.push_str("    }\n");

    Ok(())
}

fn emit_builder(
    class: &ClassDef,
    method: &MethodDef,
    arguments: &[JavaMember<'_>],
    config: &GeneratorConfig,
    out: &mut String,
) -> CodegenResult<()> {
    let class_name = java_class_name(&class.name);
    let method_name = java_class_name(&method.name);

    out.push('\n');
    out.push_str(&format!(
        "            // Builder for instances of {class_name}.{method_name}\n"
    ));
    out.push_str("            public static final class Builder\n");
    out.push_str("            {\n");

    for (member, def) in arguments.iter().zip(&method.arguments) {
        emit_builder_slot(member, def, out)?;
    }

    out.push_str("\n                public Builder() { }\n\n");

    for member in arguments {
        emit_builder_setters(member, out);
    }

    let ctor_args: Vec<&str> = arguments.iter().map(|a| a.field_name.as_str()).collect();
    out.push_str(&format!("                public {method_name} build() {{\n"));
    out.push_str(&format!(
        "                    return new {}.{}.{}({});\n",
        config.impl_qualified_name(),
        class_name,
        method_name,
        ctor_args.join(", ")
    ));
    out.push_str("                }\n");
    out.push_str("            }\n");

    Ok(())
}

fn emit_builder_slot(member: &JavaMember<'_>, def: &ArgumentDef, out: &mut String) -> CodegenResult<()> {
    match &def.default_value {
        Some(value) => {
            let literal = render_default(member.primitive, value)?;
            out.push_str(&format!(
                "                private {} {} = {};\n",
                member.field_type(),
                member.field_name,
                literal
            ));
        }
        None => {
            out.push_str(&format!(
                "                private {} {};\n",
                member.field_type(),
                member.field_name
            ));
        }
    }

    Ok(())
}

fn emit_builder_setters(member: &JavaMember<'_>, out: &mut String) {
    let name = &member.field_name;
    let ty = member.field_type();

    out.push_str(&format!("                public Builder {name}({ty} {name})\n"));
    match member.primitive {
        Primitive::Table => out.push_str(&format!(
            "                {{   this.{name} = {name}==null ? null : Collections.unmodifiableMap(new HashMap<String,Object>({name})); return this; }}\n"
        )),
        _ => out.push_str(&format!(
            "                {{   this.{name} = {name}; return this; }}\n"
        )),
    }

    match member.primitive {
        Primitive::Bit => {
            out.push_str(&format!("                public Builder {name}()\n"));
            out.push_str(&format!("                {{   return this.{name}(true); }}\n"));
        }
        Primitive::Longstr => {
            out.push_str(&format!("                public Builder {name}(String {name})\n"));
            out.push_str(&format!(
                "                {{   return this.{name}({}); }}\n",
                long_string_expression(name)
            ));
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "api/api_tests.rs"]
mod api_tests;
