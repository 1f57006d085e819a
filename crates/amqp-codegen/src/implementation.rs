//! Implementation artifact generation.
//!
//! Emits the `AMQImpl` class: one concrete value type per method with
//! storage, constructors, wire encode/decode and visitor dispatch, followed by
//! the protocol-wide `MethodVisitor`, `DefaultMethodVisitor` and the
//! decode-by-id tables `readMethodFrom` / `readContentHeaderFrom`.

use crate::config::GeneratorConfig;
use crate::error::CodegenResult;
use crate::java_types::{JavaMember, requires_null_check};
use crate::naming::java_class_name;
use amqp_spec::{ClassDef, MethodDef, ProtocolSpec};

/// Method id reported when a content header names an unknown class.
pub const NO_METHOD_ID: i32 = -1;

/// Emit the complete implementation artifact into `out`.
pub fn emit_impl(spec: &ProtocolSpec, config: &GeneratorConfig, out: &mut String) -> CodegenResult<()> {
    emit_preamble(config, out);

    out.push_str(&format!(
        "\npublic class {} implements {} {{\n",
        config.impl_name, config.api_name
    ));

    for class in &spec.classes {
        emit_class_methods(spec, class, config, out)?;
    }

    emit_method_visitor(spec, out);
    emit_method_reader(spec, out);
    emit_content_header_reader(spec, out);

    out.push_str("}\n");

    Ok(())
}

fn emit_preamble(config: &GeneratorConfig, out: &mut String) {
    out.push_str(&format!("package {};\n\n", config.impl_package));

    out.push_str("import java.io.IOException;\n");
    out.push_str("import java.io.DataInputStream;\n");
    out.push_str("import java.util.Map;\n");
    out.push_str("import java.util.Date;\n\n");

    for support in [
        config.api_name.as_str(),
        "UnknownClassOrMethodId",
        "UnexpectedMethodError",
    ] {
        out.push_str(&format!("import {}.{};\n", config.api_package, support));
    }
}

fn emit_class_methods(
    spec: &ProtocolSpec,
    class: &ClassDef,
    config: &GeneratorConfig,
    out: &mut String,
) -> CodegenResult<()> {
    tracing::debug!(
        "Emitting {} method types for class {}",
        class.methods.len(),
        class.name
    );

    out.push('\n');
    out.push_str(&format!(
        "    public static class {} {{\n",
        java_class_name(&class.name)
    ));
    out.push_str(&format!("        public static final int INDEX = {};\n", class.id));

    for method in &class.methods {
        let arguments = method
            .arguments
            .iter()
            .map(|a| JavaMember::resolve(spec, &a.name, &a.domain))
            .collect::<CodegenResult<Vec<_>>>()?;

        emit_method_class(class, method, &arguments, config, out);
    }

    out.push_str("    }\n");

    Ok(())
}

fn emit_method_class(
    class: &ClassDef,
    method: &MethodDef,
    arguments: &[JavaMember<'_>],
    config: &GeneratorConfig,
    out: &mut String,
) {
    let class_name = java_class_name(&class.name);
    let method_name = java_class_name(&method.name);

    out.push('\n');
    out.push_str(&format!("        public static class {method_name}\n"));
    out.push_str("            extends Method\n");
    out.push_str(&format!(
        "            implements {}.{}.{}\n",
        config.api_qualified_name(),
        class_name,
        method_name
    ));
    out.push_str("        {\n");
    out.push_str(&format!(
        "            public static final int INDEX = {};\n\n",
        method.id
    ));

    for argument in arguments {
        out.push_str(&format!(
            "            private final {} {};\n",
            argument.field_type(),
            argument.field_name
        ));
    }

    emit_getters(arguments, out);
    emit_constructors(&method_name, arguments, out);
    emit_protocol_metadata(class, method, out);
    emit_argument_debug_string(arguments, config, "            ", out);
    emit_write_arguments(arguments, out);

    out.push_str("        }\n");
}

fn emit_getters(arguments: &[JavaMember<'_>], out: &mut String) {
    if arguments.is_empty() {
        return;
    }

    out.push('\n');
    for argument in arguments {
        out.push_str(&format!(
            "            public {} {}() {{ return {}; }}\n",
            argument.field_type(),
            argument.getter_name,
            argument.field_name
        ));
    }
}

fn emit_constructors(method_name: &str, arguments: &[JavaMember<'_>], out: &mut String) {
    let params: Vec<String> = arguments
        .iter()
        .map(|a| format!("{} {}", a.field_type(), a.field_name))
        .collect();

    out.push('\n');
    out.push_str(&format!(
        "            public {}({}) {{\n",
        method_name,
        params.join(", ")
    ));
    for argument in arguments.iter().filter(|a| requires_null_check(a.primitive)) {
        out.push_str(&format!("                if({} == null)\n", argument.field_name));
        out.push_str(&format!(
            "                    throw new IllegalStateException(\"Invalid configuration: '{}' must be non-null.\");\n",
            argument.field_name
        ));
    }
    for argument in arguments {
        out.push_str(&format!(
            "                this.{} = {};\n",
            argument.field_name, argument.field_name
        ));
    }
    out.push_str("            }\n");

    let reads: Vec<String> = arguments
        .iter()
        .map(|a| format!("rdr.read{}()", a.wire_suffix()))
        .collect();
    out.push_str(&format!(
        "            public {method_name}(MethodArgumentReader rdr) throws IOException {{\n"
    ));
    out.push_str(&format!("                this({});\n", reads.join(", ")));
    out.push_str("            }\n");
}

fn emit_protocol_metadata(class: &ClassDef, method: &MethodDef, out: &mut String) {
    out.push('\n');
    out.push_str(&format!(
        "            public int protocolClassId() {{ return {}; }}\n",
        class.id
    ));
    out.push_str(&format!(
        "            public int protocolMethodId() {{ return {}; }}\n",
        method.id
    ));
    out.push_str(&format!(
        "            public String protocolMethodName() {{ return \"{}.{}\";}}\n",
        class.name, method.name
    ));
    out.push('\n');
    out.push_str(&format!(
        "            public boolean hasContent() {{ return {}; }}\n",
        method.has_content
    ));
    out.push('\n');
    out.push_str("            public Object visit(MethodVisitor visitor) throws IOException\n");
    out.push_str("            {   return visitor.visit(this); }\n");
}

/// Emit `appendArgumentDebugStringTo`, rendering `(name=value, ...)`.
///
/// `indent` is the indentation of the enclosing class body.
pub(crate) fn emit_argument_debug_string(
    members: &[JavaMember<'_>],
    config: &GeneratorConfig,
    indent: &str,
    out: &mut String,
) {
    let continuation = format!("{indent}       ");
    let parts: Vec<String> = members
        .iter()
        .map(|m| {
            format!(
                "{}=\")\n{cont}.append(this.{})\n{cont}.append(\"",
                m.spec_name,
                m.field_name,
                cont = continuation
            )
        })
        .collect();

    out.push('\n');
    out.push_str(&format!(
        "{indent}public void appendArgumentDebugStringTo({} acc) {{\n",
        config.debug_buffer_type
    ));
    out.push_str(&format!("{indent}    acc.append(\"({})\");\n", parts.join(", ")));
    out.push_str(&format!("{indent}}}\n"));
}

fn emit_write_arguments(arguments: &[JavaMember<'_>], out: &mut String) {
    out.push('\n');
    out.push_str("            public void writeArgumentsTo(MethodArgumentWriter writer)\n");
    out.push_str("                throws IOException\n");
    out.push_str("            {\n");
    for argument in arguments {
        out.push_str(&format!(
            "                writer.write{}(this.{});\n",
            argument.wire_suffix(),
            argument.field_name
        ));
    }
    out.push_str("            }\n");
}

fn qualified_method_type(class: &ClassDef, method: &MethodDef) -> String {
    format!(
        "{}.{}",
        java_class_name(&class.name),
        java_class_name(&method.name)
    )
}

fn emit_method_visitor(spec: &ProtocolSpec, out: &mut String) {
    out.push('\n');
    out.push_str("    public interface MethodVisitor {\n");
    for (class, method) in spec.methods() {
        out.push_str(&format!(
            "        Object visit({} x) throws IOException;\n",
            qualified_method_type(class, method)
        ));
    }
    out.push_str("    }\n");

    out.push('\n');
    out.push_str("    public static class DefaultMethodVisitor implements MethodVisitor {\n");
    for (class, method) in spec.methods() {
        out.push_str(&format!(
            "        public Object visit({} x) throws IOException {{ throw new UnexpectedMethodError(x); }}\n",
            qualified_method_type(class, method)
        ));
    }
    out.push_str("    }\n");
}

fn emit_method_reader(spec: &ProtocolSpec, out: &mut String) {
    out.push('\n');
    out.push_str("    public static Method readMethodFrom(DataInputStream in) throws IOException {\n");
    out.push_str("        int classId = in.readUnsignedShort();\n");
    out.push_str("        int methodId = in.readUnsignedShort();\n");
    out.push_str("        switch (classId) {\n");
    for class in &spec.classes {
        out.push_str(&format!("            case {}:\n", class.id));
        out.push_str("                switch (methodId) {\n");
        for method in &class.methods {
            out.push_str(&format!("                    case {}: {{\n", method.id));
            out.push_str(&format!(
                "                        return new {}(new MethodArgumentReader(in));\n",
                qualified_method_type(class, method)
            ));
            out.push_str("                    }\n");
        }
        out.push_str("                    default: break;\n");
        out.push_str("                } break;\n");
    }
    out.push_str("        }\n\n");
    out.push_str("        throw new UnknownClassOrMethodId(classId, methodId);\n");
    out.push_str("    }\n");
}

fn emit_content_header_reader(spec: &ProtocolSpec, out: &mut String) {
    out.push('\n');
    out.push_str(
        "    public static AMQContentHeader readContentHeaderFrom(DataInputStream in) throws IOException {\n",
    );
    out.push_str("        int classId = in.readUnsignedShort();\n");
    out.push_str("        switch (classId) {\n");
    for class in spec
        .classes
        .iter()
        .filter(|c| c.has_content_properties && !c.fields.is_empty())
    {
        out.push_str(&format!(
            "            case {}: return new {}Properties();\n",
            class.id,
            java_class_name(&class.name)
        ));
    }
    out.push_str("            default: break;\n");
    out.push_str("        }\n\n");
    out.push_str(&format!(
        "        throw new UnknownClassOrMethodId(classId, {NO_METHOD_ID});\n"
    ));
    out.push_str("    }\n");
}
