//! Content-header properties class generation.
//!
//! A properties class holds one nullable slot per declared header field.
//! On the wire the header starts with a presence block: one flag per declared
//! field, in declaration order, closed by `finishPresence()`. Only fields
//! whose flag is set contribute value bytes, which follow the whole block.
//! The block therefore has the same size however many fields are set.

use crate::config::GeneratorConfig;
use crate::error::CodegenResult;
use crate::implementation::emit_argument_debug_string;
use crate::java_types::JavaMember;
use crate::naming::{capitalize, java_class_name};
use amqp_spec::{ClassDef, ProtocolSpec};

/// Emit the `<Class>Properties` class for one class declaring header fields.
pub fn emit_properties_class(
    spec: &ProtocolSpec,
    class: &ClassDef,
    config: &GeneratorConfig,
    out: &mut String,
) -> CodegenResult<()> {
    tracing::debug!(
        "Emitting properties for class {} ({} fields)",
        class.name,
        class.fields.len()
    );

    let fields = class
        .fields
        .iter()
        .map(|f| JavaMember::resolve(spec, &f.name, &f.domain))
        .collect::<CodegenResult<Vec<_>>>()?;
    let class_name = format!("{}Properties", java_class_name(&class.name));

    out.push('\n');
    out.push_str(&format!(
        "    public static class {} extends {}.AMQ{} {{\n",
        class_name, config.impl_package, class_name
    ));

    for field in &fields {
        out.push_str(&format!(
            "        private {} {};\n",
            field.property_type(),
            field.field_name
        ));
    }

    if !fields.is_empty() {
        let params: Vec<String> = fields
            .iter()
            .map(|f| format!("{} {}", f.property_type(), f.field_name))
            .collect();
        out.push('\n');
        out.push_str(&format!("        public {class_name}(\n"));
        out.push_str(&format!("            {})\n", params.join(",\n            ")));
        out.push_str("        {\n");
        for field in &fields {
            out.push_str(&format!(
                "            this.{} = {};\n",
                field.field_name, field.field_name
            ));
        }
        out.push_str("        }\n");
    }

    out.push('\n');
    out.push_str(&format!("        public {class_name}() {{}}\n"));
    out.push_str(&format!(
        "        public int getClassId() {{ return {}; }}\n",
        class.id
    ));
    out.push_str(&format!(
        "        public String getClassName() {{ return \"{}\"; }}\n",
        class.name
    ));

    out.push('\n');
    for field in &fields {
        let ty = field.property_type();
        let name = &field.field_name;
        let cap = capitalize(name);
        out.push_str(&format!(
            "        public {ty} get{cap}() {{ return {name}; }}\n"
        ));
        out.push_str(&format!(
            "        public void set{cap}({ty} {name}) {{ this.{name} = {name}; }}\n"
        ));
    }

    emit_read_properties_from(&fields, out);
    emit_write_properties_to(&fields, out);
    emit_argument_debug_string(&fields, config, "        ", out);

    out.push_str("    }\n");

    Ok(())
}

fn emit_read_properties_from(fields: &[JavaMember<'_>], out: &mut String) {
    out.push('\n');
    out.push_str("        public void readPropertiesFrom(ContentHeaderPropertyReader reader)\n");
    out.push_str("            throws IOException\n");
    out.push_str("        {\n");
    for field in fields {
        out.push_str(&format!(
            "            boolean {}_present = reader.readPresence();\n",
            field.field_name
        ));
    }
    out.push_str("            reader.finishPresence();\n");
    for field in fields {
        out.push_str(&format!(
            "            this.{name} = {name}_present ? reader.read{suffix}() : null;\n",
            name = field.field_name,
            suffix = field.wire_suffix()
        ));
    }
    out.push_str("        }\n");
}

fn emit_write_properties_to(fields: &[JavaMember<'_>], out: &mut String) {
    out.push('\n');
    out.push_str("        public void writePropertiesTo(ContentHeaderPropertyWriter writer)\n");
    out.push_str("            throws IOException\n");
    out.push_str("        {\n");
    for field in fields {
        out.push_str(&format!(
            "            writer.writePresence(this.{} != null);\n",
            field.field_name
        ));
    }
    out.push_str("            writer.finishPresence();\n");
    for field in fields {
        out.push_str(&format!(
            "            if (this.{name} != null) {{ writer.write{suffix}(this.{name}); }}\n",
            name = field.field_name,
            suffix = field.wire_suffix()
        ));
    }
    out.push_str("        }\n");
}
