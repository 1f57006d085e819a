#![allow(non_snake_case)]

use super::*;

const SPEC: &str = r#"{
    "name": "AMQP",
    "major-version": 0,
    "minor-version": 9,
    "revision": 1,
    "port": 5672,
    "domains": [["exchange-name", "shortstr"], ["peer-properties", "table"]],
    "constants": [
        {"name": "FRAME-METHOD", "value": 1},
        {"name": "NOT-FOUND", "value": 404, "class": "soft-error"},
        {"name": "HUGE", "value": 4294967296}
    ],
    "classes": [
        {"id": 10, "name": "connection", "methods": [
            {"id": 11, "name": "start-ok", "arguments": [
                {"domain": "peer-properties", "name": "client-properties"},
                {"type": "longstr", "name": "response"},
                {"type": "shortstr", "name": "locale", "default-value": "en_US"}
            ]}
        ]},
        {"id": 60, "name": "basic", "methods": [
            {"id": 40, "name": "publish", "content": true, "arguments": [
                {"type": "short", "name": "ticket", "default-value": 0},
                {"domain": "exchange-name", "name": "exchange", "default-value": ""},
                {"type": "shortstr", "name": "routing-key", "default-value": ""},
                {"type": "bit", "name": "mandatory", "default-value": false},
                {"type": "bit", "name": "immediate", "default-value": false}
            ]},
            {"id": 80, "name": "ack", "arguments": [
                {"type": "longlong", "name": "delivery-tag", "default-value": 0},
                {"type": "bit", "name": "multiple", "default-value": false}
            ]}
        ], "properties": [{"type": "shortstr", "name": "content-type"}]}
    ]
}"#;

fn emit(spec_json: &str) -> String {
    let spec = amqp_spec::loader::from_json_str(spec_json).unwrap();
    let mut out = String::new();
    emit_api(&spec, &GeneratorConfig::default(), &mut out).unwrap();
    out
}

#[test]
fn emit_api___declares_package_and_interface() {
    let code = emit(SPEC);

    assert!(code.starts_with("package com.rabbitmq.client;\n"));
    assert!(code.contains("import com.rabbitmq.client.impl.LongStringHelper;"));
    assert!(code.contains("\npublic interface AMQP {\n"));
    assert!(code.ends_with("}\n"));
}

#[test]
fn emit_api___protocol_class_carries_version_and_port() {
    let code = emit(SPEC);

    assert!(code.contains("    public static class PROTOCOL {\n"));
    assert!(code.contains("        public static final int MAJOR = 0;\n"));
    assert!(code.contains("        public static final int MINOR = 9;\n"));
    assert!(code.contains("        public static final int REVISION = 1;\n"));
    assert!(code.contains("        public static final int PORT = 5672;\n"));
}

#[test]
fn emit_api___constants_in_declaration_order() {
    let code = emit(SPEC);

    let frame = code.find("public static final int FRAME_METHOD = 1;").unwrap();
    let not_found = code.find("public static final int NOT_FOUND = 404;").unwrap();

    assert!(frame < not_found);
}

#[test]
fn emit_api___wide_constant___emitted_as_long() {
    let code = emit(SPEC);

    assert!(code.contains("public static final long HUGE = 4294967296L;"));
}

#[test]
fn emit_api___method_contract_has_one_accessor_per_argument() {
    let code = emit(SPEC);

    assert!(code.contains(
        "        public interface Publish extends Method {\n\
         \x20           int getTicket();\n\
         \x20           String getExchange();\n\
         \x20           String getRoutingKey();\n\
         \x20           boolean getMandatory();\n\
         \x20           boolean getImmediate();\n"
    ));
}

#[test]
fn emit_api___builder_slots_preseeded_with_defaults() {
    let code = emit(SPEC);

    assert!(code.contains("                private int ticket = 0;\n"));
    assert!(code.contains("                private String exchange = \"\";\n"));
    assert!(code.contains("                private boolean mandatory = false;\n"));
    assert!(code.contains("                private long deliveryTag = 0L;\n"));
}

#[test]
fn emit_api___argument_without_default___slot_left_uninitialized() {
    let code = emit(SPEC);

    assert!(code.contains("                private LongString response;\n"));
}

#[test]
fn emit_api___table_slot_defaults_to_null() {
    let code = emit(r#"{"classes": [{"id": 40, "name": "exchange", "methods": [
        {"id": 10, "name": "declare", "arguments": [
            {"type": "table", "name": "arguments", "default-value": {}}
        ]}
    ]}]}"#);

    assert!(code.contains("                private Map<String,Object> arguments = null;\n"));
}

#[test]
fn emit_api___every_argument_gets_fluent_setter() {
    let code = emit(SPEC);

    assert!(code.contains(
        "                public Builder routingKey(String routingKey)\n\
         \x20               {   this.routingKey = routingKey; return this; }\n"
    ));
}

#[test]
fn emit_api___bit_argument_gets_zero_argument_setter() {
    let code = emit(SPEC);

    assert!(code.contains(
        "                public Builder mandatory()\n\
         \x20               {   return this.mandatory(true); }\n"
    ));
}

#[test]
fn emit_api___table_setter_copies_into_unmodifiable_map() {
    let code = emit(SPEC);

    assert!(code.contains(
        "                public Builder clientProperties(Map<String,Object> clientProperties)\n\
         \x20               {   this.clientProperties = clientProperties==null ? null : Collections.unmodifiableMap(new HashMap<String,Object>(clientProperties)); return this; }\n"
    ));
}

#[test]
fn emit_api___longstr_argument_gets_string_overload() {
    let code = emit(SPEC);

    assert!(code.contains(
        "                public Builder response(String response)\n\
         \x20               {   return this.response(LongStringHelper.asLongString(response)); }\n"
    ));
}

#[test]
fn emit_api___non_bit_arguments_have_no_zero_argument_setter() {
    let code = emit(SPEC);

    assert!(!code.contains("public Builder ticket()"));
    assert!(!code.contains("public Builder exchange()"));
}

#[test]
fn emit_api___build_calls_impl_constructor_in_declaration_order() {
    let code = emit(SPEC);

    assert!(code.contains(
        "                public Publish build() {\n\
         \x20                   return new com.rabbitmq.client.impl.AMQImpl.Basic.Publish(ticket, exchange, routingKey, mandatory, immediate);\n\
         \x20               }\n"
    ));
}

#[test]
fn emit_api___builder_comment_names_qualified_method() {
    let code = emit(SPEC);

    assert!(code.contains("            // Builder for instances of Connection.StartOk\n"));
}

#[test]
fn emit_api___classes_then_properties_in_declaration_order() {
    let code = emit(SPEC);

    let connection = code.find("    public static class Connection {").unwrap();
    let basic = code.find("    public static class Basic {").unwrap();
    let properties = code.find("    public static class BasicProperties").unwrap();
    let publish = code.find("public interface Publish").unwrap();
    let ack = code.find("public interface Ack").unwrap();

    assert!(connection < basic);
    assert!(basic < properties);
    assert!(publish < ack);
}

#[test]
fn emit_api___configured_packages_flow_into_imports_and_builders() {
    let spec = amqp_spec::loader::from_json_str(SPEC).unwrap();
    let config = GeneratorConfig {
        api_package: "org.example".into(),
        impl_package: "org.example.wire".into(),
        impl_name: "Wire".into(),
        ..GeneratorConfig::default()
    };
    let mut code = String::new();

    emit_api(&spec, &config, &mut code).unwrap();

    assert!(code.starts_with("package org.example;\n"));
    assert!(code.contains("import org.example.wire.LongString;"));
    assert!(code.contains("return new org.example.wire.Wire.Basic.Ack(deliveryTag, multiple);"));
}

#[test]
fn emit_api___bogus_default___fails() {
    let spec = amqp_spec::loader::from_json_str(
        r#"{"classes": [{"id": 1, "name": "x", "methods": [
            {"id": 1, "name": "y", "arguments": [{"type": "timestamp", "name": "at", "default-value": 0}]}
        ]}]}"#,
    )
    .unwrap();
    let mut out = String::new();

    let result = emit_api(&spec, &GeneratorConfig::default(), &mut out);

    assert!(matches!(result, Err(crate::CodegenError::BogusDefaultValue { .. })));
}
