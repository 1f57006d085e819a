#![allow(non_snake_case)]

use super::*;

const AMQP_0_9_1: &str = include_str!("../../../specs/amqp0-9-1.json");

fn spec() -> ProtocolSpec {
    amqp_spec::loader::from_json_str(AMQP_0_9_1).unwrap()
}

#[test]
fn Artifact___file_name___follows_configured_type_names() {
    let config = GeneratorConfig {
        api_name: "Protocol".into(),
        ..GeneratorConfig::default()
    };

    assert_eq!(Artifact::Api.file_name(&config), "Protocol.java");
    assert_eq!(Artifact::Impl.file_name(&config), "AMQImpl.java");
}

#[test]
fn Artifact___package___selects_configured_package() {
    let config = GeneratorConfig::default();

    assert_eq!(Artifact::Api.package(&config), "com.rabbitmq.client");
    assert_eq!(Artifact::Impl.package(&config), "com.rabbitmq.client.impl");
}

#[test]
fn generate___header_comment___emitted_first_when_enabled() {
    let code = generate_api(&spec(), &GeneratorConfig::default()).unwrap();

    assert!(code.starts_with("//   NOTE: This -*- java -*- source code is autogenerated"));
}

#[test]
fn generate___header_comment_disabled___starts_with_package() {
    let config = GeneratorConfig {
        header_comment: false,
        ..GeneratorConfig::default()
    };

    let code = generate_impl(&spec(), &config).unwrap();

    assert!(code.starts_with("package com.rabbitmq.client.impl;"));
}

#[test]
fn generate___is_deterministic() {
    let spec = spec();
    let config = GeneratorConfig::default();

    let first = generate_impl(&spec, &config).unwrap();
    let second = generate_impl(&spec, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn generate___invalid_spec___returns_spec_error() {
    let mut spec = spec();
    spec.classes[0].methods[0].arguments[0].domain = "no-such-domain".into();

    let result = generate(Artifact::Impl, &spec, &GeneratorConfig::default());

    assert!(matches!(result, Err(CodegenError::Spec(_))));
}

#[test]
fn generate___invalid_config___returns_config_error() {
    let config = GeneratorConfig {
        impl_package: "".into(),
        ..GeneratorConfig::default()
    };

    let result = generate(Artifact::Api, &spec(), &config);

    assert!(matches!(result, Err(CodegenError::Config(_))));
}

#[test]
fn generate___bogus_default___aborts_api_artifact() {
    let mut spec = spec();
    let basic = spec.classes.iter_mut().find(|c| c.name == "basic").unwrap();
    let publish = basic.methods.iter_mut().find(|m| m.name == "publish").unwrap();
    let mandatory = publish.arguments.iter_mut().find(|a| a.name == "mandatory").unwrap();
    mandatory.default_value = Some(amqp_spec::DefaultValue::Text("maybe".into()));

    let result = generate_api(&spec, &GeneratorConfig::default());

    assert!(matches!(
        result,
        Err(CodegenError::BogusDefaultValue { ref value, ref java_type })
            if value == "\"maybe\"" && java_type == "boolean"
    ));
}
