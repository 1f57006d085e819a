#![allow(non_snake_case)]

use super::*;
use crate::FieldTable;

const AMQP_0_9_1: &str = include_str!("../../../../specs/amqp0-9-1.json");

fn spec() -> ProtocolSpec {
    amqp_spec::loader::from_json_str(AMQP_0_9_1).unwrap()
}

#[test]
fn Method___with_defaults___basic_publish() {
    let method = Method::with_defaults(&spec(), 60, 40).unwrap();

    assert_eq!(
        method.arguments,
        vec![
            Value::Short(0),
            Value::Shortstr(String::new()),
            Value::Shortstr(String::new()),
            Value::Bit(false),
            Value::Bit(false),
        ]
    );
}

#[test]
fn Method___with_defaults___undeclared_default_is_zero() {
    let method = Method::with_defaults(&spec(), 10, 10).unwrap();

    assert_eq!(method.arguments[0], Value::Octet(0));
    assert_eq!(method.arguments[1], Value::Octet(9));
    assert_eq!(method.arguments[2], Value::Table(FieldTable::new()));
    assert_eq!(method.arguments[3], Value::Longstr(b"PLAIN".to_vec()));
}

#[test]
fn Method___with_defaults___unknown_method___fails() {
    let result = Method::with_defaults(&spec(), 60, 99);

    assert!(matches!(
        result,
        Err(WireError::UnknownClassOrMethodId { class_id: 60, method_id: 99 })
    ));
}

#[test]
fn Method___set___replaces_argument_by_name() {
    let spec = spec();
    let mut method = Method::with_defaults(&spec, 60, 40).unwrap();

    method.set(&spec, "routing-key", Value::Shortstr("orders".into())).unwrap();

    assert_eq!(
        method.argument(&spec, "routing-key"),
        Some(&Value::Shortstr("orders".into()))
    );
}

#[test]
fn Method___set___wrong_type___fails() {
    let spec = spec();
    let mut method = Method::with_defaults(&spec, 60, 40).unwrap();

    let result = method.set(&spec, "mandatory", Value::Octet(1));

    assert!(matches!(
        result,
        Err(WireError::TypeMismatch { expected: Primitive::Bit, .. })
    ));
}

#[test]
fn Method___set___unknown_argument___fails() {
    let spec = spec();
    let mut method = Method::with_defaults(&spec, 60, 40).unwrap();

    assert!(method.set(&spec, "priority", Value::Octet(1)).is_err());
}

#[test]
fn Method___protocol_method_name___uses_spec_names() {
    let spec = spec();
    let method = Method::with_defaults(&spec, 60, 100).unwrap();

    assert_eq!(method.protocol_method_name(&spec).as_deref(), Some("basic.recover-async"));
}

#[test]
fn Method___has_content___follows_method_declaration() {
    let spec = spec();

    assert!(Method::with_defaults(&spec, 60, 40).unwrap().has_content(&spec));
    assert!(!Method::with_defaults(&spec, 60, 10).unwrap().has_content(&spec));
}

#[test]
fn Method___set___short_argument_vector___fails() {
    let spec = spec();
    let mut method = Method::new(60, 40, vec![]);

    let result = method.set(&spec, "ticket", Value::Short(7));

    assert!(matches!(
        result,
        Err(WireError::ArityMismatch { expected: 5, found: 0, .. })
    ));
    assert!(method.arguments.is_empty());
}

#[test]
fn Method___write_arguments_to___arity_mismatch___fails() {
    let spec = spec();
    let method = Method::new(60, 40, vec![Value::Short(0)]);
    let mut writer = MethodArgumentWriter::new();

    let result = method.write_arguments_to(&spec, &mut writer);

    assert!(matches!(
        result,
        Err(WireError::ArityMismatch { expected: 5, found: 1, .. })
    ));
}

#[test]
fn Method___write_arguments_to___packs_trailing_bits() {
    let spec = spec();
    let mut method = Method::with_defaults(&spec, 60, 40).unwrap();
    method.set(&spec, "immediate", Value::Bit(true)).unwrap();
    let mut writer = MethodArgumentWriter::new();

    method.write_arguments_to(&spec, &mut writer).unwrap();

    assert_eq!(writer.finish(), vec![0, 0, 0, 0, 0b0000_0010]);
}

// Properties tests

#[test]
fn Properties___new___all_fields_absent() {
    let properties = Properties::new(&spec(), 60).unwrap();

    assert_eq!(properties.values.len(), 14);
    assert!(properties.values.iter().all(Option::is_none));
}

#[test]
fn Properties___new___class_without_fields___fails_with_sentinel() {
    let result = Properties::new(&spec(), 10);

    assert!(matches!(
        result,
        Err(WireError::UnknownClassOrMethodId { class_id: 10, method_id: -1 })
    ));
}

#[test]
fn Properties___write_properties_to___presence_then_present_values() {
    let spec = spec();
    let mut properties = Properties::new(&spec, 60).unwrap();
    properties
        .set(&spec, "content-type", Some(Value::Shortstr("text/plain".into())))
        .unwrap();
    properties.set(&spec, "delivery-mode", Some(Value::Octet(2))).unwrap();
    let mut writer = ContentHeaderPropertyWriter::new();

    properties.write_properties_to(&spec, &mut writer).unwrap();
    let bytes = writer.finish().unwrap();

    assert_eq!(&bytes[..2], &[0b1001_0000, 0x00]);
    assert_eq!(bytes[2], 10);
    assert_eq!(&bytes[3..13], b"text/plain");
    assert_eq!(bytes[13], 2);
    assert_eq!(bytes.len(), 14);
}

#[test]
fn Properties___read_properties_from___restores_written_values() {
    let spec = spec();
    let mut properties = Properties::new(&spec, 60).unwrap();
    properties.set(&spec, "timestamp", Some(Value::Timestamp(1_700_000_000))).unwrap();
    properties.set(&spec, "cluster-id", Some(Value::Shortstr("c1".into()))).unwrap();
    let mut writer = ContentHeaderPropertyWriter::new();
    properties.write_properties_to(&spec, &mut writer).unwrap();
    let bytes = writer.finish().unwrap();

    let mut reader = ContentHeaderPropertyReader::new(&bytes);
    let decoded = Properties::read_properties_from(&spec, 60, &mut reader).unwrap();

    assert_eq!(decoded, properties);
    assert_eq!(decoded.get(&spec, "timestamp"), Some(&Value::Timestamp(1_700_000_000)));
    assert_eq!(decoded.get(&spec, "priority"), None);
}

#[test]
fn Properties___set___wrong_type___fails() {
    let spec = spec();
    let mut properties = Properties::new(&spec, 60).unwrap();

    let result = properties.set(&spec, "headers", Some(Value::Shortstr("x".into())));

    assert!(matches!(
        result,
        Err(WireError::TypeMismatch { expected: Primitive::Table, .. })
    ));
}

#[test]
fn Properties___set___short_value_vector___fails() {
    let spec = spec();
    let mut properties = Properties {
        class_id: 60,
        values: vec![],
    };

    let result = properties.set(&spec, "content-type", Some(Value::Shortstr("text/plain".into())));

    assert!(matches!(
        result,
        Err(WireError::ArityMismatch { expected: 14, found: 0, .. })
    ));
    assert!(properties.values.is_empty());
}

#[test]
fn Properties___set_none___clears_field() {
    let spec = spec();
    let mut properties = Properties::new(&spec, 60).unwrap();
    properties.set(&spec, "priority", Some(Value::Octet(5))).unwrap();

    properties.set(&spec, "priority", None).unwrap();

    assert_eq!(properties.get(&spec, "priority"), None);
}
