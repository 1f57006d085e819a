#![allow(non_snake_case)]

use super::*;

#[test]
fn write_shortstr___one_octet_length_prefix() {
    let mut out = Vec::new();

    write_shortstr(&mut out, "amq.direct").unwrap();

    assert_eq!(out[0], 10);
    assert_eq!(&out[1..], b"amq.direct");
}

#[test]
fn write_shortstr___256_bytes___fails() {
    let mut out = Vec::new();

    let result = write_shortstr(&mut out, &"x".repeat(256));

    assert!(matches!(result, Err(WireError::ShortstrTooLong { len: 256 })));
}

#[test]
fn write_shortstr___255_bytes___accepted() {
    let mut out = Vec::new();

    write_shortstr(&mut out, &"x".repeat(255)).unwrap();

    assert_eq!(out.len(), 256);
}

#[test]
fn write_longstr___four_octet_big_endian_length() {
    let mut out = Vec::new();

    write_longstr(&mut out, b"PLAIN").unwrap();

    assert_eq!(&out[..4], &[0, 0, 0, 5]);
    assert_eq!(&out[4..], b"PLAIN");
}

#[test]
fn write_table___empty___is_zero_length() {
    let mut out = Vec::new();

    write_table(&mut out, &FieldTable::new()).unwrap();

    assert_eq!(out, vec![0, 0, 0, 0]);
}

#[test]
fn write_table___entry_layout() {
    let mut table = FieldTable::new();
    table.insert("a".into(), FieldValue::Int(1));
    let mut out = Vec::new();

    write_table(&mut out, &table).unwrap();

    assert_eq!(out, vec![0, 0, 0, 7, 1, b'a', b'I', 0, 0, 0, 1]);
}

#[test]
fn read_table___nested_values_roundtrip() {
    let mut inner = FieldTable::new();
    inner.insert("publisher_confirms".into(), FieldValue::Bool(true));
    let mut table = FieldTable::new();
    table.insert("capabilities".into(), FieldValue::Table(inner));
    table.insert("product".into(), FieldValue::LongString(b"RabbitMQ".to_vec()));
    table.insert("list".into(), FieldValue::Array(vec![FieldValue::Short(-2), FieldValue::Void]));
    let mut out = Vec::new();
    write_table(&mut out, &table).unwrap();

    let decoded = read_table(&mut Cursor::new(out.as_slice())).unwrap();

    assert_eq!(decoded, table);
}

#[test]
fn read_table___unknown_tag___fails() {
    let bytes = [0, 0, 0, 3, 1, b'k', b'?'];

    let result = read_table(&mut Cursor::new(&bytes[..]));

    assert!(matches!(result, Err(WireError::InvalidFieldTag { tag: b'?' })));
}

#[test]
fn read_longstr___truncated___fails_without_allocating_claimed_length() {
    let bytes = [0xff, 0xff, 0xff, 0xff, 1];

    let result = read_longstr(&mut Cursor::new(&bytes[..]));

    assert!(matches!(result, Err(WireError::Io(_))));
}

#[test]
fn read_shortstr___invalid_utf8___fails() {
    let bytes = [2, 0xc3, 0x28];

    let result = read_shortstr(&mut Cursor::new(&bytes[..]));

    assert!(matches!(result, Err(WireError::InvalidUtf8(_))));
}
