#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("octet", Primitive::Octet)]
#[test_case("shortstr", Primitive::Shortstr)]
#[test_case("longstr", Primitive::Longstr)]
#[test_case("short", Primitive::Short)]
#[test_case("long", Primitive::Long)]
#[test_case("longlong", Primitive::Longlong)]
#[test_case("bit", Primitive::Bit)]
#[test_case("table", Primitive::Table)]
#[test_case("timestamp", Primitive::Timestamp)]
fn Primitive___from_name___resolves_spec_names(name: &str, expected: Primitive) {
    assert_eq!(Primitive::from_name(name), Some(expected));
}

#[test_case("queue-name")]
#[test_case("Octet")]
#[test_case("")]
fn Primitive___from_name_unknown___returns_none(name: &str) {
    assert_eq!(Primitive::from_name(name), None);
}

#[test]
fn Primitive___name___inverts_from_name() {
    for primitive in Primitive::ALL {
        assert_eq!(Primitive::from_name(primitive.name()), Some(primitive));
    }
}

#[test]
fn Primitive___display___uses_spec_name() {
    assert_eq!(Primitive::Longlong.to_string(), "longlong");
}
