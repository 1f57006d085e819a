#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("basic", "Basic")]
#[test_case("get-ok", "GetOk")]
#[test_case("recover-async", "RecoverAsync")]
#[test_case("start-ok", "StartOk")]
fn java_class_name___capitalizes_segments(input: &str, expected: &str) {
    assert_eq!(java_class_name(input), expected);
}

#[test_case("ticket", "ticket")]
#[test_case("routing-key", "routingKey")]
#[test_case("auto-delete", "autoDelete")]
#[test_case("version-major", "versionMajor")]
fn java_field_name___camel_cases_segments(input: &str, expected: &str) {
    assert_eq!(java_field_name(input), expected);
}

#[test_case("ticket", "getTicket")]
#[test_case("routing-key", "getRoutingKey")]
#[test_case("no-ack", "getNoAck")]
fn java_getter_name___prefixes_get(input: &str, expected: &str) {
    assert_eq!(java_getter_name(input), expected);
}

#[test]
fn java_name___drops_every_non_alphanumeric_separator() {
    assert_eq!(java_name(false, "out-of_band.x y"), "outOfBandXY");
}

#[test]
fn java_name___consecutive_separators_capitalize_once() {
    assert_eq!(java_name(false, "a--b"), "aB");
    assert_eq!(java_name(false, "trailing-"), "trailing");
}

#[test]
fn java_name___keeps_case_of_unseparated_characters() {
    assert_eq!(java_name(false, "Mixed-case"), "MixedCase");
    assert_eq!(java_name(true, "x-ID"), "XID");
}

#[test]
fn java_name___empty___returns_empty() {
    assert_eq!(java_name(true, ""), "");
}

#[test_case("FRAME-METHOD", "FRAME_METHOD")]
#[test_case("frame-min-size", "FRAME_MIN_SIZE")]
#[test_case("reply success", "REPLY_SUCCESS")]
fn java_constant_name___upper_snake_cases(input: &str, expected: &str) {
    assert_eq!(java_constant_name(input), expected);
}

#[test]
fn capitalize___capitalizes_first_letter() {
    assert_eq!(capitalize("contentType"), "ContentType");
    assert_eq!(capitalize("a"), "A");
    assert_eq!(capitalize(""), "");
}
