//! Codec surface: constructors, encoding, and numeric precision.

use dynjson_core::{Json, JsonError};
use std::io::Cursor;

/// Helper: parse a JSON document, panicking on failure.
fn parse(text: &str) -> Json {
    text.parse().expect("document must parse")
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn parse_from_str() {
    let js = parse(r#"{"name":"Alice"}"#);
    assert_eq!(js.get("name").as_str().unwrap(), "Alice");
}

#[test]
fn parse_from_slice() {
    let js = Json::from_slice(br#"{"port":8080}"#).unwrap();
    assert_eq!(js.get("port").as_i64().unwrap(), 8080);
}

#[test]
fn parse_from_reader() {
    let reader = Cursor::new(r#"{"nested":{"ok":true}}"#);
    let js = Json::from_reader(reader).unwrap();
    assert!(js.get("nested").get("ok").as_bool().unwrap());
}

#[test]
fn new_is_an_empty_object() {
    let js = Json::new();
    assert_eq!(js.encode().unwrap(), "{}");
}

#[test]
fn default_is_an_empty_object() {
    assert_eq!(Json::default().encode().unwrap(), "{}");
}

#[test]
fn from_value_and_into_value_roundtrip() {
    let value = serde_json::json!({"a": [1, 2]});
    let js = Json::from_value(value.clone());
    assert_eq!(js.clone().into_value(), value);
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn malformed_input_is_a_codec_error() {
    let err = "{not json".parse::<Json>().unwrap_err();
    assert!(matches!(err, JsonError::Codec(_)));
}

#[test]
fn truncated_input_fails() {
    assert!(r#"{"a":"#.parse::<Json>().is_err());
    assert!(Json::from_reader(Cursor::new(r#"[1,2,"#)).is_err());
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn encode_is_compact() {
    let js = parse(r#"{ "a" : 1 , "b" : [ true , null ] }"#);
    assert_eq!(js.encode().unwrap(), r#"{"a":1,"b":[true,null]}"#);
}

#[test]
fn encode_pretty_uses_two_space_indent() {
    let js = parse(r#"{"a":{"b":1}}"#);
    let pretty = js.encode_pretty().unwrap();
    assert_eq!(pretty, "{\n  \"a\": {\n    \"b\": 1\n  }\n}");
}

#[test]
fn display_renders_compact_encoding() {
    let js = parse(r#"{"x":[1,2]}"#);
    assert_eq!(format!("{}", js), r#"{"x":[1,2]}"#);
}

#[test]
fn encode_preserves_key_order() {
    let js = parse(r#"{"z":1,"a":2,"m":3}"#);
    assert_eq!(js.encode().unwrap(), r#"{"z":1,"a":2,"m":3}"#);
}

// ============================================================================
// Numeric precision through the codec
// ============================================================================

#[test]
fn roundtrip_preserves_number_literal() {
    // Numbers stay backed by their original digit sequence, so "1.0" does
    // not collapse to "1" on re-encode.
    for literal in ["1", "1.0", "-0.5", "0.30000000000000004"] {
        let js = parse(literal);
        assert_eq!(js.encode().unwrap(), literal, "literal {literal} changed");
    }
}

#[test]
fn roundtrip_normalizes_exponent_sign() {
    // The one normalization the codec applies: a bare positive exponent
    // gains an explicit sign. Digits are untouched.
    assert_eq!(parse("1e3").encode().unwrap(), "1e+3");
    assert_eq!(parse("1e-3").encode().unwrap(), "1e-3");
}

#[test]
fn parse_then_encode_is_structurally_stable() {
    let text = r#"{"big":18446744073709551615,"list":[1.5,"x",null],"flag":false}"#;
    let once = parse(text);
    let twice: Json = once.encode().unwrap().parse().unwrap();
    assert_eq!(once, twice);
}

#[test]
fn large_u64_survives_decode_exactly() {
    let js = parse("18446744073709551615");
    assert_eq!(js.as_u64().unwrap(), u64::MAX);
    assert_eq!(js.encode().unwrap(), "18446744073709551615");
}

// ============================================================================
// Version
// ============================================================================

#[test]
fn version_is_a_semver_string() {
    let v = dynjson_core::version();
    assert!(!v.is_empty());
    assert!(v.split('.').count() >= 2, "unexpected version format: {v}");
}
