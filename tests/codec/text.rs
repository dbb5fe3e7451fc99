//! Integration tests for the text format
//!
//! Tests the writer layout and the permissive reader.

use seqlist_codec::{from_text, to_text};
use seqlist_foundation::{ErrorKind, Rational, TypeRegistry, Value, ValueType};
use seqlist_storage::Sequence;

fn registry() -> TypeRegistry {
    TypeRegistry::new()
}

// =============================================================================
// Reading
// =============================================================================

#[test]
fn reads_compact_integer_file() {
    let seq = from_text(r#"{"type":"Integer","items":["1","2","3"]}"#, &registry()).unwrap();
    assert_eq!(seq.prototype(), ValueType::Integer);
    assert_eq!(seq.to_vec(), [Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn unknown_type_name_fails() {
    let err = from_text(r#"{"type":"Quaternion","items":[]}"#, &registry()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownType(ref name) if name == "Quaternion"));
}

#[test]
fn missing_items_fails() {
    let err = from_text(r#"{"type":"Integer"}"#, &registry()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::FormatError(_)));
}

#[test]
fn missing_type_fails() {
    let err = from_text(r#"{"items":["1"]}"#, &registry()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::FormatError(_)));
}

#[test]
fn field_order_and_whitespace_are_free() {
    let content = "{\n\t\"items\" :\n [ \"a\" ,\"b\"\n ] ,\r\n \"TYPE\" :  \"String\" }";
    let seq = from_text(content, &registry()).unwrap();
    assert_eq!(seq.serialized(), ["a", "b"]);
}

#[test]
fn quoted_brackets_and_commas_stay_in_items() {
    let content = r#"{"type":"String","items":["a]b", "c,d", "e\"]"]}"#;
    let seq = from_text(content, &registry()).unwrap();
    assert_eq!(seq.serialized(), ["a]b", "c,d", "e\"]"]);
}

#[test]
fn escapes_are_decoded() {
    let content = r#"{"type":"String","items":["tab\there", "é\/", "\q"]}"#;
    let seq = from_text(content, &registry()).unwrap();
    assert_eq!(seq.serialized(), ["tab\there", "é/", "q"]);
}

#[test]
fn truncated_unicode_escape_is_literal() {
    let content = r#"{"type":"String","items":["\u12"]}"#;
    let seq = from_text(content, &registry()).unwrap();
    assert_eq!(seq.serialized(), ["\\u12"]);
}

#[test]
fn blank_numerals_load_as_zero() {
    let seq = from_text(r#"{"type":"Double","items":["", " "]}"#, &registry()).unwrap();
    assert_eq!(seq.to_vec(), [Value::Double(0.0), Value::Double(0.0)]);
}

#[test]
fn malformed_rationals_load_as_zero() {
    let seq = from_text(r#"{"type":"Fraction","items":["1/2", "oops"]}"#, &registry()).unwrap();
    assert_eq!(
        seq.to_vec(),
        [
            Value::Rational(Rational::new(0, 1, 2)),
            Value::Rational(Rational::ZERO)
        ]
    );
}

#[test]
fn malformed_integer_reports_item() {
    let err = from_text(r#"{"type":"Integer","items":["1","x"]}"#, &registry()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseFailure { .. }));
    assert_eq!(err.context.and_then(|c| c.item), Some(1));
}

// =============================================================================
// Writing
// =============================================================================

#[test]
fn writer_layout() {
    let seq = Sequence::from_values(ValueType::Integer, [Value::Int(1), Value::Int(2)]).unwrap();
    assert_eq!(
        to_text(&seq),
        "{\n  \"type\": \"Integer\",\n  \"items\": [\n    \"1\",\n    \"2\"\n  ]\n}\n"
    );
}

#[test]
fn writer_escapes_non_ascii() {
    let seq = Sequence::from_values(ValueType::Text, [Value::from("naïve \"q\"\n")]).unwrap();
    let text = to_text(&seq);
    assert!(text.contains(r#""na\u00efve \"q\"\n""#));
    assert!(text.is_ascii());
}

#[test]
fn round_trip_keeps_values_and_order() {
    let seq = Sequence::from_values(
        ValueType::Rational,
        [
            Value::Rational(Rational::new(2, 1, 3)),
            Value::Rational(Rational::new(0, -5, 8)),
            Value::Rational(Rational::from_whole(-4)),
        ],
    )
    .unwrap();
    let back = from_text(&to_text(&seq), &registry()).unwrap();
    assert_eq!(back, seq);
}

#[test]
fn nil_round_trips_as_default() {
    let seq = Sequence::from_values(ValueType::Integer, [Value::Nil, Value::Int(7)]).unwrap();
    let back = from_text(&to_text(&seq), &registry()).unwrap();
    assert_eq!(back.to_vec(), [Value::Int(0), Value::Int(7)]);
}
