//! Integration tests for the binary format
//!
//! Tests the exact byte layout, absent items, and malformed input.

use proptest::prelude::*;
use seqlist_codec::{from_bytes, to_bytes};
use seqlist_foundation::{ErrorKind, TypeRegistry, Value, ValueType};
use seqlist_storage::Sequence;

fn registry() -> TypeRegistry {
    TypeRegistry::new()
}

#[test]
fn exact_layout() {
    let seq = Sequence::from_values(ValueType::Text, [Value::from("hi"), Value::Nil]).unwrap();
    let bytes = to_bytes(&seq).unwrap();

    let mut expected = vec![0, 6];
    expected.extend_from_slice(b"String");
    expected.extend_from_slice(&2i32.to_be_bytes());
    expected.extend_from_slice(&[0, 0, 2, b'h', b'i']);
    expected.push(1);
    assert_eq!(bytes, expected);
}

#[test]
fn absent_items_come_back_as_nil() {
    let seq = Sequence::from_values(ValueType::Double, [Value::Nil, Value::Double(1.5)]).unwrap();
    let back = from_bytes(&to_bytes(&seq).unwrap(), &registry()).unwrap();
    assert_eq!(back, seq);
}

#[test]
fn empty_sequence() {
    let seq = Sequence::new(ValueType::Rational);
    let back = from_bytes(&to_bytes(&seq).unwrap(), &registry()).unwrap();
    assert_eq!(back.prototype(), ValueType::Rational);
    assert!(back.is_empty());
}

#[test]
fn truncated_input_is_io_failure() {
    let seq = Sequence::from_values(ValueType::Integer, [Value::Int(1), Value::Int(2)]).unwrap();
    let bytes = to_bytes(&seq).unwrap();
    for cut in [0, 3, bytes.len() - 1] {
        let err = from_bytes(&bytes[..cut], &registry()).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IoFailure(_)), "cut at {cut}");
    }
}

#[test]
fn unknown_type_name() {
    let mut bytes = vec![0, 4];
    bytes.extend_from_slice(b"Long");
    bytes.extend_from_slice(&0i32.to_be_bytes());
    let err = from_bytes(&bytes, &registry()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownType(_)));
}

#[test]
fn negative_count_is_format_error() {
    let mut bytes = vec![0, 7];
    bytes.extend_from_slice(b"Integer");
    bytes.extend_from_slice(&(-1i32).to_be_bytes());
    let err = from_bytes(&bytes, &registry()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::FormatError(_)));
}

#[test]
fn supplementary_characters_round_trip() {
    let seq = Sequence::from_values(ValueType::Text, [Value::from("a\u{0}b 🦀")]).unwrap();
    let back = from_bytes(&to_bytes(&seq).unwrap(), &registry()).unwrap();
    assert_eq!(back, seq);
}

proptest! {
    #[test]
    fn integer_sequences_round_trip(values in prop::collection::vec(any::<Option<i64>>(), 0..50)) {
        let seq = Sequence::from_values(ValueType::Integer, values.into_iter().map(Value::from)).unwrap();
        let back = from_bytes(&to_bytes(&seq).unwrap(), &registry()).unwrap();
        prop_assert_eq!(back, seq);
    }
}
