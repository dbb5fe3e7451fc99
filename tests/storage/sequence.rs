//! Integration tests for Sequence
//!
//! Tests type-checked mutation, indexing, traversal, and search.

use seqlist_foundation::{ErrorKind, Rational, Value, ValueType};
use seqlist_storage::Sequence;

fn integers(values: &[i64]) -> Sequence {
    Sequence::from_values(ValueType::Integer, values.iter().copied().map(Value::Int)).unwrap()
}

fn ints(sequence: &Sequence) -> Vec<i64> {
    sequence.iter().filter_map(Value::as_int).collect()
}

// =============================================================================
// Mutation
// =============================================================================

#[test]
fn add_appends_in_order() {
    let mut seq = Sequence::new(ValueType::Integer);
    for n in [3, 1, 2] {
        seq.add(Value::Int(n)).unwrap();
    }
    assert_eq!(seq.size(), 3);
    assert_eq!(ints(&seq), [3, 1, 2]);
}

#[test]
fn add_rejects_other_variants() {
    let mut seq = Sequence::new(ValueType::Double);
    let err = seq.add(Value::from("1.5")).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: ValueType::Double,
            actual: ValueType::Text
        }
    ));
    assert!(seq.is_empty());
}

#[test]
fn nil_is_always_accepted() {
    let mut seq = Sequence::new(ValueType::Rational);
    seq.add(Value::Nil).unwrap();
    seq.insert(0, Value::Rational(Rational::new(0, 1, 2))).unwrap();
    assert_eq!(seq.serialized(), ["1/2", ""]);
}

#[test]
fn insert_at_size_appends() {
    let mut seq = integers(&[1, 2]);
    seq.insert(2, Value::Int(3)).unwrap();
    assert_eq!(ints(&seq), [1, 2, 3]);
}

#[test]
fn insert_past_size_fails() {
    let mut seq = integers(&[1, 2]);
    let err = seq.insert(3, Value::Int(9)).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::IndexOutOfRange { index: 3, size: 2 }
    ));
    assert_eq!(ints(&seq), [1, 2]);
}

#[test]
fn insert_range_check_precedes_type_check() {
    let mut seq = integers(&[1]);
    let err = seq.insert(5, Value::Double(1.0)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IndexOutOfRange { index: 5, size: 1 }));

    let err = seq.insert(1, Value::Double(1.0)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert_eq!(seq.len(), 1);
}

#[test]
fn remove_splices_out() {
    let mut seq = integers(&[10, 20, 30]);
    assert_eq!(seq.remove(1).unwrap(), Value::Int(20));
    assert_eq!(seq.remove(1).unwrap(), Value::Int(30));
    assert_eq!(ints(&seq), [10]);
    assert!(seq.remove(1).is_err());
}

#[test]
fn clear_keeps_prototype() {
    let mut seq = integers(&[1, 2, 3]);
    seq.clear();
    assert!(seq.is_empty());
    assert_eq!(seq.prototype(), ValueType::Integer);
}

// =============================================================================
// Access
// =============================================================================

#[test]
fn get_bounds() {
    let seq = integers(&[4, 5, 6]);
    assert_eq!(seq.get(0).unwrap(), &Value::Int(4));
    assert_eq!(seq.get(2).unwrap(), &Value::Int(6));
    let err = seq.get(3).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::IndexOutOfRange { index: 3, size: 3 }
    ));
}

#[test]
fn get_on_empty_fails() {
    assert!(Sequence::new(ValueType::Text).get(0).is_err());
}

#[test]
fn for_each_visits_in_order() {
    let seq = integers(&[1, 2, 3]);
    let mut seen = Vec::new();
    seq.for_each(|v| seen.push(v.clone()));
    assert_eq!(seen, seq.to_vec());
}

#[test]
fn find_first_returns_earliest_match() {
    let seq = integers(&[5, 8, 12, 8]);
    let even = seq.find_first(|v| v.as_int().is_some_and(|n| n % 2 == 0));
    assert_eq!(even, Some(&Value::Int(8)));
    assert_eq!(seq.position(|v| *v == Value::Int(8)), Some(1));
    assert_eq!(seq.find_first(|v| v.as_int() == Some(100)), None);
}

#[test]
fn display_lists_values() {
    let seq = Sequence::from_values(
        ValueType::Text,
        ["a", "b c"].into_iter().map(Value::from),
    )
    .unwrap();
    assert_eq!(seq.to_string(), "[a, b c]");
}

#[test]
fn long_sequence_drops_without_overflow() {
    let seq = Sequence::from_values(ValueType::Integer, (0..300_000).map(Value::Int)).unwrap();
    assert_eq!(seq.len(), 300_000);
    drop(seq);
}
