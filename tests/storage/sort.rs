//! Integration tests for sorting
//!
//! Tests ordering, idempotence, and multiset preservation.

use proptest::prelude::*;
use seqlist_foundation::{Rational, Value, ValueType};
use seqlist_storage::{Sequence, quicksort_by};

fn sorted_ints(values: Vec<i64>) -> Vec<i64> {
    let mut seq = Sequence::from_values(ValueType::Integer, values.into_iter().map(Value::Int))
        .unwrap();
    seq.sort();
    seq.iter().filter_map(Value::as_int).collect()
}

#[test]
fn sort_empty_and_single() {
    assert!(sorted_ints(vec![]).is_empty());
    assert_eq!(sorted_ints(vec![42]), [42]);
}

#[test]
fn sort_integers() {
    assert_eq!(sorted_ints(vec![3, -1, 2, 2, 0]), [-1, 0, 2, 2, 3]);
}

#[test]
fn sort_large_presorted_input() {
    let input: Vec<i64> = (0..5_000).collect();
    assert_eq!(sorted_ints(input.clone()), input);

    let reversed: Vec<i64> = (0..5_000).rev().collect();
    assert_eq!(sorted_ints(reversed), input);
}

#[test]
fn sort_text_by_code_unit() {
    let mut seq = Sequence::from_values(
        ValueType::Text,
        ["pear", "Apple", "apple", ""].into_iter().map(Value::from),
    )
    .unwrap();
    seq.sort();
    assert_eq!(seq.serialized(), ["", "Apple", "apple", "pear"]);
}

#[test]
fn sort_rationals() {
    let mut seq = Sequence::from_values(
        ValueType::Rational,
        [
            Rational::new(1, 1, 2),
            Rational::new(0, -3, 4),
            Rational::new(0, 1, 3),
            Rational::from_whole(1),
        ]
        .into_iter()
        .map(Value::Rational),
    )
    .unwrap();
    seq.sort();
    assert_eq!(seq.serialized(), ["-3/4", "1/3", "1", "1 1/2"]);
}

#[test]
fn sort_puts_nil_first() {
    let mut seq = Sequence::from_values(
        ValueType::Double,
        [Value::Double(2.5), Value::Nil, Value::Double(-1.0)],
    )
    .unwrap();
    seq.sort();
    assert_eq!(
        seq.to_vec(),
        [Value::Nil, Value::Double(-1.0), Value::Double(2.5)]
    );
}

#[test]
fn sort_by_custom_order() {
    let mut seq =
        Sequence::from_values(ValueType::Integer, [1, 3, 2].into_iter().map(Value::Int)).unwrap();
    seq.sort_by(|a, b| ValueType::Integer.compare(b, a));
    assert_eq!(seq.serialized(), ["3", "2", "1"]);
}

#[test]
fn quicksort_on_slices() {
    let mut words = ["delta", "alpha", "charlie", "bravo"];
    quicksort_by(&mut words, |a, b| a.cmp(b));
    assert_eq!(words, ["alpha", "bravo", "charlie", "delta"]);
}

proptest! {
    #[test]
    fn sort_matches_std(values in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(sorted_ints(values), expected);
    }

    #[test]
    fn sort_is_idempotent(values in prop::collection::vec(-50i64..50, 0..100)) {
        let once = sorted_ints(values);
        prop_assert_eq!(sorted_ints(once.clone()), once);
    }
}
