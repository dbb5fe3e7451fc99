//! Integration tests for Session
//!
//! Exercises the list operations a front end drives: create, mutate,
//! query, save, and load.

use seqlist_codec::Format;
use seqlist_foundation::{ErrorKind, ValueType};
use seqlist_runtime::{RuntimeConfig, Session};
use tempfile::TempDir;

fn session_in(dir: &TempDir) -> Session {
    Session::new(RuntimeConfig::default().with_data_dir(dir.path()))
}

#[test]
fn list_types_in_registry_order() {
    assert_eq!(
        Session::default().list_types(),
        ["Integer", "Double", "String", "Fraction"]
    );
}

#[test]
fn operations_need_a_sequence() {
    let mut session = Session::default();
    assert!(matches!(session.add("1").unwrap_err().kind, ErrorKind::NoSequence));
    assert!(matches!(session.size().unwrap_err().kind, ErrorKind::NoSequence));
    assert!(matches!(
        session.save("x.json", None).unwrap_err().kind,
        ErrorKind::NoSequence
    ));
}

#[test]
fn create_unknown_type_keeps_current() {
    let mut session = Session::default();
    session.create("Integer").unwrap();
    session.add("5").unwrap();

    let err = session.create("Decimal").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownType(_)));
    assert_eq!(session.items().unwrap(), ["5"]);
}

#[test]
fn index_rules() {
    let mut session = Session::default();
    session.create("Integer").unwrap();
    session.add("10").unwrap();
    session.add("20").unwrap();

    for index in [-1, 2] {
        let err = session.get(index).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IndexOutOfRange { size: 2, .. }));
    }
    assert!(session.insert(3, "30").is_err());
    session.insert(2, "30").unwrap();
    assert_eq!(session.items().unwrap(), ["10", "20", "30"]);
    assert!(session.remove(-1).is_err());
    assert_eq!(session.remove(0).unwrap(), "10");
}

#[test]
fn strict_input_for_numbers() {
    let mut session = Session::default();
    session.create("Double").unwrap();
    let err = session.add("1.2.3").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseFailure { .. }));
    assert_eq!(session.size().unwrap(), 0);
}

#[test]
fn blank_numbers_are_stored_as_zero() {
    let mut session = Session::default();
    session.create("Integer").unwrap();
    session.add("").unwrap();
    session.insert(0, " ").unwrap();
    assert_eq!(session.items().unwrap(), vec!["0", "0"]);

    session.create("Double").unwrap();
    session.add(" ").unwrap();
    assert_eq!(session.get(0).unwrap(), "0.0");
}

#[test]
fn insert_checks_index_before_value() {
    let mut session = Session::default();
    session.create("Integer").unwrap();
    let err = session.insert(4, "not a number").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IndexOutOfRange { index: 4, size: 0 }));
}

#[test]
fn find_and_sort() {
    let mut session = Session::default();
    session.create("Fraction").unwrap();
    for text in ["3/2", "1/4", "-1", "6/8"] {
        session.add(text).unwrap();
    }
    assert_eq!(session.items().unwrap(), ["1 1/2", "1/4", "-1", "3/4"]);
    assert_eq!(session.find("3/4").unwrap(), Some(3));
    assert_eq!(session.find("6/8").unwrap(), None);

    session.sort().unwrap();
    assert_eq!(session.items().unwrap(), ["-1", "1/4", "3/4", "1 1/2"]);
}

#[test]
fn save_and_load_each_format() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(&dir);
    session.create("String").unwrap();
    session.add("héllo, \"world\"").unwrap();
    session.add("").unwrap();

    for (name, format) in [("s.json", Format::Text), ("s.bin", Format::Binary)] {
        let saved = session.save(name, Some(format)).unwrap();
        assert_eq!(saved, dir.path().join(name));

        let mut other = session_in(&dir);
        assert_eq!(other.load(name, Some(format)).unwrap(), ValueType::Text);
        assert_eq!(other.items().unwrap(), session.items().unwrap());
    }
}

#[test]
fn default_format_comes_from_config() {
    let dir = TempDir::new().unwrap();
    let config = RuntimeConfig::default()
        .with_data_dir(dir.path())
        .with_default_format(Format::Binary);
    let mut session = Session::new(config);
    session.create("Integer").unwrap();
    session.add("42").unwrap();
    session.save("n.dat", None).unwrap();

    let bytes = std::fs::read(dir.path().join("n.dat")).unwrap();
    assert_eq!(&bytes[..9], b"\x00\x07Integer");
}

#[test]
fn failed_load_keeps_current_sequence() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.json"), r#"{"type":"Money","items":[]}"#).unwrap();

    let mut session = session_in(&dir);
    session.create("Integer").unwrap();
    session.add("1").unwrap();

    let err = session.load("bad.json", None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownType(_)));
    assert!(session.load("missing.json", None).is_err());
    assert_eq!(session.sequence().map(|s| s.prototype()), Some(ValueType::Integer));
    assert_eq!(session.items().unwrap(), ["1"]);
}

#[test]
fn empty_path_is_rejected() {
    let mut session = Session::default();
    session.create("Integer").unwrap();
    let err = session.save("  ", None).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidCommand(_)));
}
