//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use seqlist_foundation::{Error, ErrorContext, ErrorKind, ValueType, signed_index};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_unknown_type() {
    let err = Error::unknown_type("Matrix");
    assert!(matches!(err.kind, ErrorKind::UnknownType(_)));
    assert_eq!(err.to_string(), "unknown type: Matrix");
}

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(ValueType::Integer, ValueType::Text);
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    let msg = err.to_string();
    assert!(msg.contains("Integer"));
    assert!(msg.contains("String"));
}

#[test]
fn error_index_out_of_range() {
    let err = Error::index_out_of_range(-1, 3);
    assert!(matches!(
        err.kind,
        ErrorKind::IndexOutOfRange { index: -1, size: 3 }
    ));
    assert_eq!(err.to_string(), "index out of range: -1 (size 3)");
}

#[test]
fn error_parse_failure() {
    let err = Error::parse_failure(ValueType::Double, "x1", "invalid float literal");
    let msg = err.to_string();
    assert!(msg.contains("Double"));
    assert!(msg.contains("\"x1\""));
}

#[test]
fn error_format_and_io() {
    assert!(matches!(
        Error::format("missing items").kind,
        ErrorKind::FormatError(_)
    ));
    assert!(matches!(Error::io("denied").kind, ErrorKind::IoFailure(_)));
    assert!(matches!(
        Error::invalid_command("nope").kind,
        ErrorKind::InvalidCommand(_)
    ));
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_does_not_change_message() {
    let err = Error::io("disk full").with_context(
        ErrorContext::new()
            .with_path("out.bin")
            .with_operation("save"),
    );
    assert_eq!(err.to_string(), "I/O error: disk full");
    assert_eq!(err.path().map(|p| p.to_string_lossy().into_owned()), Some("out.bin".into()));
}

#[test]
fn context_display() {
    let context = ErrorContext::new()
        .with_operation("load")
        .with_path("list.json")
        .with_item(2);
    let shown = context.to_string();
    assert!(shown.contains("during load"));
    assert!(shown.contains("list.json"));
    assert!(shown.contains("item 2"));
}

#[test]
fn signed_index_saturates() {
    assert_eq!(signed_index(7), 7);
    assert_eq!(signed_index(usize::MAX), i64::MAX);
}
