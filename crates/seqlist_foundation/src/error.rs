//! Error types for the seqlist system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::ValueType;

/// The main error type for seqlist operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown type error.
    #[must_use]
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownType(name.into()))
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: ValueType, actual: ValueType) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an index out of range error.
    #[must_use]
    pub fn index_out_of_range(index: i64, size: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfRange { index, size })
    }

    /// Creates a parse failure for text that is not a valid value of `value_type`.
    #[must_use]
    pub fn parse_failure(
        value_type: ValueType,
        input: impl Into<String>,
        message: impl fmt::Display,
    ) -> Self {
        Self::new(ErrorKind::ParseFailure {
            type_name: value_type.name().to_string(),
            input: input.into(),
            message: message.to_string(),
        })
    }

    /// Creates a format error.
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::FormatError(message.into()))
    }

    /// Creates an I/O failure error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoFailure(message.into()))
    }

    /// Creates an invalid command error.
    #[must_use]
    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCommand(message.into()))
    }

    /// Returns the path recorded in this error's context, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.context.as_ref().and_then(|ctx| ctx.path.as_deref())
    }
}

/// Converts a collection index to the signed form carried by
/// [`ErrorKind::IndexOutOfRange`].
#[must_use]
pub fn signed_index(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Type name is not in the registry.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// A value's variant does not match the sequence's bound type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The sequence's bound type.
        expected: ValueType,
        /// The type of the rejected value.
        actual: ValueType,
    },

    /// Index outside the valid range of the operation.
    #[error("index out of range: {index} (size {size})")]
    IndexOutOfRange {
        /// The index that was requested.
        index: i64,
        /// The size of the sequence at the time.
        size: usize,
    },

    /// Text is not a valid value of the given type.
    #[error("invalid value for type \"{type_name}\": {input:?} ({message})")]
    ParseFailure {
        /// Name of the type that rejected the text.
        type_name: String,
        /// The offending input.
        input: String,
        /// Description of the failure.
        message: String,
    },

    /// Persisted data is missing a required section or is structurally broken.
    #[error("format error: {0}")]
    FormatError(String),

    /// Underlying file missing, unreadable, or unwritable.
    #[error("I/O error: {0}")]
    IoFailure(String),

    /// Session operation attempted before any sequence was created or loaded.
    #[error("no sequence: create or load one first")]
    NoSequence,

    /// Malformed command line.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File being read or written.
    pub path: Option<PathBuf>,
    /// Operation in progress (e.g. `"load"`).
    pub operation: Option<String>,
    /// Zero-based position of the item being processed.
    pub item: Option<usize>,
    /// One-based line of a script being run.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the item position.
    #[must_use]
    pub fn with_item(mut self, item: usize) -> Self {
        self.item = Some(item);
        self
    }

    /// Sets the script line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(op) = &self.operation {
            write!(f, "during {op}")?;
            sep = " ";
        }
        if let Some(path) = &self.path {
            write!(f, "{sep}at {}", path.display())?;
            sep = " ";
        }
        if let Some(line) = self.line {
            write!(f, "{sep}line {line}")?;
            sep = " ";
        }
        if let Some(item) = self.item {
            write!(f, "{sep}(item {item})")?;
        }
        Ok(())
    }
}
