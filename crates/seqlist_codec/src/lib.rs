//! Hand-written text and binary persistence for seqlist sequences.
//!
//! This crate provides:
//! - [`text`] - The JSON-like text format and its permissive reader
//! - [`binary`] - The length-prefixed binary format
//! - [`escape`] - Escaping rules for strings in the text format
//! - [`Format`] - Selection between the two, by name
//! - [`save_to_file`] / [`load_from_file`] - File entry points
//!
//! Both readers resolve the stored type name through a [`TypeRegistry`] and
//! parse every item leniently with the resolved type.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binary;
pub mod escape;
pub mod text;

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use std::str::FromStr;

use seqlist_foundation::{Error, Result, TypeRegistry};
use seqlist_storage::Sequence;
use tracing::debug;

pub use binary::{from_bytes, read_binary, to_bytes, write_binary};
pub use text::{from_text, read_text, to_text, write_text};

/// A persisted file format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// The JSON-like text format.
    #[default]
    Text,
    /// The compact binary format.
    Binary,
}

impl Format {
    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Binary => "binary",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    /// Accepts `text`, `json`, `txt`, `bin` and `binary`, in any case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "json" | "txt" => Ok(Self::Text),
            "bin" | "binary" => Ok(Self::Binary),
            other => Err(Error::format(format!(
                "unknown format '{other}' (expected text or binary)"
            ))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Saves a sequence to a file, creating or truncating it.
///
/// The sequence is encoded before the file is touched, so an encoding
/// failure leaves any existing file as it was.
///
/// # Errors
///
/// Returns an I/O failure if the file cannot be created or written, or a
/// format error if the sequence cannot be encoded in binary.
pub fn save_to_file<P: AsRef<Path>>(sequence: &Sequence, path: P, format: Format) -> Result<()> {
    let path = path.as_ref();
    let with_file = |e: Error| in_file(e, path, "save");

    let bytes = match format {
        Format::Text => to_text(sequence).into_bytes(),
        Format::Binary => to_bytes(sequence).map_err(with_file)?,
    };

    let mut file = File::create(path).map_err(|e| {
        with_file(Error::io(format!(
            "failed to create file '{}': {e}",
            path.display()
        )))
    })?;

    file.write_all(&bytes).map_err(|e| {
        with_file(Error::io(format!(
            "failed to write file '{}': {e}",
            path.display()
        )))
    })?;

    debug!(
        path = %path.display(),
        %format,
        value_type = %sequence.prototype(),
        items = sequence.len(),
        "saved sequence"
    );
    Ok(())
}

/// Loads a sequence from a file.
///
/// # Errors
///
/// Returns an I/O failure if the file cannot be opened or read, and
/// otherwise the errors of [`read_text`] or [`read_binary`].
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    format: Format,
    registry: &TypeRegistry,
) -> Result<Sequence> {
    let path = path.as_ref();
    let with_file = |e: Error| in_file(e, path, "load");

    let file = File::open(path).map_err(|e| {
        with_file(Error::io(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let sequence = match format {
        Format::Text => read_text(&mut reader, registry),
        Format::Binary => read_binary(&mut reader, registry),
    }
    .map_err(with_file)?;

    debug!(
        path = %path.display(),
        %format,
        value_type = %sequence.prototype(),
        items = sequence.len(),
        "loaded sequence"
    );
    Ok(sequence)
}

/// Records the file and operation on an error, keeping any item position.
fn in_file(mut error: Error, path: &Path, operation: &str) -> Error {
    let context = error.context.take().unwrap_or_default();
    error.with_context(context.with_path(path).with_operation(operation))
}
