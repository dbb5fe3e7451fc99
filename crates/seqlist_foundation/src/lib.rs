//! Value types, rationals, type registry, and errors for seqlist.
//!
//! This crate provides:
//! - [`Value`] - A runtime value of one of the built-in types, or nil
//! - [`ValueType`] - The capability set of one storable value kind
//! - [`Rational`] - Normalized mixed-number rationals
//! - [`TypeRegistry`] - Lookup of value types by declared name
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod rational;
pub mod registry;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, signed_index};
pub use rational::{ParseRationalError, Rational};
pub use registry::TypeRegistry;
pub use types::ValueType;
pub use value::Value;

/// Result type alias using the seqlist [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
