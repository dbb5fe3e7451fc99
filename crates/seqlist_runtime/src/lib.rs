//! Session, command shell, and CLI for seqlist.
//!
//! This crate provides:
//! - [`Session`] - One current sequence plus the type registry and settings
//! - [`Command`] - Parsing of shell command lines
//! - [`Repl`] - Interactive shell and script runner
//! - [`RuntimeConfig`] - Defaults layered with environment and CLI flags

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod config;
pub mod editor;
pub mod repl;
pub mod session;

pub use command::Command;
pub use config::{RuntimeConfig, verbosity_filter};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Outcome, Repl};
pub use session::Session;
