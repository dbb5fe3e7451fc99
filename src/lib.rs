//! seqlist - Typed singly linked sequences with text and binary persistence
//!
//! This crate re-exports all layers of the seqlist system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: seqlist_runtime    - Session, command shell, CLI
//! Layer 2: seqlist_codec      - Text and binary formats, file I/O
//! Layer 1: seqlist_storage    - Node chain, quicksort, typed Sequence
//! Layer 0: seqlist_foundation - Value, ValueType, Rational, TypeRegistry, Error
//! ```

pub use seqlist_codec as codec;
pub use seqlist_foundation as foundation;
pub use seqlist_runtime as runtime;
pub use seqlist_storage as storage;
