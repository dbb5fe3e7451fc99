//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, ValueType, Rational, TypeRegistry, and Error.

mod errors;
