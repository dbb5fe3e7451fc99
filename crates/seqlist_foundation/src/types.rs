//! The closed set of value types a sequence can be bound to.
//!
//! Each [`ValueType`] is a stateless capability set: it creates default
//! values, clones, parses, serializes, deserializes, and compares values of
//! its variant. Instances are `Copy` and shared freely by every sequence bound
//! to them.

use std::cmp::Ordering;
use std::fmt;

use crate::Result;
use crate::error::Error;
use crate::rational::Rational;
use crate::value::Value;

/// A built-in value type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 64-bit signed integers. Declared name `Integer`.
    Integer,
    /// 64-bit floats. Declared name `Double`.
    Double,
    /// Text. Declared name `String`.
    Text,
    /// Normalized rationals. Declared name `Fraction`.
    Rational,
}

impl ValueType {
    /// Every value type, in registry order.
    pub const ALL: [Self; 4] = [Self::Integer, Self::Double, Self::Text, Self::Rational];

    /// The declared name, as used by the registry and both file formats.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Double => "Double",
            Self::Text => "String",
            Self::Rational => "Fraction",
        }
    }

    /// The zero value of this type.
    #[must_use]
    pub fn default_value(self) -> Value {
        match self {
            Self::Integer => Value::Int(0),
            Self::Double => Value::Double(0.0),
            Self::Text => Value::Text(String::new()),
            Self::Rational => Value::Rational(Rational::ZERO),
        }
    }

    /// Returns true if `value` may be stored in a sequence of this type.
    ///
    /// `Nil` is accepted by every type.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        value.value_type().is_none_or(|t| t == self)
    }

    /// Copies a value; cloning `Nil` yields this type's default.
    #[must_use]
    pub fn clone_value(self, value: &Value) -> Value {
        match value {
            Value::Nil => self.default_value(),
            other => other.clone(),
        }
    }

    /// Parses text read from a file or typed at a prompt.
    ///
    /// Blank text yields the zero value. Rational text that does not match
    /// the `<int>`, `<int>/<int>`, `<int> <int>/<int>` grammar also yields zero.
    ///
    /// # Errors
    ///
    /// Returns a parse failure for malformed `Integer` or `Double` numerals.
    pub fn parse(self, text: &str) -> Result<Value> {
        self.deserialize(text)
    }

    /// Converts API input into a value, rejecting malformed numerals for the
    /// numeric types.
    ///
    /// Blank numeric input yields zero. Text is taken verbatim. Rational
    /// input never fails: malformed text yields zero, exactly as
    /// [`ValueType::parse`] does.
    ///
    /// # Errors
    ///
    /// Returns a parse failure for non-blank `Integer` or `Double` input that
    /// is not a well-formed numeral.
    pub fn deserialize(self, text: &str) -> Result<Value> {
        let trimmed = text.trim();
        match self {
            Self::Integer | Self::Double if trimmed.is_empty() => Ok(self.default_value()),
            Self::Integer => trimmed
                .parse()
                .map(Value::Int)
                .map_err(|e| Error::parse_failure(self, text, e)),
            Self::Double => trimmed
                .parse()
                .map(Value::Double)
                .map_err(|e| Error::parse_failure(self, text, e)),
            Self::Text => Ok(Value::Text(text.to_string())),
            Self::Rational => Ok(Value::Rational(text.parse().unwrap_or_default())),
        }
    }

    /// Converts a value to its text form. `Nil` becomes empty text.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn serialize(self, value: &Value) -> String {
        match value {
            Value::Nil => String::new(),
            other => other.to_string(),
        }
    }

    /// Total order over values of this type.
    ///
    /// Integers and doubles compare numerically (doubles by
    /// [`f64::total_cmp`]), text by UTF-16 code unit, rationals by
    /// [`Rational::compare`]. `Nil` sorts before everything else; values of
    /// another variant are ordered by variant after those of this type.
    #[must_use]
    pub fn compare(self, a: &Value, b: &Value) -> Ordering {
        match (self, a, b) {
            (Self::Integer, Value::Int(x), Value::Int(y)) => x.cmp(y),
            (Self::Double, Value::Double(x), Value::Double(y)) => x.total_cmp(y),
            (Self::Text, Value::Text(x), Value::Text(y)) => x.encode_utf16().cmp(y.encode_utf16()),
            (Self::Rational, Value::Rational(x), Value::Rational(y)) => x.compare(y),
            _ => self.rank(a).cmp(&self.rank(b)),
        }
    }

    /// Position used to order values that cannot be compared by content.
    fn rank(self, value: &Value) -> (u8, usize) {
        match value.value_type() {
            None => (0, 0),
            Some(t) if t == self => (1, 0),
            Some(t) => (2, Self::ALL.iter().position(|&v| v == t).unwrap_or(0)),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
