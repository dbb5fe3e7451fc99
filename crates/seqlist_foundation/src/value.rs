//! Runtime values stored in sequences.

use std::fmt;

use crate::rational::Rational;
use crate::types::ValueType;

/// A value of one of the built-in value types, or the absent sentinel.
///
/// The variant is the runtime discriminant a [`ValueType`] checks values
/// against; see [`Value::value_type`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absent value. Accepted by every value type.
    Nil,
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Double(f64),
    /// Text.
    Text(String),
    /// Normalized rational.
    Rational(Rational),
}

impl Value {
    /// Returns the value type this value belongs to, or `None` for `Nil`.
    #[must_use]
    pub const fn value_type(&self) -> Option<ValueType> {
        match self {
            Self::Nil => None,
            Self::Int(_) => Some(ValueType::Integer),
            Self::Double(_) => Some(ValueType::Double),
            Self::Text(_) => Some(ValueType::Text),
            Self::Rational(_) => Some(ValueType::Rational),
        }
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a rational.
    #[must_use]
    pub const fn as_rational(&self) -> Option<Rational> {
        match self {
            Self::Rational(r) => Some(*r),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n:?}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Rational(r) => write!(f, "{r}"),
        }
    }
}

// Convenience From implementations

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Self::Rational(r)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}
