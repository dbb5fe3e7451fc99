//! Lookup of value types by declared name.

use crate::Result;
use crate::error::Error;
use crate::types::ValueType;

/// The set of value types available to a session or loader.
///
/// Built explicitly and passed to whatever creates or loads sequences.
/// Holds the types in a fixed order, which is the order reported to users.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRegistry {
    types: Vec<ValueType>,
}

impl TypeRegistry {
    /// Creates a registry holding the four built-in types.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: ValueType::ALL.to_vec(),
        }
    }

    /// Declared names in registry order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.types.iter().map(|t| t.name()).collect()
    }

    /// Iterates over the registered types in order.
    pub fn iter(&self) -> impl Iterator<Item = ValueType> + '_ {
        self.types.iter().copied()
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Finds a type by exact, case-sensitive declared name.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<ValueType> {
        self.iter().find(|t| t.name() == name)
    }

    /// Like [`TypeRegistry::resolve`], but reports a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns an unknown type error if no type has this name.
    pub fn lookup(&self, name: &str) -> Result<ValueType> {
        self.resolve(name).ok_or_else(|| Error::unknown_type(name))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
