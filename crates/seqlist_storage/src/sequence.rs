//! Sequences bound to a single value type.

use std::cmp::Ordering;
use std::fmt;

use seqlist_foundation::{Error, Result, Value, ValueType, signed_index};
use tracing::trace;

use crate::chain::{Chain, Iter};

/// An ordered, type-checked sequence of values.
///
/// Every stored value is `Nil` or belongs to the sequence's prototype type.
/// The prototype travels with the sequence, so replacing a sequence also
/// replaces its bound type.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    prototype: ValueType,
    items: Chain<Value>,
}

impl Sequence {
    /// Creates an empty sequence bound to `prototype`.
    #[must_use]
    pub const fn new(prototype: ValueType) -> Self {
        Self {
            prototype,
            items: Chain::new(),
        }
    }

    /// Builds a sequence from values, checking each against `prototype`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error on the first value of another type.
    pub fn from_values<I>(prototype: ValueType, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let items = values
            .into_iter()
            .map(|value| check(prototype, value))
            .collect::<Result<Chain<Value>>>()?;
        Ok(Self { prototype, items })
    }

    /// The type this sequence is bound to.
    #[must_use]
    pub const fn prototype(&self) -> ValueType {
        self.prototype
    }

    /// Number of values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`Sequence::len`].
    #[must_use]
    pub const fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a value.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if the value is not `Nil` and not of
    /// the prototype type. The sequence is unchanged on error.
    pub fn add(&mut self, value: Value) -> Result<()> {
        let value = check(self.prototype, value)?;
        self.items.push_back(value);
        Ok(())
    }

    /// Inserts a value so that it ends up at `index` (`0..=len`).
    ///
    /// # Errors
    ///
    /// Returns an index out of range error if `index > len`, or else a type
    /// mismatch error for a value of another type.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<()> {
        if index > self.len() {
            return Err(Error::index_out_of_range(signed_index(index), self.len()));
        }
        let value = check(self.prototype, value)?;
        self.items.insert(index, value)
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns an index out of range error if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.items
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(signed_index(index), self.len()))
    }

    /// Removes and returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns an index out of range error if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        self.items.remove(index)
    }

    /// Calls `visitor` for each value in order.
    pub fn for_each<F: FnMut(&Value)>(&self, visitor: F) {
        self.items.for_each(visitor);
    }

    /// Returns the first value satisfying `predicate`.
    pub fn find_first<P: FnMut(&Value) -> bool>(&self, predicate: P) -> Option<&Value> {
        self.items.find_first(predicate)
    }

    /// Returns the index of the first value satisfying `predicate`.
    pub fn position<P: FnMut(&Value) -> bool>(&self, predicate: P) -> Option<usize> {
        self.items.position(predicate)
    }

    /// Sorts ascending by the prototype's comparator. Not stable.
    pub fn sort(&mut self) {
        let prototype = self.prototype;
        trace!(len = self.len(), value_type = %prototype, "sorting sequence");
        self.items.sort_by(|a, b| prototype.compare(a, b));
    }

    /// Sorts with a caller-supplied comparator. Not stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        trace!(len = self.len(), "sorting sequence with custom comparator");
        self.items.sort_by(compare);
    }

    /// Iterates over the values in order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, Value> {
        self.items.iter()
    }

    /// Copies the values into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.to_vec()
    }

    /// Serialized form of every value, in order.
    #[must_use]
    pub fn serialized(&self) -> Vec<String> {
        self.iter().map(|v| self.prototype.serialize(v)).collect()
    }

    /// Removes every value. The prototype is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&self.prototype.serialize(value))?;
        }
        f.write_str("]")
    }
}

fn check(prototype: ValueType, value: Value) -> Result<Value> {
    match value.value_type() {
        Some(actual) if actual != prototype => Err(Error::type_mismatch(prototype, actual)),
        _ => Ok(value),
    }
}
