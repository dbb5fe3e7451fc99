//! Singly linked chains of owned nodes.
//!
//! A [`Chain`] owns its nodes through forward-only links. There is no tail
//! pointer, so appending walks the chain. Sorting detaches the nodes into a
//! buffer, sorts the buffer, and relinks the nodes in order.

use std::cmp::Ordering;
use std::fmt;

use seqlist_foundation::{Error, Result, signed_index};

use crate::sort::quicksort_by;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list with positional access.
pub struct Chain<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Chain<T> {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the chain has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prepends an element. O(1).
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Removes and returns the first element. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Appends an element. O(n): walks to the tail.
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        let tail = self.link_at(len);
        *tail = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Returns the element at `index` mutably, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.iter_mut().nth(index)
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns an index out of range error if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::index_out_of_range(signed_index(index), self.len));
        }

        let link = self.link_at(index);
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Unlinks and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an index out of range error if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        if index >= len {
            return Err(Error::index_out_of_range(signed_index(index), len));
        }

        let link = self.link_at(index);
        match link.take() {
            Some(node) => {
                let Node { value, next } = *node;
                *link = next;
                self.len -= 1;
                Ok(value)
            }
            None => Err(Error::index_out_of_range(signed_index(index), len)),
        }
    }

    /// Calls `visitor` once per element, head to tail.
    pub fn for_each<F: FnMut(&T)>(&self, mut visitor: F) {
        for value in self {
            visitor(value);
        }
    }

    /// Returns the first element satisfying `predicate`.
    pub fn find_first<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Option<&T> {
        self.iter().find(|value| predicate(value))
    }

    /// Returns the index of the first element satisfying `predicate`.
    pub fn position<P: FnMut(&T) -> bool>(&self, predicate: P) -> Option<usize> {
        self.iter().position(predicate)
    }

    /// Sorts the chain with [`quicksort_by`]. A no-op for fewer than two elements.
    ///
    /// The nodes themselves are reordered; no element is moved or cloned.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len <= 1 {
            return;
        }

        let mut nodes = Vec::with_capacity(self.len);
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
            nodes.push(node);
        }

        quicksort_by(&mut nodes, |a, b| compare(&a.value, &b.value));

        for mut node in nodes.into_iter().rev() {
            node.next = self.head.take();
            self.head = Some(node);
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }

    /// Iterates over the elements, head to tail.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Iterates mutably over the elements, head to tail.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Returns the link that holds the node at `index` (the tail link when
    /// `index >= len`).
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }
}

impl<T: Clone> Chain<T> {
    /// Copies the elements into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop overflows on long chains.
        self.clear();
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Chain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Chain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let len = self.len;
        let mut tail = self.link_at(len);
        let mut added = 0;
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut chain = Self::new();
        chain.extend(iter);
        chain
    }
}

/// Borrowing iterator over a [`Chain`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator over a [`Chain`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator over a [`Chain`].
pub struct IntoIter<T>(Chain<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Chain<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
