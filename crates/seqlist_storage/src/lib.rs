//! Singly linked chains and type-checked sequences for seqlist.
//!
//! This crate provides:
//! - [`Chain`] - A generic singly linked list with positional access
//! - [`quicksort_by`] - Iterative quicksort with a Lomuto partition
//! - [`Sequence`] - A chain of values bound to one [`ValueType`]
//!
//! [`ValueType`]: seqlist_foundation::ValueType

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chain;
pub mod sequence;
pub mod sort;

pub use chain::Chain;
pub use sequence::Sequence;
pub use sort::quicksort_by;
