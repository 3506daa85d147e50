//! Hash-backed set with value semantics.
//!
//! This module provides [`ValueSet`], an unordered collection of unique
//! elements stored as the key set of a `std::collections::HashMap<T, ()>`.
//! The map is used purely as a presence marker; bucketing, probing, and
//! resizing stay the standard container's job.
//!
//! # Value Semantics
//!
//! A `ValueSet` owns its storage exclusively. Cloning produces an
//! independent copy, and algebraic operations always allocate a new set
//! instead of aliasing an operand:
//!
//! ```rust
//! use valueset::set::ValueSet;
//!
//! let original = ValueSet::from([1, 2, 3]);
//! let mut copy = original.clone();
//! copy.insert(4);
//!
//! assert_eq!(original.len(), 3); // Original unchanged
//! assert_eq!(copy.len(), 4);
//! ```
//!
//! # Algebraic Operations
//!
//! ```rust
//! use valueset::set::ValueSet;
//!
//! let set_a = ValueSet::from([1, 2, 3]);
//! let set_b = ValueSet::from([2, 3, 4]);
//!
//! assert_eq!(set_a.union(&set_b), ValueSet::from([1, 2, 3, 4]));
//! assert_eq!(set_a.intersection(&set_b), ValueSet::from([2, 3]));
//! assert_eq!(set_a.difference(&set_b), ValueSet::from([1]));
//! assert_eq!(set_a.symmetric_difference(&set_b), ValueSet::from([1, 4]));
//! ```
//!
//! # Cursors
//!
//! Positional access goes through [`SetCursor`], an opaque handle minted by
//! the set and invalidated by any mutation. Stale cursors are detected
//! deterministically rather than silently misbehaving:
//!
//! ```rust
//! use valueset::set::ValueSet;
//!
//! let set = ValueSet::from(["a", "b", "c"]);
//! let mut cursor = set.start_cursor();
//! let mut visited = 0;
//! while cursor != set.end_cursor() {
//!     let _element = set.element_at(cursor);
//!     cursor = set.next_cursor(cursor);
//!     visited += 1;
//! }
//! assert_eq!(visited, 3);
//! ```

mod cursor;
mod set_macro;
mod value_set;

pub use cursor::SetCursor;
pub use value_set::ValueSet;
pub use value_set::ValueSetIntoIterator;
pub use value_set::ValueSetIterator;

/// A [`ValueSet`] keyed by the `rustc-hash` Fx hasher.
///
/// Faster than the default `RandomState` for small keys, at the cost of
/// DoS resistance.
#[cfg(feature = "fxhash")]
pub type FxValueSet<T> = ValueSet<T, rustc_hash::FxBuildHasher>;

/// A [`ValueSet`] keyed by the `ahash` hasher.
#[cfg(feature = "ahash")]
pub type AHashValueSet<T> = ValueSet<T, ahash::RandomState>;

// =============================================================================
// Tests
// =============================================================================
