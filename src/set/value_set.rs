//! Hash-backed set with value semantics.
//!
//! This module provides [`ValueSet`], an unordered collection of unique
//! elements that stores its contents as the key set of a
//! `std::collections::HashMap<T, ()>`.
//!
//! # Overview
//!
//! `ValueSet` is a wrapper around `HashMap<T, (), S>` where the unit value
//! serves purely as a presence marker. The wrapper adds algebraic set
//! operations (union, intersection, difference, symmetric difference),
//! order-independent equality, a combinable hash, cursor-based positional
//! access, and brace-delimited rendering.
//!
//! - O(1) expected contains
//! - O(1) expected insert
//! - O(1) expected remove
//! - O(1) len and `is_empty`
//!
//! Iteration order is unspecified and unstable: it may change after any
//! mutation and must never be relied upon.
//!
//! # Examples
//!
//! ```rust
//! use valueset::set::ValueSet;
//!
//! let mut set = ValueSet::new();
//! set.insert(1);
//! set.insert(2);
//! set.insert(3);
//!
//! assert!(set.contains(&1));
//! assert!(!set.contains(&4));
//!
//! // Inserting a present element is a no-op
//! assert!(!set.insert(2));
//! assert_eq!(set.len(), 3);
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use valueset::set::ValueSet;
//!
//! let set_a = ValueSet::from([1, 2, 3]);
//! let set_b = ValueSet::from([2, 3, 4]);
//!
//! let union = set_a.union(&set_b);                    // {1, 2, 3, 4}
//! let intersection = set_a.intersection(&set_b);      // {2, 3}
//! let difference = set_a.difference(&set_b);          // {1}
//! let symmetric = set_a.symmetric_difference(&set_b); // {1, 4}
//!
//! assert_eq!(union.len(), 4);
//! assert_eq!(intersection.len(), 2);
//! assert_eq!(difference.len(), 1);
//! assert_eq!(symmetric.len(), 2);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, DefaultHasher, Hash, Hasher, RandomState};
use std::iter::FusedIterator;

use super::cursor::SetCursor;

// =============================================================================
// ValueSet Definition
// =============================================================================

/// An unordered collection of unique elements backed by
/// `std::collections::HashMap<T, (), S>`.
///
/// `ValueSet` has value semantics: cloning yields an independent copy, two
/// sets compare equal iff they hold the same elements regardless of
/// iteration order, and algebraic operations return new sets without
/// touching their operands.
///
/// # Time Complexity
///
/// | Operation              | Complexity                      |
/// |------------------------|---------------------------------|
/// | `new`                  | O(1)                            |
/// | `contains`             | O(1) expected                   |
/// | `insert`               | O(1) amortized expected         |
/// | `remove`               | O(1) expected                   |
/// | `len`                  | O(1)                            |
/// | `is_empty`             | O(1)                            |
/// | `union`                | O(n + m)                        |
/// | `intersection`         | O(min(n, m))                    |
/// | `difference`           | O(n)                            |
/// | `symmetric_difference` | O(n + m)                        |
/// | `element_at`           | O(n)                            |
///
/// # Hashing
///
/// `ValueSet` implements `Hash` by combining its elements' hashes with a
/// commutative aggregator, so equal sets hash identically even though their
/// iteration orders may differ. Sets can therefore nest:
///
/// ```rust
/// use valueset::set::ValueSet;
///
/// let mut families: ValueSet<ValueSet<i32>> = ValueSet::new();
/// families.insert(ValueSet::from([1, 2]));
///
/// // Same elements, different insertion order: one logical member
/// assert!(families.contains(&ValueSet::from([2, 1])));
/// ```
///
/// # Examples
///
/// ```rust
/// use valueset::set::ValueSet;
///
/// let set = ValueSet::singleton(42);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
#[derive(Clone)]
pub struct ValueSet<T, S = RandomState> {
    entries: HashMap<T, (), S>,
    generation: u64,
}

static_assertions::assert_impl_all!(ValueSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(ValueSet<String>: Send, Sync);
static_assertions::assert_not_impl_any!(ValueSet<std::rc::Rc<i32>>: Send, Sync);

impl<T> ValueSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set: ValueSet<i32> = ValueSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            generation: 0,
        }
    }

    /// Creates an empty set pre-sized for at least `capacity` elements.
    ///
    /// The capacity is a hint to reduce rehashing while the set grows; it
    /// never affects the logical contents.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of elements to pre-size for
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set: ValueSet<i32> = ValueSet::with_capacity(4);
    /// assert!(set.is_empty());
    /// assert_eq!(set.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            generation: 0,
        }
    }
}

impl<T: Hash + Eq> ValueSet<T> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(element);
        set
    }
}

impl<T, S> ValueSet<T, S> {
    /// Creates an empty set that hashes with the supplied hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::hash::RandomState;
    /// use valueset::set::ValueSet;
    ///
    /// let set: ValueSet<i32> = ValueSet::with_hasher(RandomState::new());
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hasher),
            generation: 0,
        }
    }

    /// Creates an empty set pre-sized for at least `capacity` elements that
    /// hashes with the supplied hasher.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, hasher),
            generation: 0,
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::from([1, 2]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let empty: ValueSet<i32> = ValueSet::new();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all elements from the set.
    ///
    /// Outstanding cursors are invalidated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let mut set = ValueSet::from([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.invalidate_cursors();
        self.entries.clear();
    }

    /// Returns some element of the set, without any selection rule.
    ///
    /// Which element is returned depends on the underlying container's
    /// current layout and may change after mutations. Returns `None` on an
    /// empty set; the absent case is an ordinary value, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let empty: ValueSet<i32> = ValueSet::new();
    /// assert_eq!(empty.arbitrary(), None);
    ///
    /// let set = ValueSet::singleton(7);
    /// assert_eq!(set.arbitrary(), Some(&7));
    /// ```
    #[inline]
    #[must_use]
    pub fn arbitrary(&self) -> Option<&T> {
        self.entries.keys().next()
    }

    /// Left-folds the set's elements into an accumulator.
    ///
    /// Elements are visited in unspecified order. For the result to be
    /// deterministic, `combine` must be commutative and associative; that
    /// is the caller's responsibility and is not enforced.
    ///
    /// # Arguments
    ///
    /// * `initial` - The starting accumulator value
    /// * `combine` - Folds one element into the accumulator
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::from([1, 2, 3, 4, 5]);
    /// let sum = set.fold(0, |accumulator, element| accumulator + element);
    /// assert_eq!(sum, 15);
    /// ```
    #[must_use]
    pub fn fold<B, F>(&self, initial: B, combine: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.entries.keys().fold(initial, combine)
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// The iterator is lazy, finite, and restartable; call `iter` again for
    /// a fresh pass. Order is unspecified and may differ between two passes
    /// over the same unmodified set on different program runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::from([1, 2, 3]);
    /// let total: i32 = set.iter().sum();
    /// assert_eq!(total, 6);
    /// ```
    #[must_use]
    pub fn iter(&self) -> ValueSetIterator<'_, T> {
        ValueSetIterator {
            inner: self.entries.keys(),
        }
    }

    fn invalidate_cursors(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

// =============================================================================
// Cursor Protocol
// =============================================================================

impl<T, S> ValueSet<T, S> {
    /// Returns the cursor of the first element in iteration order.
    ///
    /// Equals [`end_cursor`](Self::end_cursor) when the set is empty. The
    /// cursor is tied to the current set state; any mutation invalidates it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::from([1, 2, 3]);
    /// let mut cursor = set.start_cursor();
    /// let mut sum = 0;
    /// while cursor != set.end_cursor() {
    ///     sum += *set.element_at(cursor);
    ///     cursor = set.next_cursor(cursor);
    /// }
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    #[must_use]
    pub fn start_cursor(&self) -> SetCursor {
        SetCursor::new(0, self.generation)
    }

    /// Returns the past-the-end cursor.
    ///
    /// Together with [`start_cursor`](Self::start_cursor) it bounds a
    /// half-open range over the set's elements. The end cursor can be
    /// compared against but never dereferenced or advanced.
    #[inline]
    #[must_use]
    pub fn end_cursor(&self) -> SetCursor {
        SetCursor::new(self.entries.len(), self.generation)
    }

    /// Returns `true` if `cursor` was minted by this set after its last
    /// mutation and lies within the half-open cursor range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let mut set = ValueSet::from([1]);
    /// let cursor = set.start_cursor();
    /// assert!(set.is_cursor_valid(cursor));
    ///
    /// set.insert(2);
    /// assert!(!set.is_cursor_valid(cursor));
    /// ```
    #[must_use]
    pub fn is_cursor_valid(&self, cursor: SetCursor) -> bool {
        cursor.generation() == self.generation && cursor.position() <= self.entries.len()
    }

    /// Returns the element at `cursor`.
    ///
    /// Positional lookup walks the underlying container's iteration order,
    /// so dereferencing costs O(n).
    ///
    /// # Panics
    ///
    /// Panics if `cursor` predates a mutation of the set, or if `cursor` is
    /// the end cursor. Both are caller contract violations and are detected
    /// deterministically.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::singleton("only");
    /// let cursor = set.start_cursor();
    /// assert_eq!(*set.element_at(cursor), "only");
    /// ```
    #[must_use]
    pub fn element_at(&self, cursor: SetCursor) -> &T {
        self.assert_cursor_fresh(cursor);
        assert!(
            cursor.position() < self.entries.len(),
            "cannot dereference the end cursor of a set"
        );
        self.entries
            .keys()
            .nth(cursor.position())
            .expect("cursor position is within bounds")
    }

    /// Returns the cursor one position past `cursor`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` predates a mutation of the set, or if `cursor` is
    /// already the end cursor.
    #[must_use]
    pub fn next_cursor(&self, cursor: SetCursor) -> SetCursor {
        self.assert_cursor_fresh(cursor);
        assert!(
            cursor.position() < self.entries.len(),
            "cannot advance a set cursor past the end"
        );
        SetCursor::new(cursor.position() + 1, self.generation)
    }

    fn assert_cursor_fresh(&self, cursor: SetCursor) {
        assert_eq!(
            cursor.generation(),
            self.generation,
            "set cursor invalidated by mutation"
        );
    }
}

// =============================================================================
// Membership and Mutation
// =============================================================================

impl<T: Hash + Eq, S: BuildHasher> ValueSet<T, S> {
    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// `Hash` and `Eq` on the borrowed form must match those for the
    /// element type.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to check for
    ///
    /// # Complexity
    ///
    /// O(1) expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::from(["hello".to_string(), "world".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(element)
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was newly inserted. Inserting an
    /// element that is already present leaves the set unchanged and returns
    /// `false`; duplicates are never an error. Outstanding cursors are
    /// invalidated either way.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to insert
    ///
    /// # Complexity
    ///
    /// O(1) amortized expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let mut set = ValueSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.invalidate_cursors();
        self.entries.insert(element, ()).is_none()
    }

    /// Inserts an element, discarding the newly-inserted flag.
    ///
    /// This is the write-side counterpart of
    /// [`arbitrary`](Self::arbitrary): it adds an element to the unordered
    /// collection with the same no-op-on-duplicate behavior as
    /// [`insert`](Self::insert).
    pub fn insert_arbitrary(&mut self, element: T) {
        self.insert(element);
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present. Removing an absent
    /// element is a no-op, not an error. Outstanding cursors are
    /// invalidated either way.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to remove
    ///
    /// # Complexity
    ///
    /// O(1) expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let mut set = ValueSet::from([1, 2]);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.invalidate_cursors();
        self.entries.remove(element).is_some()
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// A best-effort hint delegated to the underlying container; the
    /// logical contents never change. Reserving may rehash and reorder
    /// iteration, so outstanding cursors are invalidated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let mut set = ValueSet::from([1, 2]);
    /// set.reserve(100);
    /// assert_eq!(set, ValueSet::from([1, 2]));
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.invalidate_cursors();
        self.entries.reserve(additional);
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// Equivalently, `self.difference(other)` is empty. Every set is a
    /// subset of itself.
    ///
    /// # Complexity
    ///
    /// O(n) expected, where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let subset = ValueSet::from([1, 2]);
    /// let superset = ValueSet::from([1, 2, 3]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// assert!(subset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if `self` is a subset of `other` and the two sets are
    /// not equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::from([1, 2, 3]);
    /// assert!(ValueSet::from([1, 2]).is_strict_subset(&set));
    /// assert!(!set.is_strict_subset(&set));
    /// ```
    #[must_use]
    pub fn is_strict_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if every element of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a superset of `other` and the two sets
    /// are not equal.
    #[must_use]
    pub fn is_strict_superset(&self, other: &Self) -> bool {
        other.is_strict_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Complexity
    ///
    /// O(min(n, m)) expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set_a = ValueSet::from([1, 2]);
    /// let set_b = ValueSet::from([3, 4]);
    /// let set_c = ValueSet::from([2, 3]);
    ///
    /// assert!(set_a.is_disjoint(&set_b));
    /// assert!(!set_a.is_disjoint(&set_c));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        // Probe the larger set while walking the smaller one
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller.iter().all(|element| !larger.contains(element))
    }
}

// =============================================================================
// Algebraic Operations and Transforms
// =============================================================================

impl<T: Clone + Hash + Eq, S: BuildHasher + Default> ValueSet<T, S> {
    /// Returns the union of two sets.
    ///
    /// The union contains every element that is in either set. Neither
    /// operand is mutated; the result is a copy of `self` extended with
    /// `other`'s elements.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to union with
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set_a = ValueSet::from([1, 2]);
    /// let set_b = ValueSet::from([2, 3]);
    ///
    /// assert_eq!(set_a.union(&set_b), ValueSet::from([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity_and_hasher(self.len() + other.len(), S::default());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }

    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only elements that are in both sets.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to intersect with
    ///
    /// # Complexity
    ///
    /// O(min(n, m)) expected: the smaller operand is iterated and the
    /// larger one is probed for membership.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set_a = ValueSet::from([1, 2, 3]);
    /// let set_b = ValueSet::from([2, 3, 4]);
    ///
    /// assert_eq!(set_a.intersection(&set_b), ValueSet::from([2, 3]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        // Iterate over the smaller set for better performance
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = Self::with_hasher(S::default());
        for element in smaller {
            if larger.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// This operation is asymmetric: `a.difference(&b)` and
    /// `b.difference(&a)` generally differ.
    ///
    /// # Arguments
    ///
    /// * `other` - The set to subtract
    ///
    /// # Complexity
    ///
    /// O(n) expected, where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set_a = ValueSet::from([1, 2, 3]);
    /// let set_b = ValueSet::from([2]);
    ///
    /// assert_eq!(set_a.difference(&set_b), ValueSet::from([1, 3]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::with_hasher(S::default());
        for element in self {
            if !other.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns the elements that are in exactly one of the two sets.
    ///
    /// Computed as the union minus the intersection.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set_a = ValueSet::from([1, 2]);
    /// let set_b = ValueSet::from([2, 3]);
    ///
    /// assert_eq!(set_a.symmetric_difference(&set_b), ValueSet::from([1, 3]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.union(other).difference(&self.intersection(other))
    }

    /// Returns a new set with the elements that satisfy the predicate.
    ///
    /// The predicate is called once per element, in unspecified order.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Returns `true` for elements to keep
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::from([1, 2, 3, 4, 5]);
    /// let evens = set.filter(|element| element % 2 == 0);
    ///
    /// assert_eq!(evens, ValueSet::from([2, 4]));
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut result = Self::with_hasher(S::default());
        for element in self {
            if predicate(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Applies a function to every element and collects the results into a
    /// new set.
    ///
    /// Distinct elements may map to the same result, so the output can be
    /// smaller than the input. `map` is `flat_map` over a one-element
    /// sequence.
    ///
    /// # Arguments
    ///
    /// * `transform` - Maps one element to its replacement
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::from([1, 2, 3]);
    /// let doubled = set.map(|element| element * 2);
    /// assert_eq!(doubled, ValueSet::from([2, 4, 6]));
    ///
    /// // Duplicate results collapse
    /// let parities = set.map(|element| element % 2);
    /// assert_eq!(parities.len(), 2);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut transform: F) -> ValueSet<U, S>
    where
        U: Hash + Eq,
        F: FnMut(&T) -> U,
    {
        self.flat_map(|element| std::iter::once(transform(element)))
    }

    /// Applies a sequence-producing function to every element and unions
    /// all results into a new set.
    ///
    /// # Arguments
    ///
    /// * `transform` - Maps one element to a sequence of results
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::from([1, 2]);
    /// let result = set.flat_map(|element| [*element, element * 10]);
    ///
    /// assert_eq!(result, ValueSet::from([1, 10, 2, 20]));
    /// ```
    #[must_use]
    pub fn flat_map<U, I, F>(&self, mut transform: F) -> ValueSet<U, S>
    where
        U: Hash + Eq,
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        let mut result = ValueSet::with_hasher(S::default());
        for element in self {
            result.extend(transform(element));
        }
        result
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`ValueSet`].
pub struct ValueSetIterator<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for ValueSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ValueSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for ValueSetIterator<'_, T> {}

impl<T> Clone for ValueSetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// An owning iterator over the elements of a [`ValueSet`].
pub struct ValueSetIntoIterator<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for ValueSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for ValueSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for ValueSetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for ValueSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            entries: HashMap::default(),
            generation: 0,
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for ValueSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        let iterator = iterable.into_iter();
        let mut set = Self::with_capacity_and_hasher(iterator.size_hint().0, S::default());
        set.extend(iterator);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for ValueSet<T> {
    /// Builds a set from a literal list of elements.
    ///
    /// Later duplicates collapse silently.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use valueset::set::ValueSet;
    ///
    /// let set = ValueSet::from([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for ValueSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for element in iterable {
            self.insert(element);
        }
    }
}

impl<T, S> IntoIterator for ValueSet<T, S> {
    type Item = T;
    type IntoIter = ValueSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        ValueSetIntoIterator {
            inner: self.entries.into_keys(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a ValueSet<T, S> {
    type Item = &'a T;
    type IntoIter = ValueSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, S: BuildHasher> PartialEq for ValueSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|element| other.contains(element))
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for ValueSet<T, S> {}

impl<T: Hash, S> Hash for ValueSet<T, S> {
    /// Combines the elements' hashes into one value for the whole set.
    ///
    /// Element hashes are aggregated with XOR, which is commutative, so
    /// equal sets hash identically regardless of iteration order. The
    /// aggregate is run through a final avalanche and mixed with the
    /// element count.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut combined = 0_u64;
        for element in self.entries.keys() {
            let mut element_hasher = DefaultHasher::new();
            element.hash(&mut element_hasher);
            combined ^= element_hasher.finish();
        }
        combined = combined.wrapping_add(combined << 3);
        combined ^= combined >> 11;
        combined = combined.wrapping_add(combined << 15);

        state.write_usize(self.entries.len());
        state.write_u64(combined);
    }
}

impl<T: fmt::Debug, S> fmt::Debug for ValueSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.entries.keys()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for ValueSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self.entries.keys() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for ValueSet<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.entries.keys() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ValueSetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<T, S> ValueSetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for ValueSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = ValueSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set =
            ValueSet::with_capacity_and_hasher(seq.size_hint().unwrap_or(0), S::default());
        while let Some(element) = seq.next_element()? {
            // Duplicate inputs collapse silently
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for ValueSet<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ValueSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_set() {
        let set: ValueSet<i32> = ValueSet::new();
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_display_single_element_set() {
        let set = ValueSet::singleton(42);
        assert_eq!(format!("{set}"), "{42}");
    }

    #[rstest]
    fn test_display_multiple_elements_set() {
        let set = ValueSet::from([1, 2, 3]);
        let display = format!("{set}");
        // The set is unordered, so only the shape is checked
        assert!(display.starts_with('{'));
        assert!(display.ends_with('}'));
        assert!(display.contains('1'));
        assert!(display.contains('2'));
        assert!(display.contains('3'));
        assert_eq!(display.matches(", ").count(), 2);
    }

    #[rstest]
    fn test_debug_formats_as_set() {
        let set = ValueSet::singleton(7);
        assert_eq!(format!("{set:?}"), "{7}");
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    fn test_new_creates_empty() {
        let set: ValueSet<i32> = ValueSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    fn test_with_capacity_starts_empty() {
        let set: ValueSet<i32> = ValueSet::with_capacity(4);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    fn test_singleton() {
        let set = ValueSet::singleton(42);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&42));
    }

    #[rstest]
    fn test_from_iter_deduplicates() {
        let set: ValueSet<i32> = vec![1, 2, 2, 3, 3, 3].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&1));
        assert!(set.contains(&2));
        assert!(set.contains(&3));
    }

    #[rstest]
    fn test_from_array_deduplicates() {
        let set = ValueSet::from([1, 1, 2]);
        assert_eq!(set, ValueSet::from([1, 2]));
    }

    #[rstest]
    fn test_round_trip_through_iteration() {
        let source = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let set: ValueSet<i32> = source.iter().copied().collect();
        let drained: Vec<i32> = set.clone().into_iter().collect();

        let rebuilt: ValueSet<i32> = drained.into_iter().collect();
        assert_eq!(rebuilt, set);
        assert_eq!(set.len(), 7);
    }

    // =========================================================================
    // Membership and Mutation Tests
    // =========================================================================

    #[rstest]
    fn test_insert_and_contains() {
        let mut set = ValueSet::new();
        set.insert(1);
        set.insert(2);
        set.insert(3);

        assert_eq!(set.len(), 3);
        assert!(set.contains(&1));
        assert!(set.contains(&2));
        assert!(set.contains(&3));
        assert!(!set.contains(&4));
    }

    #[rstest]
    fn test_insert_is_idempotent() {
        let mut once = ValueSet::new();
        once.insert(1);

        let mut twice = ValueSet::new();
        twice.insert(1);
        assert!(!twice.insert(1));

        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[rstest]
    fn test_insert_arbitrary_matches_insert() {
        let mut set = ValueSet::new();
        set.insert_arbitrary(1);
        set.insert_arbitrary(1);

        assert_eq!(set, ValueSet::from([1]));
    }

    #[rstest]
    fn test_remove() {
        let mut set = ValueSet::from([1, 2]);
        assert!(set.remove(&1));

        assert_eq!(set.len(), 1);
        assert!(!set.contains(&1));
        assert!(set.contains(&2));
    }

    #[rstest]
    fn test_remove_absent_is_noop() {
        let mut set = ValueSet::from([1, 2]);
        assert!(!set.remove(&9));
        assert_eq!(set, ValueSet::from([1, 2]));
    }

    #[rstest]
    fn test_clear() {
        let mut set = ValueSet::from([1, 2, 3]);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    fn test_arbitrary_on_empty_is_none() {
        let set: ValueSet<i32> = ValueSet::new();
        assert_eq!(set.arbitrary(), None);
    }

    #[rstest]
    fn test_arbitrary_returns_a_member() {
        let set = ValueSet::from([1, 2, 3]);
        let element = set.arbitrary().copied();
        assert!(element.is_some_and(|element| set.contains(&element)));
    }

    #[rstest]
    fn test_extend_inserts_every_element() {
        let mut set = ValueSet::from([1]);
        set.extend([1, 2, 3]);
        assert_eq!(set, ValueSet::from([1, 2, 3]));
    }

    #[rstest]
    fn test_reserve_preserves_contents() {
        let mut set = ValueSet::from([1, 2]);
        set.reserve(1000);
        assert_eq!(set, ValueSet::from([1, 2]));
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = ValueSet::from([1, 2]);
        let mut copy = original.clone();
        copy.insert(3);
        copy.remove(&1);

        assert_eq!(original, ValueSet::from([1, 2]));
        assert_eq!(copy, ValueSet::from([2, 3]));
    }

    // =========================================================================
    // Algebraic Operation Tests
    // =========================================================================

    #[rstest]
    fn test_union() {
        let set_a = ValueSet::from([1, 2]);
        let set_b = ValueSet::from([2, 3]);
        let union = set_a.union(&set_b);

        assert_eq!(union, ValueSet::from([1, 2, 3]));
        // Operands are untouched
        assert_eq!(set_a.len(), 2);
        assert_eq!(set_b.len(), 2);
    }

    #[rstest]
    fn test_union_with_empty_is_identity() {
        let set = ValueSet::from([1, 2]);
        let empty = ValueSet::new();
        assert_eq!(set.union(&empty), set);
        assert_eq!(empty.union(&set), set);
    }

    #[rstest]
    fn test_intersection() {
        let set_a = ValueSet::from([1, 2, 3]);
        let set_b = ValueSet::from([2, 3, 4]);

        assert_eq!(set_a.intersection(&set_b), ValueSet::from([2, 3]));
    }

    #[rstest]
    fn test_intersection_with_empty_is_empty() {
        let set = ValueSet::from([1, 2, 3]);
        let empty = ValueSet::new();
        assert!(set.intersection(&empty).is_empty());
        assert!(empty.intersection(&set).is_empty());
    }

    #[rstest]
    fn test_difference() {
        let set_a = ValueSet::from([1, 2, 3]);
        let set_b = ValueSet::from([2]);

        assert_eq!(set_a.difference(&set_b), ValueSet::from([1, 3]));
    }

    #[rstest]
    fn test_difference_is_asymmetric() {
        let set_a = ValueSet::from([1, 2]);
        let set_b = ValueSet::from([2, 3]);

        assert_eq!(set_a.difference(&set_b), ValueSet::from([1]));
        assert_eq!(set_b.difference(&set_a), ValueSet::from([3]));
    }

    #[rstest]
    fn test_difference_with_self_is_empty() {
        let set = ValueSet::from([1, 2, 3]);
        assert!(set.difference(&set).is_empty());
    }

    #[rstest]
    fn test_symmetric_difference() {
        let set_a = ValueSet::from([1, 2]);
        let set_b = ValueSet::from([2, 3]);

        assert_eq!(set_a.symmetric_difference(&set_b), ValueSet::from([1, 3]));
    }

    #[rstest]
    fn test_symmetric_difference_with_empty_is_identity() {
        let set = ValueSet::from([1, 2]);
        let empty = ValueSet::new();
        assert_eq!(set.symmetric_difference(&empty), set);
    }

    #[rstest]
    fn test_is_subset() {
        let subset = ValueSet::from([1, 2]);
        let superset = ValueSet::from([1, 2, 3]);

        assert!(subset.is_subset(&superset));
        assert!(!superset.is_subset(&subset));
        assert!(subset.is_subset(&subset));
    }

    #[rstest]
    fn test_is_strict_subset() {
        let set = ValueSet::from([1, 2, 3]);

        assert!(ValueSet::from([1, 2]).is_strict_subset(&set));
        assert!(!set.is_strict_subset(&set));
    }

    #[rstest]
    fn test_is_superset() {
        let superset = ValueSet::from([1, 2, 3]);
        let subset = ValueSet::from([1, 2]);

        assert!(superset.is_superset(&subset));
        assert!(!subset.is_superset(&superset));
        assert!(superset.is_superset(&superset));
        assert!(superset.is_strict_superset(&subset));
        assert!(!superset.is_strict_superset(&superset));
    }

    #[rstest]
    fn test_is_disjoint() {
        let set_a = ValueSet::from([1, 2]);
        let set_b = ValueSet::from([3, 4]);
        let set_c = ValueSet::from([2, 3]);

        assert!(set_a.is_disjoint(&set_b));
        assert!(!set_a.is_disjoint(&set_c));
    }

    // =========================================================================
    // Transform Tests
    // =========================================================================

    #[rstest]
    fn test_filter() {
        let set = ValueSet::from([1, 2, 3, 4, 5]);
        let evens = set.filter(|element| element % 2 == 0);

        assert_eq!(evens, ValueSet::from([2, 4]));
        assert_eq!(set.len(), 5);
    }

    #[rstest]
    fn test_map() {
        let set = ValueSet::from([1, 2, 3]);
        let doubled = set.map(|element| element * 2);

        assert_eq!(doubled, ValueSet::from([2, 4, 6]));
    }

    #[rstest]
    fn test_map_collapses_duplicate_results() {
        let set = ValueSet::from([1, 2, 3, 4]);
        let parities = set.map(|element| element % 2);

        assert_eq!(parities, ValueSet::from([0, 1]));
    }

    #[rstest]
    fn test_flat_map() {
        let set = ValueSet::from([1, 2]);
        let result = set.flat_map(|element| [*element, element * 10]);

        assert_eq!(result, ValueSet::from([1, 10, 2, 20]));
    }

    #[rstest]
    fn test_map_changes_element_type() {
        let set = ValueSet::from([1, 22, 333]);
        let lengths = set.map(|element| element.to_string().len());

        assert_eq!(lengths, [1_usize, 2, 3].into_iter().collect());
    }

    #[rstest]
    fn test_fold_sums_elements() {
        let set = ValueSet::from([1, 2, 3, 4, 5]);
        let sum = set.fold(0, |accumulator, element| accumulator + element);

        assert_eq!(sum, 15);
    }

    // =========================================================================
    // Equality and Hashing Tests
    // =========================================================================

    #[rstest]
    fn test_eq_ignores_insertion_order() {
        let set_a = ValueSet::from([1, 2, 3]);
        let set_b = ValueSet::from([3, 2, 1]);

        assert_eq!(set_a, set_b);
    }

    #[rstest]
    fn test_ne_for_different_contents() {
        assert_ne!(ValueSet::from([1, 2]), ValueSet::from([1, 3]));
        assert_ne!(ValueSet::from([1, 2]), ValueSet::from([1, 2, 3]));
    }

    #[rstest]
    fn test_equal_sets_hash_equal() {
        let set_a: ValueSet<i32> = (0..100).collect();
        let set_b: ValueSet<i32> = (0..100).rev().collect();

        assert_eq!(set_a, set_b);
        assert_eq!(hash_of(&set_a), hash_of(&set_b));
    }

    #[rstest]
    fn test_sets_nest() {
        let mut families: ValueSet<ValueSet<i32>> = ValueSet::new();
        families.insert(ValueSet::from([1, 2]));
        families.insert(ValueSet::from([2, 1]));
        families.insert(ValueSet::from([3]));

        assert_eq!(families.len(), 2);
        assert!(families.contains(&ValueSet::from([2, 1])));
    }

    // =========================================================================
    // Cursor Tests
    // =========================================================================

    #[rstest]
    fn test_cursor_walk_visits_every_element_once() {
        let set = ValueSet::from([1, 2, 3, 4]);
        let mut cursor = set.start_cursor();
        let mut visited = ValueSet::new();

        while cursor != set.end_cursor() {
            assert!(visited.insert(*set.element_at(cursor)));
            cursor = set.next_cursor(cursor);
        }
        assert_eq!(visited, set);
    }

    #[rstest]
    fn test_empty_set_start_cursor_equals_end_cursor() {
        let set: ValueSet<i32> = ValueSet::new();
        assert_eq!(set.start_cursor(), set.end_cursor());
    }

    #[rstest]
    fn test_cursor_validity_tracks_mutation() {
        let mut set = ValueSet::from([1]);
        let cursor = set.start_cursor();
        assert!(set.is_cursor_valid(cursor));

        // A no-op insert still counts as a mutation
        set.insert(1);
        assert!(!set.is_cursor_valid(cursor));
        assert!(set.is_cursor_valid(set.start_cursor()));
    }

    #[rstest]
    fn test_reserve_invalidates_cursors() {
        let mut set = ValueSet::from([1, 2]);
        let cursor = set.start_cursor();
        set.reserve(100);
        assert!(!set.is_cursor_valid(cursor));
    }

    #[rstest]
    #[should_panic(expected = "set cursor invalidated by mutation")]
    fn test_stale_cursor_dereference_panics() {
        let mut set = ValueSet::from([1, 2]);
        let cursor = set.start_cursor();
        set.remove(&1);
        let _ = set.element_at(cursor);
    }

    #[rstest]
    #[should_panic(expected = "cannot dereference the end cursor")]
    fn test_end_cursor_dereference_panics() {
        let set = ValueSet::from([1]);
        let _ = set.element_at(set.end_cursor());
    }

    #[rstest]
    #[should_panic(expected = "cannot advance a set cursor past the end")]
    fn test_advancing_end_cursor_panics() {
        let set: ValueSet<i32> = ValueSet::new();
        let _ = set.next_cursor(set.end_cursor());
    }

    // =========================================================================
    // Iterator Tests
    // =========================================================================

    #[rstest]
    fn test_iter_is_restartable() {
        let set = ValueSet::from([1, 2, 3]);
        let first_pass: i32 = set.iter().sum();
        let second_pass: i32 = set.iter().sum();

        assert_eq!(first_pass, 6);
        assert_eq!(second_pass, 6);
    }

    #[rstest]
    fn test_iter_len_matches_set_len() {
        let set = ValueSet::from([1, 2, 3]);
        assert_eq!(set.iter().len(), 3);

        let mut iterator = set.into_iter();
        assert_eq!(iterator.len(), 3);
        let _ = iterator.next();
        assert_eq!(iterator.len(), 2);
    }

    #[rstest]
    fn test_borrowing_into_iterator() {
        let set = ValueSet::from([1, 2, 3]);
        let mut total = 0;
        for element in &set {
            total += element;
        }
        assert_eq!(total, 6);
    }
}

// =============================================================================
// Serde Tests
// =============================================================================
