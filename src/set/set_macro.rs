//! Literal construction macro for [`ValueSet`](super::ValueSet).
//!
//! The [`value_set!`](crate::value_set) macro builds a set from a finite
//! list of elements supplied at the call site, the way `vec!` builds a
//! vector. Duplicate elements in the list collapse silently.
//!
//! # Examples
//!
//! ```rust
//! use valueset::set::ValueSet;
//! use valueset::value_set;
//!
//! let set: ValueSet<i32> = value_set![1, 2, 3];
//! assert_eq!(set.len(), 3);
//!
//! let deduplicated: ValueSet<i32> = value_set![1, 1, 2];
//! assert_eq!(deduplicated.len(), 2);
//! ```

/// Builds a [`ValueSet`](crate::set::ValueSet) from a literal list of
/// elements.
///
/// Equivalent to collecting the listed elements into a set: later
/// duplicates collapse silently and no ordering is implied. With no
/// elements the macro expands to [`ValueSet::new`](crate::set::ValueSet::new),
/// so the element type must be inferable from context.
///
/// # Examples
///
/// ```rust
/// use valueset::set::ValueSet;
/// use valueset::value_set;
///
/// let empty: ValueSet<i32> = value_set![];
/// assert!(empty.is_empty());
///
/// let set: ValueSet<&str> = value_set!["a", "b", "a"];
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("a"));
/// ```
#[macro_export]
macro_rules! value_set {
    () => {
        $crate::set::ValueSet::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::set::ValueSet::from([$($element),+])
    };
}

// =============================================================================
// Tests
// =============================================================================
