//! # valueset
//!
//! A generic hash-backed set with value semantics, algebraic operations,
//! and cursor-based traversal.
//!
//! ## Overview
//!
//! This library provides [`ValueSet`](set::ValueSet), an unordered
//! collection of unique elements built as a thin wrapper over
//! `std::collections::HashMap<T, ()>`. It includes:
//!
//! - **Algebraic operations**: union, intersection, difference, symmetric
//!   difference, subset/superset/disjoint predicates
//! - **Value semantics**: clones are independent; equality ignores
//!   iteration order
//! - **Combinable hashing**: equal sets hash identically, so sets can nest
//!   (`ValueSet<ValueSet<T>>`)
//! - **Cursor-based traversal**: opaque positions with deterministic
//!   stale-cursor detection
//! - **Literal construction**: the [`value_set!`] macro
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a deduplicating sequence
//! - `fxhash`: `FxValueSet` alias using `rustc-hash`
//! - `ahash`: `AHashValueSet` alias using `ahash`
//!
//! ## Example
//!
//! ```rust
//! use valueset::prelude::*;
//! use valueset::value_set;
//!
//! let evens: ValueSet<i32> = value_set![2, 4, 6];
//! let small: ValueSet<i32> = value_set![1, 2, 3];
//!
//! let shared = evens.intersection(&small);
//! assert_eq!(shared, value_set![2]);
//! assert!(shared.is_subset(&evens));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use valueset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;

#[cfg(test)]
mod tests {
    use crate::set::ValueSet;

    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        let set: ValueSet<i32> = ValueSet::new();
        assert!(set.is_empty());
    }
}
