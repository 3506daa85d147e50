//! Opaque cursor type for positional access into a set.
//!
//! A [`SetCursor`] pairs a position in the set's current iteration order
//! with the generation counter the set carried when the cursor was minted.
//! Every mutating operation bumps the generation, so a cursor from before a
//! mutation no longer matches and any attempt to use it is rejected with a
//! panic instead of silently reading the wrong element.

/// An opaque position handle into a [`ValueSet`](super::ValueSet).
///
/// Cursors are minted by [`start_cursor`](super::ValueSet::start_cursor) and
/// [`end_cursor`](super::ValueSet::end_cursor), which bound a half-open
/// range, and advanced with [`next_cursor`](super::ValueSet::next_cursor).
/// A cursor is only valid for the set state it was minted from: any
/// mutation of the set (including no-op inserts and removals, and capacity
/// reservations, which may reorder iteration) invalidates every outstanding
/// cursor.
///
/// Two cursors compare equal iff they denote the same position in the same
/// set state.
///
/// # Examples
///
/// ```rust
/// use valueset::set::ValueSet;
///
/// let set = ValueSet::from([10, 20]);
/// let cursor = set.start_cursor();
/// assert!(set.is_cursor_valid(cursor));
/// assert_ne!(cursor, set.end_cursor());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetCursor {
    position: usize,
    generation: u64,
}

impl SetCursor {
    pub(crate) const fn new(position: usize, generation: u64) -> Self {
        Self {
            position,
            generation,
        }
    }

    pub(crate) const fn position(self) -> usize {
        self.position
    }

    pub(crate) const fn generation(self) -> u64 {
        self.generation
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::SetCursor;
    use rstest::rstest;

    #[rstest]
    fn test_cursor_equality_requires_same_position_and_generation() {
        assert_eq!(SetCursor::new(0, 0), SetCursor::new(0, 0));
        assert_ne!(SetCursor::new(0, 0), SetCursor::new(1, 0));
        assert_ne!(SetCursor::new(0, 0), SetCursor::new(0, 1));
    }

    #[rstest]
    fn test_cursor_is_copy() {
        let cursor = SetCursor::new(2, 7);
        let copy = cursor;
        assert_eq!(cursor, copy);
        assert_eq!(copy.position(), 2);
        assert_eq!(copy.generation(), 7);
    }
}
