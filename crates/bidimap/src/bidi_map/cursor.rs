use super::{BidiMap, Inverse};
use crate::errors::ConcurrentModification;

/// A fail-fast cursor over the associations of a [`BidiMap`].
///
/// Created by [`BidiMap::cursor`]. A cursor remembers where it is, but does
/// not borrow the map between steps, so the map stays free to be modified.
/// Each step checks that the map has not been modified since the cursor was
/// created, and fails with [`ConcurrentModification`] if it has.
///
/// A cursor must only be advanced with the map it was created from.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use bidimap::{bidi_map, errors::ConcurrentModification};
///
/// let mut map = bidi_map! { 1 => 'a', 2 => 'b' };
/// let mut cursor = map.cursor();
/// assert!(cursor.next(&map).unwrap().is_some());
///
/// map.remove(&2).unwrap();
/// assert_eq!(cursor.next(&map), Err(ConcurrentModification));
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    generation: u64,
    // The next position to look at.
    position: usize,
}

impl Cursor {
    pub(super) fn new(generation: u64) -> Self {
        Self { generation, position: 0 }
    }

    /// Returns the next association, or `None` once every association has
    /// been visited.
    ///
    /// Associations are visited oldest first.
    pub fn next<'a, K, V, S>(
        &mut self,
        map: &'a BidiMap<K, V, S>,
    ) -> Result<Option<(&'a K, &'a V)>, ConcurrentModification> {
        if map.generation() != self.generation {
            return Err(ConcurrentModification);
        }

        // Positions of removed associations are skipped.
        while self.position < map.items.next_position() {
            let position = self.position;
            self.position += 1;
            if let Some(association) = map.items.get(position) {
                return Ok(Some(association.as_refs()));
            }
        }

        Ok(None)
    }

    /// Returns true if `map` has not been modified since this cursor was
    /// created.
    #[inline]
    pub fn is_valid_for<K, V, S>(&self, map: &BidiMap<K, V, S>) -> bool {
        map.generation() == self.generation
    }
}

/// A fail-fast cursor over the associations of an [`Inverse`] view.
///
/// Created by [`Inverse::cursor`]. This is a [`Cursor`] that yields
/// associations with keys and values swapped.
#[derive(Clone, Debug)]
pub struct InverseCursor {
    inner: Cursor,
}

impl InverseCursor {
    pub(super) fn new(inner: Cursor) -> Self {
        Self { inner }
    }

    /// Returns the next association as `(value, key)`, or `None` once every
    /// association has been visited.
    pub fn next<'a, K, V, S>(
        &mut self,
        inverse: &'a Inverse<K, V, S>,
    ) -> Result<Option<(&'a V, &'a K)>, ConcurrentModification> {
        let next = self.inner.next(inverse.inverse())?;
        Ok(next.map(|(key, value)| (value, key)))
    }

    /// Returns true if the map behind `inverse` has not been modified since
    /// this cursor was created.
    #[inline]
    pub fn is_valid_for<K, V, S>(&self, inverse: &Inverse<K, V, S>) -> bool {
        self.inner.is_valid_for(inverse.inverse())
    }
}
