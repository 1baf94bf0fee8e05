use crate::internal::{ValidateCompact, ValidationError};
use alloc::format;
use core::ops::Index;
use hashbrown::{hash_map, HashMap};
use rustc_hash::FxBuildHasher;

/// A single stored `(key, value)` pair.
///
/// Associations are never mutated in place: replacing a key's value removes
/// the old association and stores a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Association<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Association<K, V> {
    #[inline]
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    #[inline]
    pub(crate) fn as_refs(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    #[inline]
    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    #[inline]
    pub(crate) fn flip(self) -> Association<V, K> {
        Association { key: self.value, value: self.key }
    }
}

/// The associations of a map, addressed by position tokens.
///
/// Both indexes of a map store positions into a single `ItemSet`, so each
/// association exists exactly once no matter which side it is looked up from.
#[derive(Clone, Debug)]
pub(crate) struct ItemSet<K, V> {
    // rustc-hash's FxHashMap is custom-designed for compact-ish integer keys.
    items: HashMap<usize, Association<K, V>, FxBuildHasher>,
    // The next position to hand out. Positions increase with insertion order,
    // so walking them in ascending order visits older associations first.
    next_position: usize,
}

impl<K, V> Default for ItemSet<K, V> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K, V> ItemSet<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashMap::with_capacity_and_hasher(
                capacity,
                FxBuildHasher,
            ),
            next_position: 0,
        }
    }

    pub(crate) fn validate(
        &self,
        compactness: ValidateCompact,
    ) -> Result<(), ValidationError> {
        if let Some(&position) =
            self.items.keys().find(|&&position| position >= self.next_position)
        {
            return Err(ValidationError::Items(format!(
                "position {position} is at or beyond next position {}",
                self.next_position
            )));
        }

        if compactness == ValidateCompact::Compact {
            for position in 0..self.next_position {
                if !self.items.contains_key(&position) {
                    return Err(ValidationError::Items(format!(
                        "not compact: missing position {position}"
                    )));
                }
            }
        }

        Ok(())
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn next_position(&self) -> usize {
        self.next_position
    }

    #[inline]
    pub(crate) fn iter(&self) -> hash_map::Iter<'_, usize, Association<K, V>> {
        self.items.iter()
    }

    #[inline]
    pub(crate) fn values(&self) -> hash_map::Values<'_, usize, Association<K, V>> {
        self.items.values()
    }

    #[inline]
    pub(crate) fn into_values(
        self,
    ) -> hash_map::IntoValues<usize, Association<K, V>> {
        self.items.into_values()
    }

    #[inline]
    pub(crate) fn get(&self, position: usize) -> Option<&Association<K, V>> {
        self.items.get(&position)
    }

    #[inline]
    pub(crate) fn push(&mut self, association: Association<K, V>) -> usize {
        let position = self.next_position;
        self.items.insert(position, association);
        self.next_position += 1;
        position
    }

    #[inline]
    pub(crate) fn remove(
        &mut self,
        position: usize,
    ) -> Option<Association<K, V>> {
        let removed = self.items.remove(&position);
        if removed.is_some() && position + 1 == self.next_position {
            // Reclaim the last position. This keeps positions compact for the
            // common "insert then remove" pattern, but doesn't guarantee it.
            self.next_position -= 1;
        }
        removed
    }

    #[inline]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    #[inline]
    pub(crate) fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.next_position = 0;
    }

    /// Swaps the roles of keys and values, keeping every association at its
    /// current position.
    pub(crate) fn flip(self) -> ItemSet<V, K> {
        let next_position = self.next_position;
        let mut items =
            HashMap::with_capacity_and_hasher(self.items.len(), FxBuildHasher);
        items.extend(
            self.items
                .into_iter()
                .map(|(position, association)| (position, association.flip())),
        );
        ItemSet { items, next_position }
    }
}

impl<K, V> Index<usize> for ItemSet<K, V> {
    type Output = Association<K, V>;

    #[inline]
    fn index(&self, position: usize) -> &Self::Output {
        self.items
            .get(&position)
            .unwrap_or_else(|| panic!("ItemSet position not found: {position}"))
    }
}
