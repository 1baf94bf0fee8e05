//! A hash table of position tokens, hashed by one side of the association
//! each token points to.

use crate::internal::{IndexValidationError, ValidateCompact};
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use equivalent::Equivalent;
use hashbrown::HashTable;

/// One direction of a bijective map: hashes one side of an association to its
/// position in the item set.
///
/// The table never stores keys itself. Every operation that needs to compare
/// or rehash a stored entry is handed a `lookup` closure that resolves a
/// position back to the relevant side of the association.
#[derive(Clone, Debug, Default)]
pub(crate) struct MapHashTable<S> {
    state: S,
    positions: HashTable<usize>,
}

impl<S: BuildHasher> MapHashTable<S> {
    pub(crate) fn with_capacity_and_hasher(capacity: usize, state: S) -> Self {
        Self { state, positions: HashTable::with_capacity(capacity) }
    }

    #[inline]
    pub(crate) fn state(&self) -> &S {
        &self.state
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.positions.capacity()
    }

    #[inline]
    pub(crate) fn hash<Q: ?Sized + Hash>(&self, key: &Q) -> u64 {
        self.state.hash_one(key)
    }

    pub(crate) fn find_position<'a, K, Q, F>(
        &self,
        key: &Q,
        lookup: F,
    ) -> Option<usize>
    where
        K: 'a,
        Q: ?Sized + Hash + Equivalent<K>,
        F: Fn(usize) -> &'a K,
    {
        let hash = self.state.hash_one(key);
        self.positions
            .find(hash, |&position| key.equivalent(lookup(position)))
            .copied()
    }

    /// Records `position` under a precomputed `hash`.
    ///
    /// The caller guarantees that no equal key is present.
    pub(crate) fn insert_unique<'a, K, F>(
        &mut self,
        hash: u64,
        position: usize,
        lookup: F,
    ) where
        K: 'a + Hash,
        F: Fn(usize) -> &'a K,
    {
        let state = &self.state;
        self.positions.insert_unique(hash, position, |&other| {
            state.hash_one(lookup(other))
        });
    }

    /// Forgets `position`, which must have been recorded under `key`.
    ///
    /// Returns false if the position was not found.
    pub(crate) fn remove_position<Q: ?Sized + Hash>(
        &mut self,
        key: &Q,
        position: usize,
    ) -> bool {
        let hash = self.state.hash_one(key);
        match self.positions.find_entry(hash, |&other| other == position) {
            Ok(entry) => {
                entry.remove();
                true
            }
            Err(_) => false,
        }
    }

    pub(crate) fn reserve<'a, K, F>(&mut self, additional: usize, lookup: F)
    where
        K: 'a + Hash,
        F: Fn(usize) -> &'a K,
    {
        let state = &self.state;
        self.positions
            .reserve(additional, |&position| state.hash_one(lookup(position)));
    }

    pub(crate) fn shrink_to_fit<'a, K, F>(&mut self, lookup: F)
    where
        K: 'a + Hash,
        F: Fn(usize) -> &'a K,
    {
        let state = &self.state;
        self.positions
            .shrink_to_fit(|&position| state.hash_one(lookup(position)));
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.positions.clear();
    }

    pub(crate) fn validate(
        &self,
        expected_len: usize,
        compactness: ValidateCompact,
    ) -> Result<(), IndexValidationError> {
        if self.len() != expected_len {
            return Err(IndexValidationError::Length {
                expected: expected_len,
                actual: self.len(),
            });
        }

        let mut positions: Vec<usize> = self.positions.iter().copied().collect();
        positions.sort_unstable();

        match compactness {
            ValidateCompact::Compact => {
                // Without removals, positions are handed out densely from 0.
                if let Some((expected, &actual)) = positions
                    .iter()
                    .enumerate()
                    .find(|(i, position)| **position != *i)
                {
                    return Err(IndexValidationError::NotCompact {
                        expected,
                        actual,
                    });
                }
            }
            ValidateCompact::NonCompact => {
                if let Some(pair) =
                    positions.windows(2).find(|pair| pair[0] == pair[1])
                {
                    return Err(IndexValidationError::DuplicatePosition(pair[0]));
                }
            }
        }

        Ok(())
    }
}
