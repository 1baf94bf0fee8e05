use crate::{
    internal::{IndexSide, ValidateCompact, ValidationError},
    support::hash_table::MapHashTable,
};
use core::hash::BuildHasher;

#[derive(Clone, Debug, Default)]
pub(super) struct BidiMapTables<S> {
    pub(super) key_to_position: MapHashTable<S>,
    pub(super) value_to_position: MapHashTable<S>,
}

impl<S: Clone + BuildHasher> BidiMapTables<S> {
    pub(super) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            key_to_position: MapHashTable::with_capacity_and_hasher(
                capacity,
                hasher.clone(),
            ),
            value_to_position: MapHashTable::with_capacity_and_hasher(
                capacity, hasher,
            ),
        }
    }

    pub(super) fn hasher(&self) -> &S {
        self.key_to_position.state()
    }

    pub(super) fn validate(
        &self,
        expected_len: usize,
        compactness: ValidateCompact,
    ) -> Result<(), ValidationError> {
        self.key_to_position.validate(expected_len, compactness).map_err(
            |error| ValidationError::Index { side: IndexSide::Key, error },
        )?;
        self.value_to_position.validate(expected_len, compactness).map_err(
            |error| ValidationError::Index { side: IndexSide::Value, error },
        )?;

        Ok(())
    }

    pub(super) fn clear(&mut self) {
        self.key_to_position.clear();
        self.value_to_position.clear();
    }
}

impl<S> BidiMapTables<S> {
    /// Exchanges the two indexes. Positions are unchanged, so this is correct
    /// as long as the item set is flipped along with it.
    pub(super) fn flip(self) -> Self {
        Self {
            key_to_position: self.value_to_position,
            value_to_position: self.key_to_position,
        }
    }
}
