/// The result of a successful [`BidiMap::put`](crate::BidiMap::put).
///
/// A rejected candidate is reported through
/// [`DuplicateAssociation`](crate::errors::DuplicateAssociation) instead.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PutOutcome<K, V> {
    /// Neither the key nor the value was present, and the association was
    /// inserted.
    Inserted,

    /// The association was already present. The map was not modified.
    Unchanged,

    /// The association was inserted after evicting the associations it
    /// collided with.
    Overwrote {
        /// The association that held the key, if any.
        by_key: Option<(K, V)>,

        /// The association that held the value, if any.
        by_value: Option<(K, V)>,
    },

    /// The association collided and was discarded. It is handed back, and the
    /// map was not modified.
    Dropped(K, V),
}

impl<K, V> PutOutcome<K, V> {
    /// Returns true if the map was modified.
    #[inline]
    pub fn is_modified(&self) -> bool {
        matches!(self, PutOutcome::Inserted | PutOutcome::Overwrote { .. })
    }

    /// Returns the associations that were evicted, the one holding the key
    /// first.
    pub fn into_evicted(self) -> impl Iterator<Item = (K, V)> {
        let (by_key, by_value) = match self {
            PutOutcome::Overwrote { by_key, by_value } => (by_key, by_value),
            _ => (None, None),
        };
        by_key.into_iter().chain(by_value)
    }

    /// Returns the outcome as seen from the inverse map.
    pub fn flip(self) -> PutOutcome<V, K> {
        let flip_pair = |(key, value): (K, V)| (value, key);
        match self {
            PutOutcome::Inserted => PutOutcome::Inserted,
            PutOutcome::Unchanged => PutOutcome::Unchanged,
            PutOutcome::Overwrote { by_key, by_value } => {
                PutOutcome::Overwrote {
                    by_key: by_value.map(flip_pair),
                    by_value: by_key.map(flip_pair),
                }
            }
            PutOutcome::Dropped(key, value) => PutOutcome::Dropped(value, key),
        }
    }
}
