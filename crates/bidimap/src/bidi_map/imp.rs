use super::{
    cursor::Cursor, tables::BidiMapTables, Inverse, IntoIter, Iter, Keys,
    PutOutcome, Values,
};
use crate::{
    errors::{Conflict, DuplicateAssociation, NotFound},
    internal::{IndexSide, ValidateCompact, ValidationError},
    policy::{Decision, DupPolicy, Duplication},
    support::{
        hash_builder::DefaultHashBuilder,
        item_set::{Association, ItemSet},
        log::{debug, trace},
    },
};
use alloc::vec::Vec;
use core::{
    fmt,
    hash::{BuildHasher, Hash},
};
use equivalent::Equivalent;
use ref_cast::RefCast;

/// A bijective map: every key maps to exactly one value, and every value is
/// mapped from exactly one key.
///
/// Each association is stored once, in a hash table of integer positions, and
/// indexed by two more hash tables: one from keys to positions and one from
/// values to positions. Lookups in either direction are O(1) on average.
///
/// Every mutation is validated against both indexes before anything is
/// written. What happens when a candidate association collides with existing
/// ones is decided by a [`DupPolicy`]: either one passed to
/// [`put`](Self::put), or the map's default policy used by
/// [`insert`](Self::insert).
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use bidimap::{BidiMap, DupPolicy, PutOutcome};
///
/// let mut map = BidiMap::new();
/// map.insert("H", 1).unwrap();
/// map.insert("He", 2).unwrap();
///
/// assert_eq!(map.get("H"), Some(&1));
/// assert_eq!(map.get_inverse(&2), Some(&"He"));
///
/// // The default policy re-points a key at a new value.
/// let outcome = map.insert("H", 3).unwrap();
/// assert_eq!(
///     outcome,
///     PutOutcome::Overwrote { by_key: Some(("H", 1)), by_value: None },
/// );
/// assert_eq!(map.get_inverse(&1), None);
///
/// // But it refuses to take a value away from another key.
/// assert!(map.insert("Li", 2).is_err());
/// assert_eq!(map.len(), 2);
/// # }
/// ```
#[derive(Clone)]
pub struct BidiMap<K, V, S = DefaultHashBuilder> {
    pub(super) items: ItemSet<K, V>,
    // Invariant: the values (usize) in these tables are valid positions in
    // `items`, and each position appears exactly once in each table.
    pub(super) tables: BidiMapTables<S>,
    policy: DupPolicy,
    // Bumped by every mutation, and checked by cursors.
    generation: u64,
}

/// A candidate association that was rejected by the policy, along with the
/// positions of the associations it collided with.
struct Rejection<K, V> {
    new: (K, V),
    conflict: Conflict,
    by_key: Option<usize>,
    by_value: Option<usize>,
}

impl<K, V> Rejection<K, V> {
    fn positions(&self) -> impl Iterator<Item = usize> {
        self.by_key.into_iter().chain(self.by_value)
    }
}

impl<K, V, S: Default> Default for BidiMap<K, V, S> {
    fn default() -> Self {
        Self {
            items: ItemSet::default(),
            tables: BidiMapTables::default(),
            policy: DupPolicy::default(),
            generation: 0,
        }
    }
}

#[cfg(feature = "default-hasher")]
impl<K, V> BidiMap<K, V> {
    /// Creates a new, empty `BidiMap`.
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a new, empty `BidiMap` with the given capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

#[cfg(feature = "default-hasher")]
impl<K: Eq + Hash, V: Eq + Hash> BidiMap<K, V> {
    /// Builds a map from `iter`, rejecting any association that collides with
    /// an earlier one.
    ///
    /// This is strict construction: every association is put with
    /// [`DupPolicy::RAISE`], and the first collision is returned as an owned
    /// error. For a lenient version that lets later associations win, use
    /// [`FromIterator`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bidimap::{BidiMap, errors::Conflict};
    ///
    /// let map = BidiMap::try_from_iter([(1, 'a'), (2, 'b')]).unwrap();
    /// assert_eq!(map.len(), 2);
    ///
    /// let err = BidiMap::try_from_iter([(1, 'a'), (2, 'a')]).unwrap_err();
    /// assert_eq!(err.conflict(), Conflict::Value);
    /// assert_eq!(err.duplicates(), &[(1, 'a')]);
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, DuplicateAssociation<K, V>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::try_from_iter_with_hasher(iter, DefaultHashBuilder::default())
    }
}

impl<K, V, S: Clone + BuildHasher> BidiMap<K, V, S> {
    /// Creates a new, empty `BidiMap` with the given hasher.
    ///
    /// Both indexes use a clone of `hasher`.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates a new, empty `BidiMap` with the given capacity and hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            items: ItemSet::with_capacity(capacity),
            tables: BidiMapTables::with_capacity_and_hasher(capacity, hasher),
            policy: DupPolicy::default(),
            generation: 0,
        }
    }

    /// Returns a reference to the map's hasher.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.tables.hasher()
    }
}

impl<K, V, S> BidiMap<K, V, S> {
    /// Returns the currently allocated capacity of the map.
    pub fn capacity(&self) -> usize {
        // items and the tables might theoretically diverge: use items.
        self.items.capacity()
    }

    /// Returns true if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of associations in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the policy used by [`insert`](Self::insert).
    #[inline]
    pub fn policy(&self) -> DupPolicy {
        self.policy
    }

    /// Sets the policy used by [`insert`](Self::insert).
    #[inline]
    pub fn set_policy(&mut self, policy: DupPolicy) {
        self.policy = policy;
    }

    /// Returns the map with a different policy for [`insert`](Self::insert).
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "default-hasher")] {
    /// use bidimap::{BidiMap, DupPolicy, PutOutcome};
    ///
    /// let mut map = BidiMap::new().with_policy(DupPolicy::DROP_NEW);
    /// map.insert(1, "one").unwrap();
    /// assert_eq!(map.insert(1, "uno").unwrap(), PutOutcome::Dropped(1, "uno"));
    /// # }
    /// ```
    #[inline]
    pub fn with_policy(mut self, policy: DupPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Iterates over the associations in the map, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.items)
    }

    /// Iterates over the keys in the map, in arbitrary order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(&self.items)
    }

    /// Iterates over the values in the map, in arbitrary order.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(&self.items)
    }

    /// Returns a detached cursor over the map.
    ///
    /// Unlike [`iter`](Self::iter), a cursor does not borrow the map, so the
    /// map can still be modified while a cursor exists. Advancing the cursor
    /// after any such modification fails with
    /// [`ConcurrentModification`](crate::errors::ConcurrentModification).
    /// A cursor visits older associations before newer ones.
    #[inline]
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.generation)
    }

    /// Returns a view of the map with keys and values swapped.
    ///
    /// The view borrows this map: lookups through it consult the same storage.
    ///
    /// ```
    /// # #[cfg(feature = "default-hasher")] {
    /// use bidimap::BidiMap;
    ///
    /// let mut map = BidiMap::new();
    /// map.insert(1, 'a').unwrap();
    ///
    /// let inverse = map.inverse();
    /// assert_eq!(inverse.get(&'a'), Some(&1));
    /// assert!(std::ptr::eq(inverse.inverse(), &map));
    /// # }
    /// ```
    #[inline]
    pub fn inverse(&self) -> &Inverse<K, V, S> {
        Inverse::ref_cast(self)
    }

    /// Returns a mutable view of the map with keys and values swapped.
    ///
    /// Writes through the view are writes to this map.
    #[inline]
    pub fn inverse_mut(&mut self) -> &mut Inverse<K, V, S> {
        Inverse::ref_cast_mut(self)
    }

    /// Consumes the map and returns the inverted map.
    ///
    /// The indexes are reused as they are, so nothing is rehashed. The
    /// default policy is swapped along with the map, so it treats keys and
    /// values the same way the [`inverse`](Self::inverse) view does.
    ///
    /// Cursors taken from the map before the call remain valid or stale
    /// exactly as they were; a valid one walks the inverted map from where it
    /// left off.
    pub fn into_inverse(self) -> BidiMap<V, K, S> {
        BidiMap {
            items: self.items.flip(),
            tables: self.tables.flip(),
            policy: self.policy.swapped(),
            // Carried over, so cursors taken before the flip stay stale.
            generation: self.generation,
        }
    }

    #[inline]
    pub(super) fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

impl<K: Eq + Hash, V: Eq + Hash, S: Clone + BuildHasher> BidiMap<K, V, S> {
    /// Builds a map with the given hasher from `iter`, rejecting any
    /// association that collides with an earlier one.
    ///
    /// See [`BidiMap::try_from_iter`].
    pub fn try_from_iter_with_hasher<I>(
        iter: I,
        hasher: S,
    ) -> Result<Self, DuplicateAssociation<K, V>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let iter = iter.into_iter();
        let mut map =
            Self::with_capacity_and_hasher(iter.size_hint().0, hasher);
        for (key, value) in iter {
            if let Err(rejection) = map.put_impl(key, value, DupPolicy::RAISE)
            {
                // The map is about to be dropped, so the duplicates can be
                // moved out of it instead of cloned.
                let duplicates = rejection
                    .positions()
                    .filter_map(|position| map.items.remove(position))
                    .map(Association::into_pair)
                    .collect();
                debug!(
                    "strict construction failed after {} association(s): {}",
                    map.len(),
                    rejection.conflict
                );
                return Err(DuplicateAssociation::new(
                    rejection.new,
                    rejection.conflict,
                    duplicates,
                ));
            }
        }
        Ok(map)
    }

    /// Checks general invariants of the map.
    ///
    /// The code below always upholds these invariants, but it's useful to have
    /// an explicit check for tests.
    #[doc(hidden)]
    pub fn validate(
        &self,
        compactness: ValidateCompact,
    ) -> Result<(), ValidationError> {
        self.items.validate(compactness)?;
        self.tables.validate(self.len(), compactness)?;

        // Check that both indexes point at the association they were built
        // from.
        for (&position, association) in self.items.iter() {
            let by_key = self.find_key_position(&association.key);
            if by_key != Some(position) {
                return Err(ValidationError::Unindexed {
                    position,
                    side: IndexSide::Key,
                    found: by_key,
                });
            }
            let by_value = self.find_value_position(&association.value);
            if by_value != Some(position) {
                return Err(ValidationError::Unindexed {
                    position,
                    side: IndexSide::Value,
                    found: by_value,
                });
            }
        }

        Ok(())
    }

    /// Returns true if the map contains the given key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.find_key_position(key).is_some()
    }

    /// Returns true if the map contains the given value.
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.find_value_position(value).is_some()
    }

    /// Returns the value the given key maps to.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.find_key_position(key).map(|position| &self.items[position].value)
    }

    /// Returns the key the given value is mapped from.
    pub fn get_inverse<Q>(&self, value: &Q) -> Option<&K>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.find_value_position(value)
            .map(|position| &self.items[position].key)
    }

    /// Returns how the association `key => value` relates to the current
    /// contents of the map, without modifying it.
    ///
    /// ```
    /// # #[cfg(feature = "default-hasher")] {
    /// use bidimap::{bidi_map, Duplication};
    ///
    /// let map = bidi_map! { 'a' => 1, 'b' => 2 };
    /// assert_eq!(map.classify(&'c', &3), Duplication::None);
    /// assert_eq!(map.classify(&'a', &3), Duplication::Key);
    /// assert_eq!(map.classify(&'c', &1), Duplication::Value);
    /// assert_eq!(map.classify(&'a', &1), Duplication::Identical);
    /// assert_eq!(map.classify(&'a', &2), Duplication::KeyAndValue);
    /// # }
    /// ```
    pub fn classify<QK, QV>(&self, key: &QK, value: &QV) -> Duplication
    where
        QK: ?Sized + Hash + Equivalent<K>,
        QV: ?Sized + Hash + Equivalent<V>,
    {
        Duplication::classify(
            self.find_key_position(key),
            self.find_value_position(value),
        )
    }

    /// Puts the association `key => value` into the map, resolving collisions
    /// with `policy`.
    ///
    /// The candidate is classified and checked against the policy before
    /// anything is written, so a rejected candidate leaves the map exactly as
    /// it was.
    ///
    /// * If neither the key nor the value is present, the association is
    ///   inserted.
    /// * If the association is already present, nothing happens.
    /// * Otherwise the applicable [`OnDup`](crate::OnDup) decides: evict the
    ///   colliding associations, drop the candidate, or return an error
    ///   borrowing the colliding associations.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "default-hasher")] {
    /// use bidimap::{bidi_map, errors::Conflict, DupPolicy, PutOutcome};
    ///
    /// let mut map = bidi_map! { 'a' => 1, 'b' => 2 };
    ///
    /// // 'a' is mapped to 1 and 2 is mapped from 'b': a both-sided collision.
    /// let err = map.put('a', 2, DupPolicy::RAISE).unwrap_err();
    /// assert_eq!(err.conflict(), Conflict::KeyAndValue);
    /// assert_eq!(err.duplicates(), &[(&'a', &1), (&'b', &2)]);
    ///
    /// let outcome = map.put('a', 2, DupPolicy::OVERWRITE).unwrap();
    /// assert_eq!(
    ///     outcome,
    ///     PutOutcome::Overwrote {
    ///         by_key: Some(('a', 1)),
    ///         by_value: Some(('b', 2)),
    ///     },
    /// );
    /// assert_eq!(map, bidi_map! { 'a' => 2 });
    /// # }
    /// ```
    pub fn put(
        &mut self,
        key: K,
        value: V,
        policy: DupPolicy,
    ) -> Result<PutOutcome<K, V>, DuplicateAssociation<K, V, (&K, &V)>> {
        match self.put_impl(key, value, policy) {
            Ok(outcome) => Ok(outcome),
            Err(rejection) => {
                let duplicates = rejection
                    .positions()
                    .map(|position| self.items[position].as_refs())
                    .collect();
                Err(DuplicateAssociation::new(
                    rejection.new,
                    rejection.conflict,
                    duplicates,
                ))
            }
        }
    }

    /// Puts the association `key => value` into the map using the map's
    /// default policy.
    ///
    /// Unless changed with [`set_policy`](Self::set_policy), this is
    /// [`DupPolicy::PUT`]: a key already present is re-pointed at the new
    /// value, but a value already present is an error.
    #[inline]
    pub fn insert(
        &mut self,
        key: K,
        value: V,
    ) -> Result<PutOutcome<K, V>, DuplicateAssociation<K, V, (&K, &V)>> {
        let policy = self.policy;
        self.put(key, value, policy)
    }

    /// Puts every association from `iter` into the map, stopping at the first
    /// one that `policy` rejects.
    ///
    /// Each association is put atomically, but the batch as a whole is not:
    /// associations put before the rejected one stay in the map, and the ones
    /// after it are never looked at.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(feature = "default-hasher")] {
    /// use bidimap::{BidiMap, DupPolicy};
    ///
    /// let mut map = BidiMap::new();
    /// let err = map
    ///     .put_all([(1, 'a'), (2, 'a'), (3, 'c')], DupPolicy::RAISE)
    ///     .unwrap_err();
    /// assert_eq!(err.new_association(), (&2, &'a'));
    ///
    /// // The first association was kept, and the third never put.
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&1), Some(&'a'));
    /// # }
    /// ```
    ///
    /// # Clone bounds
    ///
    /// The returned error owns copies of the colliding associations, which
    /// is why `K` and `V` must be `Clone`. For other types, call
    /// [`put`](Self::put) in a loop: its error borrows the associations
    /// instead.
    ///
    /// ```
    /// # #[cfg(feature = "default-hasher")] {
    /// use bidimap::{BidiMap, DupPolicy, errors::Conflict};
    ///
    /// #[derive(Debug, Eq, Hash, PartialEq)]
    /// struct Symbol(&'static str);
    ///
    /// let mut map = BidiMap::new();
    /// let mut rejected = Vec::new();
    /// for (number, symbol) in [(1, Symbol("H")), (2, Symbol("H"))] {
    ///     if let Err(error) = map.put(number, symbol, DupPolicy::RAISE) {
    ///         rejected.push((*error.new_association().0, error.conflict()));
    ///     }
    /// }
    /// assert_eq!(rejected, [(2, Conflict::Value)]);
    /// assert_eq!(map.get_inverse(&Symbol("H")), Some(&1));
    /// # }
    /// ```
    pub fn put_all<I>(
        &mut self,
        iter: I,
        policy: DupPolicy,
    ) -> Result<(), DuplicateAssociation<K, V>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Clone,
        V: Clone,
    {
        for (key, value) in iter {
            if let Err(error) = self.put(key, value, policy) {
                debug!("put_all aborted: {}", error.conflict());
                return Err(error.into_owned());
            }
        }
        Ok(())
    }

    /// Puts every association from `iter` into the map, collecting the ones
    /// that `policy` rejects instead of stopping at the first.
    ///
    /// Returns an empty vector if nothing was rejected.
    ///
    /// Like [`put_all`](Self::put_all), this requires `K: Clone` and
    /// `V: Clone` so that each error can own the associations it collided
    /// with. See the note there for types that are not `Clone`.
    pub fn put_all_collecting<I>(
        &mut self,
        iter: I,
        policy: DupPolicy,
    ) -> Vec<DuplicateAssociation<K, V>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Clone,
        V: Clone,
    {
        let mut errors = Vec::new();
        for (key, value) in iter {
            if let Err(error) = self.put(key, value, policy) {
                errors.push(error.into_owned());
            }
        }
        if !errors.is_empty() {
            debug!("put_all_collecting rejected {} association(s)", errors.len());
        }
        errors
    }

    /// Removes the association with the given key, returning it.
    ///
    /// Returns [`NotFound::Key`] if the key is not present.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<(K, V), NotFound>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.find_key_position(key)
            .and_then(|position| self.remove_by_position(position))
            .map(Association::into_pair)
            .ok_or(NotFound::Key)
    }

    /// Removes the association with the given value, returning it.
    ///
    /// Returns [`NotFound::Value`] if the value is not present.
    pub fn remove_inverse<Q>(&mut self, value: &Q) -> Result<(K, V), NotFound>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.find_value_position(value)
            .and_then(|position| self.remove_by_position(position))
            .map(Association::into_pair)
            .ok_or(NotFound::Value)
    }

    /// Removes all associations from the map.
    pub fn clear(&mut self) {
        self.items.clear();
        self.tables.clear();
        self.bump_generation();
    }

    /// Reserves capacity for at least `additional` more associations.
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
        let items = &self.items;
        self.tables
            .key_to_position
            .reserve(additional, |position| &items[position].key);
        self.tables
            .value_to_position
            .reserve(additional, |position| &items[position].value);
    }

    /// Shrinks the capacity of the map as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
        let items = &self.items;
        self.tables
            .key_to_position
            .shrink_to_fit(|position| &items[position].key);
        self.tables
            .value_to_position
            .shrink_to_fit(|position| &items[position].value);
    }

    fn find_key_position<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.tables
            .key_to_position
            .find_position(key, |position| &self.items[position].key)
    }

    fn find_value_position<Q>(&self, value: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.tables
            .value_to_position
            .find_position(value, |position| &self.items[position].value)
    }

    /// The two phases of a put. Everything up to `decide` only reads the map,
    /// so a rejection leaves it untouched.
    fn put_impl(
        &mut self,
        key: K,
        value: V,
        policy: DupPolicy,
    ) -> Result<PutOutcome<K, V>, Rejection<K, V>> {
        let by_key = self.find_key_position(&key);
        let by_value = self.find_value_position(&value);
        let duplication = Duplication::classify(by_key, by_value);

        match policy.decide(duplication) {
            Decision::Insert => {
                self.insert_new(key, value);
                Ok(PutOutcome::Inserted)
            }
            Decision::Unchanged => Ok(PutOutcome::Unchanged),
            Decision::Overwrite => {
                let by_key = by_key
                    .and_then(|position| self.remove_by_position(position))
                    .map(Association::into_pair);
                let by_value = by_value
                    .and_then(|position| self.remove_by_position(position))
                    .map(Association::into_pair);
                debug!(
                    "{duplication:?} collision: evicted {} association(s)",
                    usize::from(by_key.is_some()) + usize::from(by_value.is_some())
                );
                self.insert_new(key, value);
                Ok(PutOutcome::Overwrote { by_key, by_value })
            }
            Decision::DropNew => {
                debug!("{duplication:?} collision: dropped new association");
                Ok(PutOutcome::Dropped(key, value))
            }
            Decision::Reject(conflict) => {
                debug!("rejected new association: {conflict}");
                Err(Rejection { new: (key, value), conflict, by_key, by_value })
            }
        }
    }

    /// Stores an association whose key and value are both known to be
    /// absent.
    fn insert_new(&mut self, key: K, value: V) -> usize {
        // Hash before moving the key and value into the item set.
        let key_hash = self.tables.key_to_position.hash(&key);
        let value_hash = self.tables.value_to_position.hash(&value);
        let position = self.items.push(Association::new(key, value));

        let items = &self.items;
        self.tables.key_to_position.insert_unique(
            key_hash,
            position,
            |position| &items[position].key,
        );
        self.tables.value_to_position.insert_unique(
            value_hash,
            position,
            |position| &items[position].value,
        );
        self.bump_generation();
        trace!("inserted association at position {position}");

        position
    }

    fn remove_by_position(
        &mut self,
        position: usize,
    ) -> Option<Association<K, V>> {
        let association = self.items.remove(position)?;

        let by_key =
            self.tables.key_to_position.remove_position(&association.key, position);
        let by_value = self
            .tables
            .value_to_position
            .remove_position(&association.value, position);
        debug_assert!(
            by_key && by_value,
            "position {position} missing from an index \
             (key: {by_key}, value: {by_value})"
        );

        self.bump_generation();
        trace!("removed association at position {position}");

        Some(association)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for BidiMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S, S2> PartialEq<BidiMap<K, V, S2>> for BidiMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S: Clone + BuildHasher,
    S2: Clone + BuildHasher,
{
    fn eq(&self, other: &BidiMap<K, V, S2>) -> bool {
        // Two maps are equal if they hold the same associations, in any
        // order. Both sides are bijections, so checking that every
        // association of one is in the other is enough once the lengths
        // agree.
        //
        // The default policy, hasher and modification history are not part
        // of the comparison.
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Eq + Hash, V: Eq + Hash, S: Clone + BuildHasher> Eq
    for BidiMap<K, V, S>
{
}

impl<'a, K, V, S> IntoIterator for &'a BidiMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for BidiMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items)
    }
}

/// The `FromIterator` implementation for `BidiMap` overwrites: later
/// associations evict earlier ones they collide with.
///
/// To reject collisions instead, use [`BidiMap::try_from_iter`].
impl<K, V, S> FromIterator<(K, V)> for BidiMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S: Clone + BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BidiMap::default();
        map.extend(iter);
        map
    }
}

/// The `Extend` implementation overwrites, like `FromIterator`. The map's
/// default policy is not consulted.
impl<K, V, S> Extend<(K, V)> for BidiMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S: Clone + BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            match self.put_impl(key, value, DupPolicy::OVERWRITE) {
                Ok(_) => {}
                Err(rejection) => unreachable!(
                    "DupPolicy::OVERWRITE never rejects, but got a {} \
                     rejection",
                    rejection.conflict
                ),
            }
        }
    }
}
