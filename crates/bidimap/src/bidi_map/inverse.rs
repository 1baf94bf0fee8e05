use super::{cursor::InverseCursor, BidiMap, Iter, Keys, PutOutcome, Values};
use crate::{
    errors::{DuplicateAssociation, NotFound},
    policy::{DupPolicy, Duplication},
    support::hash_builder::DefaultHashBuilder,
};
use alloc::vec::Vec;
use core::{
    fmt,
    hash::{BuildHasher, Hash},
    iter::FusedIterator,
};
use equivalent::Equivalent;
use ref_cast::RefCast;

/// A view of a [`BidiMap<K, V, S>`] with keys and values swapped.
///
/// Obtained through [`BidiMap::inverse`] and [`BidiMap::inverse_mut`]. The
/// view owns nothing: it is the map itself, seen from the other side. Through
/// the view, `V` is the key type and `K` the value type, and every operation
/// is forwarded to the map with its arguments and results swapped.
///
/// Collision policies are interpreted relative to the view. Putting
/// `value => key` through the view with some policy is exactly putting
/// `key => value` into the map with [`DupPolicy::swapped`] of that policy.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use bidimap::{BidiMap, PutOutcome};
///
/// let mut map = BidiMap::new();
/// map.insert("one", 1).unwrap();
///
/// // With the default policy, the view may re-point *its* keys.
/// let outcome = map.inverse_mut().insert(1, "uno").unwrap();
/// assert_eq!(
///     outcome,
///     PutOutcome::Overwrote { by_key: Some((1, "one")), by_value: None },
/// );
/// assert_eq!(map.get("uno"), Some(&1));
///
/// // The double inverse is the map itself.
/// assert!(std::ptr::eq(map.inverse().inverse(), &map));
/// # }
/// ```
#[derive(RefCast)]
#[repr(transparent)]
pub struct Inverse<K, V, S = DefaultHashBuilder> {
    map: BidiMap<K, V, S>,
}

impl<K, V, S> Inverse<K, V, S> {
    /// Returns the map this view inverts.
    #[inline]
    pub fn inverse(&self) -> &BidiMap<K, V, S> {
        &self.map
    }

    /// Returns the map this view inverts, mutably.
    #[inline]
    pub fn inverse_mut(&mut self) -> &mut BidiMap<K, V, S> {
        &mut self.map
    }

    /// Returns true if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of associations in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns the map's default policy.
    ///
    /// [`insert`](Self::insert) through the view applies this policy with the
    /// view's keys in the role of keys, which is the map's policy
    /// [swapped](DupPolicy::swapped).
    #[inline]
    pub fn policy(&self) -> DupPolicy {
        self.map.policy()
    }

    /// Iterates over the associations as `(value, key)` pairs, in arbitrary
    /// order.
    #[inline]
    pub fn iter(&self) -> InverseIter<'_, K, V> {
        InverseIter { inner: self.map.iter() }
    }

    /// Iterates over the keys of the view, which are the values of the map.
    #[inline]
    pub fn keys(&self) -> Values<'_, K, V> {
        self.map.values()
    }

    /// Iterates over the values of the view, which are the keys of the map.
    #[inline]
    pub fn values(&self) -> Keys<'_, K, V> {
        self.map.keys()
    }

    /// Returns a detached cursor yielding `(value, key)` pairs.
    ///
    /// See [`BidiMap::cursor`].
    #[inline]
    pub fn cursor(&self) -> InverseCursor {
        InverseCursor::new(self.map.cursor())
    }
}

impl<K: Eq + Hash, V: Eq + Hash, S: Clone + BuildHasher> Inverse<K, V, S> {
    /// Returns true if the view contains the given key, which is a value of
    /// the map.
    #[inline]
    pub fn contains_key<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.map.contains_value(value)
    }

    /// Returns true if the view contains the given value, which is a key of
    /// the map.
    #[inline]
    pub fn contains_value<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.contains_key(key)
    }

    /// Returns the key of the map that `value` is mapped from.
    #[inline]
    pub fn get<Q>(&self, value: &Q) -> Option<&K>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.map.get_inverse(value)
    }

    /// Returns the value of the map that `key` maps to.
    #[inline]
    pub fn get_inverse<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.get(key)
    }

    /// Returns how `value => key` relates to the contents of the view.
    pub fn classify<QV, QK>(&self, value: &QV, key: &QK) -> Duplication
    where
        QV: ?Sized + Hash + Equivalent<V>,
        QK: ?Sized + Hash + Equivalent<K>,
    {
        self.map.classify(key, value).flip()
    }

    /// Puts `value => key` into the view, resolving collisions with `policy`
    /// as seen from the view.
    ///
    /// See [`BidiMap::put`].
    pub fn put(
        &mut self,
        value: V,
        key: K,
        policy: DupPolicy,
    ) -> Result<PutOutcome<V, K>, DuplicateAssociation<V, K, (&V, &K)>> {
        match self.map.put(key, value, policy.swapped()) {
            Ok(outcome) => Ok(outcome.flip()),
            Err(error) => Err(error.flip()),
        }
    }

    /// Puts `value => key` into the view using the map's default policy, as
    /// seen from the view.
    #[inline]
    pub fn insert(
        &mut self,
        value: V,
        key: K,
    ) -> Result<PutOutcome<V, K>, DuplicateAssociation<V, K, (&V, &K)>> {
        let policy = self.map.policy();
        self.put(value, key, policy)
    }

    /// Puts every `(value, key)` pair from `iter` into the view, stopping at
    /// the first one that `policy` rejects.
    ///
    /// Like [`BidiMap::put_all`], pairs put before the rejected one stay in
    /// the map.
    ///
    /// The error owns copies of the colliding associations, so `K` and `V`
    /// must be `Clone`. For other types, call [`put`](Self::put) in a loop.
    pub fn put_all<I>(
        &mut self,
        iter: I,
        policy: DupPolicy,
    ) -> Result<(), DuplicateAssociation<V, K>>
    where
        I: IntoIterator<Item = (V, K)>,
        K: Clone,
        V: Clone,
    {
        self.map
            .put_all(
                iter.into_iter().map(|(value, key)| (key, value)),
                policy.swapped(),
            )
            .map_err(DuplicateAssociation::flip)
    }

    /// Puts every `(value, key)` pair from `iter` into the view, collecting
    /// the ones that `policy` rejects.
    ///
    /// This requires `K: Clone` and `V: Clone` for the same reason as
    /// [`put_all`](Self::put_all).
    pub fn put_all_collecting<I>(
        &mut self,
        iter: I,
        policy: DupPolicy,
    ) -> Vec<DuplicateAssociation<V, K>>
    where
        I: IntoIterator<Item = (V, K)>,
        K: Clone,
        V: Clone,
    {
        self.map
            .put_all_collecting(
                iter.into_iter().map(|(value, key)| (key, value)),
                policy.swapped(),
            )
            .into_iter()
            .map(DuplicateAssociation::flip)
            .collect()
    }

    /// Removes the association whose map value is `value`, returning it as
    /// `(value, key)`.
    ///
    /// Returns [`NotFound::Key`] if the value is not present, since it is a
    /// key of the view.
    pub fn remove<Q>(&mut self, value: &Q) -> Result<(V, K), NotFound>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        match self.map.remove_inverse(value) {
            Ok((key, value)) => Ok((value, key)),
            Err(error) => Err(error.flip()),
        }
    }

    /// Removes the association whose map key is `key`, returning it as
    /// `(value, key)`.
    pub fn remove_inverse<Q>(&mut self, key: &Q) -> Result<(V, K), NotFound>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        match self.map.remove(key) {
            Ok((key, value)) => Ok((value, key)),
            Err(error) => Err(error.flip()),
        }
    }

    /// Removes all associations from the map.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for Inverse<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S, S2> PartialEq<Inverse<K, V, S2>> for Inverse<K, V, S>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S: Clone + BuildHasher,
    S2: Clone + BuildHasher,
{
    fn eq(&self, other: &Inverse<K, V, S2>) -> bool {
        self.map == other.map
    }
}

impl<K: Eq + Hash, V: Eq + Hash, S: Clone + BuildHasher> Eq
    for Inverse<K, V, S>
{
}

// A view of `BidiMap<K, V>` holds the same kind of associations as a
// `BidiMap<V, K>`.
impl<K, V, S, S2> PartialEq<BidiMap<V, K, S2>> for Inverse<K, V, S>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S: Clone + BuildHasher,
    S2: Clone + BuildHasher,
{
    fn eq(&self, other: &BidiMap<V, K, S2>) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|(value, key)| other.get(value) == Some(key))
    }
}

impl<K, V, S, S2> PartialEq<Inverse<V, K, S2>> for BidiMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq + Hash,
    S: Clone + BuildHasher,
    S2: Clone + BuildHasher,
{
    fn eq(&self, other: &Inverse<V, K, S2>) -> bool {
        other == self
    }
}

impl<'a, K, V, S> IntoIterator for &'a Inverse<K, V, S> {
    type Item = (&'a V, &'a K);
    type IntoIter = InverseIter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the associations of an [`Inverse`] view, as
/// `(value, key)` pairs.
///
/// Created by [`Inverse::iter`].
#[derive(Debug)]
pub struct InverseIter<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> Clone for InverseIter<'_, K, V> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, K, V> Iterator for InverseIter<'a, K, V> {
    type Item = (&'a V, &'a K);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (value, key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for InverseIter<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for InverseIter<'_, K, V> {}
