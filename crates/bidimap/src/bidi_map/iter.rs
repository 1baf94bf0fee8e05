use crate::support::item_set::{Association, ItemSet};
use core::iter::FusedIterator;
use hashbrown::hash_map;

/// An iterator over the associations of a [`BidiMap`] by shared reference.
///
/// Created by [`BidiMap::iter`]. The order is unspecified.
///
/// [`BidiMap`]: crate::BidiMap
/// [`BidiMap::iter`]: crate::BidiMap::iter
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    inner: hash_map::Values<'a, usize, Association<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(items: &'a ItemSet<K, V>) -> Self {
        Self { inner: items.values() }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Association::as_refs)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// hash_map::Values is a FusedIterator, so Iter is as well.
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a [`BidiMap`].
///
/// Created by [`BidiMap::keys`].
///
/// [`BidiMap`]: crate::BidiMap
/// [`BidiMap::keys`]: crate::BidiMap::keys
#[derive(Debug)]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(items: &'a ItemSet<K, V>) -> Self {
        Self { inner: Iter::new(items) }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`BidiMap`].
///
/// Created by [`BidiMap::values`].
///
/// [`BidiMap`]: crate::BidiMap
/// [`BidiMap::values`]: crate::BidiMap::values
#[derive(Debug)]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(items: &'a ItemSet<K, V>) -> Self {
        Self { inner: Iter::new(items) }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// An iterator over the associations of a [`BidiMap`] by ownership.
///
/// Created by [`BidiMap::into_iter`].
///
/// [`BidiMap`]: crate::BidiMap
/// [`BidiMap::into_iter`]: crate::BidiMap::into_iter
#[derive(Debug)]
pub struct IntoIter<K, V> {
    inner: hash_map::IntoValues<usize, Association<K, V>>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(items: ItemSet<K, V>) -> Self {
        Self { inner: items.into_values() }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Association::into_pair)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}
