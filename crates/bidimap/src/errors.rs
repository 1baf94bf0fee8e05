//! Error types for this crate.

use alloc::vec::Vec;
use core::fmt;

/// Which side of a candidate association collided with the map.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Conflict {
    /// The key is already mapped to a different value.
    Key,

    /// The value is already mapped from a different key.
    Value,

    /// The key and the value are both present, in two different
    /// associations.
    KeyAndValue,
}

impl Conflict {
    /// Returns true if the key of the candidate was already present.
    ///
    /// This is true for both [`Conflict::Key`] and
    /// [`Conflict::KeyAndValue`].
    #[inline]
    pub fn is_key_duplication(self) -> bool {
        matches!(self, Conflict::Key | Conflict::KeyAndValue)
    }

    /// Returns true if the value of the candidate was already present.
    ///
    /// This is true for both [`Conflict::Value`] and
    /// [`Conflict::KeyAndValue`].
    #[inline]
    pub fn is_value_duplication(self) -> bool {
        matches!(self, Conflict::Value | Conflict::KeyAndValue)
    }

    /// Returns the conflict as seen from the inverse map.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Conflict::Key => Conflict::Value,
            Conflict::Value => Conflict::Key,
            Conflict::KeyAndValue => Conflict::KeyAndValue,
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Key => f.write_str("duplicate key"),
            Conflict::Value => f.write_str("duplicate value"),
            Conflict::KeyAndValue => f.write_str("duplicate key and value"),
        }
    }
}

/// An association conflicts with existing associations, and the policy for
/// that conflict was [`OnDup::Raise`](crate::OnDup::Raise).
///
/// `D` is the representation of the existing associations: `(&K, &V)` when
/// the error borrows from the map, `(K, V)` once it has been made owned.
#[derive(Debug)]
pub struct DuplicateAssociation<K, V, D = (K, V)> {
    new: (K, V),
    conflict: Conflict,
    duplicates: Vec<D>,
}

impl<K, V, D> DuplicateAssociation<K, V, D> {
    pub(crate) fn new(new: (K, V), conflict: Conflict, duplicates: Vec<D>) -> Self {
        DuplicateAssociation { new, conflict, duplicates }
    }

    /// Returns the association that was rejected.
    #[inline]
    pub fn new_association(&self) -> (&K, &V) {
        (&self.new.0, &self.new.1)
    }

    /// Returns which side of the association collided.
    #[inline]
    pub fn conflict(&self) -> Conflict {
        self.conflict
    }

    /// Returns the existing associations that the rejected association
    /// collided with.
    ///
    /// For [`Conflict::Key`] and [`Conflict::Value`] there is exactly one; for
    /// [`Conflict::KeyAndValue`] there are two, the association holding the
    /// key first.
    #[inline]
    pub fn duplicates(&self) -> &[D] {
        &self.duplicates
    }

    /// Converts self into its constituent parts.
    pub fn into_parts(self) -> ((K, V), Conflict, Vec<D>) {
        (self.new, self.conflict, self.duplicates)
    }
}

impl<K, V, DK, DV> DuplicateAssociation<K, V, (DK, DV)> {
    /// Returns the error as seen from the inverse map: keys and values swap
    /// places, and so do key and value conflicts.
    ///
    /// The duplicates are reordered so that the association holding the
    /// inverse map's key still comes first.
    pub fn flip(self) -> DuplicateAssociation<V, K, (DV, DK)> {
        let (key, value) = self.new;
        DuplicateAssociation {
            new: (value, key),
            conflict: self.conflict.flip(),
            duplicates: self
                .duplicates
                .into_iter()
                .rev()
                .map(|(key, value)| (value, key))
                .collect(),
        }
    }
}

impl<K: Clone, V: Clone> DuplicateAssociation<K, V, (&K, &V)> {
    /// Converts self to an owned `DuplicateAssociation` by cloning the list
    /// of duplicates.
    ///
    /// If `K` and `V` are `'static`, the owned form is suitable for conversion
    /// to `Box<dyn std::error::Error>`, `anyhow::Error`, and so on.
    pub fn into_owned(self) -> DuplicateAssociation<K, V> {
        DuplicateAssociation {
            new: self.new,
            conflict: self.conflict,
            duplicates: self
                .duplicates
                .into_iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, D: fmt::Debug> fmt::Display
    for DuplicateAssociation<K, V, D>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "new association {:?} => {:?} has a {} with existing: {:?}",
            self.new.0, self.new.1, self.conflict, self.duplicates
        )
    }
}

impl<K: fmt::Debug, V: fmt::Debug, D: fmt::Debug> core::error::Error
    for DuplicateAssociation<K, V, D>
{
}

/// A removal named a key or value that is not in the map.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NotFound {
    /// No association has the given key.
    Key,

    /// No association has the given value.
    Value,
}

impl NotFound {
    /// Returns the error as seen from the inverse map.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            NotFound::Key => NotFound::Value,
            NotFound::Value => NotFound::Key,
        }
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFound::Key => f.write_str("key not found"),
            NotFound::Value => f.write_str("value not found"),
        }
    }
}

impl core::error::Error for NotFound {}

/// A [`Cursor`](crate::Cursor) was advanced after the map it walks was
/// modified.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConcurrentModification;

impl fmt::Display for ConcurrentModification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map was modified after the cursor was created")
    }
}

impl core::error::Error for ConcurrentModification {}
