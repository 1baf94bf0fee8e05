//! The duplication validator: classifying candidate associations and deciding
//! what to do about them.

use crate::errors::Conflict;
use core::hash::{Hash, Hasher};

/// What to do when a candidate association collides with the map on one axis.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OnDup {
    /// Reject the candidate with an error, leaving the map untouched.
    Raise,

    /// Remove the colliding association(s), then insert the candidate.
    Overwrite,

    /// Silently discard the candidate, leaving the map untouched.
    DropNew,
}

/// How [`BidiMap::put`](crate::BidiMap::put) resolves collisions.
///
/// A policy picks an [`OnDup`] for each kind of collision:
///
/// * `on_key`: the key is already mapped to a different value.
/// * `on_value`: the value is already mapped from a different key.
/// * `on_both`: the key and the value are both present, in two different
///   associations. Unless set explicitly, this follows `on_value`, since such
///   a candidate always takes a value away from another key.
///
/// Re-inserting an association that is already present is never a collision.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use bidimap::{BidiMap, DupPolicy, OnDup, PutOutcome};
///
/// let mut map = BidiMap::new();
/// map.insert('a', 1).unwrap();
/// map.insert('b', 2).unwrap();
///
/// // Keep existing associations, and quietly ignore colliding ones.
/// let keep_first = DupPolicy::new(OnDup::DropNew, OnDup::DropNew);
/// let outcome = map.put('a', 3, keep_first).unwrap();
/// assert_eq!(outcome, PutOutcome::Dropped('a', 3));
/// assert_eq!(map.get(&'a'), Some(&1));
///
/// // Reassign values between keys, but never drop a key's old value.
/// let steal = DupPolicy::new(OnDup::Raise, OnDup::Overwrite);
/// map.put('c', 2, steal).unwrap();
/// assert_eq!(map.get_inverse(&2), Some(&'c'));
/// assert!(!map.contains_key(&'b'));
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DupPolicy {
    on_key: OnDup,
    on_value: OnDup,
    on_both: Option<OnDup>,
}

impl DupPolicy {
    /// The default policy: a key may be re-pointed at a new value, but a value
    /// may not be taken away from another key.
    pub const PUT: Self = Self::new(OnDup::Overwrite, OnDup::Raise);

    /// Reject every collision.
    pub const RAISE: Self = Self::new(OnDup::Raise, OnDup::Raise);

    /// Evict whatever is in the way.
    pub const OVERWRITE: Self = Self::new(OnDup::Overwrite, OnDup::Overwrite);

    /// Keep existing associations and discard colliding candidates.
    pub const DROP_NEW: Self = Self::new(OnDup::DropNew, OnDup::DropNew);

    /// Creates a policy where both-sided collisions follow `on_value`.
    #[inline]
    pub const fn new(on_key: OnDup, on_value: OnDup) -> Self {
        Self { on_key, on_value, on_both: None }
    }

    /// Returns a copy of this policy with a different `on_key`.
    #[inline]
    pub const fn with_on_key(self, on_key: OnDup) -> Self {
        Self { on_key, ..self }
    }

    /// Returns a copy of this policy with a different `on_value`.
    ///
    /// If `on_both` was never set explicitly, it changes along with
    /// `on_value`.
    #[inline]
    pub const fn with_on_value(self, on_value: OnDup) -> Self {
        Self { on_value, ..self }
    }

    /// Returns a copy of this policy with an explicit `on_both`.
    #[inline]
    pub const fn with_on_both(self, on_both: OnDup) -> Self {
        Self { on_both: Some(on_both), ..self }
    }

    /// What to do when only the key collides.
    #[inline]
    pub const fn on_key(&self) -> OnDup {
        self.on_key
    }

    /// What to do when only the value collides.
    #[inline]
    pub const fn on_value(&self) -> OnDup {
        self.on_value
    }

    /// What to do when the key and the value collide with two different
    /// associations.
    #[inline]
    pub const fn on_both(&self) -> OnDup {
        match self.on_both {
            Some(on_both) => on_both,
            None => self.on_value,
        }
    }

    /// Returns the policy as seen from the inverse map.
    ///
    /// `on_key` and `on_value` trade places. `on_both` is pinned to its current
    /// resolved value, since a both-sided collision looks the same from
    /// either side.
    #[inline]
    pub const fn swapped(self) -> Self {
        Self {
            on_key: self.on_value,
            on_value: self.on_key,
            on_both: Some(self.on_both()),
        }
    }

    fn resolved(&self) -> (OnDup, OnDup, OnDup) {
        (self.on_key, self.on_value, self.on_both())
    }

    /// Decides what to do with a candidate classified as `duplication`.
    pub(crate) fn decide(&self, duplication: Duplication) -> Decision {
        let (on_dup, conflict) = match duplication {
            Duplication::None => return Decision::Insert,
            Duplication::Identical => return Decision::Unchanged,
            Duplication::Key => (self.on_key, Conflict::Key),
            Duplication::Value => (self.on_value, Conflict::Value),
            Duplication::KeyAndValue => {
                (self.on_both(), Conflict::KeyAndValue)
            }
        };

        match on_dup {
            OnDup::Raise => Decision::Reject(conflict),
            OnDup::Overwrite => Decision::Overwrite,
            OnDup::DropNew => Decision::DropNew,
        }
    }
}

impl Default for DupPolicy {
    #[inline]
    fn default() -> Self {
        Self::PUT
    }
}

// Policies are equal when they behave the same, whether or not `on_both` was
// set explicitly.
impl PartialEq for DupPolicy {
    fn eq(&self, other: &Self) -> bool {
        self.resolved() == other.resolved()
    }
}

impl Eq for DupPolicy {}

impl Hash for DupPolicy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resolved().hash(state);
    }
}

/// How a candidate association relates to the current contents of a map.
///
/// Returned by [`BidiMap::classify`](crate::BidiMap::classify).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Duplication {
    /// Neither the key nor the value is present.
    None,

    /// The key is mapped to a different value, and the value is absent.
    Key,

    /// The value is mapped from a different key, and the key is absent.
    Value,

    /// The key already maps to exactly this value.
    Identical,

    /// The key and the value are both present, in two different
    /// associations.
    KeyAndValue,
}

impl Duplication {
    /// Classifies a candidate from the positions its key and value were found
    /// at.
    pub(crate) fn classify(
        by_key: Option<usize>,
        by_value: Option<usize>,
    ) -> Self {
        match (by_key, by_value) {
            (None, None) => Duplication::None,
            (Some(_), None) => Duplication::Key,
            (None, Some(_)) => Duplication::Value,
            (Some(k), Some(v)) if k == v => Duplication::Identical,
            (Some(_), Some(_)) => Duplication::KeyAndValue,
        }
    }

    /// Returns the conflict this classification represents, if any.
    ///
    /// [`Duplication::None`] and [`Duplication::Identical`] are not conflicts.
    #[inline]
    pub fn conflict(self) -> Option<Conflict> {
        match self {
            Duplication::None | Duplication::Identical => None,
            Duplication::Key => Some(Conflict::Key),
            Duplication::Value => Some(Conflict::Value),
            Duplication::KeyAndValue => Some(Conflict::KeyAndValue),
        }
    }

    /// Returns the classification as seen from the inverse map.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Duplication::Key => Duplication::Value,
            Duplication::Value => Duplication::Key,
            other => other,
        }
    }
}

/// The outcome of validating a candidate, before anything is written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Decision {
    Insert,
    Unchanged,
    Overwrite,
    DropNew,
    Reject(Conflict),
}
