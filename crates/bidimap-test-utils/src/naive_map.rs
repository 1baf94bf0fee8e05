use crate::test_item::{TestKey, TestValue};
use bidimap::{
    errors::{Conflict, NotFound},
    DupPolicy, OnDup, PutOutcome,
};

/// A rejected put, as reported by [`NaiveMap`]: the conflict, and the
/// colliding associations with the one holding the key first.
pub type NaiveRejection = (Conflict, Vec<(TestKey, TestValue)>);

/// A naive, inefficient bijective map that acts as an oracle for
/// property-based tests.
///
/// This map is stored as a vector without internal indexes, and performs linear
/// scans.
#[derive(Clone, Debug, Default)]
pub struct NaiveMap {
    associations: Vec<(TestKey, TestValue)>,
}

impl NaiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.associations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.associations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TestKey, TestValue)> + '_ {
        self.associations.iter().copied()
    }

    /// Returns the associations sorted by key, for comparison with a map's
    /// contents.
    pub fn sorted(&self) -> Vec<(TestKey, TestValue)> {
        let mut associations = self.associations.clone();
        associations.sort_unstable();
        associations
    }

    pub fn get(&self, key: TestKey) -> Option<TestValue> {
        self.associations.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn get_inverse(&self, value: TestValue) -> Option<TestKey> {
        self.associations.iter().find(|(_, v)| *v == value).map(|(k, _)| *k)
    }

    pub fn put(
        &mut self,
        key: TestKey,
        value: TestValue,
        policy: DupPolicy,
    ) -> Result<PutOutcome<TestKey, TestValue>, NaiveRejection> {
        let by_key = self.associations.iter().position(|(k, _)| *k == key);
        let by_value = self.associations.iter().position(|(_, v)| *v == value);

        let (on_dup, conflict) = match (by_key, by_value) {
            (None, None) => {
                self.associations.push((key, value));
                return Ok(PutOutcome::Inserted);
            }
            (Some(i), Some(j)) if i == j => return Ok(PutOutcome::Unchanged),
            (Some(_), None) => (policy.on_key(), Conflict::Key),
            (None, Some(_)) => (policy.on_value(), Conflict::Value),
            (Some(_), Some(_)) => (policy.on_both(), Conflict::KeyAndValue),
        };

        match on_dup {
            OnDup::Raise => {
                let duplicates = by_key
                    .into_iter()
                    .chain(by_value)
                    .map(|i| self.associations[i])
                    .collect();
                Err((conflict, duplicates))
            }
            OnDup::DropNew => Ok(PutOutcome::Dropped(key, value)),
            OnDup::Overwrite => {
                let evicted_by_key = by_key.map(|i| self.associations[i]);
                let evicted_by_value = by_value.map(|i| self.associations[i]);
                self.associations
                    .retain(|(k, v)| *k != key && *v != value);
                self.associations.push((key, value));
                Ok(PutOutcome::Overwrote {
                    by_key: evicted_by_key,
                    by_value: evicted_by_value,
                })
            }
        }
    }

    pub fn remove(
        &mut self,
        key: TestKey,
    ) -> Result<(TestKey, TestValue), NotFound> {
        let index = self
            .associations
            .iter()
            .position(|(k, _)| *k == key)
            .ok_or(NotFound::Key)?;
        Ok(self.associations.remove(index))
    }

    pub fn remove_inverse(
        &mut self,
        value: TestValue,
    ) -> Result<(TestKey, TestValue), NotFound> {
        let index = self
            .associations
            .iter()
            .position(|(_, v)| *v == value)
            .ok_or(NotFound::Value)?;
        Ok(self.associations.remove(index))
    }

    pub fn clear(&mut self) {
        self.associations.clear();
    }
}
