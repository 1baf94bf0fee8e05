//! Types and strategies shared by the property tests.

use bidimap::{BidiMap, DupPolicy, OnDup};
use proptest::{prelude::*, sample::SizeRange};
use test_strategy::Arbitrary;

#[cfg(feature = "default-hasher")]
pub type HashBuilder = bidimap::DefaultHashBuilder;

#[cfg(not(feature = "default-hasher"))]
pub type HashBuilder = std::hash::RandomState;

/// The map type under test.
pub type TestMap = BidiMap<TestKey, TestValue, HashBuilder>;

pub type TestKey = u8;
pub type TestValue = char;

/// Creates an empty test map.
pub fn new_map() -> TestMap {
    TestMap::with_hasher(HashBuilder::default())
}

// Keys and values are drawn from small ranges so that random operations
// collide often.
pub fn key_strategy() -> impl Strategy<Value = TestKey> {
    0u8..12
}

pub fn value_strategy() -> impl Strategy<Value = TestValue> {
    proptest::char::range('a', 'l')
}

/// A list of associations likely to contain collisions.
pub fn associations_strategy(
    max_len: usize,
) -> impl Strategy<Value = Vec<(TestKey, TestValue)>> {
    proptest::collection::vec((key_strategy(), value_strategy()), 0..max_len)
}

/// Generates a list of unique associations, along with a shuffled copy of it.
pub fn permutation_strategy(
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = (Vec<(TestKey, TestValue)>, Vec<(TestKey, TestValue)>)>
{
    prop::collection::vec((any::<TestKey>(), any::<TestValue>()), size.into())
        .prop_flat_map(|associations| {
            // It is likely that the input has collisions. Build a map to weed
            // them out, then read back what survived.
            let mut map = new_map();
            for (key, value) in associations {
                // The error case here is expected.
                _ = map.put(key, value, DupPolicy::RAISE);
            }
            let unique: Vec<_> = map.into_iter().collect();
            (Just(unique.clone()), Just(unique).prop_shuffle())
        })
}

/// An `OnDup` that can be generated without the `proptest` feature.
#[derive(Clone, Copy, Debug, Arbitrary)]
pub enum TestOnDup {
    Raise,
    Overwrite,
    DropNew,
}

impl From<TestOnDup> for OnDup {
    fn from(on_dup: TestOnDup) -> Self {
        match on_dup {
            TestOnDup::Raise => OnDup::Raise,
            TestOnDup::Overwrite => OnDup::Overwrite,
            TestOnDup::DropNew => OnDup::DropNew,
        }
    }
}

/// A `DupPolicy` that can be generated without the `proptest` feature.
#[derive(Clone, Copy, Debug, Arbitrary)]
pub struct TestPolicy {
    on_key: TestOnDup,
    on_value: TestOnDup,
    on_both: Option<TestOnDup>,
}

impl TestPolicy {
    pub fn to_policy(self) -> DupPolicy {
        let policy = DupPolicy::new(self.on_key.into(), self.on_value.into());
        match self.on_both {
            Some(on_both) => policy.with_on_both(on_both.into()),
            None => policy,
        }
    }
}
