//! `Arbitrary` implementations, for downstream property tests.

use super::BidiMap;
use crate::policy::{DupPolicy, OnDup};
use core::{
    fmt,
    hash::{BuildHasher, Hash},
};
use proptest::{
    collection::{vec, SizeRange},
    prelude::*,
};

/// Generates maps from arbitrary lists of associations. Later associations
/// overwrite earlier ones they collide with, so a map may be shorter than the
/// list it was built from.
impl<K, V, S> Arbitrary for BidiMap<K, V, S>
where
    K: Arbitrary + Eq + Hash + fmt::Debug + 'static,
    V: Arbitrary + Eq + Hash + fmt::Debug + 'static,
    S: Clone + BuildHasher + Default + 'static,
{
    type Parameters = (SizeRange, K::Parameters, V::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(
        (size, key_params, value_params): Self::Parameters,
    ) -> Self::Strategy {
        vec(
            (
                any_with::<K>(key_params),
                any_with::<V>(value_params),
            ),
            size,
        )
        .prop_map(|associations| associations.into_iter().collect())
        .boxed()
    }
}

impl Arbitrary for OnDup {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(OnDup::Raise),
            Just(OnDup::Overwrite),
            Just(OnDup::DropNew),
        ]
        .boxed()
    }
}

/// Generates policies with each axis chosen independently. `on_both` is left
/// to follow `on_value` about half the time.
impl Arbitrary for DupPolicy {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<OnDup>(), any::<OnDup>(), any::<Option<OnDup>>())
            .prop_map(|(on_key, on_value, on_both)| {
                let policy = DupPolicy::new(on_key, on_value);
                match on_both {
                    Some(on_both) => policy.with_on_both(on_both),
                    None => policy,
                }
            })
            .boxed()
    }
}
