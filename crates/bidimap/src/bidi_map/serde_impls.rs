use super::BidiMap;
use crate::policy::DupPolicy;
use core::{
    fmt,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};
use serde_core::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// A `BidiMap` serializes as a map from keys to values, in arbitrary order.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use bidimap::bidi_map;
/// # use bidimap_test_utils::serde_json;
///
/// let map = bidi_map! { "H".to_string() => 1 };
/// let serialized = serde_json::to_string(&map).unwrap();
/// assert_eq!(serialized, r#"{"H":1}"#);
/// # }
/// ```
impl<K, V, S> Serialize for BidiMap<K, V, S>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<Ser: Serializer>(
        &self,
        serializer: Ser,
    ) -> Result<Ser::Ok, Ser::Error> {
        // Serialize just the associations -- don't serialize the indexes or
        // the default policy. The indexes are rebuilt on deserialization.
        serializer.collect_map(self.iter())
    }
}

/// The `Deserialize` impl for `BidiMap` deserializes a map while rebuilding
/// the indexes, producing an error if any key or value appears twice.
///
/// The `fmt::Debug` bounds on `K` and `V` ensure better error reporting.
impl<'de, K, V, S> Deserialize<'de> for BidiMap<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash + fmt::Debug,
    V: Deserialize<'de> + Eq + Hash + fmt::Debug,
    S: Clone + BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor {
            hasher: S::default(),
            _marker: PhantomData,
        })
    }
}

struct MapVisitor<K, V, S> {
    hasher: S,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<'de, K, V, S> Visitor<'de> for MapVisitor<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash + fmt::Debug,
    V: Deserialize<'de> + Eq + Hash + fmt::Debug,
    S: Clone + BuildHasher,
{
    type Value = BidiMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with unique keys and unique values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        // Size hints come from the input, so they are not trusted for
        // preallocation beyond a small bound.
        let capacity = access.size_hint().unwrap_or(0).min(1024);
        let mut map =
            BidiMap::with_capacity_and_hasher(capacity, self.hasher);

        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value, DupPolicy::RAISE)
                .map_err(serde_core::de::Error::custom)?;
        }

        Ok(map)
    }
}
