use bidimap::{BidiMap, DefaultHashBuilder, DupPolicy};
use std::collections::HashMap;

/// The usual hand-rolled alternative to a bijective map: two maps kept in
/// sync by the caller.
///
/// This only implements what the benchmarks need, with overwrite semantics on
/// both sides.
#[derive(Default)]
pub struct MapPair {
    forward: HashMap<u32, String, DefaultHashBuilder>,
    backward: HashMap<String, u32, DefaultHashBuilder>,
}

impl MapPair {
    pub fn insert_overwrite(&mut self, key: u32, value: String) {
        if let Some(old_value) = self.forward.remove(&key) {
            self.backward.remove(&old_value);
        }
        if let Some(old_key) = self.backward.remove(&value) {
            self.forward.remove(&old_key);
        }
        self.forward.insert(key, value.clone());
        self.backward.insert(value, key);
    }

    pub fn get(&self, key: &u32) -> Option<&String> {
        self.forward.get(key)
    }

    pub fn get_inverse(&self, value: &str) -> Option<&u32> {
        self.backward.get(value)
    }
}

/// The value associated with `key` in the benchmark maps.
pub fn value_for(key: u32) -> String {
    format!("data{key}")
}

/// Builds a map of `size` associations `i => "data{i}"`.
pub fn make_map(size: usize) -> BidiMap<u32, String> {
    let mut map = BidiMap::with_capacity(size);
    for i in 0..size as u32 {
        // Keys and values are all distinct, so this never collides.
        let _ = map.put(i, value_for(i), DupPolicy::OVERWRITE);
    }
    map
}

/// Builds a [`MapPair`] with the same contents as [`make_map`].
pub fn make_map_pair(size: usize) -> MapPair {
    let mut pair = MapPair::default();
    for i in 0..size as u32 {
        pair.insert_overwrite(i, value_for(i));
    }
    pair
}
