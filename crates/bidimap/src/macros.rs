// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Macros for this crate.

/// Creates a [`BidiMap`](crate::BidiMap) from a list of `key => value`
/// associations.
///
/// Associations are put with [`DupPolicy::RAISE`](crate::DupPolicy::RAISE):
/// the macro panics if a key or a value appears twice with different
/// partners. Repeating an identical association is allowed.
///
/// A hasher type can be given before a `;`, in which case the map is created
/// with that hasher's `Default` value.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use bidimap::bidi_map;
///
/// let map = bidi_map! {
///     "H" => 1,
///     "He" => 2,
///     "Li" => 3,
/// };
/// assert_eq!(map.get_inverse(&2), Some(&"He"));
///
/// // An explicit hasher.
/// let map = bidi_map! { std::hash::RandomState; 'a' => 1 };
/// assert_eq!(map.get(&'a'), Some(&1));
/// # }
/// ```
#[macro_export]
macro_rules! bidi_map {
    ($HashBuilder:ty; $($key:expr => $value:expr),* $(,)?) => {{
        let mut map = $crate::BidiMap::<_, _, $HashBuilder>::with_hasher(
            <$HashBuilder>::default(),
        );
        $(
            map.put($key, $value, $crate::DupPolicy::RAISE).unwrap();
        )*
        map
    }};
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = $crate::BidiMap::new();
        $(
            map.put($key, $value, $crate::DupPolicy::RAISE).unwrap();
        )*
        map
    }};
}
