// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Assert equality properties.
///
/// Map equality ignores insertion order, so it is not obviously symmetric or
/// reflexive. We must ensure in our tests that it is.
#[allow(clippy::eq_op)]
pub fn assert_eq_props<T: Eq + fmt::Debug>(a: T, b: T) {
    assert_eq!(a, a, "a == a");
    assert_eq!(b, b, "b == b");
    assert_eq!(a, b, "a == b");
    assert_eq!(b, a, "b == a");
}

/// Assert inequality properties.
#[allow(clippy::eq_op)]
pub fn assert_ne_props<T: Eq + fmt::Debug>(a: T, b: T) {
    // Also check reflexivity while we're here.
    assert_eq!(a, a, "a == a");
    assert_eq!(b, b, "b == b");
    assert_ne!(a, b, "a != b");
    assert_ne!(b, a, "b != a");
}

/// Assert that equality between two different types (for example, a map and
/// an inverse view) agrees in both directions, and with equality on each
/// side.
#[allow(clippy::eq_op)]
pub fn assert_cross_eq_props<A, B>(a: &A, b: &B, expected: bool)
where
    A: ?Sized + PartialEq + PartialEq<B> + fmt::Debug,
    B: ?Sized + PartialEq + PartialEq<A> + fmt::Debug,
{
    assert_eq!(a, a, "a == a");
    assert_eq!(b, b, "b == b");
    assert_eq!(a == b, expected, "a == b should be {expected}: {a:?} vs {b:?}");
    assert_eq!(b == a, expected, "b == a should be {expected}: {b:?} vs {a:?}");
}
