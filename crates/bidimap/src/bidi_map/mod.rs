// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A bijective map, along with its inverse view, iterators and cursors.

mod cursor;
pub(crate) mod imp;
mod inverse;
mod iter;
mod outcome;
#[cfg(feature = "proptest")]
mod proptest_impls;
#[cfg(feature = "serde")]
mod serde_impls;
mod tables;

pub use cursor::{Cursor, InverseCursor};
pub use imp::BidiMap;
pub use inverse::{Inverse, InverseIter};
pub use iter::{IntoIter, Iter, Keys, Values};
pub use outcome::PutOutcome;
