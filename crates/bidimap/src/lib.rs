// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bijective maps with efficient lookup in both directions.
//!
//! # Motivation
//!
//! A common way to support "reverse lookup" is to keep two maps side by side:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut by_code: HashMap<u32, String> = HashMap::new();
//! let mut by_name: HashMap<String, u32> = HashMap::new();
//!
//! by_code.insert(1, "one".to_string());
//! by_name.insert("one".to_string(), 1);
//! ```
//!
//! But nothing keeps the two maps consistent with each other. Inserting
//! `(2, "one")` into both maps leaves `by_code` claiming that `1` still maps to
//! `"one"`, while `by_name` disagrees:
//!
//! ```
//! # use std::collections::HashMap;
//! # let mut by_code: HashMap<u32, String> = HashMap::new();
//! # let mut by_name: HashMap<String, u32> = HashMap::new();
//! # by_code.insert(1, "one".to_string());
//! # by_name.insert("one".to_string(), 1);
//! by_code.insert(2, "one".to_string());
//! by_name.insert("one".to_string(), 2);
//!
//! // The two maps no longer describe a one-to-one correspondence.
//! assert_eq!(by_code.len(), 2);
//! assert_eq!(by_name.len(), 1);
//! ```
//!
//! [`BidiMap`] stores each association once and indexes it from both sides.
//! Every mutation is checked against both indexes before anything is written,
//! and what happens on a collision is decided by an explicit [`DupPolicy`].
//!
//! ```
//! # #[cfg(feature = "default-hasher")] {
//! use bidimap::{BidiMap, DupPolicy, errors::Conflict};
//!
//! let mut map = BidiMap::new();
//! map.insert(1, "one").unwrap();
//! map.insert(2, "two").unwrap();
//!
//! assert_eq!(map.get(&1), Some(&"one"));
//! assert_eq!(map.get_inverse(&"two"), Some(&2));
//!
//! // With the default policy, a value cannot be stolen from another key.
//! let err = map.insert(3, "one").unwrap_err();
//! assert_eq!(err.conflict(), Conflict::Value);
//!
//! // Overwriting evicts the old association first.
//! map.put(3, "one", DupPolicy::OVERWRITE).unwrap();
//! assert_eq!(map.get(&1), None);
//! assert_eq!(map.inverse().get(&"one"), Some(&3));
//! # }
//! ```
//!
//! # Optional features
//!
//! - `default-hasher` (enabled by default): use [`foldhash`] as the default
//!   hasher, and enable constructors like [`BidiMap::new`].
//! - `log` (enabled by default): emit `trace` and `debug` records through the
//!   [`log`](https://docs.rs/log) facade when associations are evicted,
//!   dropped or rejected.
//! - `serde`: serialize maps as maps, and deserialize them strictly.
//! - `proptest`: `Arbitrary` implementations for maps and policies.
//! - `std` (enabled by default): forwards `std` to the hasher crates.
//!
//! [`foldhash`]: https://docs.rs/foldhash

#![no_std]
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod bidi_map;
pub mod errors;
#[doc(hidden)]
pub mod internal;
mod macros;
mod policy;
mod support;

pub use bidi_map::{BidiMap, Cursor, Inverse, InverseCursor, PutOutcome};
pub use policy::{DupPolicy, Duplication, OnDup};
pub use support::hash_builder::DefaultHashBuilder;
