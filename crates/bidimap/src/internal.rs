// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Invariant checks, exposed for tests.

use alloc::string::String;
use core::fmt;

/// For validation, indicate whether we expect position tokens to be compact
/// (have all values in the range `0..len`).
///
/// Maps are expected to be compact if no associations were ever removed,
/// including removals caused by overwrites.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidateCompact {
    Compact,
    NonCompact,
}

/// Which of the two indexes of a map an error was found in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexSide {
    Key,
    Value,
}

impl fmt::Display for IndexSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexSide::Key => f.write_str("key index"),
            IndexSide::Value => f.write_str("value index"),
        }
    }
}

/// A broken invariant, found by a map's `validate` method.
#[derive(Debug)]
pub enum ValidationError {
    /// One of the indexes is inconsistent on its own.
    Index { side: IndexSide, error: IndexValidationError },

    /// The association storage is inconsistent on its own.
    Items(String),

    /// An association is not found at its own position through one of the
    /// indexes.
    Unindexed { position: usize, side: IndexSide, found: Option<usize> },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index { side, error } => {
                write!(f, "validation error in {side}: {error}")
            }
            Self::Items(msg) => write!(f, "validation error in items: {msg}"),
            Self::Unindexed { position, side, found: Some(found) } => write!(
                f,
                "association at position {position} resolves to position \
                 {found} through the {side}"
            ),
            Self::Unindexed { position, side, found: None } => write!(
                f,
                "association at position {position} is missing from the {side}"
            ),
        }
    }
}

impl core::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ValidationError::Index { error, .. } => Some(error),
            ValidationError::Items(_) | ValidationError::Unindexed { .. } => {
                None
            }
        }
    }
}

/// A broken invariant within a single index.
#[derive(Debug)]
pub enum IndexValidationError {
    /// The index holds a different number of positions than the map holds
    /// associations.
    Length { expected: usize, actual: usize },

    /// A compact map has a gap in its positions.
    NotCompact { expected: usize, actual: usize },

    /// A position is held more than once.
    DuplicatePosition(usize),
}

impl fmt::Display for IndexValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { expected, actual } => {
                write!(f, "expected length {expected}, was {actual}")
            }
            Self::NotCompact { expected, actual } => {
                write!(f, "expected position {expected}, was {actual}")
            }
            Self::DuplicatePosition(position) => {
                write!(f, "position {position} is recorded more than once")
            }
        }
    }
}

impl core::error::Error for IndexValidationError {}
