//! Error types for syncslice
//!
//! Checked operations on the array normally report out-of-range access as
//! `None`/`false`. The `try_*` family reports the same condition as an
//! [`Error`], and the unchecked family panics with the `Display` text of
//! that same error, so a failed access reads identically on both channels.

use thiserror::Error;

/// All syncslice errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Index was not below the published length at the time of the access
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length observed by the operation
        len: usize,
    },
}

/// Result type for syncslice operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build an out-of-bounds error for `index` against `len`.
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Error::IndexOutOfBounds { index, len }
    }

    /// Check if this is an out-of-bounds error.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Error::IndexOutOfBounds { .. })
    }

    /// The index that caused the error, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::IndexOutOfBounds { index, .. } => Some(*index),
        }
    }
}
