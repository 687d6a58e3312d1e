//! Concurrency layer for syncslice
//!
//! This crate implements the concurrent array:
//! - ConcurrentArray: mutex-guarded element store with a lock-free length
//! - Checked, `try_*` and unchecked operation families
//! - Snapshot and locked range walks
//! - ArrayBuilder: fluent construction from ArrayOptions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod builder;

pub use array::ConcurrentArray;
pub use builder::ArrayBuilder;

// Re-export the shared types from core for convenience
pub use syncslice_core::{ArrayOptions, Error, RangeMode, Result};
