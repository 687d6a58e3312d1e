//! # syncslice
//!
//! Concurrency-safe dynamic array.
//!
//! Any number of threads may append, read, overwrite, remove and update
//! elements of a shared [`ConcurrentArray`] without external locking. Each
//! call is atomic with respect to every other call.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use syncslice::prelude::*;
//!
//! let array = Arc::new(ConcurrentArray::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let array = Arc::clone(&array);
//!         thread::spawn(move || array.push(i))
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert_eq!(array.len(), 4);
//! let mut values = array.snapshot();
//! values.sort();
//! assert_eq!(values, vec![0, 1, 2, 3]);
//! ```
//!
//! ## Operation Families
//!
//! 1. **Checked** - misses return `None`/`false`: `array.get(i)`
//! 2. **Try** - misses return [`Error`]: `array.try_get(i)?`
//! 3. **Unchecked** - misses panic the calling thread: `array.get_unchecked(i)`
//!
//! ## Range Walks
//!
//! [`RangeMode::Snapshot`] (default) walks a copy, so the visitor may use
//! the array. [`RangeMode::Locked`] holds the lock for the whole walk.

#![warn(missing_docs)]

pub mod prelude;

// Re-export main entry points
pub use syncslice_concurrency::{ArrayBuilder, ConcurrentArray};

// Re-export shared types
pub use syncslice_core::{ArrayOptions, Error, RangeMode, Result};
