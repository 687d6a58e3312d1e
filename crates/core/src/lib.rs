//! Core types for syncslice
//!
//! This crate defines the types shared by every syncslice crate:
//! - Error: out-of-range reporting for the `try_*` family and panic text
//! - ArrayOptions / RangeMode: construction-time configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod options;

pub use error::{Error, Result};
pub use options::{ArrayOptions, RangeMode};
