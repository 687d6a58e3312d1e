//! Convenient imports for syncslice.
//!
//! ```
//! use syncslice::prelude::*;
//!
//! let array = ConcurrentArray::builder().locked_range().build();
//! array.push("a");
//! assert_eq!(array.range_mode(), RangeMode::Locked);
//! ```

// Main entry point
pub use crate::{ArrayBuilder, ConcurrentArray};

// Error handling
pub use crate::{Error, Result};

// Configuration
pub use crate::{ArrayOptions, RangeMode};
