//! Fluent construction for [`ConcurrentArray`]

use std::fmt;
use std::marker::PhantomData;
use syncslice_core::{ArrayOptions, RangeMode};

use crate::ConcurrentArray;

/// Builder for a configured [`ConcurrentArray`]
///
/// # Example
///
/// ```
/// use syncslice_concurrency::ConcurrentArray;
///
/// // Preallocated, lock held for the whole range walk
/// let array: ConcurrentArray<u32> = ConcurrentArray::builder()
///     .capacity(64)
///     .locked_range()
///     .build();
///
/// // Default settings: empty, snapshot range
/// let array = ConcurrentArray::<u32>::builder().build();
/// assert!(array.is_empty());
/// ```
pub struct ArrayBuilder<T> {
    options: ArrayOptions,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ArrayBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::from_options(ArrayOptions::default())
    }

    /// Start from existing options.
    pub fn from_options(options: ArrayOptions) -> Self {
        Self {
            options,
            _marker: PhantomData,
        }
    }

    /// Preallocate room for `capacity` elements.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.options = self.options.with_initial_capacity(capacity);
        self
    }

    /// Set the range strategy.
    pub fn range_mode(mut self, range_mode: RangeMode) -> Self {
        self.options = self.options.with_range_mode(range_mode);
        self
    }

    /// Walk a copy in `range` (default).
    ///
    /// The visitor may call back into the array, including mutations.
    pub fn snapshot_range(self) -> Self {
        self.range_mode(RangeMode::Snapshot)
    }

    /// Hold the lock for the whole `range` walk.
    ///
    /// Avoids the copy, but blocks every other operation until the walk
    /// ends. The visitor must not call back into the array.
    pub fn locked_range(self) -> Self {
        self.range_mode(RangeMode::Locked)
    }

    /// Options accumulated so far.
    pub fn options(&self) -> &ArrayOptions {
        &self.options
    }

    /// Build the array.
    pub fn build(self) -> ConcurrentArray<T> {
        ConcurrentArray::with_options(self.options)
    }
}

impl<T> Default for ArrayBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ArrayBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuilder")
            .field("options", &self.options)
            .finish()
    }
}
