//! Construction options for the concurrent array
//!
//! ## Range Modes
//!
//! | Mode | Walk | Visitor may re-enter | Cost |
//! |------|------|----------------------|------|
//! | Snapshot | Over a copy taken under the lock | Yes | One clone of the live elements |
//! | Locked | Over the live store, lock held | No (deadlock) | Blocks all mutators for the walk |
//!
//! Neither mode can observe a torn store.

use std::fmt;

/// How `range` walks the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeMode {
    /// Copy the live elements under the lock, then visit the copy unlocked.
    #[default]
    Snapshot,
    /// Hold the lock for the whole walk.
    ///
    /// The visitor must not call back into the same array.
    Locked,
}

impl RangeMode {
    /// Whether the lock is held while the visitor runs.
    pub fn holds_lock(&self) -> bool {
        matches!(self, RangeMode::Locked)
    }
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeMode::Snapshot => write!(f, "snapshot"),
            RangeMode::Locked => write!(f, "locked"),
        }
    }
}

/// Array construction options
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrayOptions {
    /// Strategy used by `range`
    pub range_mode: RangeMode,
    /// Slots to preallocate in the element store (0 = no allocation)
    pub initial_capacity: usize,
}

impl ArrayOptions {
    /// Visit a copy; the visitor may mutate the array it is walking
    pub fn snapshot_range() -> Self {
        ArrayOptions {
            range_mode: RangeMode::Snapshot,
            ..Default::default()
        }
    }

    /// Hold the lock for the walk; no copy is made
    pub fn locked_range() -> Self {
        ArrayOptions {
            range_mode: RangeMode::Locked,
            ..Default::default()
        }
    }

    /// Set the range mode
    pub fn with_range_mode(mut self, range_mode: RangeMode) -> Self {
        self.range_mode = range_mode;
        self
    }

    /// Set the number of slots to preallocate
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// True when every field has its default value
    pub fn is_default(&self) -> bool {
        *self == ArrayOptions::default()
    }
}
