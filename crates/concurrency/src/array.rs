//! Mutex-guarded dynamic array with a lock-free length
//!
//! Provides atomic per-call access by coordinating:
//! 1. The element store (`Vec<T>` behind a `parking_lot::Mutex`)
//! 2. The published length (`AtomicUsize`, written under the lock)
//!
//! ## Operation Families
//!
//! | Family | Out of range | Example |
//! |--------|--------------|---------|
//! | Checked | `None` / `false` | `get`, `set`, `remove`, `update_at` |
//! | Try | `Err(Error::IndexOutOfBounds)` | `try_get`, `try_set`, `try_remove`, `try_update_at` |
//! | Unchecked | panics the calling thread | `get_unchecked`, `set_unchecked`, ... |
//!
//! The unchecked family is still memory safe: it indexes the store directly
//! and lets the failed access panic instead of reporting it. A panic unwinds
//! through the lock guard, so the lock is released and the array stays
//! usable by every other thread.
//!
//! ## Length Reads
//!
//! `len()` and the pre-check in `get()` never take the lock. They observe
//! the last length published by a completed mutation, which may already be
//! stale if another thread is mid-mutation. A `get` racing a `remove` can
//! therefore return `None`, or the element that shifted into `index`.

use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use syncslice_core::{ArrayOptions, Error, RangeMode, Result};

use crate::builder::ArrayBuilder;

/// Concurrency-safe dynamic array
///
/// Any number of threads may append, read, overwrite, remove and update
/// elements through a shared reference (typically `Arc<ConcurrentArray<T>>`).
/// Every operation is atomic with respect to every other; there is no
/// grouping of several calls into one atomic step.
///
/// # Thread Safety
///
/// All store accesses hold the internal mutex for their full duration.
/// The length is duplicated in an atomic so `len()` and out-of-range `get`
/// calls never contend the lock.
///
/// # Example
///
/// ```
/// use syncslice_concurrency::ConcurrentArray;
///
/// let array = ConcurrentArray::new();
/// array.push(10);
/// array.push(20);
///
/// assert_eq!(array.get(1), Some(20));
/// assert!(array.set(0, 11));
/// assert_eq!(array.remove(0), Some(11));
/// assert_eq!(array.snapshot(), vec![20]);
/// ```
pub struct ConcurrentArray<T> {
    /// Element store
    ///
    /// Indices `0..len` hold live elements. Spare capacity is never exposed.
    store: Mutex<Vec<T>>,

    /// Published length
    ///
    /// Equals `store.len()` whenever the lock is free. Written with
    /// `Release` while the lock is held, read with `Acquire` without it.
    len: AtomicUsize,

    /// Strategy used by `range`
    range_mode: RangeMode,
}

impl<T> ConcurrentArray<T> {
    /// Create an empty array
    ///
    /// Nothing is allocated until the first element arrives.
    pub fn new() -> Self {
        Self::with_options(ArrayOptions::default())
    }

    /// Create an empty array with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(ArrayOptions::default().with_initial_capacity(capacity))
    }

    /// Create an empty array from explicit options
    pub fn with_options(options: ArrayOptions) -> Self {
        if !options.is_default() {
            tracing::debug!(
                range_mode = %options.range_mode,
                initial_capacity = options.initial_capacity,
                "creating concurrent array"
            );
        }
        ConcurrentArray {
            store: Mutex::new(Vec::with_capacity(options.initial_capacity)),
            len: AtomicUsize::new(0),
            range_mode: options.range_mode,
        }
    }

    /// Start a builder for a configured array
    pub fn builder() -> ArrayBuilder<T> {
        ArrayBuilder::new()
    }

    /// Number of live elements
    ///
    /// Lock-free. Reflects the last completed mutation, not one in flight.
    #[inline]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Check if the array has no live elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Strategy used by `range`
    pub fn range_mode(&self) -> RangeMode {
        self.range_mode
    }

    /// Consume the array and return its element store
    pub fn into_inner(self) -> Vec<T> {
        self.store.into_inner()
    }

    /// Publish the store's length. Caller must hold the lock.
    #[inline]
    fn publish_len(&self, store: &[T]) {
        self.len.store(store.len(), Ordering::Release);
    }

    // ========================================================================
    // Append
    // ========================================================================

    /// Append an element
    ///
    /// Always succeeds. The element lands at the index equal to the length
    /// observed under the lock, and the published length grows by one.
    pub fn push(&self, value: T) {
        let mut store = self.store.lock();
        store.push(value);
        self.publish_len(&store);
    }

    // ========================================================================
    // Read
    // ========================================================================

    /// Get a copy of the element at `index`
    ///
    /// Returns `None` without locking when `index` is not below the
    /// published length. Otherwise locks and re-reads the store, so a
    /// concurrent shrink yields `None` rather than a torn read.
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        let len = self.len();
        if index >= len {
            rejected("get", index, len);
            return None;
        }
        let store = self.store.lock();
        store.get(index).cloned()
    }

    /// Get a copy of the element at `index`, reporting misses as an error
    pub fn try_get(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        let store = self.store.lock();
        store
            .get(index)
            .cloned()
            .ok_or_else(|| Error::out_of_bounds(index, store.len()))
    }

    /// Get a copy of the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. The lock is released on unwind.
    #[track_caller]
    pub fn get_unchecked(&self, index: usize) -> T
    where
        T: Clone,
    {
        let store = self.store.lock();
        match store.get(index) {
            Some(value) => value.clone(),
            None => out_of_bounds("get_unchecked", index, store.len()),
        }
    }

    // ========================================================================
    // Overwrite
    // ========================================================================

    /// Overwrite the element at `index`
    ///
    /// Returns `false` and leaves the array untouched when `index` is out
    /// of range.
    pub fn set(&self, index: usize, value: T) -> bool {
        let mut store = self.store.lock();
        let len = store.len();
        match store.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => {
                rejected("set", index, len);
                false
            }
        }
    }

    /// Overwrite the element at `index`, reporting misses as an error
    pub fn try_set(&self, index: usize, value: T) -> Result<()> {
        let mut store = self.store.lock();
        let len = store.len();
        let slot = store
            .get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Overwrite the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. The lock is released on unwind.
    #[track_caller]
    pub fn set_unchecked(&self, index: usize, value: T) {
        let mut store = self.store.lock();
        let len = store.len();
        match store.get_mut(index) {
            Some(slot) => *slot = value,
            None => out_of_bounds("set_unchecked", index, len),
        }
    }

    // ========================================================================
    // Remove
    // ========================================================================

    /// Remove and return the element at `index`
    ///
    /// Later elements shift down by one, keeping their relative order, so
    /// this is O(len). Returns `None` and leaves the array untouched when
    /// `index` is out of range.
    pub fn remove(&self, index: usize) -> Option<T> {
        let mut store = self.store.lock();
        if index >= store.len() {
            rejected("remove", index, store.len());
            return None;
        }
        Some(self.remove_locked(&mut store, index))
    }

    /// Remove and return the element at `index`, reporting misses as an error
    pub fn try_remove(&self, index: usize) -> Result<T> {
        let mut store = self.store.lock();
        if index >= store.len() {
            return Err(Error::out_of_bounds(index, store.len()));
        }
        Ok(self.remove_locked(&mut store, index))
    }

    /// Remove and return the element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. The lock is released on unwind.
    #[track_caller]
    pub fn remove_unchecked(&self, index: usize) -> T {
        let mut store = self.store.lock();
        if index >= store.len() {
            out_of_bounds("remove_unchecked", index, store.len());
        }
        self.remove_locked(&mut store, index)
    }

    /// Shift-remove `index` and publish the new length. `index` must be in range.
    fn remove_locked(&self, store: &mut Vec<T>, index: usize) -> T {
        let removed = store.remove(index);
        self.publish_len(store);
        removed
    }

    // ========================================================================
    // In-place update
    // ========================================================================

    /// Run `mutate` on the element at `index` while holding the lock
    ///
    /// No other operation can interleave with the closure's
    /// read-modify-write. Returns `false` without calling `mutate` when
    /// `index` is out of range.
    ///
    /// `mutate` must not call back into this array: the lock is not
    /// reentrant.
    pub fn update_at<F>(&self, index: usize, mutate: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        let mut store = self.store.lock();
        let len = store.len();
        match store.get_mut(index) {
            Some(slot) => {
                mutate(slot);
                true
            }
            None => {
                rejected("update_at", index, len);
                false
            }
        }
    }

    /// Run `mutate` on the element at `index` and return its result
    ///
    /// Same locking as [`update_at`](Self::update_at), but misses are
    /// reported as an error and the closure may produce a value.
    pub fn try_update_at<R, F>(&self, index: usize, mutate: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut store = self.store.lock();
        let len = store.len();
        let slot = store
            .get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, len))?;
        Ok(mutate(slot))
    }

    /// Run `mutate` on the element at `index` while holding the lock
    ///
    /// # Panics
    ///
    /// Panics before `mutate` runs if `index` is out of range. The lock is
    /// released on unwind.
    #[track_caller]
    pub fn update_at_unchecked<F>(&self, index: usize, mutate: F)
    where
        F: FnOnce(&mut T),
    {
        let mut store = self.store.lock();
        let len = store.len();
        match store.get_mut(index) {
            Some(slot) => mutate(slot),
            None => out_of_bounds("update_at_unchecked", index, len),
        }
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Replace the whole contents with a copy of `elements`
    ///
    /// The copy is made before the lock is taken and the previous contents
    /// are dropped after it is released. The array never aliases
    /// `elements`.
    pub fn replace_all(&self, elements: &[T])
    where
        T: Clone,
    {
        let fresh = elements.to_vec();
        let previous = {
            let mut store = self.store.lock();
            let previous = std::mem::replace(&mut *store, fresh);
            self.publish_len(&store);
            previous
        };
        tracing::debug!(
            old_len = previous.len(),
            new_len = elements.len(),
            "replaced array contents"
        );
    }

    /// Independent copy of the live elements, in index order
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.store.lock().clone()
    }

    /// Visit elements in index order until `visit` returns `false`
    ///
    /// Walks the elements live when the call starts. With
    /// [`RangeMode::Snapshot`] the walk runs over a copy and `visit` may
    /// freely use this array. With [`RangeMode::Locked`] the lock is held
    /// for the whole walk and `visit` must not call back into this array.
    pub fn range<F>(&self, visit: F)
    where
        T: Clone,
        F: FnMut(usize, &T) -> bool,
    {
        match self.range_mode {
            RangeMode::Snapshot => {
                let snapshot = self.snapshot();
                walk(&snapshot, visit);
            }
            RangeMode::Locked => {
                let store = self.store.lock();
                walk(&store, visit);
            }
        }
    }
}

/// Call `visit` for each element until it asks to stop.
fn walk<T, F>(elements: &[T], mut visit: F)
where
    F: FnMut(usize, &T) -> bool,
{
    for (index, value) in elements.iter().enumerate() {
        if !visit(index, value) {
            break;
        }
    }
}

#[inline]
fn rejected(op: &'static str, index: usize, len: usize) {
    tracing::trace!(
        op = op,
        index = index,
        len = len,
        "index out of range, operation rejected"
    );
}

#[cold]
#[track_caller]
fn out_of_bounds(op: &'static str, index: usize, len: usize) -> ! {
    let err = Error::out_of_bounds(index, len);
    tracing::error!(
        op = op,
        index = index,
        len = len,
        "unchecked access out of range"
    );
    panic!("{}", err)
}

impl<T> Default for ConcurrentArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ConcurrentArray<T> {
    fn clone(&self) -> Self {
        let elements = self.snapshot();
        ConcurrentArray {
            len: AtomicUsize::new(elements.len()),
            store: Mutex::new(elements),
            range_mode: self.range_mode,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ConcurrentArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.store.try_lock() {
            Some(store) => f.debug_list().entries(store.iter()).finish(),
            None => f
                .debug_struct("ConcurrentArray")
                .field("len", &self.len())
                .finish_non_exhaustive(),
        }
    }
}

impl<T> From<Vec<T>> for ConcurrentArray<T> {
    fn from(elements: Vec<T>) -> Self {
        ConcurrentArray {
            len: AtomicUsize::new(elements.len()),
            store: Mutex::new(elements),
            range_mode: RangeMode::default(),
        }
    }
}

impl<T> FromIterator<T> for ConcurrentArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for ConcurrentArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let store = self.store.get_mut();
        store.extend(iter);
        let len = store.len();
        self.len.store(len, Ordering::Release);
    }
}
