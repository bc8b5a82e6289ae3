use std::fmt;

use crate::alloc::{alloc_failure, reserve_exact, AllocError};

/// Capacity a buffer grows to when it must hold `required` elements.
///
/// Doubling keeps the amortized cost of a push at O(1).
pub const fn grown_capacity(required: usize) -> Option<usize> {
    required.checked_mul(2)
}

/// Whether a buffer holding `len` elements in `capacity` slots should shrink.
pub const fn should_shrink(len: usize, capacity: usize) -> bool {
    capacity > MIN_CAPACITY && len <= capacity / 4
}

/// Capacity a buffer shrinks to from `capacity`.
pub const fn shrunk_capacity(capacity: usize) -> usize {
    let half = capacity / 2;
    if half < MIN_CAPACITY {
        MIN_CAPACITY
    } else {
        half
    }
}

/// Shrinking never goes below this many slots.
pub const MIN_CAPACITY: usize = 1;

/// A growable, zero-filled sequence of `T`.
///
/// Slots past `len` but inside `capacity` always hold `T::default()`, so any
/// growth exposes zeroed elements. Reads past `len` report absence instead of
/// failing.
#[derive(Clone)]
pub struct Buffer<T> {
    // Always exactly `capacity` initialized slots.
    slots: Vec<T>,
    len: usize,
}

impl<T: Copy + Default> Buffer<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Create a buffer whose `len` and capacity are both `cap`, filled with `T::default()`.
    pub fn with_capacity(cap: usize) -> Self {
        let mut slots = Vec::new();
        reserve_exact(&mut slots, cap);
        slots.resize(cap, T::default());

        Self { slots, len: cap }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn push(&mut self, value: T) {
        let index = self.len;
        self.extend_to(index + 1);
        self.slots[index] = value;
    }

    /// Write `value` at `index`, growing the buffer with default elements if needed.
    pub fn set(&mut self, index: usize, value: T) {
        match index.checked_add(1) {
            Some(required) => self.extend_to(required),
            None => alloc_failure(AllocError::CapacityOverflow { requested: index }),
        }
        self.slots[index] = value;
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).copied()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots[..self.len].get_mut(index)
    }

    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Remove the element at `index`, shifting everything after it left.
    ///
    /// Removing from an empty buffer, or past `len`, does nothing.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let value = self.slots[index];
        self.slots.copy_within(index + 1..self.len, index);
        self.len -= 1;
        self.slots[self.len] = T::default();

        if should_shrink(self.len, self.capacity()) {
            self.reallocate(shrunk_capacity(self.capacity()));
        }

        Some(value)
    }

    pub fn pop(&mut self) -> Option<T> {
        let index = self.len.checked_sub(1)?;
        self.remove(index)
    }

    /// Grow `len` to at least `len`, zero-filling the newly exposed elements.
    pub fn extend_to(&mut self, len: usize) {
        if len <= self.len {
            return;
        }

        if len > self.capacity() {
            match grown_capacity(len) {
                Some(cap) => self.reallocate(cap),
                None => alloc_failure(AllocError::CapacityOverflow { requested: len }),
            }
        }

        self.len = len;
    }

    /// Reset every element to `T::default()` while keeping `len` and capacity.
    pub fn fill_default(&mut self) {
        self.slots.fill(T::default());
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.as_slice().iter().copied()
    }

    fn reallocate(&mut self, cap: usize) {
        tracing::trace!(
            len = self.len,
            from = self.capacity(),
            to = cap,
            "reallocating buffer"
        );

        if cap > self.slots.len() {
            reserve_exact(&mut self.slots, cap);
            self.slots.resize(cap, T::default());
        } else {
            self.slots.truncate(cap);
            self.slots.shrink_to_fit();
        }
    }
}

impl<T: Copy + Default + PartialEq> Buffer<T> {
    /// Whether every slot past `len` still holds `T::default()`.
    pub fn is_zero_tail(&self) -> bool {
        self.slots
            .get(self.len..)
            .is_some_and(|tail| tail.iter().all(|slot| *slot == T::default()))
    }
}

/// Buffers compare by their elements; capacity is not observable.
impl<T: Copy + Default + PartialEq> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Default + Eq> Eq for Buffer<T> {}

impl<T: Copy + Default> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default + fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
