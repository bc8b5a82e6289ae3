use std::{fmt, marker::PhantomData};

use crate::{
    buffer::Buffer,
    index::{pos_and_offset, Index},
};

mod iter;
mod ops;

pub use iter::Iter;

/// A set of small non-negative integers stored one bit per value.
///
/// The byte buffer grows on demand to fit the largest value inserted so far.
/// Any value whose byte lies past the end of the buffer is simply absent.
#[derive(Clone)]
pub struct BitSet<T = usize> {
    bits: Buffer<u8>,
    marker: PhantomData<T>,
}

impl<T: Index> BitSet<T> {
    /// An empty set. The buffer is allocated lazily by the first insertion.
    pub fn new() -> Self {
        Self::with_bytes(0)
    }

    /// An empty set with room for `len` bytes, i.e. the values `0..8 * len`.
    pub fn with_bytes(len: usize) -> Self {
        Self {
            bits: Buffer::with_capacity(len),
            marker: PhantomData,
        }
    }

    /// Check that no bit is set past the logical end of the buffer, so growth
    /// can only ever expose absent values.
    pub fn validate(&self) -> bool {
        self.bits.is_zero_tail()
    }

    pub fn insert(&mut self, value: T) {
        let (pos, offset) = pos_and_offset(value.index());
        let byte = self.byte(pos) | (1 << offset);
        self.bits.set(pos, byte);
    }

    pub fn remove(&mut self, value: T) {
        let (pos, offset) = pos_and_offset(value.index());

        if let Some(byte) = self.bits.get_mut(pos) {
            *byte &= !(1 << offset);
        }
    }

    pub fn contains(&self, value: T) -> bool {
        let (pos, offset) = pos_and_offset(value.index());
        self.bits
            .get(pos)
            .is_some_and(|byte| (byte >> offset) & 1 == 1)
    }

    /// Number of values in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|byte| byte == 0)
    }

    pub fn byte_len(&self) -> usize {
        self.bits.len()
    }

    /// Number of addressable bit positions; every member is below this.
    pub fn bit_len(&self) -> usize {
        self.bits.len().saturating_mul(8)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_slice()
    }

    /// Remove every value while keeping the buffer allocated.
    pub fn clear(&mut self) {
        self.bits.fill_default();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_bytes())
    }

    /// The byte at `pos`, or zero when `pos` lies past the end of the buffer.
    fn byte(&self, pos: usize) -> u8 {
        self.bits.get(pos).unwrap_or(0)
    }
}

impl<T: Index> Default for BitSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Index> PartialEq for BitSet<T> {
    fn eq(&self, other: &Self) -> bool {
        let len = self.byte_len().max(other.byte_len());
        (0..len).all(|pos| self.byte(pos) == other.byte(pos))
    }
}

impl<T: Index> Eq for BitSet<T> {}

impl<T: Index> FromIterator<T> for BitSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Index> Extend<T> for BitSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Index> IntoIterator for &'a BitSet<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Members in ascending order, separated by single spaces.
impl<T: Index> fmt::Display for BitSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value.index())?;
        }
        Ok(())
    }
}

impl<T: Index> fmt::Debug for BitSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(Index::index))
            .finish()
    }
}
