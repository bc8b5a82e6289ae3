//! Set algebra between two bit sets of possibly different byte lengths.
//!
//! Each operation walks both buffers byte by byte, reading a byte past the
//! end of either buffer as zero, and writes into a freshly allocated result.
//! Operands are never modified.

use std::ops::{BitAnd, BitOr, Sub};

use super::BitSet;
use crate::index::Index;

impl<T: Index> BitSet<T> {
    /// Values in `self`, in `other`, or in both.
    pub fn union(&self, other: &Self) -> Self {
        let len = self.byte_len().max(other.byte_len());
        self.combine(other, len, |a, b| a | b)
    }

    /// Values in both `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        let len = self.byte_len().min(other.byte_len());
        self.combine(other, len, |a, b| a & b)
    }

    /// Values in `self` but not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let len = self.byte_len().max(other.byte_len());
        self.combine(other, len, |a, b| !(!a | b))
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        (0..self.byte_len()).all(|pos| self.byte(pos) & !other.byte(pos) == 0)
    }

    pub fn is_disjoint(&self, other: &Self) -> bool {
        let len = self.byte_len().min(other.byte_len());
        (0..len).all(|pos| self.byte(pos) & other.byte(pos) == 0)
    }

    fn combine(&self, other: &Self, len: usize, op: impl Fn(u8, u8) -> u8) -> Self {
        tracing::debug!(
            lhs = self.byte_len(),
            rhs = other.byte_len(),
            len,
            "combining bit sets"
        );

        let mut result = Self::with_bytes(len);
        for pos in 0..len {
            result.bits.set(pos, op(self.byte(pos), other.byte(pos)));
        }
        result
    }
}

impl<T: Index> BitOr for &BitSet<T> {
    type Output = BitSet<T>;

    fn bitor(self, rhs: Self) -> BitSet<T> {
        self.union(rhs)
    }
}

impl<T: Index> BitAnd for &BitSet<T> {
    type Output = BitSet<T>;

    fn bitand(self, rhs: Self) -> BitSet<T> {
        self.intersection(rhs)
    }
}

impl<T: Index> Sub for &BitSet<T> {
    type Output = BitSet<T>;

    fn sub(self, rhs: Self) -> BitSet<T> {
        self.difference(rhs)
    }
}
