use std::{iter::Enumerate, marker::PhantomData, slice};

use crate::index::Index;

/// Ascending iterator over the members of a [`BitSet`](super::BitSet).
///
/// A clone continues from the same position. Call `BitSet::iter` again to restart.
#[derive(Clone)]
pub struct Iter<'a, T> {
    bytes: Enumerate<slice::Iter<'a, u8>>,
    pos: usize,
    // Bits of byte `pos` not yielded yet.
    current: u8,
    marker: PhantomData<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes: bytes.iter().enumerate(),
            pos: 0,
            current: 0,
            marker: PhantomData,
        }
    }
}

impl<T: Index> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while self.current == 0 {
            let (pos, &byte) = self.bytes.next()?;
            self.pos = pos;
            self.current = byte;
        }

        let offset = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;

        Some(T::new((self.pos << 3) + offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.current.count_ones() as usize;
        let rest = self.bytes.len().saturating_mul(8);
        (pending, pending.checked_add(rest))
    }
}

impl<T: Index> std::iter::FusedIterator for Iter<'_, T> {}
