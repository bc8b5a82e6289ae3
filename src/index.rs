/// A value that can be stored in a [`BitSet`](crate::BitSet).
///
/// Every element maps to exactly one bit position and back.
pub trait Index: Copy {
    fn new(index: usize) -> Self;
    fn index(self) -> usize;
}

impl Index for usize {
    fn new(index: usize) -> Self {
        index
    }

    fn index(self) -> usize {
        self
    }
}

macro_rules! impl_index {
    ($($ty:ty),*) => {
        $(
            impl Index for $ty {
                fn new(index: usize) -> Self {
                    <$ty>::try_from(index).expect("bit position exceeds the element type")
                }

                fn index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_index!(u8, u16, u32);

/// Split a bit position into the byte that holds it and the bit inside that byte.
pub(crate) const fn pos_and_offset(index: usize) -> (usize, u32) {
    (index >> 3, (index & 7) as u32)
}
