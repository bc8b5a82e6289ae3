pub mod alloc;
mod bit_set;
pub mod buffer;
pub mod error;
mod index;
pub mod input;
mod program;

pub use bit_set::{BitSet, Iter};
pub use buffer::Buffer;
pub use error::{Error, Result};
pub use index::Index;
pub use program::{evaluate, run};
