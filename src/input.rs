//! Reading bit sets from a whitespace-separated numeric stream.
//!
//! The stream starts with one count per set, followed by that many values
//! for the first set, then the second, and so on. Line breaks carry no
//! meaning beyond separating tokens.

use std::{io::BufRead, num::ParseIntError};

use thiserror::Error;

use crate::BitSet;

/// Number of sets the program reads.
pub const SET_COUNT: usize = 4;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid number {token:?}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

struct Tokens<R> {
    reader: R,
    line: String,
    // Remaining tokens of `line`, last token first.
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: Vec::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, InputError> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(Some(token));
            }

            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            self.pending
                .extend(self.line.split_whitespace().rev().map(str::to_owned));
        }
    }

    fn next_number(&mut self, expected: &'static str) -> Result<usize, InputError> {
        let token = self
            .next_token()?
            .ok_or(InputError::UnexpectedEof { expected })?;

        token
            .parse()
            .map_err(|source| InputError::InvalidNumber { token, source })
    }
}

/// Read `N` sets from `reader`.
///
/// Nothing is returned unless every count and every value parses.
pub fn read_sets<const N: usize>(reader: impl BufRead) -> Result<[BitSet; N], InputError> {
    let mut tokens = Tokens::new(reader);

    let mut lens = [0; N];
    for len in &mut lens {
        *len = tokens.next_number("a set size")?;
    }

    let mut sets: [BitSet; N] = std::array::from_fn(|_| BitSet::new());
    for (i, (set, len)) in sets.iter_mut().zip(lens).enumerate() {
        for _ in 0..len {
            set.insert(tokens.next_number("a set member")?);
        }

        tracing::debug!(set = i, values = len, bytes = set.byte_len(), "read set");
    }

    Ok(sets)
}
